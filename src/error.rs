use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

/// Caller-facing error taxonomy for the booking flow.
///
/// Every failure carries a machine-checkable kind (see [`BookingError::kind`])
/// plus a human-readable message. Stages fail fast: the first error
/// encountered is surfaced and nothing after it runs.
#[derive(Error, Debug)]
pub enum BookingError {
    /// No verified caller identity was presented.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    /// Malformed or missing request fields, unparsable or non-positive dates.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The referenced property does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The requested interval conflicts with a confirmed reservation.
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// Property pricing data is malformed, the computed charge is
    /// non-positive, or the payment gateway is not configured.
    #[error("failed precondition: {0}")]
    FailedPrecondition(String),
    /// A collaborator violated its contract.
    #[error("internal error: {0}")]
    Internal(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    Storage(#[from] rocksdb::Error),
}

impl BookingError {
    /// Stable kind string for programmatic matching, mirroring the RPC
    /// status vocabulary callers key on.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "unauthenticated",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::NotFound(_) => "not-found",
            Self::AlreadyExists(_) => "already-exists",
            Self::FailedPrecondition(_) => "failed-precondition",
            Self::Internal(_) => "internal",
            Self::Csv(_) => "invalid-argument",
            Self::Io(_) => "internal",
            #[cfg(feature = "storage-rocksdb")]
            Self::Storage(_) => "internal",
        }
    }
}
