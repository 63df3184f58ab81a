//! Adapters between the outside world and the booking flow.

pub mod csv;
