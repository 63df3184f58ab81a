use clap::Parser;
use lodgebook::application::engine::{BookingEngine, Caller};
use lodgebook::domain::ports::{PaymentGatewayBox, PropertyStoreBox, ReservationStoreBox};
use lodgebook::infrastructure::in_memory::{
    InMemoryPaymentGateway, InMemoryPropertyStore, InMemoryReservationStore,
};
#[cfg(feature = "storage-rocksdb")]
use lodgebook::infrastructure::rocksdb::RocksDBStore;
use lodgebook::interfaces::csv::catalog::{read_properties, read_reservations};
use lodgebook::interfaces::csv::decision_writer::DecisionWriter;
use lodgebook::interfaces::csv::request_reader::RequestReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input booking requests CSV file
    requests: PathBuf,

    /// Property catalog CSV used to seed the property store
    #[arg(long)]
    properties: Option<PathBuf>,

    /// Existing reservations CSV used to seed the reservation store
    #[arg(long)]
    reservations: Option<PathBuf>,

    /// Verified caller identity, forwarded as payment metadata. Omitting it
    /// makes every request fail unauthenticated.
    #[arg(long)]
    user: Option<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep stdout clean for the decision CSV; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let caller = cli.user.clone().map(|user_id| Caller { user_id });
    let engine = build_engine(&cli).await?;

    // Process booking requests
    let file = File::open(&cli.requests).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock());
    for request in reader.requests() {
        match request {
            Ok(request) => match engine.create_booking(caller.as_ref(), request).await {
                Ok(decision) => writer.write_decision(&decision).into_diagnostic()?,
                Err(e) => eprintln!("Error processing request: {}", e),
            },
            Err(e) => eprintln!("Error reading request: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

async fn build_engine(cli: &Cli) -> Result<BookingEngine> {
    let gateway: PaymentGatewayBox = Box::new(InMemoryPaymentGateway::new());

    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        // Use persistent storage (RocksDB)
        let store = RocksDBStore::open(db_path).into_diagnostic()?;
        seed_rocksdb(cli, &store)?;

        let properties: PropertyStoreBox = Box::new(store.clone());
        let reservations: ReservationStoreBox = Box::new(store);
        return Ok(BookingEngine::new(properties, reservations, Some(gateway)));
    }

    // Use in-memory storage
    let properties = InMemoryPropertyStore::new();
    if let Some(path) = &cli.properties {
        let file = File::open(path).into_diagnostic()?;
        for row in read_properties(file).into_diagnostic()? {
            let (id, record) = row.into_parts();
            properties.insert(id, record).await;
        }
    }

    let reservations = InMemoryReservationStore::new();
    if let Some(path) = &cli.reservations {
        let file = File::open(path).into_diagnostic()?;
        for row in read_reservations(file).into_diagnostic()? {
            reservations.insert(row.into_reservation()).await;
        }
    }

    let properties: PropertyStoreBox = Box::new(properties);
    let reservations: ReservationStoreBox = Box::new(reservations);
    Ok(BookingEngine::new(properties, reservations, Some(gateway)))
}

#[cfg(feature = "storage-rocksdb")]
fn seed_rocksdb(cli: &Cli, store: &RocksDBStore) -> Result<()> {
    if let Some(path) = &cli.properties {
        let file = File::open(path).into_diagnostic()?;
        for row in read_properties(file).into_diagnostic()? {
            let (id, record) = row.into_parts();
            store.insert_property(&id, &record).into_diagnostic()?;
        }
    }
    if let Some(path) = &cli.reservations {
        let file = File::open(path).into_diagnostic()?;
        for row in read_reservations(file).into_diagnostic()? {
            store
                .insert_reservation(&row.into_reservation())
                .into_diagnostic()?;
        }
    }
    Ok(())
}
