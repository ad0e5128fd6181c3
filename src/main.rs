use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use zafta_checkout::application::engine::CheckoutEngine;
use zafta_checkout::domain::ports::CheckoutStoreBox;
use zafta_checkout::domain::reference::ReferenceGenerator;
use zafta_checkout::domain::signature::{IntegritySecret, IntegritySigner};
use zafta_checkout::infrastructure::in_memory::InMemoryCheckoutStore;
use zafta_checkout::interfaces::csv::checkout_reader::CheckoutReader;
use zafta_checkout::interfaces::csv::checkout_writer::CheckoutWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout requests CSV file
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The secret is loaded once, up front: signing without it must abort
    // before anything is sent to the gateway.
    let secret = IntegritySecret::from_env().into_diagnostic()?;
    let signer = IntegritySigner::new(secret);

    #[cfg(feature = "storage-rocksdb")]
    let store: CheckoutStoreBox = if let Some(db_path) = cli.db_path {
        // Use persistent storage (RocksDB)
        let store =
            zafta_checkout::infrastructure::rocksdb::RocksDBStore::open(db_path).into_diagnostic()?;
        Box::new(store)
    } else {
        Box::new(InMemoryCheckoutStore::new())
    };
    #[cfg(not(feature = "storage-rocksdb"))]
    let store: CheckoutStoreBox = Box::new(InMemoryCheckoutStore::new());

    let engine = CheckoutEngine::new(signer, ReferenceGenerator::system(), store);

    // Sign checkout requests
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CheckoutReader::new(file);
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => {
                if let Err(e) = engine.sign_checkout(request).await {
                    eprintln!("Error signing checkout: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading checkout request: {}", e);
            }
        }
    }

    // Collect recorded checkouts from engine
    let checkouts = engine.into_results().await.into_diagnostic()?;

    // Output signed checkouts
    let stdout = io::stdout();
    let mut writer = CheckoutWriter::new(stdout.lock());
    writer.write_checkouts(checkouts).into_diagnostic()?;

    Ok(())
}
