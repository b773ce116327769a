use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use iou::application::accrual::compute_amount_due;
use iou::application::service::DebtService;
use iou::domain::note::OwnerId;
use iou::domain::ports::DebtStoreBox;
use iou::infrastructure::in_memory::InMemoryDebtStore;
#[cfg(feature = "storage-rocksdb")]
use iou::infrastructure::rocksdb::RocksDbDebtStore;
use iou::interfaces::csv::report_writer::ReportWriter;
use iou::interfaces::json::note_reader::NoteReader;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input debt notes JSON file
    input: PathBuf,

    /// Reference date for accrual and overdue derivation (UTC midnight).
    /// Defaults to now.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Restrict the report to a single owner. Defaults to every owner found
    /// in the input.
    #[arg(long)]
    owner: Option<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    #[cfg(feature = "storage-rocksdb")]
    let store: DebtStoreBox = match &cli.db_path {
        Some(db_path) => Box::new(RocksDbDebtStore::open(db_path).into_diagnostic()?),
        None => Box::new(InMemoryDebtStore::new()),
    };
    #[cfg(not(feature = "storage-rocksdb"))]
    let store: DebtStoreBox = Box::new(InMemoryDebtStore::new());

    let service = DebtService::new(store);

    let as_of: DateTime<Utc> = match cli.as_of {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };

    // Load notes into the store
    let file = File::open(&cli.input).into_diagnostic()?;
    let notes = NoteReader::new(file).notes().into_diagnostic()?;
    info!(count = notes.len(), "loaded debt notes");

    let owners: BTreeSet<OwnerId> = match cli.owner {
        Some(owner) => BTreeSet::from([OwnerId(owner)]),
        None => notes.iter().map(|note| note.owner.clone()).collect(),
    };

    for note in notes {
        if let Err(e) = service.create_note(note).await {
            eprintln!("Error loading debt note: {e}");
        }
    }

    // Report per owner: list (deriving overdue statuses), then break down
    // each note's amount due as of the reference date.
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    for owner in &owners {
        let listed = service.list_notes(owner, as_of).await.into_diagnostic()?;
        for note in listed {
            match compute_amount_due(&note, as_of) {
                Ok(breakdown) => writer.write_row(&note, &breakdown).into_diagnostic()?,
                Err(e) => eprintln!("Error computing amount due for note {}: {e}", note.id),
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
