use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sheet_merger::config::{DEFAULT_INPUT_DIR, DEFAULT_ORIGIN_DIR, DEFAULT_OUTPUT_DIR};
use sheet_merger::merge::ColumnAlignment;
use sheet_merger::merger;
use sheet_merger::{MergeConfig, MergeEvent, MergeOutcome, MergeSummary, Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let config = MergeConfig::from(cli);
    match merger::run_with(&config, print_event)? {
        MergeOutcome::NoBaseFiles(dir) => {
            println!("no .xlsx files found in origin directory {}", dir.display());
        }
        MergeOutcome::NoAddendFiles(dir) => {
            println!("no .xlsx files found in input directory {}", dir.display());
        }
        MergeOutcome::Completed(_) => {
            println!("all files processed");
        }
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn print_event(event: &MergeEvent) {
    match event {
        MergeEvent::Processing(base) => println!("processing base file: {base}"),
        MergeEvent::Adding(addend) => println!("  adding file: {addend}"),
        MergeEvent::Merged(summary) => print_summary(summary),
    }
}

fn print_summary(summary: &MergeSummary) {
    println!(
        "merged {} input files into {}",
        summary.addend_count, summary.file_name
    );
    println!("saved to: {}", summary.output_path.display());
    println!("rows before filtering: {}", summary.rows_before_filter);
    println!("blank rows removed: {}", summary.rows_removed);
    println!("final rows: {}", summary.rows_after_filter);
    println!("{}", "-".repeat(50));
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Append every workbook in the input directory to each workbook in the origin directory."
)]
struct Cli {
    /// Directory holding the base workbooks.
    #[arg(long, default_value = DEFAULT_ORIGIN_DIR)]
    origin: PathBuf,

    /// Directory holding the workbooks appended to every base.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory receiving the merged workbooks; created if missing.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out: PathBuf,

    /// How addend rows are matched to the output columns.
    #[arg(long, value_enum, default_value_t = AlignmentKind::ByName)]
    align: AlignmentKind,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AlignmentKind {
    ByName,
    ByPosition,
}

impl From<AlignmentKind> for ColumnAlignment {
    fn from(kind: AlignmentKind) -> Self {
        match kind {
            AlignmentKind::ByName => ColumnAlignment::ByName,
            AlignmentKind::ByPosition => ColumnAlignment::ByPosition,
        }
    }
}

impl From<Cli> for MergeConfig {
    fn from(cli: Cli) -> Self {
        MergeConfig {
            origin_dir: cli.origin,
            input_dir: cli.input,
            output_dir: cli.out,
            alignment: cli.align.into(),
        }
    }
}
