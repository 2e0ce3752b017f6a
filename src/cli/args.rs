use clap::Parser;
use std::path::PathBuf;

/// Convert a Mint transaction export to YNAB's import format
#[derive(Parser, Debug)]
#[command(name = "mint2ynab")]
#[command(about = "Convert Mint transaction exports to YNAB import CSV", long_about = None)]
pub struct CliArgs {
    /// Mint CSV export containing the transactions to convert
    #[arg(value_name = "TRANSACTIONS", help = "Path to the Mint transactions CSV")]
    pub transactions: PathBuf,

    /// Category mapping file with one 'source -> destination' pair per line
    #[arg(value_name = "MAPPINGS", help = "Path to the Mint -> YNAB category mapping file")]
    pub mappings: PathBuf,

    /// Categories to skip entirely, one per line
    #[arg(
        short = 'e',
        long = "excludes",
        value_name = "FILE",
        help = "Path to a file of Mint categories to exclude from the output"
    )]
    pub excludes: Option<PathBuf>,

    /// Output file path
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        default_value = "ynab.csv",
        help = "Path of the YNAB CSV file to create"
    )]
    pub out: PathBuf,
}
