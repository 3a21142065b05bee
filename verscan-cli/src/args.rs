use std::path::PathBuf;

use clap::Parser;

/// verscan — version analysis for nmap scan inventories
#[derive(Parser, Debug)]
#[command(
    name = "verscan",
    version,
    about = "Cross-references nmap service versions against known-vulnerable releases"
)]
pub struct Args {
    /// Path to an nmap XML scan document (-oX output)
    #[arg(value_name = "SCAN_FILE")]
    pub scan_file: PathBuf,

    /// Report format(s) to write
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "both",
        value_parser = ["json", "csv", "both"]
    )]
    pub format: String,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
