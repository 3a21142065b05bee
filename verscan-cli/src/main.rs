mod args;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use verscan_ingest::parse_nmap_file;
use verscan_output::{Report, ReportConfig, ReportFormat, ReportWriter};
use verscan_vuln::{builtin_rules, match_inventory};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let format = match args.format.as_str() {
        "json" => ReportFormat::Json,
        "csv" => ReportFormat::Csv,
        "both" => ReportFormat::Both,
        other => bail!("unsupported report format: {other}"),
    };

    let inventory = parse_nmap_file(&args.scan_file).with_context(|| {
        format!("failed to import scan file '{}'", args.scan_file.display())
    })?;

    let rules = builtin_rules();
    let findings = match_inventory(&inventory, &rules);
    info!(findings = findings.len(), "vulnerability matching complete");

    let report = Report::build(inventory, findings);
    let writer = ReportWriter::new(ReportConfig {
        format,
        ..Default::default()
    });
    writer.run(&report).context("failed to write report files")?;

    Ok(())
}
