// src/bin/scanmerge.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use scanmerge_core::aggregate::{ProjectDataBuilder, TracingSink};
use scanmerge_core::config::Config;
use scanmerge_core::discovery;
use scanmerge_core::exit::ScanMergeExit;
use scanmerge_core::logging;
use scanmerge_core::properties;
use scanmerge_core::reporting::SummaryReport;

#[derive(Parser, Debug)]
#[command(name = "scanmerge", version, about = "Merge per-build project records for analysis")]
struct Cli {
    /// Folder whose sub-directories each hold a ProjectInfo.json
    output_dir: PathBuf,
    /// Config file (defaults to ./scanmerge.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write the summary report here
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
    /// Write the analysis properties here
    #[arg(long, value_name = "FILE")]
    properties: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ScanMergeExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ScanMergeExit::Error
        }
    }
}

fn run(cli: &Cli) -> Result<ScanMergeExit> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let records = discovery::locate_records(&cli.output_dir)
        .with_context(|| format!("reading project records from {}", cli.output_dir.display()))?;

    let projects = ProjectDataBuilder::new(&config).build(records, &mut TracingSink);
    let summary = SummaryReport::from_projects(&projects);

    if let Some(path) = &cli.summary {
        summary.write_to(path)?;
    }
    if let Some(path) = &cli.properties {
        properties::write_to(path, &properties::render(&projects, &config))?;
    }

    println!("{}", summary.console_line());

    if summary.has_valid_projects() {
        Ok(ScanMergeExit::Success)
    } else {
        Ok(ScanMergeExit::NoValidProjects)
    }
}
