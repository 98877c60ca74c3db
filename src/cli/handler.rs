//! Report command handler

use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;

use igvf_metadata::api::{IgvfClient, RemoteError};
use igvf_metadata::config::{FieldCatalog, Settings};
use igvf_metadata::export::write_report;
use igvf_metadata::report::{ReportDriver, ReportOutcome};

use super::Cli;

/// Build the report for the requested input and write it next to the others
pub async fn handle_report_command(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.overrides())?;
    let catalog = settings.apply_to(FieldCatalog::builtin()?);
    let input = cli.report_input()?;

    let client = IgvfClient::new(settings.base_url.clone(), settings.credentials.clone())?;
    println!("Using portal: {}", client.base_url().cyan());
    if !client.is_authenticated() {
        println!("{}", "No API credentials set, fetching public objects only".yellow());
    }
    println!("Getting metadata for {}...", input.name().bright_green().bold());

    let start = Instant::now();
    let outcome = match ReportDriver::new(&client, &catalog).run(&input).await {
        Ok(outcome) => outcome,
        Err(error) => {
            if let Some(remote) = RemoteError::find(&error) {
                println!("{} {}", "Could not fetch".red(), remote.path().to_string().red().bold());
            }
            return Err(error.context("Failed to build report"));
        }
    };

    let report = match outcome {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoInput => {
            println!("{}", "No input found, nothing written.".yellow());
            return Ok(());
        }
    };

    for (name, sheet) in &report.sheets {
        println!(
            "  {} {} rows, {} columns",
            format!("{}:", name).bold(),
            sheet.rows(),
            sheet.columns().len()
        );
    }

    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", settings.output_dir.display())
    })?;
    let output_path = settings.output_dir.join(report.file_name());
    println!("Writing to excel tables: {}", output_path.display().to_string().bright_green());
    write_report(&report, &output_path)?;

    println!("Done in {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}
