//! Export command: write an iCalendar file

use anyhow::{Context, Result};
use colored::*;

use super::shared::{load_configuration, parse_workbook};
use crate::app::services::calendar_export::CalendarExporter;
use crate::cli::args::{Args, ExportArgs};

pub fn run_export(args: &Args, export_args: &ExportArgs) -> Result<()> {
    let config = load_configuration(args, |config| {
        if let Some(timezone) = &export_args.timezone {
            config.calendar.timezone = timezone.clone();
        }
        if let Some(output) = &export_args.output {
            config.calendar.output_file = output.clone();
        }
    })?;

    let result = parse_workbook(&export_args.input, &config)
        .with_context(|| format!("Failed to parse {}", export_args.input.display()))?;

    let exporter = CalendarExporter::from_config(&config.calendar)?;
    let output = &config.calendar.output_file;
    let count = exporter
        .write_file(&result.courses, output)
        .with_context(|| format!("Failed to export calendar to {}", output.display()))?;

    if !args.quiet {
        println!(
            "{} {} events to {} ({})",
            "Wrote".green().bold(),
            count,
            output.display(),
            exporter.timezone().name()
        );
        let unscheduled = result.courses.len() - count;
        if unscheduled > 0 {
            println!(
                "{}",
                format!("{} courses without weekly meetings were skipped", unscheduled).dimmed()
            );
        }
    }

    Ok(())
}
