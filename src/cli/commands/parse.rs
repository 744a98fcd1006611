//! Parse command: list registered courses

use anyhow::{Context, Result};
use colored::*;

use super::shared::{load_configuration, parse_workbook};
use crate::app::models::{Course, format_hour};
use crate::cli::args::{Args, OutputFormat, ParseArgs};

pub fn run_parse(args: &Args, parse_args: &ParseArgs) -> Result<()> {
    let config = load_configuration(args, |_| {})?;
    let result = parse_workbook(&parse_args.input, &config)
        .with_context(|| format!("Failed to parse {}", parse_args.input.display()))?;

    match parse_args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.courses)
                .context("Failed to serialize courses")?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for course in &result.courses {
                println!("{}", format_course(course));
            }
            if !args.quiet {
                println!(
                    "{} {} registered, {} not registered",
                    "Summary:".bold(),
                    result.stats.courses_parsed.to_string().green(),
                    result.stats.rows_filtered
                );
            }
        }
    }

    Ok(())
}

/// Multi-line listing of one course
pub fn format_course(course: &Course) -> String {
    let mut lines = vec![format!(
        "{}  {} [{}]",
        course.label().bold(),
        course.name,
        course.term
    )];

    if course.times.is_empty() {
        lines.push("    no weekly meetings".dimmed().to_string());
    }
    for time in &course.times {
        lines.push(format!(
            "    {}  {} - {}",
            time.day_of_week,
            format_hour(time.start_time),
            format_hour(time.end_time)
        ));
    }

    let details: Vec<&str> = [course.location.as_deref(), course.instructor.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        lines.push(format!("    {}", details.join(" | ")));
    }

    lines.push(format!("    {} to {}", course.start_date, course.end_date));
    lines.join("\n")
}
