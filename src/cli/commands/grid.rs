//! Grid command: render weekly grids per term

use anyhow::{Context, Result};
use colored::*;

use super::shared::{load_configuration, parse_workbook};
use crate::app::services::schedule_grid::{TermBuckets, WeeklyGrid};
use crate::cli::args::{Args, GridArgs};

pub fn run_grid(args: &Args, grid_args: &GridArgs) -> Result<()> {
    let config = load_configuration(args, |_| {})?;
    let result = parse_workbook(&grid_args.input, &config)
        .with_context(|| format!("Failed to parse {}", grid_args.input.display()))?;

    let buckets = TermBuckets::from_courses(&result.courses);

    let grids: Vec<WeeklyGrid> = match grid_args.term {
        Some(term) => buckets
            .get(term)
            .map(|courses| vec![WeeklyGrid::build(term, courses)])
            .unwrap_or_default(),
        None => buckets
            .non_empty()
            .map(|(term, courses)| WeeklyGrid::build(term, courses))
            .collect(),
    };

    if grids.is_empty() && !args.quiet {
        println!("{}", "No courses to show".yellow());
    }

    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", grid.render());
    }

    Ok(())
}
