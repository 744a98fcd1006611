//! Command implementations for the course schedule CLI
//!
//! Each subcommand lives in its own module:
//! - `parse`: list registered courses (human or JSON)
//! - `grid`: weekly grids per term
//! - `export`: iCalendar file

pub mod export;
pub mod grid;
pub mod parse;
pub mod shared;

use anyhow::Result;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Sets up logging, then dispatches to the subcommand handler. Does nothing
/// when no subcommand was given.
pub fn run(args: Args) -> Result<()> {
    let Some(command) = args.command.clone() else {
        return Ok(());
    };

    shared::setup_logging(&args)?;

    match &command {
        Commands::Parse(parse_args) => parse::run_parse(&args, parse_args),
        Commands::Grid(grid_args) => grid::run_grid(&args, grid_args),
        Commands::Export(export_args) => export::run_export(&args, export_args),
    }
}
