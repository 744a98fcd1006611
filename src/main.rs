use clap::Parser;
use course_schedule::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Course Schedule - registration export to weekly schedule");
    println!("=========================================================");
    println!();
    println!("Reads a course-registration workbook (.xlsx) and recovers the registered");
    println!("courses with their weekly meeting times.");
    println!();
    println!("USAGE:");
    println!("    course-schedule [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    parse     List registered courses (--format human|json)");
    println!("    grid      Render weekly grids per term (--term A|B|C|D)");
    println!("    export    Write an iCalendar file (-o FILE, --timezone TZ)");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    Configuration file (TOML)");
    println!("    -v, --verbose          Increase logging verbosity");
    println!("    -q, --quiet            Only show errors");
    println!("    -h, --help             Show help information");
    println!("    -V, --version          Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    course-schedule parse View_My_Courses.xlsx");
    println!("    course-schedule grid View_My_Courses.xlsx --term A");
    println!("    course-schedule export View_My_Courses.xlsx -o fall.ics");
}
