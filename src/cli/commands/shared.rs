//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and workbook parsing used by
//! every subcommand.

use std::path::Path;
use tracing::{debug, info};

use crate::app::services::schedule_parser::{ParseResult, ScheduleParser};
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("course_schedule={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    // Quiet mode: compact lines, no uptime timer
    if args.quiet {
        registry.with(layer.compact()).init();
    } else {
        registry.with(layer.with_timer(fmt::time::uptime())).init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env), then validate
///
/// Subcommand-specific flags are applied by the caller before validation
/// through `overrides`.
pub fn load_configuration(args: &Args, overrides: impl FnOnce(&mut Config)) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;
    overrides(&mut config);
    config.validate()?;

    Ok(config)
}

/// Parse a workbook with the configured layout
pub fn parse_workbook(path: &Path, config: &Config) -> Result<ParseResult> {
    let parser = ScheduleParser::new(config.layout.clone())?;
    parser.parse_file(path)
}
