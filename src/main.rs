use std::path::PathBuf;

use clap::Parser;
use taskit::cli::commands::Cli;
use taskit::io::config_io::load_config;
use taskit::io::logging::{DEFAULT_LOG_LEVEL, init_logging};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Command-line log flags win over the [log] table
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log.file.as_ref().map(PathBuf::from));
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.log.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    if let Err(e) = init_logging(log_file.as_deref(), &log_level) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = taskit::tui::run(config) {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
