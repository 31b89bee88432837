use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taskit", about = concat!("[x] Task-It Easy v", env!("CARGO_PKG_VERSION"), " - a to-do list for your terminal"), version)]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file (overrides [log] file)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" (overrides [log] level)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
