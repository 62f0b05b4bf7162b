use std::fs::{self, File};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error, info, warn};
use pancake::core::config::{self, ResolvedConfig};
use pancake::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "pancake", about = "Terminal checklist for breaking big features into small steps")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the program name and version
    Version,
    /// Start the interactive checklist
    Init,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Version => {
            println!("pancake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Init => {
            let config = config::load_and_resolve();
            init_logging(&config);
            info!("pancake {} starting", env!("CARGO_PKG_VERSION"));
            report_config(&config);

            match tui::run(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("Terminal session failed: {}", e);
                    eprintln!("Error running pancake: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Config is loaded before the logger exists, so its notes are replayed
/// here. Warnings also go to stderr, where they outlive the session.
fn report_config(config: &ResolvedConfig) {
    match &config.source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("Using default config"),
    }
    debug!("Config: {:?}", config);
    for warning in &config.warnings {
        warn!("{warning}");
        eprintln!("Warning: {warning}");
    }
}

// Logs go to a file: the terminal belongs to the checklist while it runs.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = config.log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
