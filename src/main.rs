use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use tally::core::config::{self, CliOverrides, ResolvedConfig};
use tally::oneshot::{self, Operation};

#[derive(Parser)]
#[command(name = "tally", version, about = "Two-number calculator form")]
struct Args {
    /// Decimal places for the arithmetic result
    #[arg(short, long, global = true)]
    decimal_places: Option<usize>,

    /// Log file path (defaults to tally.log in the current directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Print one-shot results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    operation: Option<Operation>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logger isn't up yet, so config messages are collected and emitted after init
    let mut load_notes = Vec::new();
    let (file_config, load_error) = match config::load_config(&mut load_notes) {
        Ok(c) => (c, None),
        Err(e) => (config::TallyConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        decimal_places: args.decimal_places,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(&resolved);
    config::emit_notes(&load_notes);
    config::emit_notes(&resolved.notes);
    if let Some(e) = load_error {
        log::warn!("Using default config: {}", e);
    }

    match args.operation {
        Some(operation) => {
            let app = oneshot::execute(&operation);
            let report = oneshot::report(&app, resolved.decimal_places, args.json);
            if report.is_error {
                eprintln!("{}", report.text);
                ExitCode::FAILURE
            } else {
                println!("{}", report.text);
                ExitCode::SUCCESS
            }
        }
        None => {
            log::info!("Tally starting up");
            match tally::tui::run(&resolved) {
                Ok(()) => {
                    log::info!("Tally shutting down");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("Terminal error: {}", e);
                    eprintln!("tally: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
