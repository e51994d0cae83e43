//! Command-line interface entry point for `reportcard`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use logger::{debug, enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use report_card::config::Config;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // The stored config is what `config` edits; overrides only shape this run
    let stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let policy = config.correction_policy();
    debug!("Invalid grades will be handled with policy '{policy}'");

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, stored, &defaults);
        }
        Command::Demo => commands::demo::run(policy),
        Command::Show {
            input_files,
            format,
            output,
            save,
        } => {
            commands::show::run(&input_files, &output, &format, save, policy, &config);
        }
    }
}
