//! Config command handler

use crate::args::ConfigSubcommand;
use report_card::config::Config;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands
///
/// `stored` must be the config as loaded from disk, without CLI overrides,
/// since `set` and `unset` write it back.
pub fn run(subcommand: Option<ConfigSubcommand>, mut stored: Config, defaults: &Config) {
    let config = &mut stored;
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => {
            persist(config, |c| c.set(&key, &value), &format!("Set {key} = {value}"));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            persist(
                config,
                |c| c.unset(&key, defaults),
                &format!("Reset {key} to default"),
            );
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole config when no key is given
pub fn handle_config_get(config: &Config, key: Option<String>) {
    match key {
        Some(k) => match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

/// Apply `change` and save to the user config file; exits with status 1 on any failure
fn persist(
    config: &mut Config,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
    done: &str,
) {
    if let Err(e) = update(config, change, &Config::get_config_file_path()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("✓ {done}");
}

/// Apply `change` to `config` and write the result to `path`
fn update(
    config: &mut Config,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
    path: &Path,
) -> Result<(), String> {
    change(config)?;
    config
        .save_to(path)
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    let stdin = io::stdin();
    if !confirm(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Are you sure you want to reset config to defaults? (y/n): ",
    ) {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

/// Ask a yes/no question; anything but `y`/`yes` counts as no
fn confirm(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> bool {
    let _ = write!(output, "{question}");
    let _ = output.flush();

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
