//! CLI argument definitions for `reportcard`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use report_card::config::ConfigOverrides;
use report_card::CorrectionPolicy;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

/// What to do when a grade is outside 0 to 100
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum OnInvalidArg {
    /// Ask for a replacement on the terminal
    Prompt,
    /// Clamp to the nearest bound
    Clamp,
    /// Refuse the report card
    Reject,
}

impl From<OnInvalidArg> for CorrectionPolicy {
    fn from(arg: OnInvalidArg) -> Self {
        match arg {
            OnInvalidArg::Prompt => Self::Prompt,
            OnInvalidArg::Clamp => Self::Clamp,
            OnInvalidArg::Reject => Self::Reject,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `on_invalid`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print two sample report cards.
    ///
    /// The first has an out-of-range Physics grade, which is handled by the
    /// active invalid-grade policy.
    Demo,
    /// Render report cards described in TOML files.
    Show {
        /// Paths to report card files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Report format: text (txt) or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Write reports to these files instead of printing them
        ///
        /// When provided, must match the number of input files 1:1.
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,

        /// Write reports into the configured `reports_dir`
        #[arg(long)]
        save: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "reportcard",
    about = "Render and validate school report cards",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// How to handle out-of-range grades for this run
    #[arg(long, value_enum)]
    pub on_invalid: Option<OnInvalidArg>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            on_invalid: self
                .on_invalid
                .map(|arg| CorrectionPolicy::from(arg).to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            on_invalid: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_on_invalid_to_policy() {
        assert_eq!(CorrectionPolicy::from(OnInvalidArg::Prompt), CorrectionPolicy::Prompt);
        assert_eq!(CorrectionPolicy::from(OnInvalidArg::Clamp), CorrectionPolicy::Clamp);
        assert_eq!(CorrectionPolicy::from(OnInvalidArg::Reject), CorrectionPolicy::Reject);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.on_invalid.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            on_invalid: Some(OnInvalidArg::Clamp),
            reports_dir: Some(PathBuf::from("/output")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.on_invalid, Some("clamp".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_parse_reports_dir_override() {
        let cli = Cli::try_parse_from(["reportcard", "--reports-dir", "/out", "demo"]).unwrap();
        assert_eq!(cli.to_config_overrides().reports_dir, Some("/out".to_string()));
        assert!(Cli::try_parse_from(["reportcard", "--config-reports-dir", "/out", "demo"]).is_err());
    }

    #[test]
    fn test_parse_show_command() {
        let cli = Cli::try_parse_from([
            "reportcard",
            "--on-invalid",
            "reject",
            "show",
            "a.toml",
            "b.toml",
            "--format",
            "md",
        ])
        .unwrap();

        assert_eq!(cli.on_invalid, Some(OnInvalidArg::Reject));
        match cli.command {
            Command::Show {
                input_files,
                format,
                output,
                save,
            } => {
                assert_eq!(input_files.len(), 2);
                assert_eq!(format, "md");
                assert!(output.is_empty());
                assert!(!save);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
