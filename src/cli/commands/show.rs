//! Show command handler
//!
//! Loads report cards from TOML files and prints them, or writes them to
//! files when `--output` or `--save` is given.

use logger::{error, info, verbose};
use report_card::config::Config;
use report_card::core::loader::load_report_card;
use report_card::core::report::ReportFormat;
use report_card::CorrectionPolicy;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the show command.
///
/// A failure on one file is reported and the remaining files still run.
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    format_str: &str,
    save: bool,
    policy: CorrectionPolicy,
    config: &Config,
) {
    let format = match ReportFormat::from_str(format_str) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}. Use: text or markdown");
            return;
        }
    };

    let destinations = match resolve_destinations(input_files, output_files, save, format, config)
    {
        Ok(destinations) => destinations,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let mut corrector = policy.corrector();
    let reporter = format.reporter();

    for (input_file, destination) in input_files.iter().zip(destinations) {
        verbose!("Reading {}", input_file.display());

        let card = match load_report_card(input_file, corrector.as_mut()) {
            Ok(card) => card,
            Err(e) => {
                error!("Failed to load {}: {e}", input_file.display());
                eprintln!("✗ {}: {e}", input_file.display());
                continue;
            }
        };

        match destination {
            None => println!("{}", reporter.render(&card)),
            Some(path) => match reporter.generate(&card, &path) {
                Ok(()) => {
                    println!("✓ Report generated: {}", path.display());
                    info!("Report exported to: {}", path.display());
                }
                Err(e) => eprintln!("✗ Failed to write {}: {e}", path.display()),
            },
        }
    }
}

/// Where each report goes: `None` prints to stdout
fn resolve_destinations(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    save: bool,
    format: ReportFormat,
    config: &Config,
) -> Result<Vec<Option<PathBuf>>, String> {
    if !output_files.is_empty() {
        if output_files.len() != input_files.len() {
            return Err(format!(
                "✗ Got {} output file(s) for {} input file(s); they must match 1:1",
                output_files.len(),
                input_files.len()
            ));
        }
        return Ok(output_files.iter().cloned().map(Some).collect());
    }

    if !save {
        return Ok(vec![None; input_files.len()]);
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    Ok(input_files
        .iter()
        .map(|input| Some(report_path(&reports_dir, input, format)))
        .collect())
}

/// `<dir>/<input stem>_report.<ext>`
fn report_path(reports_dir: &Path, input_file: &Path, format: ReportFormat) -> PathBuf {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("report_card");
    reports_dir.join(format!("{stem}_report.{}", format.extension()))
}
