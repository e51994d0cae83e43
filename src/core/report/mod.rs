//! Report rendering for report cards
//!
//! A report card can be rendered as the plain-text summary (the same text as
//! its `Display` impl) or as a Markdown document.

pub mod formats;

use crate::core::models::ReportCard;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report as a string
    fn render(&self, card: &ReportCard) -> String;

    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate(&self, card: &ReportCard, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render(card))?;
        Ok(())
    }
}
