//! Plain-text report generator

use crate::core::models::ReportCard;
use crate::core::report::ReportGenerator;

/// Renders the plain-text summary
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, card: &ReportCard) -> String {
        card.to_string()
    }
}
