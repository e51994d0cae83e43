//! Markdown report generator
//!
//! Produces a short Markdown document: a heading with the student's name, the
//! teacher and school, a table of course grades (when there are any) and the
//! overall grade.

use crate::core::grade::format_percentage;
use crate::core::models::ReportCard;
use crate::core::report::ReportGenerator;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the course table, or nothing when the card has no courses
    fn generate_course_table(card: &ReportCard) -> String {
        if !card.has_courses() {
            return String::new();
        }

        let mut table = String::from("## Courses\n\n| Course | Grade |\n|---|---|\n");
        for (course, grade) in card.courses_and_grades() {
            let _ = writeln!(
                table,
                "| {} | {}% |",
                escape_cell(course),
                format_percentage(*grade)
            );
        }
        table.push('\n');
        table
    }
}

/// Keep pipes in course names from splitting table cells
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, card: &ReportCard) -> String {
        fill_template(MARKDOWN_TEMPLATE, |name| match name {
            "student" => Some(card.student_name().to_string()),
            "teacher" => Some(card.teacher_name().to_string()),
            "school" => Some(card.school_name().to_string()),
            "courses" => Some(Self::generate_course_table(card)),
            "overall_grade" => Some(format_percentage(card.overall_grade())),
            _ => None,
        })
    }
}

/// Replace each `{{name}}` in `template` with `lookup(name)` in a single pass
///
/// Inserted values are never scanned again. Unknown or unterminated
/// placeholders are copied through unchanged.
fn fill_template(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = &after_open[..end];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::correction::RejectCorrector;

    #[test]
    fn test_markdown_with_courses() {
        let card = ReportCard::with_grades(
            "Emily Webb",
            "J. Whittaker",
            "Victoria University",
            vec![("History".to_string(), 56.0), ("Art | Design".to_string(), 70.0)],
            &mut RejectCorrector,
        )
        .unwrap();

        let report = MarkdownReporter::new().render(&card);

        assert!(report.starts_with("# Report Card: Emily Webb\n"));
        assert!(report.contains("- **Teacher:** J. Whittaker"));
        assert!(report.contains("| History | 56.0% |"));
        assert!(report.contains("| Art \\| Design | 70.0% |"));
        assert!(report.contains("**Overall Grade:** 63.0%"));
    }

    #[test]
    fn test_markdown_without_courses() {
        let card = ReportCard::with_overall_grade("Josh Smith", "T. Tucker", "Otago University", 75.4);
        let report = MarkdownReporter::new().render(&card);

        assert!(!report.contains("## Courses"));
        assert!(report.contains("**Overall Grade:** 75.4%"));
    }

    #[test]
    fn test_placeholder_shaped_names_are_kept_verbatim() {
        let card = ReportCard::with_overall_grade("{{school}}", "{{courses}}", "Otago", 1.0);
        let report = MarkdownReporter::new().render(&card);

        assert!(report.starts_with("# Report Card: {{school}}\n"));
        assert!(report.contains("- **Teacher:** {{courses}}"));
        assert!(report.contains("- **School:** Otago"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let filled = fill_template("a {{x}} b {{y}} c {{open", |name| {
            (name == "x").then(|| "{{y}}".to_string())
        });
        assert_eq!(filled, "a {{y}} b {{y}} c {{open");
    }
}
