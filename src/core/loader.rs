//! Loading report cards from TOML files
//!
//! A report card file names the student, teacher and school, and then either
//! lists course grades in a `[courses]` table or gives an `overall_grade`
//! directly:
//!
//! ```toml
//! student = "Emily Webb"
//! teacher = "J. Whittaker"
//! school = "Victoria University"
//!
//! [courses]
//! History = 56.0
//! Mathematics = 64.7
//! ```
//!
//! When both are present, the explicit `overall_grade` replaces the computed
//! mean. Top-level keys must come before the `[courses]` table.

use crate::core::correction::GradeCorrector;
use crate::core::grade::GradeError;
use crate::core::models::ReportCard;
use logger::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a report card file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read report card {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The contents are not a valid report card document
    #[error("failed to parse report card: {0}")]
    Parse(#[from] toml::de::Error),

    /// A grade was out of range and could not be corrected
    #[error(transparent)]
    Grade(#[from] GradeError),
}

/// On-disk shape of a report card
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportCardFile {
    student: String,
    teacher: String,
    school: String,
    #[serde(default)]
    overall_grade: Option<f64>,
    #[serde(default)]
    courses: BTreeMap<String, f64>,
}

/// Build a report card from TOML text
///
/// # Errors
/// Returns an error if the TOML is malformed or a grade cannot be corrected.
pub fn parse_report_card(
    contents: &str,
    corrector: &mut dyn GradeCorrector,
) -> Result<ReportCard, LoadError> {
    let file: ReportCardFile = toml::from_str(contents)?;

    if file.courses.is_empty() {
        debug!("No [courses] table for {}; using overall grade", file.student);
        return Ok(ReportCard::with_overall_grade(
            file.student,
            file.teacher,
            file.school,
            file.overall_grade.unwrap_or_default(),
        ));
    }

    let mut card = ReportCard::with_grades(
        file.student,
        file.teacher,
        file.school,
        file.courses,
        corrector,
    )?;
    if let Some(overall) = file.overall_grade {
        card.set_overall_grade(overall);
    }
    Ok(card)
}

/// Read and build a report card from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or a grade cannot be corrected.
pub fn load_report_card(
    path: &Path,
    corrector: &mut dyn GradeCorrector,
) -> Result<ReportCard, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let card = parse_report_card(&contents, corrector)?;
    info!(
        "Loaded report card for {} from {}",
        card.student_name(),
        path.display()
    );
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::correction::{ClampCorrector, RejectCorrector};

    const EMILY: &str = r#"
student = "Emily Webb"
teacher = "J. Whittaker"
school = "Victoria University"

[courses]
History = 56.0
Mathematics = 64.7
Physics = 104.0
"#;

    #[test]
    fn test_parse_with_courses() {
        let card = parse_report_card(EMILY, &mut ClampCorrector).unwrap();

        assert_eq!(card.student_name(), "Emily Webb");
        assert_eq!(card.course_count(), 3);
        assert!((card.course_grade("Physics") - 100.0).abs() < f64::EPSILON);
        let expected = (56.0 + 64.7 + 100.0) / 3.0;
        assert!((card.overall_grade() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_invalid_grade() {
        let err = parse_report_card(EMILY, &mut RejectCorrector).unwrap_err();
        assert!(matches!(err, LoadError::Grade(GradeError::OutOfRange { .. })));
    }

    #[test]
    fn test_parse_overall_only() {
        let toml = r#"
student = "Josh Smith"
teacher = "T. Tucker"
school = "Otago University"
overall_grade = 75.4
"#;
        let card = parse_report_card(toml, &mut RejectCorrector).unwrap();

        assert!(!card.has_courses());
        assert!((card.overall_grade() - 75.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_overall_wins_over_mean() {
        let toml = r#"
student = "Josh Smith"
teacher = "T. Tucker"
school = "Otago University"
overall_grade = 99.0

[courses]
Art = 50.0
"#;
        let card = parse_report_card(toml, &mut RejectCorrector).unwrap();
        assert!((card.overall_grade() - 99.0).abs() < f64::EPSILON);
        assert!((card.course_grade("Art") - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_report_card("student = \"x\"", &mut RejectCorrector),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_report_card(
                "student = \"a\"\nteacher = \"b\"\nschool = \"c\"\nhomeroom = 4\n",
                &mut RejectCorrector
            ),
            Err(LoadError::Parse(_))
        ));
    }
}
