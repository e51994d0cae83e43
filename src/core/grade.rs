//! Percentage grade validation and formatting

use thiserror::Error;

/// Lowest grade a course can hold
pub const MIN_GRADE: f64 = 0.0;

/// Highest grade a course can hold
pub const MAX_GRADE: f64 = 100.0;

/// Errors raised while validating or correcting a grade
#[derive(Debug, Error)]
pub enum GradeError {
    /// The grade lies outside `[0, 100]` (or is NaN) and was not corrected
    #[error("grade {} for course '{course}' is outside the range 0 to 100", format_percentage(*grade))]
    OutOfRange {
        /// Course the grade was supplied for
        course: String,
        /// The rejected value
        grade: f64,
    },

    /// The interactive prompt ran out of input before a valid grade was entered
    #[error("no valid grade was entered for course '{course}' before input ended")]
    InputClosed {
        /// Course that still needed a correction
        course: String,
    },

    /// Reading or writing the prompt failed
    #[error("grade prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Check that `grade` is a percentage in `[0, 100]`.
///
/// NaN is never in range.
///
/// # Errors
/// Returns [`GradeError::OutOfRange`] naming the course when the value is rejected.
pub fn validate_grade(course: &str, grade: f64) -> Result<f64, GradeError> {
    if is_valid_grade(grade) {
        Ok(grade)
    } else {
        Err(GradeError::OutOfRange {
            course: course.to_string(),
            grade,
        })
    }
}

/// Whether `grade` can be stored on a report card
#[must_use]
pub fn is_valid_grade(grade: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

/// Arithmetic mean of `grades`, or `None` when there are none
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean<I>(grades: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = grades
        .into_iter()
        .fold((0.0, 0_usize), |(total, count), grade| (total + grade, count + 1));
    (count > 0).then(|| total / count as f64)
}

/// Format a grade for display.
///
/// Uses the shortest representation that round-trips, but always keeps one
/// fractional digit so whole numbers read as `80.0` rather than `80`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
