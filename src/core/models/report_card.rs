//! Report card model

use crate::core::correction::{CorrectionRequest, GradeCorrector};
use crate::core::grade::{format_percentage, mean, validate_grade, GradeError};
use logger::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;

/// One student's grades for a term
///
/// Every grade held in [`courses_and_grades`](Self::courses_and_grades) is in
/// `[0, 100]`. The overall grade is recomputed as the mean whenever the
/// course grades are replaced as a whole; [`add_course_and_grade`] leaves it
/// untouched, and [`set_overall_grade`] overrides it until the next bulk
/// replacement.
///
/// [`add_course_and_grade`]: Self::add_course_and_grade
/// [`set_overall_grade`]: Self::set_overall_grade
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCard {
    student_name: String,
    teacher_name: String,
    school_name: String,
    courses_and_grades: BTreeMap<String, f64>,
    overall_grade: f64,
}

impl ReportCard {
    /// Create a report card from individual course grades
    ///
    /// Out-of-range grades go through `corrector`, and the overall grade is set
    /// to the mean of the stored grades.
    ///
    /// # Errors
    /// Returns an error if `corrector` cannot supply a valid grade.
    pub fn with_grades<I>(
        student_name: impl Into<String>,
        teacher_name: impl Into<String>,
        school_name: impl Into<String>,
        courses_and_grades: I,
        corrector: &mut dyn GradeCorrector,
    ) -> Result<Self, GradeError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut card = Self::with_overall_grade(student_name, teacher_name, school_name, 0.0);
        card.set_courses_and_grades(courses_and_grades, corrector)?;
        Ok(card)
    }

    /// Create a report card holding only an overall grade
    ///
    /// The value is stored as given, without validation.
    #[must_use]
    pub fn with_overall_grade(
        student_name: impl Into<String>,
        teacher_name: impl Into<String>,
        school_name: impl Into<String>,
        overall_grade: f64,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            teacher_name: teacher_name.into(),
            school_name: school_name.into(),
            courses_and_grades: BTreeMap::new(),
            overall_grade,
        }
    }

    /// Replace all course grades and recompute the overall grade
    ///
    /// The previous courses are discarded, not merged. If `corrector` refuses
    /// any grade the card is left exactly as it was. An empty set clears the
    /// courses and sets the overall grade to `0.0`.
    ///
    /// # Errors
    /// Returns an error if `corrector` cannot supply a valid grade.
    pub fn set_courses_and_grades<I>(
        &mut self,
        courses_and_grades: I,
        corrector: &mut dyn GradeCorrector,
    ) -> Result<(), GradeError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut accepted = BTreeMap::new();
        for (course, grade) in courses_and_grades {
            let grade = self.checked_grade(&course, grade, corrector)?;
            accepted.insert(course, grade);
        }

        self.overall_grade = mean(accepted.values().copied()).unwrap_or_else(|| {
            warn!(
                "No course grades given for {}; overall grade set to 0.0",
                self.student_name
            );
            0.0
        });
        self.courses_and_grades = accepted;
        debug!(
            "{} now has {} course(s), overall {}",
            self.student_name,
            self.courses_and_grades.len(),
            format_percentage(self.overall_grade)
        );
        Ok(())
    }

    /// Insert or overwrite one course grade
    ///
    /// The overall grade is not recomputed.
    ///
    /// # Errors
    /// Returns an error if `corrector` cannot supply a valid grade.
    pub fn add_course_and_grade(
        &mut self,
        course: impl Into<String>,
        grade: f64,
        corrector: &mut dyn GradeCorrector,
    ) -> Result<(), GradeError> {
        let course = course.into();
        let grade = self.checked_grade(&course, grade, corrector)?;
        self.courses_and_grades.insert(course, grade);
        Ok(())
    }

    /// Grade for `course`, or `0.0` (with a warning) if the student does not take it
    #[must_use]
    pub fn course_grade(&self, course: &str) -> f64 {
        self.courses_and_grades.get(course).copied().unwrap_or_else(|| {
            warn!(
                "{course} is not a course associated with {}",
                self.student_name
            );
            0.0
        })
    }

    /// All course grades, sorted by course name
    #[must_use]
    pub const fn courses_and_grades(&self) -> &BTreeMap<String, f64> {
        &self.courses_and_grades
    }

    /// Number of courses on the card
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses_and_grades.len()
    }

    /// Whether any course grades are recorded
    #[must_use]
    pub fn has_courses(&self) -> bool {
        !self.courses_and_grades.is_empty()
    }

    /// Student name
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Teacher name
    #[must_use]
    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    /// School name
    #[must_use]
    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    /// Overall grade
    #[must_use]
    pub const fn overall_grade(&self) -> f64 {
        self.overall_grade
    }

    /// Set the student name
    pub fn set_student_name(&mut self, student_name: impl Into<String>) {
        self.student_name = student_name.into();
    }

    /// Set the teacher name
    pub fn set_teacher_name(&mut self, teacher_name: impl Into<String>) {
        self.teacher_name = teacher_name.into();
    }

    /// Set the school name
    pub fn set_school_name(&mut self, school_name: impl Into<String>) {
        self.school_name = school_name.into();
    }

    /// Override the overall grade. Not validated.
    pub fn set_overall_grade(&mut self, overall_grade: f64) {
        self.overall_grade = overall_grade;
    }

    fn checked_grade(
        &self,
        course: &str,
        grade: f64,
        corrector: &mut dyn GradeCorrector,
    ) -> Result<f64, GradeError> {
        if validate_grade(course, grade).is_ok() {
            return Ok(grade);
        }

        debug!(
            "Grade {} for {course} is out of range, requesting a correction",
            format_percentage(grade)
        );
        let request = CorrectionRequest {
            student: &self.student_name,
            course,
            grade,
        };
        let corrected = corrector.correct(&request)?;
        validate_grade(course, corrected)
    }
}

impl fmt::Display for ReportCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student: {}", self.student_name)?;
        writeln!(f, "Teacher: {}", self.teacher_name)?;
        writeln!(f, "School: {}", self.school_name)?;

        if self.has_courses() {
            writeln!(f, "Courses:")?;
            for (course, grade) in &self.courses_and_grades {
                writeln!(f, "\t{course} - {}%", format_percentage(*grade))?;
            }
        }

        writeln!(f, "Overall Grade: {}%", format_percentage(self.overall_grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::correction::{ClampCorrector, RejectCorrector};

    fn grades(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs
            .iter()
            .map(|(course, grade)| ((*course).to_string(), *grade))
            .collect()
    }

    fn emily() -> ReportCard {
        ReportCard::with_grades(
            "Emily Webb",
            "J. Whittaker",
            "Victoria University",
            grades(&[("History", 56.0), ("Mathematics", 64.7)]),
            &mut RejectCorrector,
        )
        .unwrap()
    }

    #[test]
    fn test_overall_is_mean() {
        let card = ReportCard::with_grades(
            "A",
            "B",
            "C",
            grades(&[("Math", 90.0), ("Art", 70.0)]),
            &mut RejectCorrector,
        )
        .unwrap();

        assert!((card.overall_grade() - 80.0).abs() < f64::EPSILON);
        assert_eq!(card.course_count(), 2);
    }

    #[test]
    fn test_bulk_set_replaces_previous_courses() {
        let mut card = emily();
        card.set_courses_and_grades(grades(&[("Art", 40.0)]), &mut RejectCorrector)
            .unwrap();

        assert_eq!(card.course_count(), 1);
        assert!(!card.courses_and_grades().contains_key("History"));
        assert!((card.overall_grade() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bulk_set_gives_zero() {
        let mut card = emily();
        card.set_courses_and_grades(Vec::new(), &mut RejectCorrector)
            .unwrap();

        assert!(!card.has_courses());
        assert!(card.overall_grade().abs() < f64::EPSILON);
        assert!(!card.overall_grade().is_nan());
    }

    #[test]
    fn test_rejected_bulk_set_leaves_card_unchanged() {
        let mut card = emily();
        let before = card.clone();

        let result = card.set_courses_and_grades(
            grades(&[("Art", 40.0), ("Physics", 104.0)]),
            &mut RejectCorrector,
        );

        assert!(result.is_err());
        assert_eq!(card, before);
    }

    #[test]
    fn test_add_does_not_touch_overall() {
        let mut card = emily();
        let overall = card.overall_grade();

        card.add_course_and_grade("Physics", 100.0, &mut RejectCorrector)
            .unwrap();
        card.add_course_and_grade("Chemistry", 140.0, &mut ClampCorrector)
            .unwrap();

        assert_eq!(card.course_count(), 4);
        assert!((card.course_grade("Chemistry") - 100.0).abs() < f64::EPSILON);
        assert!((card.overall_grade() - overall).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_overwrites_existing_course() {
        let mut card = emily();
        card.add_course_and_grade("History", 91.0, &mut RejectCorrector)
            .unwrap();

        assert_eq!(card.course_count(), 2);
        assert!((card.course_grade("History") - 91.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_course_is_zero() {
        let card = emily();
        assert!(card.course_grade("Latin").abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_setter_last_write_wins() {
        let mut card = emily();
        card.set_overall_grade(150.0);
        assert!((card.overall_grade() - 150.0).abs() < f64::EPSILON);

        card.set_courses_and_grades(grades(&[("Art", 60.0)]), &mut RejectCorrector)
            .unwrap();
        assert!((card.overall_grade() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_name_setters() {
        let mut card = emily();
        card.set_student_name("Emily Gibbs");
        card.set_teacher_name("M. Stanley");
        card.set_school_name("Grover's Corners High");

        assert_eq!(card.student_name(), "Emily Gibbs");
        assert_eq!(card.teacher_name(), "M. Stanley");
        assert_eq!(card.school_name(), "Grover's Corners High");
    }

    #[test]
    fn test_display_with_courses() {
        let card = emily();
        let expected = "Student: Emily Webb\n\
                        Teacher: J. Whittaker\n\
                        School: Victoria University\n\
                        Courses:\n\
                        \tHistory - 56.0%\n\
                        \tMathematics - 64.7%\n\
                        Overall Grade: 60.35%\n";
        assert_eq!(card.to_string(), expected);
    }

    #[test]
    fn test_display_without_courses() {
        let card = ReportCard::with_overall_grade("Josh Smith", "T. Tucker", "Otago University", 75.4);
        let text = card.to_string();

        assert!(!text.contains("Courses:"));
        assert!(text.ends_with("Overall Grade: 75.4%\n"));
    }
}
