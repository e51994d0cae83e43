//! Demo command handler
//!
//! Builds two sample report cards: one from course grades (with an
//! out-of-range Physics mark) and one from an overall grade only.

use logger::error;
use report_card::{CorrectionPolicy, GradeCorrector, GradeError, ReportCard};

/// Build and print the sample report cards
pub fn run(policy: CorrectionPolicy) {
    let mut corrector = policy.corrector();

    match emily_webb(corrector.as_mut()) {
        Ok(card) => println!("{card}"),
        Err(e) => {
            error!("Could not build Emily Webb's report card: {e}");
            eprintln!("✗ {e}");
        }
    }

    println!("{}", josh_smith());
}

fn emily_webb(corrector: &mut dyn GradeCorrector) -> Result<ReportCard, GradeError> {
    let grades = [("History", 56.0), ("Mathematics", 64.7), ("Physics", 104.0)]
        .map(|(course, grade)| (course.to_string(), grade));

    ReportCard::with_grades(
        "Emily Webb",
        "J. Whittaker",
        "Victoria University",
        grades,
        corrector,
    )
}

fn josh_smith() -> ReportCard {
    ReportCard::with_overall_grade("Josh Smith", "T. Tucker", "Otago University", 75.4)
}
