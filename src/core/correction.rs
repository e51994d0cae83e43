//! Correction of out-of-range grades
//!
//! A report card never stores a grade outside `[0, 100]`. When one is supplied,
//! the card hands it to a [`GradeCorrector`], which either returns a
//! replacement in range or refuses. The card itself never touches stdin.

use crate::core::grade::{format_percentage, validate_grade, GradeError, MAX_GRADE, MIN_GRADE};
use logger::{debug, warn};
use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

/// An out-of-range grade waiting for a replacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionRequest<'a> {
    /// Student the report card belongs to
    pub student: &'a str,
    /// Course the grade was entered for
    pub course: &'a str,
    /// The rejected value
    pub grade: f64,
}

/// Produces a valid grade in place of an invalid one
pub trait GradeCorrector {
    /// Return a replacement for `request.grade`.
    ///
    /// # Errors
    /// Returns an error when no replacement can be produced.
    fn correct(&mut self, request: &CorrectionRequest<'_>) -> Result<f64, GradeError>;
}

/// Asks a person for a new grade until one in range is entered
pub struct PromptCorrector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptCorrector<R, W> {
    /// Prompt on `output` and read answers from `input`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl PromptCorrector<StdinLock<'static>, Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GradeCorrector for PromptCorrector<R, W> {
    fn correct(&mut self, request: &CorrectionRequest<'_>) -> Result<f64, GradeError> {
        let mut shown = request.grade;
        loop {
            write!(
                self.output,
                "You entered an invalid percentage grade for {}'s class {}. ({}) Please enter a grade between 0 and 100: ",
                request.student,
                request.course,
                format_percentage(shown)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GradeError::InputClosed {
                    course: request.course.to_string(),
                });
            }

            match line.trim().parse::<f64>() {
                Ok(answer) => match validate_grade(request.course, answer) {
                    Ok(grade) => return Ok(grade),
                    Err(_) => shown = answer,
                },
                Err(_) => debug!("Ignoring non-numeric answer '{}'", line.trim()),
            }
        }
    }
}

/// Pulls invalid grades to the nearest bound
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampCorrector;

impl GradeCorrector for ClampCorrector {
    fn correct(&mut self, request: &CorrectionRequest<'_>) -> Result<f64, GradeError> {
        let grade = if request.grade.is_nan() {
            MIN_GRADE
        } else {
            request.grade.clamp(MIN_GRADE, MAX_GRADE)
        };
        warn!(
            "Clamped {}'s grade for {} from {} to {}",
            request.student,
            request.course,
            format_percentage(request.grade),
            format_percentage(grade)
        );
        Ok(grade)
    }
}

/// Refuses every invalid grade
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectCorrector;

impl GradeCorrector for RejectCorrector {
    fn correct(&mut self, request: &CorrectionRequest<'_>) -> Result<f64, GradeError> {
        validate_grade(request.course, request.grade)
    }
}

/// How invalid grades are handled, as named in config and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionPolicy {
    /// Ask on the terminal
    #[default]
    Prompt,
    /// Clamp into `[0, 100]`
    Clamp,
    /// Fail the operation
    Reject,
}

impl CorrectionPolicy {
    /// Build the corrector for this policy. `Prompt` is bound to stdin/stdout.
    #[must_use]
    pub fn corrector(self) -> Box<dyn GradeCorrector> {
        match self {
            Self::Prompt => Box::new(PromptCorrector::stdio()),
            Self::Clamp => Box::new(ClampCorrector),
            Self::Reject => Box::new(RejectCorrector),
        }
    }
}

impl FromStr for CorrectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompt" | "ask" => Ok(Self::Prompt),
            "clamp" => Ok(Self::Clamp),
            "reject" | "fail" => Ok(Self::Reject),
            _ => Err(format!("Unknown correction policy: '{s}'")),
        }
    }
}

impl fmt::Display for CorrectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::Clamp => write!(f, "clamp"),
            Self::Reject => write!(f, "reject"),
        }
    }
}
