//! Report card library for `reportcard`
//! Contains the report card model, grade correction, report formats, and configuration

pub mod config;
pub mod core;

pub use crate::core::correction::{
    ClampCorrector, CorrectionPolicy, CorrectionRequest, GradeCorrector, PromptCorrector,
    RejectCorrector,
};
pub use crate::core::grade::{validate_grade, GradeError};
pub use crate::core::models::ReportCard;
