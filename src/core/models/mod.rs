//! Data models for `reportcard`

pub mod report_card;

pub use report_card::ReportCard;
