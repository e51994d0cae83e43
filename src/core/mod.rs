//! Core report card functionality shared by the library and the CLI

pub mod correction;
pub mod grade;
pub mod loader;
pub mod models;
pub mod report;
