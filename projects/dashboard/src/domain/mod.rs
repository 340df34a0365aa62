//! Shared core behind both presenters: one fetch, one stats rule, one set of
//! display formatters.

pub mod display;
pub mod format;
pub mod repos;
pub mod stats;
