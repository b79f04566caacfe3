//! Assessment history persistence and export.

pub mod export;
pub mod history;
