//! PHQ-9 and journal depression severity screening.
//!
//! [`assessment::score_questionnaire`] and [`assessment::Assessor::analyze_text`]
//! are the two entry points; everything else supports them.

pub mod api;
pub mod assessment;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
