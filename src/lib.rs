//! Ranks a repository's open feature requests by "+1" reactions and writes
//! the ranking as a markdown table.

pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod rank;
pub mod report;
pub mod run;
