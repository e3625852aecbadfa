//! Output formatting
//!
//! - [`report`]: serializable views of command results
//! - [`formatter`]: the [`OutputFormatter`](formatter::OutputFormatter) trait
//! - [`console`] / [`json`]: the two implementations

pub mod console;
pub mod formatter;
pub mod json;
pub mod report;
