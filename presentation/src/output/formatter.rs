//! Output formatter trait

use super::report::{ConfigReport, PolicyReport, SimulationReport};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format a stateless policy evaluation
    fn format_policy(&self, report: &PolicyReport) -> String;

    /// Format a replayed simulation
    fn format_simulation(&self, report: &SimulationReport) -> String;

    /// Format the effective configuration
    fn format_config(&self, report: &ConfigReport) -> String;
}
