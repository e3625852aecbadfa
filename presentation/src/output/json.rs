//! JSON output formatter

use super::formatter::OutputFormatter;
use super::report::{ConfigReport, PolicyReport, SimulationReport};
use serde::Serialize;

/// Formats command results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_policy(&self, report: &PolicyReport) -> String {
        Self::render(report)
    }

    fn format_simulation(&self, report: &SimulationReport) -> String {
        Self::render(report)
    }

    fn format_config(&self, report: &ConfigReport) -> String {
        Self::render(report)
    }
}
