//! Console output formatter for approval results

use super::formatter::OutputFormatter;
use super::report::{ConfigReport, IssueView, PolicyReport, SimulationReport, StepRecord};
use approval_domain::{DecisionOutcome, DocumentStatus, VoteTally};
use colored::{ColoredString, Colorize};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_policy(report: &PolicyReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Approval Evaluation"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({})\n",
            "Policy:".cyan().bold(),
            report.config.mode,
            report.config
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Votes:".cyan().bold(),
            VoteTally::new(report.approve_count, report.reject_count)
                .summary(report.eligible_approvers)
        ));
        output.push_str(&format!(
            "{} {} approve, {} reject, {} eligible\n",
            "Counts:".cyan().bold(),
            report.approve_count,
            report.reject_count,
            report.eligible_approvers
        ));
        let needed = match report.approvals_needed {
            Some(n) => n.to_string(),
            None => "unreachable".dimmed().to_string(),
        };
        output.push_str(&format!("{} {}\n", "Approvals needed:".cyan().bold(), needed));
        output.push_str(&format!(
            "\n{} {}\n",
            "Outcome:".bold(),
            Self::outcome(report.outcome)
        ));
        output.push_str(&Self::footer());

        output
    }

    pub fn format_simulation(report: &SimulationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Approval Simulation"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} (requested by {})\n",
            "Document:".cyan().bold(),
            report.document_id,
            report.requested_by
        ));

        output.push_str(&Self::section_header("Steps"));
        for record in &report.steps {
            output.push_str(&Self::format_step(record));
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Final status:".bold(),
            Self::status(report.final_status)
        ));
        output.push_str(&format!(
            "{} {} delivered, {} failed\n",
            "Notifications:".dimmed(),
            report.notifications_delivered,
            report.notifications_failed
        ));
        output.push_str(&Self::footer());

        output
    }

    /// One line per simulation step
    pub fn format_step(record: &StepRecord) -> String {
        let prefix = format!("{:>3}.", record.step()).dimmed();
        match record {
            StepRecord::Vote { receipt, .. } => {
                let eval = &receipt.evaluation;
                let decided = if eval.transitioned {
                    format!(" -> {}", Self::status(eval.status))
                } else {
                    String::new()
                };
                format!(
                    "{} {} votes {:<7} {} {}{}",
                    prefix,
                    receipt.vote.approver_id.to_string().yellow(),
                    receipt.vote.decision.as_str(),
                    eval.tally.summary(eval.eligible_approvers),
                    Self::outcome(eval.outcome),
                    decided
                )
            }
            StepRecord::Evaluate { by, evaluation, .. } => {
                let decided = if evaluation.transitioned {
                    format!(" -> {}", Self::status(evaluation.status))
                } else {
                    String::new()
                };
                format!(
                    "{} {} re-evaluates   {} {}{}",
                    prefix,
                    by.yellow(),
                    evaluation.tally.summary(evaluation.eligible_approvers),
                    Self::outcome(evaluation.outcome),
                    decided
                )
            }
            StepRecord::Configure {
                config, warnings, ..
            } => {
                let mut line = format!("{} config is now {}", prefix, config.to_string().cyan());
                for warning in warnings {
                    line.push_str(&format!("\n     {}", Self::issue(warning)));
                }
                line
            }
            StepRecord::Roster {
                user,
                granted,
                approvers,
                ..
            } => format!(
                "{} {} {} ({} approvers)",
                prefix,
                if *granted { "granted" } else { "revoked" },
                user.yellow(),
                approvers
            ),
            StepRecord::Failed { action, error, .. } => {
                format!("{} {} {}", prefix, action, format!("✗ {}", error).red())
            }
        }
    }

    pub fn format_config(report: &ConfigReport) -> String {
        let mut output = String::new();

        if !report.sources.is_empty() {
            output.push_str(&report.sources.join("\n"));
            output.push_str("\n\n");
        }

        output.push_str(&format!("{}\n", "[approval]".cyan().bold()));
        match &report.approval {
            Some(config) => {
                output.push_str(&format!("  mode              = {}\n", config.mode));
                if config.mode.uses_threshold() {
                    output.push_str(&format!("  threshold         = {}\n", config.threshold_value));
                }
                output.push_str(&format!(
                    "  comments_required = {}\n",
                    config.comments_required
                ));
                output.push_str(&format!("  {}\n", config.to_string().dimmed()));
            }
            None => output.push_str(&format!("  {}\n", "invalid".red())),
        }

        output.push_str(&format!("\n{}\n", "[roles]".cyan().bold()));
        if report.approvers.is_empty() {
            output.push_str(&format!("  {}\n", "no approvers".dimmed()));
        } else {
            output.push_str(&format!("  approvers = {}\n", report.approvers.join(", ")));
        }

        output.push_str(&format!("\n{}\n", "[notifications]".cyan().bold()));
        output.push_str(&format!(
            "  timeout_ms        = {}\n",
            report.notification_timeout_ms
        ));
        output.push_str(&format!(
            "  queue_capacity    = {}\n",
            report.notification_queue_capacity
        ));
        output.push_str(&format!(
            "  outbox            = {}\n",
            report.outbox.as_deref().unwrap_or("(log only)")
        ));

        if !report.issues.is_empty() {
            output.push_str(&format!("\n{}\n", "Issues:".bold()));
            for issue in &report.issues {
                output.push_str(&format!("  {}\n", Self::issue(issue)));
            }
        }

        output
    }

    fn outcome(outcome: DecisionOutcome) -> ColoredString {
        match outcome {
            DecisionOutcome::Approved => "Approved".green().bold(),
            DecisionOutcome::Rejected => "Rejected".red().bold(),
            DecisionOutcome::Pending => "Pending".yellow(),
        }
    }

    fn status(status: DocumentStatus) -> ColoredString {
        match status {
            DocumentStatus::Approved => "Approved".green().bold(),
            DocumentStatus::Rejected => "Rejected".red().bold(),
            DocumentStatus::Pending => "Pending".yellow(),
        }
    }

    fn issue(issue: &IssueView) -> String {
        let label = match issue.severity {
            "error" => "error:".red().bold(),
            _ => "warning:".yellow().bold(),
        };
        format!("{} {}", label, issue.message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_policy(&self, report: &PolicyReport) -> String {
        Self::format_policy(report)
    }

    fn format_simulation(&self, report: &SimulationReport) -> String {
        Self::format_simulation(report)
    }

    fn format_config(&self, report: &ConfigReport) -> String {
        Self::format_config(report)
    }
}
