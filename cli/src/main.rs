//! CLI entrypoint for approval-quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;
mod simulate;

use anyhow::{Result, anyhow, bail};
use approval_domain::{ApprovalConfig, ApprovalMode, PolicyInput};
use approval_infrastructure::{ConfigLoader, FileConfig, SimulationScript};
use approval_presentation::{
    Cli, Command, ConfigReport, IssueView, OutputFormatter, PolicyReport, formatter_for,
};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = logging::init(cli.verbose, &file_config.logging);
    info!("Starting approval-quorum");

    let formatter = formatter_for(cli.output);

    let output = match cli.command {
        Command::Evaluate {
            mode,
            threshold,
            approve,
            reject,
            eligible,
        } => evaluate(formatter.as_ref(), &mode, threshold, approve, reject, eligible)?,
        Command::Simulate { script } => {
            let script = SimulationScript::load(&script)?;
            for issue in file_config.validate() {
                warn!("{}", issue);
            }
            let report = simulate::run(&script, &file_config).await?;
            formatter.format_simulation(&report)
        }
        Command::Config { show_sources } => {
            let sources = if show_sources {
                ConfigLoader::config_sources(cli.config.as_ref())
            } else {
                Vec::new()
            };
            formatter.format_config(&config_report(&file_config, sources))
        }
    };

    println!("{}", output);

    Ok(())
}

/// Stateless policy evaluation of raw counts
fn evaluate(
    formatter: &dyn OutputFormatter,
    mode: &str,
    threshold: u32,
    approve: usize,
    reject: usize,
    eligible: usize,
) -> Result<String> {
    let mode: ApprovalMode = mode.parse()?;
    if approve + reject > eligible {
        bail!(
            "{} approve + {} reject votes exceed the {} eligible approvers",
            approve,
            reject,
            eligible
        );
    }

    let config = ApprovalConfig::new(mode, threshold);
    for issue in config.validate_for_roster(eligible) {
        warn!("{}", issue);
    }

    let report = PolicyReport::evaluate(config, PolicyInput::new(approve, reject, eligible));
    Ok(formatter.format_policy(&report))
}

fn config_report(config: &FileConfig, sources: Vec<String>) -> ConfigReport {
    let (approval, _) = config.approval.parse();
    ConfigReport {
        approval,
        approvers: config
            .roles
            .approver_ids()
            .iter()
            .map(|id| id.to_string())
            .collect(),
        notification_timeout_ms: config.notifications.timeout_ms,
        notification_queue_capacity: config.notifications.queue_capacity,
        outbox: config
            .notifications
            .outbox
            .as_ref()
            .map(|p| p.display().to_string()),
        issues: config.validate().iter().map(IssueView::from).collect(),
        sources,
    }
}
