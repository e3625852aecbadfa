//! `simulate` command: replay a script through the full decision flow
//!
//! Wires the in-memory adapters, the notification dispatcher and the
//! decision coordinator exactly as a long-running service would, then
//! feeds the scripted steps through them one by one.

use anyhow::Result;
use approval_application::{
    DecisionCoordinator, ManageConfigUseCase, NotificationDispatcher, NotificationSink,
    OpenDocumentInput, OpenDocumentUseCase, RoleLookupError, SubmitVoteInput, VoteLedger,
};
use approval_application::ports::repository::DocumentRepository;
use approval_domain::UserId;
use approval_infrastructure::{
    FileConfig, FileRolesConfig, InMemoryConfigStore, InMemoryDocumentRepository,
    InMemoryVoteRepository, JsonlNotificationSink, ScriptStep, SimulationScript,
    StaticRoleMembership, TracingNotificationSink,
};
use approval_presentation::{IssueView, SimulationReport, StepRecord};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Outbox sink when configured and openable, log-only sink otherwise
fn notification_sink(config: &FileConfig) -> Arc<dyn NotificationSink> {
    if let Some(path) = &config.notifications.outbox {
        match JsonlNotificationSink::new(path) {
            Some(sink) => {
                info!("Writing decisions to {}", sink.path().display());
                return Arc::new(sink);
            }
            None => warn!("Outbox {} unavailable, logging decisions instead", path.display()),
        }
    }
    Arc::new(TracingNotificationSink)
}

fn roster_step(
    step: usize,
    user: &str,
    granted: bool,
    changed: Result<bool, RoleLookupError>,
    roles: &StaticRoleMembership,
) -> Result<StepRecord, String> {
    changed.map_err(|e| e.to_string())?;
    let approvers = roles.approvers().map_err(|e| e.to_string())?.len();
    Ok(StepRecord::Roster {
        step,
        user: user.to_string(),
        granted,
        approvers,
    })
}

pub async fn run(script: &SimulationScript, config: &FileConfig) -> Result<SimulationReport> {
    // === Dependency Injection ===
    let approvers = match &script.approvers {
        Some(list) => FileRolesConfig {
            approvers: list.clone(),
        }
        .approver_ids(),
        None => config.roles.approver_ids(),
    };
    let approval = script
        .approval
        .clone()
        .unwrap_or_else(|| config.approval.clone());

    let documents = Arc::new(InMemoryDocumentRepository::new());
    let roles = Arc::new(StaticRoleMembership::new(approvers));
    let config_store = Arc::new(InMemoryConfigStore::from_record(approval));

    let shutdown = CancellationToken::new();
    let (queue, dispatcher) = NotificationDispatcher::spawn(
        notification_sink(config),
        &config.notifications.to_params(),
        shutdown.clone(),
    );

    let coordinator = DecisionCoordinator::new(
        VoteLedger::new(Arc::new(InMemoryVoteRepository::new())),
        documents.clone(),
        roles.clone(),
        config_store.clone(),
    )
    .with_notifications(queue);
    let manage_config = ManageConfigUseCase::new(config_store, roles.clone());

    let document = OpenDocumentUseCase::new(documents.clone())
        .execute(OpenDocumentInput::new(
            script.document.id.as_str(),
            script.document.title.as_str(),
            script.document.requested_by.as_str(),
        ))
        .await?;

    // === Replay ===
    let mut steps = Vec::with_capacity(script.steps.len());
    for (index, step) in script.steps.iter().enumerate() {
        let n = index + 1;
        let failed = |error: String| StepRecord::Failed {
            step: n,
            action: step.describe(),
            error,
        };

        let record = match step {
            ScriptStep::Vote {
                approver,
                decision,
                comments,
            } => {
                let mut input = SubmitVoteInput::new(document.id.clone(), approver.as_str(), *decision);
                if let Some(comments) = comments {
                    input = input.with_comments(comments.as_str());
                }
                match coordinator.submit_vote(input).await {
                    Ok(receipt) => StepRecord::Vote { step: n, receipt },
                    Err(e) => failed(e.to_string()),
                }
            }
            ScriptStep::Evaluate { by } => {
                match coordinator
                    .evaluate_document(&document.id, &UserId::new(by.as_str()))
                    .await
                {
                    Ok(evaluation) => StepRecord::Evaluate {
                        step: n,
                        by: by.clone(),
                        evaluation,
                    },
                    Err(e) => failed(e.to_string()),
                }
            }
            ScriptStep::Configure {
                mode,
                threshold,
                comments_required,
            } => match manage_config
                .update_from_parts(mode, *threshold, *comments_required)
                .await
            {
                Ok(update) => StepRecord::Configure {
                    step: n,
                    config: update.config,
                    warnings: update.warnings.iter().map(IssueView::from).collect(),
                },
                Err(e) => failed(e.to_string()),
            },
            ScriptStep::Grant { user } => {
                let changed = roles.grant(UserId::new(user.as_str()));
                roster_step(n, user, true, changed, &roles).unwrap_or_else(failed)
            }
            ScriptStep::Revoke { user } => {
                let changed = roles.revoke(&UserId::new(user.as_str()));
                roster_step(n, user, false, changed, &roles).unwrap_or_else(failed)
            }
        };
        steps.push(record);
    }

    let final_status = documents
        .find(&document.id)
        .await?
        .map(|d| d.status)
        .unwrap_or_default();

    // Stop intake and let queued notifications drain
    drop(coordinator);
    shutdown.cancel();
    let stats = dispatcher.await?;

    Ok(SimulationReport {
        document_id: document.id.to_string(),
        requested_by: document.requested_by.to_string(),
        steps,
        final_status,
        notifications_delivered: stats.delivered,
        notifications_failed: stats.failed,
    })
}
