//! Simulation scripts for `approval-quorum simulate`
//!
//! A script opens one document, seeds a roster and a policy, and replays a
//! list of steps against it:
//!
//! ```toml
//! approvers = ["alice", "bob", "carol"]
//!
//! [document]
//! id = "budget-2025"
//! title = "Budget 2025"
//! requested_by = "dana"
//!
//! [approval]
//! mode = "majority"
//!
//! [[steps]]
//! action = "vote"
//! approver = "alice"
//! decision = "approve"
//!
//! [[steps]]
//! action = "revoke"
//! user = "carol"
//!
//! [[steps]]
//! action = "evaluate"
//! by = "admin"
//! ```

use crate::config::FileApprovalConfig;
use approval_domain::VoteDecision;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not read script {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid script {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationScript {
    pub document: ScriptDocument,
    /// Overrides the `[approval]` section of the loaded configuration
    #[serde(default)]
    pub approval: Option<FileApprovalConfig>,
    /// Overrides `[roles].approvers` when present
    #[serde(default)]
    pub approvers: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptDocument {
    pub id: String,
    pub title: String,
    pub requested_by: String,
}

impl Default for ScriptDocument {
    fn default() -> Self {
        Self {
            id: "doc-1".to_string(),
            title: "Untitled".to_string(),
            requested_by: "requester".to_string(),
        }
    }
}

/// One scripted action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Vote {
        approver: String,
        decision: VoteDecision,
        #[serde(default)]
        comments: Option<String>,
    },
    /// Re-evaluate without a vote
    Evaluate {
        #[serde(default = "default_actor")]
        by: String,
    },
    /// Administrator config update
    Configure {
        mode: String,
        #[serde(default)]
        threshold: u32,
        #[serde(default)]
        comments_required: bool,
    },
    Grant {
        user: String,
    },
    Revoke {
        user: String,
    },
}

fn default_actor() -> String {
    "admin".to_string()
}

impl ScriptStep {
    /// Short label for step listings
    pub fn describe(&self) -> String {
        match self {
            ScriptStep::Vote {
                approver, decision, ..
            } => format!("{} votes {}", approver, decision),
            ScriptStep::Evaluate { by } => format!("{} re-evaluates", by),
            ScriptStep::Configure {
                mode, threshold, ..
            } => format!("config -> {} ({})", mode, threshold),
            ScriptStep::Grant { user } => format!("grant approver role to {}", user),
            ScriptStep::Revoke { user } => format!("revoke approver role from {}", user),
        }
    }
}

impl SimulationScript {
    pub fn from_toml(source: &str, path: &str) -> Result<Self, ScriptError> {
        toml::from_str(source).map_err(|source| ScriptError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let display = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_toml(&source, &display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = SimulationScript::from_toml(
            r#"
approvers = ["alice", "bob"]

[document]
id = "budget"
requested_by = "dana"

[approval]
mode = "unanimous"

[[steps]]
action = "vote"
approver = "alice"
decision = "approve"
comments = "fine"

[[steps]]
action = "configure"
mode = "min_votes"
threshold = 1

[[steps]]
action = "evaluate"
"#,
            "inline",
        )
        .unwrap();

        assert_eq!(script.document.id, "budget");
        assert_eq!(script.document.title, "Untitled");
        assert_eq!(script.approvers.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(script.approval.unwrap().mode, "unanimous");
        assert_eq!(script.steps.len(), 3);
        assert_eq!(
            script.steps[0],
            ScriptStep::Vote {
                approver: "alice".to_string(),
                decision: VoteDecision::Approve,
                comments: Some("fine".to_string()),
            }
        );
        assert_eq!(
            script.steps[2],
            ScriptStep::Evaluate {
                by: "admin".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = SimulationScript::from_toml(
            r#"
[document]
id = "x"

[[steps]]
action = "veto"
"#,
            "inline",
        )
        .unwrap_err();

        assert!(matches!(err, ScriptError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulationScript::load(Path::new("/nonexistent/script.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.toml"));
    }

    #[test]
    fn test_describe() {
        let step = ScriptStep::Revoke {
            user: "carol".to_string(),
        };
        assert_eq!(step.describe(), "revoke approver role from carol");
    }
}
