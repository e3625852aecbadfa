//! Structured configuration issues.
//!
//! Validation never fails fast: callers collect every [`ConfigIssue`] and
//! decide what to do based on [`Severity`]. Errors make a configuration
//! unusable; warnings describe configurations that work but can never
//! produce some outcome.
//!
//! # Examples
//!
//! ```
//! use approval_domain::approval::ApprovalConfig;
//! use approval_domain::validation::Severity;
//!
//! let config = ApprovalConfig::min_percentage(150);
//! let issues = config.validate();
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].severity, Severity::Warning);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used for evaluation.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The mode string does not name a known approval mode.
    UnknownMode { value: String },
    /// MinPercentage threshold above 100: approval is unreachable.
    ThresholdOutOfRange { value: u32 },
    /// Threshold of zero: every document is approved on its first vote.
    ZeroThreshold,
    /// MinVotes threshold larger than the approver roster.
    ThresholdExceedsApprovers { threshold: u32, approvers: usize },
    /// No approvers configured: every document stays pending.
    NoApprovers,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}
