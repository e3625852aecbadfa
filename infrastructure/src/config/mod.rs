//! Configuration file loading for approval-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./approval.toml` or `./.approval.toml`
//! 3. Global: `$XDG_CONFIG_HOME/approval-quorum/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileApprovalConfig, FileConfig, FileLoggingConfig, FileNotificationsConfig, FileRolesConfig,
};
pub use loader::ConfigLoader;
