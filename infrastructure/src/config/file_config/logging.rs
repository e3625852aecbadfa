//! Logging settings from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! level = "info"       # overridden by -v flags
//! directory = "logs"   # daily-rolling file log, off when omitted
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `EnvFilter` directive used when no `-v` flag is given
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}
