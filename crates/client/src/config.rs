//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use charsheet_runtime::RuntimeConfig;

/// Configuration for the `charsheet` binary.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// When set, logs are also written to `charsheet.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR`, `CHARSHEET_SAVE_EXTENSION` - see [`RuntimeConfig::from_env`]
    /// - `CHARSHEET_LOG_DIR` - Directory for the log file (default: no file logging)
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            log_dir: env::var_os("CHARSHEET_LOG_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }
}
