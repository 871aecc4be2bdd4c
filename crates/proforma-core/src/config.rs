//! Studio configuration loaded from environment.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | PROFORMA_SERVER_URL | http://127.0.0.1:5000 | Base URL of the template/generation server. |
//! | PROFORMA_DATA_DIR | ./data | Directory holding the persisted form snapshot. |

use crate::persistence::SNAPSHOT_FILE;
use std::path::PathBuf;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_DATA_DIR: &str = "./data";

/// Runtime configuration for the studio. Unset env vars fall back to defaults.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Base URL of the template/generation server (no trailing slash).
    pub server_url: String,
    /// Directory for locally persisted state.
    pub data_dir: PathBuf,
}

impl StudioConfig {
    /// Load configuration from environment, applying defaults.
    pub fn from_env() -> Self {
        Self {
            server_url: env_string("PROFORMA_SERVER_URL", DEFAULT_SERVER_URL),
            data_dir: PathBuf::from(env_string("PROFORMA_DATA_DIR", DEFAULT_DATA_DIR)),
        }
    }

    /// Path of the single snapshot slot.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let cfg = StudioConfig::default();
        assert_eq!(cfg.server_url, "http://127.0.0.1:5000");
        assert!(cfg.snapshot_path().ends_with("proposal_form.json"));
    }
}
