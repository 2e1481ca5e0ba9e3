//! Start-up configuration for the validation switch

use serde::{Deserialize, Serialize};

use super::toggle;

/// Environment variable read by [`WatchConfig::from_env`].
pub const ENABLED_ENV: &str = "NEBULA_WATCH_ENABLED";

/// Process-level settings for the field interception layer.
///
/// Missing keys take their defaults, so `{}` is a valid configuration.
///
/// ```rust
/// use nebula_watch::watch::WatchConfig;
///
/// let config: WatchConfig = serde_json::from_str(r#"{ "enabled": false }"#).unwrap();
/// assert!(!config.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Global default for validating writes.
    pub enabled: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl WatchConfig {
    /// Create configuration from environment variables
    ///
    /// `NEBULA_WATCH_ENABLED` accepts `1/true/on/yes` and `0/false/off/no`
    /// (any case). Anything else keeps the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ENABLED_ENV) {
            match parse_flag(&raw) {
                Some(enabled) => config.enabled = enabled,
                None => tracing::debug!(value = %raw, "ignoring unrecognised NEBULA_WATCH_ENABLED"),
            }
        }
        config
    }

    /// Installs this configuration as the global default.
    pub fn apply(&self) {
        toggle::set_global_active(self.enabled);
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
