//! Dashboard configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Redraw interval in milliseconds. Also bounds how long a key poll waits.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Title shown at the top of the screen.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_refresh_interval_ms() -> u64 {
    500
}

fn default_title() -> String {
    "Sensor Dashboard".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            title: default_title(),
        }
    }
}

impl DashboardConfig {
    /// Redraw interval as a `Duration`.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Reject settings that would spin or hide the dashboard.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.refresh_interval_ms == 0 {
            return Err(DashboardError::InvalidConfig(
                "refresh_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval(), Duration::from_millis(500));
        assert_eq!(config.title, "Sensor Dashboard");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DashboardConfig = toml::from_str("title = \"Rig A\"").unwrap();
        assert_eq!(config.title, "Rig A");
        assert_eq!(config.refresh_interval_ms, 500);
    }

    #[test]
    fn test_zero_refresh_rejected() {
        let config = DashboardConfig {
            refresh_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }
}
