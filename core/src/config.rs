use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site configuration: {0}")]
    Invalid(&'static str),
}

/// Tunables of the landing page. Every field has a default, so an override
/// document only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub header_offset: f64,
    pub reference_offset: f64,
    pub navigation_cooldown_ms: u32,
    pub reviews_interval_ms: u32,
    pub recent_work_interval_ms: u32,
    pub swipe_threshold: f64,
    pub back_to_top_threshold: f64,
    pub contact_email: String,
    pub whatsapp_url: String,
    pub behance_url: String,
    pub simulated_submit_delay_ms: u32,
    pub simulate_submit_failure: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 88.0,
            reference_offset: 88.0,
            navigation_cooldown_ms: 1000,
            reviews_interval_ms: 4000,
            recent_work_interval_ms: 10_000,
            swipe_threshold: 50.0,
            back_to_top_threshold: 300.0,
            contact_email: "adamzebilah@gmail.com".to_string(),
            whatsapp_url: "https://wa.me/213670758620".to_string(),
            behance_url: "https://www.behance.net/adamzebilah".to_string(),
            simulated_submit_delay_ms: 2000,
            simulate_submit_failure: false,
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_offset < 0.0 || self.reference_offset < 0.0 {
            return Err(ConfigError::Invalid("offsets must not be negative"));
        }
        if self.reviews_interval_ms == 0 || self.recent_work_interval_ms == 0 {
            return Err(ConfigError::Invalid("carousel intervals must be positive"));
        }
        if self.swipe_threshold <= 0.0 {
            return Err(ConfigError::Invalid("swipe threshold must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_means_defaults() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = SiteConfig::from_json(r#"{"headerOffset": 72, "simulateSubmitFailure": true}"#)
            .unwrap();
        assert_eq!(config.header_offset, 72.0);
        assert!(config.simulate_submit_failure);
        assert_eq!(config.navigation_cooldown_ms, 1000);
        assert_eq!(config.swipe_threshold, 50.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{headerOffset"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"reviewsIntervalMs": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
