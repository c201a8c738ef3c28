//! Results view settings.
//!
//! Settings are plain serde data and are usually read from a TOML table:
//!
//! ```
//! use horizon_assess::ResultsViewConfig;
//!
//! let config = ResultsViewConfig::from_toml_str(r#"
//! alternating_row_colors = false
//! "#).unwrap();
//!
//! assert!(!config.alternating_row_colors);
//! assert!(config.report_clicks);
//! ```

use horizon_assess_core::targets;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a [`ResultListController`](crate::ResultListController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsViewConfig {
    /// Whether the presentation layer should shade alternate rows.
    pub alternating_row_colors: bool,
    /// Whether a click on a row reports it as selected, in addition to
    /// selection changes.
    pub report_clicks: bool,
}

impl Default for ResultsViewConfig {
    fn default() -> Self {
        Self {
            alternating_row_colors: true,
            report_clicks: true,
        }
    }
}

impl ResultsViewConfig {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AssessError::Config`](crate::AssessError::Config) if the text
    /// is not valid TOML or a key has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded results view settings");
        Ok(config)
    }

    /// Sets whether alternate rows are shaded.
    pub fn with_alternating_row_colors(mut self, enabled: bool) -> Self {
        self.alternating_row_colors = enabled;
        self
    }

    /// Sets whether clicks report selection.
    pub fn with_report_clicks(mut self, enabled: bool) -> Self {
        self.report_clicks = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssessError;

    #[test]
    fn test_defaults() {
        let config = ResultsViewConfig::default();
        assert!(config.alternating_row_colors);
        assert!(config.report_clicks);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ResultsViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResultsViewConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ResultsViewConfig::from_toml_str("report_clicks = false").unwrap();
        assert!(!config.report_clicks);
        assert!(config.alternating_row_colors);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ResultsViewConfig::from_toml_str("report_clicks = \"yes\"").unwrap_err();
        assert!(matches!(err, AssessError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = ResultsViewConfig::new()
            .with_alternating_row_colors(false)
            .with_report_clicks(false);
        assert!(!config.alternating_row_colors);
        assert!(!config.report_clicks);
    }
}
