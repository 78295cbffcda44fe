// Configuration validation module

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::config::{load_config, parse_config, AppConfig, EMBEDDED_CONFIG};
use crate::core::PortfolioError;

/// Check the parts of a configuration the controllers rely on
pub fn validate_config(config: &AppConfig) -> Result<(), PortfolioError> {
    if config.tabs.is_empty() {
        return Err(PortfolioError::NoTabs);
    }
    config.effects.validate()
}

/// Load and validate configuration with error recovery
///
/// A file that cannot be read, parsed or validated is reported and replaced
/// by the configuration embedded in the binary.
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loaded = load_config(config_path).and_then(|config| {
        validate_config(&config).context("configuration failed validation")?;
        Ok(config)
    });

    match loaded {
        Ok(config) => {
            info!(tabs = config.tabs.len(), "configuration loaded");
            Ok(config)
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "failed to load configuration; using embedded defaults");
            let config = parse_config(EMBEDDED_CONFIG).context("embedded configuration is invalid")?;
            validate_config(&config).context("embedded configuration failed validation")?;
            Ok(config)
        }
    }
}
