// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{EffectsConfig, TabDefinition, Theme};

/// Configuration shipped inside the binary, used when no file can be loaded
pub const EMBEDDED_CONFIG: &str = include_str!("config.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub theme: Theme,
    pub profile: ProfileConfig,
    #[serde(default)]
    pub navigation: Vec<NavLinkConfig>,
    #[serde(default)]
    pub social_links: Vec<SocialLinkConfig>,
    pub contact: ContactConfig,
    pub skills_section: SectionConfig,
    pub tabs: Vec<TabDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub modal_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub monogram: String,
    pub badge: String,
    pub heading: String,
    pub summary: String,
    pub connect_label: String,
}

/// In-page anchor link
#[derive(Debug, Clone, Deserialize)]
pub struct NavLinkConfig {
    pub anchor: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinkConfig {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub title: String,
    pub description: String,
    pub options: Vec<ContactOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactOption {
    pub label: String,
    pub href: String,
    /// Named color (e.g. "green") or `#rrggbb`
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionConfig {
    pub heading: String,
    pub intro: String,
}

fn default_true() -> bool {
    true
}

/// `src/config.yaml` under the crate root
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(contents).context("invalid configuration YAML")?;
    Ok(config)
}

pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
