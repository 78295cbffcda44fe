// Starfolio Library
// A terminal rendition of a personal portfolio page: twinkling star field,
// shooting stars, parallax hero and a tabbed Skills & Projects panel

// Core infrastructure - application state and controllers
pub mod core;

// Ambient effects - star field, shooting stars, parallax
pub mod effects;

// UI - terminal views and the event loop
pub mod ui;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use config::AppConfig;
pub use config_validation::load_and_validate_config;
pub use constants::*;
pub use crate::core::{App, PortfolioError, PortfolioResult, TabController};
pub use effects::StarFieldController;
