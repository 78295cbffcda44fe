// Core infrastructure module
// Application state, the tab controller and supporting state machines

pub mod app;
pub mod app_config;
pub mod contact;
pub mod error;
pub mod events;
pub mod scroll;
pub mod tabs;

pub use app::App;
pub use app_config::{EffectsConfig, Theme};
pub use contact::ContactModal;
pub use error::{PortfolioError, PortfolioResult};
pub use events::{AppEvent, EventHandler, HitMap, HitTarget};
pub use scroll::{Anchor, PageScroll};
pub use tabs::{ActiveTab, ContentBlock, ImageRef, TabController, TabDefinition, TabIcon};
