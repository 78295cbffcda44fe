// Tab Controller
// Single active index into a fixed, non-empty list of tabs

use serde::Deserialize;
use tracing::debug;

use super::error::{PortfolioError, PortfolioResult};

/// Icon shown next to a tab label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabIcon {
    Rocket,
    BarChart,
    Server,
    Database,
    MessageCircle,
}

impl TabIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            TabIcon::Rocket => "▲",
            TabIcon::BarChart => "▆",
            TabIcon::Server => "≡",
            TabIcon::Database => "◎",
            TabIcon::MessageCircle => "◌",
        }
    }
}

/// One block of tab content, in display order
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    Heading(String),
    Subheading(String),
    Paragraph(String),
    List(Vec<String>),
    Gallery(Vec<ImageRef>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TabDefinition {
    pub label: String,
    pub icon: TabIcon,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub content: Vec<ContentBlock>,
}

/// View of the active tab handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTab<'a> {
    pub index: usize,
    pub label: &'a str,
    pub icon: TabIcon,
    pub content: &'a [ContentBlock],
}

#[derive(Debug, Clone)]
pub struct TabController {
    tabs: Vec<TabDefinition>,
    active: usize,
}

impl TabController {
    /// The first tab starts active
    pub fn new(tabs: Vec<TabDefinition>) -> PortfolioResult<Self> {
        if tabs.is_empty() {
            return Err(PortfolioError::NoTabs);
        }
        Ok(Self { tabs, active: 0 })
    }

    pub fn tabs(&self) -> &[TabDefinition] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn active(&self) -> ActiveTab<'_> {
        let tab = &self.tabs[self.active];
        ActiveTab {
            index: self.active,
            label: &tab.label,
            icon: tab.icon,
            content: &tab.content,
        }
    }

    /// Make `index` active. Returns whether the active tab changed.
    pub fn select(&mut self, index: usize) -> PortfolioResult<bool> {
        if index >= self.tabs.len() {
            return Err(PortfolioError::TabOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }
        if index == self.active {
            return Ok(false);
        }

        debug!(from = self.active, to = index, label = %self.tabs[index].label, "tab selected");
        self.active = index;
        Ok(true)
    }

    /// Select the following tab, wrapping to the first
    pub fn select_next(&mut self) -> bool {
        let next = (self.active + 1) % self.tabs.len();
        self.select(next).unwrap_or(false)
    }

    /// Select the preceding tab, wrapping to the last
    pub fn select_previous(&mut self) -> bool {
        let previous = (self.active + self.tabs.len() - 1) % self.tabs.len();
        self.select(previous).unwrap_or(false)
    }
}
