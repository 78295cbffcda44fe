// Error Types
// Library-level errors for the portfolio controllers and configuration

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    /// A tab controller needs at least one tab to keep a valid active index
    #[error("tab list is empty")]
    NoTabs,

    #[error("tab index {index} out of range (tab count: {len})")]
    TabOutOfRange { index: usize, len: usize },

    /// A configured `[min, max)` range is inverted or not finite
    #[error("invalid range for {field}: [{min}, {max})")]
    InvalidRange { field: &'static str, min: f64, max: f64 },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;
