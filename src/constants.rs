// Application Constants
// Section anchors, layout sizes and runtime names shared across modules

// SECTIONS ----------------->>

/// Anchor of the hero section at the top of the page
pub const SECTION_HOME: &str = "home";

/// Anchor of the Skills & Projects section
pub const SECTION_SKILLS: &str = "skills-and-projects";

//--------------------------------------------------------<<
// LAYOUT ------------------->>

/// Rows taken by the fixed navigation bar (label row + border)
pub const NAV_HEIGHT: u16 = 2;

/// Rows taken by the status bar at the bottom
pub const STATUS_HEIGHT: u16 = 1;

//--------------------------------------------------------<<
// RUNTIME ------------------>>

/// Event poll timeout; also the frame interval while idle
pub const POLL_INTERVAL_MS: u64 = 50;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "STARFOLIO_LOG";

/// Log file name, created in the system temp directory unless overridden
pub const LOG_FILE_NAME: &str = "starfolio.log";

//--------------------------------------------------------<<
