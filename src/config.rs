//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell header.
pub const APP_NAME: &str = "webdesk";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Trash Configuration
// =============================================================================

/// Days a trashed item survives before the server auto-purges it.
pub const RETENTION_DAYS: i64 = 30;

// =============================================================================
// Refresh Configuration
// =============================================================================

/// Quiescence window for debounced cross-view refreshes, in milliseconds.
pub const REFRESH_DEBOUNCE_MS: i32 = 1000;

// =============================================================================
// Listing Configuration
// =============================================================================

/// Number of documents shown in the "recent files" strip.
pub const RECENT_FILES_LIMIT: usize = 4;

/// Number of entries shown in the dashboard activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 6;

/// Documents created within this many days count as notifications.
pub const NOTIFICATION_WINDOW_DAYS: i64 = 7;

/// Display truncation limits.
pub mod display {
    /// Maximum length of a file name before truncation in listings.
    pub const MAX_NAME_DISPLAY_LEN: usize = 28;
    /// Longest extension (including the dot) preserved when truncating.
    pub const MAX_EXT_PRESERVE_LEN: usize = 6;
}

// =============================================================================
// Statistics Configuration
// =============================================================================

/// Period windows offered by the statistics views.
pub mod periods {
    /// Number of trailing weeks generated for weekly charts.
    pub const WEEK_PERIODS: usize = 8;
    /// Number of trailing months generated for monthly charts.
    pub const MONTH_PERIODS: usize = 12;
}
