//! Application configuration.
//!
//! Centralized configuration for the Drive Upload frontend.
//! The server that serves the bundle also hosts the upload endpoints,
//! so everything is resolved against the page origin.

/// Backend API base URL.
///
/// Empty means same origin as the page.
pub const BACKEND_URL: &str = "";

/// Application name, shown in the navbar and page titles.
pub const APP_NAME: &str = "Drive Upload";

/// Direct file upload endpoint.
pub const FILE_ENDPOINT: &str = "/upload/file";

/// Remote URL upload endpoint.
pub const URL_ENDPOINT: &str = "/upload/url";

/// YouTube upload endpoint.
pub const YOUTUBE_ENDPOINT: &str = "/upload/youtube";

/// Maximum file size accepted by the server (in bytes).
///
/// 500 MB limit, mirrors the server's `MAX_CONTENT_LENGTH`.
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Simulated progress for URL uploads: step, period and ceiling.
pub const URL_PROGRESS_STEP: u8 = 5;
pub const URL_PROGRESS_INTERVAL_MS: u32 = 500;
pub const URL_PROGRESS_CEILING: u8 = 90;

/// Simulated progress for YouTube uploads: step, period and ceiling.
pub const YOUTUBE_PROGRESS_STEP: u8 = 2;
pub const YOUTUBE_PROGRESS_INTERVAL_MS: u32 = 1000;
pub const YOUTUBE_PROGRESS_CEILING: u8 = 95;

/// How long a finished (100%) simulated bar stays visible.
pub const PROGRESS_HIDE_DELAY_MS: u32 = 1000;

/// Delay before non-permanent alerts close themselves.
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Build a full endpoint URL from a path.
pub fn endpoint_url(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}
