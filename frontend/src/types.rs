//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - upload kinds and progress state
//! - **API Types** - endpoint replies
//! - **Alert Types** - server flash messages
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{FILE_ENDPOINT, URL_ENDPOINT, YOUTUBE_ENDPOINT};
use crate::services::page::format_file_size;

// =============================================================================
// Upload Types
// =============================================================================

/// The three upload paths offered by the uploads page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    /// Local file sent as multipart form data
    File,
    /// Remote URL fetched by the server
    Url,
    /// YouTube video downloaded by the server
    Youtube,
}

impl UploadKind {
    /// Endpoint path the form posts to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::File => FILE_ENDPOINT,
            UploadKind::Url => URL_ENDPOINT,
            UploadKind::Youtube => YOUTUBE_ENDPOINT,
        }
    }

    /// Multipart field carrying the payload.
    pub fn field_name(&self) -> &'static str {
        match self {
            UploadKind::File => "file",
            UploadKind::Url => "url",
            UploadKind::Youtube => "youtube_url",
        }
    }

    /// DOM id of the form element.
    pub fn form_id(&self) -> &'static str {
        match self {
            UploadKind::File => "direct-upload-form",
            UploadKind::Url => "url-upload-form",
            UploadKind::Youtube => "youtube-upload-form",
        }
    }

    /// DOM id of the progress container.
    pub fn progress_id(&self) -> &'static str {
        match self {
            UploadKind::File => "direct-upload-progress",
            UploadKind::Url => "url-upload-progress",
            UploadKind::Youtube => "youtube-upload-progress",
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::File => "file",
            UploadKind::Url => "url",
            UploadKind::Youtube => "youtube",
        }
    }
}

/// What a progress bar currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: u8,
}

impl ProgressState {
    /// A visible bar at the given percentage, clamped to 100.
    pub fn at(percent: u8) -> Self {
        Self {
            visible: true,
            percent: percent.min(100),
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Raw HTTP completion as seen by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON body returned by the `/upload/*` endpoints.
///
/// `success` is absent on plain error replies (`{"error": "..."}`),
/// so it defaults to false.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Machine readable failure reason, when the server provides one.
    #[serde(default)]
    pub code: Option<FailureCode>,
}

/// Known failure reasons for server-side processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    /// Video blocked in the server's region
    RegionRestricted,
    /// Video is private
    PrivateVideo,
    /// Extraction or processing failed on the server
    ProcessingFailed,
    /// Anything else
    #[serde(other)]
    Other,
}

// =============================================================================
// Alert Types
// =============================================================================

/// Flash message category, as emitted by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Success,
    Info,
    Warning,
    Danger,
    /// Default category for uncategorized flashes
    #[serde(other)]
    Message,
}

impl AlertCategory {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertCategory::Success => "alert-success",
            AlertCategory::Info | AlertCategory::Message => "alert-info",
            AlertCategory::Warning => "alert-warning",
            AlertCategory::Danger => "alert-danger",
        }
    }
}

/// A single alert banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlashAlert {
    pub category: AlertCategory,
    pub message: String,
    /// Permanent alerts are never auto-dismissed.
    #[serde(default)]
    pub permanent: bool,
}

// =============================================================================
// Error Types
// =============================================================================

/// Client-side validation failures. Nothing is sent when one occurs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file to upload.")]
    MissingFile,

    #[error("Please enter a URL.")]
    MissingUrl,

    #[error("Please enter a YouTube URL.")]
    MissingYoutubeUrl,

    #[error("The URL you entered doesn't appear to be a valid YouTube video URL.")]
    InvalidYoutubeUrl,

    #[error("File is too large ({}). The maximum upload size is {}.", size_label(.size), size_label(.limit))]
    FileTooLarge { size: u64, limit: u64 },
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

/// Frontend application errors.
///
/// Unified error type for transport and browser operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// A browser API threw.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
