//! Client-side input validation.
//!
//! Every check here runs before a request is built; a failure aborts the
//! submission and is reported through the response modal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MAX_FILE_SIZE;
use crate::types::ValidationError;

/// Accepted YouTube URL shapes: watch, short, embed and `/v/` links
/// followed by an 11 character video id.
static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)([a-zA-Z0-9_-]{11})",
    )
    .expect("YouTube URL pattern is valid")
});

/// URL formats listed to the user when a YouTube URL is rejected.
pub const YOUTUBE_URL_EXAMPLES: [&str; 3] = [
    "https://www.youtube.com/watch?v=VIDEO_ID",
    "https://youtu.be/VIDEO_ID",
    "https://www.youtube.com/embed/VIDEO_ID",
];

/// Check a string against the known YouTube URL shapes.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url.trim())
}

/// Extract the 11 character video id from a YouTube URL.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(4))
        .map(|m| m.as_str())
}

/// Validate the remote URL field.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    Ok(url.to_string())
}

/// Validate the YouTube URL field: present, then shaped like a video link.
pub fn validate_youtube_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingYoutubeUrl);
    }
    if !is_youtube_url(url) {
        return Err(ValidationError::InvalidYoutubeUrl);
    }
    Ok(url.to_string())
}

/// Reject files the server would refuse anyway.
pub fn validate_file_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
