//! Messages shown in the shared response modal.
//!
//! Rich messages are kept as a list of [`Block`]s and rendered by the
//! modal component, so server text is never interpreted as markup.

use crate::types::{FailureCode, ValidationError};
use crate::validation::YOUTUBE_URL_EXAMPLES;

/// Generic text for transport failures.
pub const TRANSPORT_FAILURE: &str = "An error occurred during the upload. Please try again.";

/// Fallback when a failed direct upload carries no usable error.
pub const FILE_FAILURE_FALLBACK: &str = "Upload failed.";

/// Fallback when a failed URL/YouTube upload carries no error.
pub const REMOTE_FAILURE_FALLBACK: &str = "Upload failed. Please try again.";

/// Fallback when a successful URL/YouTube upload carries no message.
pub const REMOTE_SUCCESS_FALLBACK: &str = "Upload completed successfully.";

/// Modal title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTitle {
    Success,
    Error,
    Processing,
}

impl ModalTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalTitle::Success => "Success",
            ModalTitle::Error => "Error",
            ModalTitle::Processing => "Processing",
        }
    }
}

/// One piece of a rich modal body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Bold lead line
    Heading(String),
    Paragraph(String),
    /// Bulleted list
    List(Vec<String>),
    /// Highlighted "Note:" line
    Note(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalBody {
    Text(String),
    Rich(Vec<Block>),
}

impl ModalBody {
    /// All text of the body, for logs and assertions.
    pub fn plain_text(&self) -> String {
        match self {
            ModalBody::Text(text) => text.clone(),
            ModalBody::Rich(blocks) => blocks
                .iter()
                .map(|block| match block {
                    Block::Heading(s) | Block::Paragraph(s) | Block::Note(s) => s.clone(),
                    Block::List(items) => items.join("\n"),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Content of the response modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalMessage {
    pub title: ModalTitle,
    pub body: ModalBody,
}

impl ModalMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: ModalTitle::Success,
            body: ModalBody::Text(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ModalTitle::Error,
            body: ModalBody::Text(message.into()),
        }
    }

    pub fn rich(title: ModalTitle, blocks: Vec<Block>) -> Self {
        Self {
            title,
            body: ModalBody::Rich(blocks),
        }
    }

    /// Error modal for a rejected input.
    pub fn validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::InvalidYoutubeUrl => Self::rich(
                ModalTitle::Error,
                vec![
                    Block::Paragraph(err.to_string()),
                    Block::Paragraph("Please enter a URL in one of these formats:".to_string()),
                    Block::List(YOUTUBE_URL_EXAMPLES.iter().map(|s| s.to_string()).collect()),
                ],
            ),
            _ => Self::error(err.to_string()),
        }
    }

    /// Shown while the server downloads a YouTube video.
    pub fn youtube_processing() -> Self {
        Self::rich(
            ModalTitle::Processing,
            vec![
                Block::Paragraph("Downloading and processing YouTube video.".to_string()),
                Block::Paragraph(
                    "This may take several minutes depending on the video size.".to_string(),
                ),
                Block::Note(
                    "Some videos may be restricted by YouTube and cannot be downloaded."
                        .to_string(),
                ),
            ],
        )
    }

    /// Success modal for a direct file upload.
    pub fn file_uploaded(file_name: &str) -> Self {
        Self::success(format!(
            "File \"{}\" has been uploaded successfully!",
            file_name
        ))
    }
}

/// Classify a failure: the server's code wins, wording is the fallback.
pub fn classify_failure(code: Option<FailureCode>, message: &str) -> FailureCode {
    if let Some(code) = code {
        return code;
    }
    if message.contains("not available in your region") || message.contains("regional restrictions")
    {
        FailureCode::RegionRestricted
    } else if message.contains("private video") {
        FailureCode::PrivateVideo
    } else if message.contains("Unable to process") || message.contains("Unable to extract") {
        FailureCode::ProcessingFailed
    } else {
        FailureCode::Other
    }
}

/// Error modal for a failed YouTube upload, with guidance for known causes.
pub fn youtube_failure(code: Option<FailureCode>, message: &str) -> ModalMessage {
    let detail = Block::Paragraph(message.to_string());
    match classify_failure(code, message) {
        FailureCode::RegionRestricted => ModalMessage::rich(
            ModalTitle::Error,
            vec![
                Block::Heading("Regional Restriction Error:".to_string()),
                detail,
                Block::Paragraph("Suggestions:".to_string()),
                Block::List(vec![
                    "Try a different YouTube video that doesn't have regional restrictions"
                        .to_string(),
                    "Use a video from your local region".to_string(),
                    "Look for \"worldwide\" available videos".to_string(),
                ]),
            ],
        ),
        FailureCode::PrivateVideo => ModalMessage::rich(
            ModalTitle::Error,
            vec![
                Block::Heading("Private Video Error:".to_string()),
                detail,
                Block::Paragraph(
                    "Only public videos can be downloaded. Try using a public video instead."
                        .to_string(),
                ),
            ],
        ),
        FailureCode::ProcessingFailed => ModalMessage::rich(
            ModalTitle::Error,
            vec![
                Block::Heading("YouTube Processing Error:".to_string()),
                detail,
                Block::Paragraph(
                    "This is likely due to YouTube changing their site structure or the video having special restrictions."
                        .to_string(),
                ),
                Block::Paragraph("Suggestions:".to_string()),
                Block::List(vec![
                    "Try a different YouTube video".to_string(),
                    "Try again later".to_string(),
                    "Use direct file upload instead".to_string(),
                ]),
            ],
        ),
        FailureCode::Other => ModalMessage::error(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_video_guidance() {
        let modal = youtube_failure(None, "ERROR: This is a private video. Sign in if you've been granted access");
        assert_eq!(modal.title, ModalTitle::Error);
        match &modal.body {
            ModalBody::Rich(blocks) => {
                assert_eq!(blocks[0], Block::Heading("Private Video Error:".to_string()));
                assert!(modal.body.plain_text().contains("Only public videos can be downloaded"));
                assert!(modal.body.plain_text().contains("private video. Sign in"));
            }
            other => panic!("expected rich body, got {:?}", other),
        }
    }

    #[test]
    fn test_region_and_processing_guidance() {
        let region = youtube_failure(None, "Video unavailable: this video is not available in your region");
        assert!(region.body.plain_text().starts_with("Regional Restriction Error:"));

        let extract = youtube_failure(None, "Failed to upload from YouTube: Unable to extract uploader id");
        assert!(extract.body.plain_text().starts_with("YouTube Processing Error:"));
    }

    #[test]
    fn test_unknown_failure_is_raw_text() {
        let modal = youtube_failure(None, "Drive quota exceeded");
        assert_eq!(modal, ModalMessage::error("Drive quota exceeded"));
    }

    #[test]
    fn test_code_overrides_wording() {
        assert_eq!(
            classify_failure(Some(FailureCode::RegionRestricted), "private video"),
            FailureCode::RegionRestricted
        );
        let modal = youtube_failure(Some(FailureCode::PrivateVideo), "Video unavailable");
        assert!(modal.body.plain_text().starts_with("Private Video Error:"));
        let modal = youtube_failure(Some(FailureCode::Other), "Unable to extract");
        assert_eq!(modal.body, ModalBody::Text("Unable to extract".to_string()));
    }

    #[test]
    fn test_invalid_youtube_url_lists_formats() {
        let modal = ModalMessage::validation(&ValidationError::InvalidYoutubeUrl);
        let text = modal.body.plain_text();
        assert!(text.contains("https://youtu.be/VIDEO_ID"));
        assert!(text.contains("valid YouTube video URL"));
    }

    #[test]
    fn test_plain_validation_message() {
        let modal = ModalMessage::validation(&ValidationError::MissingFile);
        assert_eq!(modal, ModalMessage::error("Please select a file to upload."));
    }
}
