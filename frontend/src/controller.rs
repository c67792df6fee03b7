//! Upload controller: validation, dispatch and feedback for the three
//! upload forms.
//!
//! The controller never touches the DOM or the network directly. It talks
//! to an [`UploadTransport`] (the browser one lives in `services::http`)
//! and an [`UploadView`] (the Leptos one lives in `components::upload`),
//! which keeps every flow testable on the host.
//!
//! ```text
//! submit ─► validate ─┬─► Err ─► error modal (no request)
//!                     └─► Ok ──► progress Start ─► transport ─► modal ─► progress Hide
//! ```

use crate::config::PROGRESS_HIDE_DELAY_MS;
use crate::feedback::{
    youtube_failure, ModalMessage, FILE_FAILURE_FALLBACK, REMOTE_FAILURE_FALLBACK,
    REMOTE_SUCCESS_FALLBACK, TRANSPORT_FAILURE,
};
use crate::progress::SimulatedProgress;
use crate::services::page::format_file_size;
use crate::types::{AppError, AppResult, HttpReply, UploadKind, UploadReply, ValidationError};
use crate::validation::{validate_file_size, validate_url, validate_youtube_url, youtube_video_id};

/// A file picked by the user.
pub trait FileSource {
    fn name(&self) -> String;
    fn size(&self) -> u64;
}

/// Sends upload requests.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File: FileSource;

    /// Post `file` as multipart field `field`, reporting byte progress.
    async fn post_file(
        &self,
        endpoint: &str,
        field: &str,
        file: &Self::File,
        on_progress: &dyn Fn(u8),
    ) -> AppResult<HttpReply>;

    /// Post a single text field as multipart form data.
    async fn post_field(&self, endpoint: &str, field: &str, value: &str) -> AppResult<HttpReply>;
}

/// Instructions for a progress indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Reveal at 0%, dropping any pending delayed hide
    Start,
    /// Real progress value
    Set(u8),
    /// Drive the bar from a timer until `Complete` or `Hide`
    Simulate(SimulatedProgress),
    /// Stop the timer and jump to 100%
    Complete,
    /// Stop the timer and hide now
    Hide,
    /// Hide after the given delay in milliseconds
    HideAfter(u32),
}

/// Where the controller renders feedback.
pub trait UploadView {
    fn show_modal(&self, message: ModalMessage);
    fn progress(&self, update: ProgressUpdate);
    fn reset_form(&self);
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Input refused before any request
    Rejected(ValidationError),
    /// Success, with the message shown
    Succeeded(String),
    /// Failure, with the error shown
    Failed(String),
}

pub struct UploadController<T, V> {
    transport: T,
    view: V,
}

impl<T: UploadTransport, V: UploadView> UploadController<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self { transport, view }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Direct file upload with real byte progress.
    pub async fn submit_file(&self, file: Option<T::File>) -> UploadOutcome {
        let kind = UploadKind::File;
        let Some(file) = file else {
            return self.reject(ValidationError::MissingFile);
        };
        if let Err(err) = validate_file_size(file.size()) {
            return self.reject(err);
        }

        let name = file.name();
        log::info!("📤 Uploading file {} ({})", name, format_file_size(file.size()));
        self.view.progress(ProgressUpdate::Start);

        let view = &self.view;
        let on_progress = |percent: u8| view.progress(ProgressUpdate::Set(percent));
        let result = self
            .transport
            .post_file(kind.endpoint(), kind.field_name(), &file, &on_progress)
            .await;

        let outcome = match result {
            Ok(reply) if reply.is_success() => {
                let message = ModalMessage::file_uploaded(&name);
                let text = message.body.plain_text();
                log::info!("✅ File {} uploaded", name);
                self.view.show_modal(message);
                self.view.reset_form();
                UploadOutcome::Succeeded(text)
            }
            Ok(reply) => {
                let error = file_error_message(&reply);
                log::warn!("❌ File upload rejected ({}): {}", reply.status, error);
                self.view.show_modal(ModalMessage::error(error.clone()));
                UploadOutcome::Failed(error)
            }
            Err(e) => self.transport_failed(kind, &e.to_string()),
        };

        self.view.progress(ProgressUpdate::Hide);
        outcome
    }

    /// Server-side fetch of a remote URL.
    pub async fn submit_url(&self, raw_url: &str) -> UploadOutcome {
        match validate_url(raw_url) {
            Ok(url) => self.submit_remote(UploadKind::Url, &url).await,
            Err(err) => self.reject(err),
        }
    }

    /// Server-side download of a YouTube video.
    pub async fn submit_youtube(&self, raw_url: &str) -> UploadOutcome {
        match validate_youtube_url(raw_url) {
            Ok(url) => {
                if let Some(id) = youtube_video_id(&url) {
                    log::debug!("🎬 YouTube video id {}", id);
                }
                self.submit_remote(UploadKind::Youtube, &url).await
            }
            Err(err) => self.reject(err),
        }
    }

    async fn submit_remote(&self, kind: UploadKind, value: &str) -> UploadOutcome {
        log::info!("📤 Requesting {} upload of {}", kind.label(), value);
        self.view.progress(ProgressUpdate::Start);
        if kind == UploadKind::Youtube {
            self.view.show_modal(ModalMessage::youtube_processing());
        }
        if let Some(sim) = SimulatedProgress::for_kind(kind) {
            self.view.progress(ProgressUpdate::Simulate(sim));
        }

        let result = self
            .transport
            .post_field(kind.endpoint(), kind.field_name(), value)
            .await
            .and_then(|reply| serde_json::from_str::<UploadReply>(&reply.body).map_err(AppError::from));

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                let outcome = self.transport_failed(kind, &e.to_string());
                self.view.progress(ProgressUpdate::Hide);
                return outcome;
            }
        };

        self.view.progress(ProgressUpdate::Complete);
        let outcome = if reply.success {
            let message = non_empty(reply.message).unwrap_or_else(|| REMOTE_SUCCESS_FALLBACK.to_string());
            log::info!("✅ {} upload finished: {}", kind.label(), message);
            self.view.show_modal(ModalMessage::success(message.clone()));
            self.view.reset_form();
            UploadOutcome::Succeeded(message)
        } else {
            let error = non_empty(reply.error).unwrap_or_else(|| REMOTE_FAILURE_FALLBACK.to_string());
            log::warn!("❌ {} upload failed: {}", kind.label(), error);
            let modal = match kind {
                UploadKind::Youtube => youtube_failure(reply.code, &error),
                _ => ModalMessage::error(error.clone()),
            };
            self.view.show_modal(modal);
            UploadOutcome::Failed(error)
        };
        self.view.progress(ProgressUpdate::HideAfter(PROGRESS_HIDE_DELAY_MS));
        outcome
    }

    fn reject(&self, err: ValidationError) -> UploadOutcome {
        log::warn!("⚠️ Upload refused: {}", err);
        self.view.show_modal(ModalMessage::validation(&err));
        UploadOutcome::Rejected(err)
    }

    fn transport_failed(&self, kind: UploadKind, detail: &str) -> UploadOutcome {
        log::error!("❌ {} upload error: {}", kind.label(), detail);
        self.view.show_modal(ModalMessage::error(TRANSPORT_FAILURE));
        UploadOutcome::Failed(TRANSPORT_FAILURE.to_string())
    }
}

/// Error text of a non-2xx direct upload reply.
fn file_error_message(reply: &HttpReply) -> String {
    serde_json::from_str::<UploadReply>(&reply.body)
        .ok()
        .and_then(|r| non_empty(r.error))
        .unwrap_or_else(|| FILE_FAILURE_FALLBACK.to_string())
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Block, ModalBody, ModalTitle};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeFile {
        name: &'static str,
        size: u64,
    }

    impl FileSource for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
    }

    /// Replays one scripted reply and records every request.
    struct FakeTransport {
        reply: AppResult<HttpReply>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: serde_json::Value) -> Self {
            Self {
                reply: Ok(HttpReply { status, body: body.to_string() }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn raw(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply { status, body: body.to_string() }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(AppError::Network("connection reset".to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl UploadTransport for FakeTransport {
        type File = FakeFile;

        async fn post_file(
            &self,
            endpoint: &str,
            field: &str,
            file: &FakeFile,
            on_progress: &dyn Fn(u8),
        ) -> AppResult<HttpReply> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), field.to_string(), file.name.to_string()));
            on_progress(50);
            on_progress(100);
            self.reply.clone()
        }

        async fn post_field(&self, endpoint: &str, field: &str, value: &str) -> AppResult<HttpReply> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), field.to_string(), value.to_string()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct FakeView {
        modals: RefCell<Vec<ModalMessage>>,
        updates: RefCell<Vec<ProgressUpdate>>,
        resets: RefCell<usize>,
        /// Highest percentage shown before the reply landed
        peak_before_reply: RefCell<u8>,
        shown: RefCell<u8>,
    }

    impl UploadView for FakeView {
        fn show_modal(&self, message: ModalMessage) {
            self.modals.borrow_mut().push(message);
        }

        fn progress(&self, update: ProgressUpdate) {
            match &update {
                ProgressUpdate::Start => *self.shown.borrow_mut() = 0,
                ProgressUpdate::Set(p) => *self.shown.borrow_mut() = *p,
                ProgressUpdate::Simulate(sim) => {
                    // run the timer dry, as if the reply were very slow
                    let mut sim = *sim;
                    while let Some(p) = sim.tick() {
                        *self.shown.borrow_mut() = p;
                        let mut peak = self.peak_before_reply.borrow_mut();
                        *peak = (*peak).max(p);
                    }
                }
                ProgressUpdate::Complete => *self.shown.borrow_mut() = 100,
                ProgressUpdate::Hide | ProgressUpdate::HideAfter(_) => {}
            }
            self.updates.borrow_mut().push(update);
        }

        fn reset_form(&self) {
            *self.resets.borrow_mut() += 1;
        }
    }

    fn controller(transport: FakeTransport) -> UploadController<FakeTransport, FakeView> {
        UploadController::new(transport, FakeView::default())
    }

    #[test]
    fn test_missing_file_sends_nothing() {
        let c = controller(FakeTransport::replying(200, json!({})));
        let outcome = block_on(c.submit_file(None));

        assert_eq!(outcome, UploadOutcome::Rejected(ValidationError::MissingFile));
        assert!(c.transport().calls.borrow().is_empty());
        assert!(c.view().updates.borrow().is_empty());
        assert_eq!(
            c.view().modals.borrow()[0],
            ModalMessage::error("Please select a file to upload.")
        );
    }

    #[test]
    fn test_oversized_file_sends_nothing() {
        let c = controller(FakeTransport::replying(200, json!({})));
        let file = FakeFile { name: "huge.mkv", size: 600 * 1024 * 1024 };
        let outcome = block_on(c.submit_file(Some(file)));

        assert!(matches!(outcome, UploadOutcome::Rejected(ValidationError::FileTooLarge { .. })));
        assert!(c.transport().calls.borrow().is_empty());
    }

    #[test]
    fn test_file_success_resets_form_and_names_file() {
        let c = controller(FakeTransport::replying(
            200,
            json!({"success": true, "message": "File report.pdf uploaded successfully", "file_id": "abc"}),
        ));
        let file = FakeFile { name: "report.pdf", size: 2048 };
        let outcome = block_on(c.submit_file(Some(file)));

        assert_eq!(
            outcome,
            UploadOutcome::Succeeded("File \"report.pdf\" has been uploaded successfully!".to_string())
        );
        let modals = c.view().modals.borrow();
        assert_eq!(modals[0].title, ModalTitle::Success);
        assert!(modals[0].body.plain_text().contains("report.pdf"));
        assert_eq!(*c.view().resets.borrow(), 1);
        assert_eq!(
            c.transport().calls.borrow()[0],
            ("/upload/file".to_string(), "file".to_string(), "report.pdf".to_string())
        );
        assert_eq!(
            *c.view().updates.borrow(),
            vec![
                ProgressUpdate::Start,
                ProgressUpdate::Set(50),
                ProgressUpdate::Set(100),
                ProgressUpdate::Hide,
            ]
        );
    }

    #[test]
    fn test_file_failure_shows_server_error() {
        let c = controller(FakeTransport::replying(500, json!({"error": "disk full"})));
        let file = FakeFile { name: "a.txt", size: 10 };
        let outcome = block_on(c.submit_file(Some(file)));

        assert_eq!(outcome, UploadOutcome::Failed("disk full".to_string()));
        let modals = c.view().modals.borrow();
        assert_eq!(modals[0].title, ModalTitle::Error);
        assert!(modals[0].body.plain_text().contains("disk full"));
        assert_eq!(*c.view().resets.borrow(), 0);
    }

    #[test]
    fn test_file_failure_without_json_uses_fallback() {
        let c = controller(FakeTransport::raw(413, "<html>Request Entity Too Large</html>"));
        let file = FakeFile { name: "a.txt", size: 10 };
        let outcome = block_on(c.submit_file(Some(file)));
        assert_eq!(outcome, UploadOutcome::Failed("Upload failed.".to_string()));
    }

    #[test]
    fn test_file_transport_error_is_generic() {
        let c = controller(FakeTransport::failing());
        let file = FakeFile { name: "a.txt", size: 10 };
        let outcome = block_on(c.submit_file(Some(file)));

        assert_eq!(outcome, UploadOutcome::Failed(TRANSPORT_FAILURE.to_string()));
        assert_eq!(c.view().updates.borrow().last(), Some(&ProgressUpdate::Hide));
    }

    #[test]
    fn test_url_progress_capped_then_complete() {
        let c = controller(FakeTransport::replying(
            200,
            json!({"success": true, "message": "File uploaded from URL successfully"}),
        ));
        let outcome = block_on(c.submit_url("https://example.com/report.pdf"));

        assert_eq!(
            outcome,
            UploadOutcome::Succeeded("File uploaded from URL successfully".to_string())
        );
        assert_eq!(*c.view().peak_before_reply.borrow(), 90);
        assert_eq!(*c.view().shown.borrow(), 100);
        let updates = c.view().updates.borrow();
        assert_eq!(updates[0], ProgressUpdate::Start);
        assert!(matches!(updates[1], ProgressUpdate::Simulate(_)));
        assert_eq!(updates[2], ProgressUpdate::Complete);
        assert_eq!(updates[3], ProgressUpdate::HideAfter(1000));
        assert_eq!(*c.view().resets.borrow(), 1);
        assert_eq!(c.transport().calls.borrow()[0].1, "url");
    }

    #[test]
    fn test_empty_url_sends_nothing() {
        let c = controller(FakeTransport::replying(200, json!({})));
        let outcome = block_on(c.submit_url(""));
        assert_eq!(outcome, UploadOutcome::Rejected(ValidationError::MissingUrl));
        assert!(c.transport().calls.borrow().is_empty());
    }

    #[test]
    fn test_url_server_failure_shows_raw_error() {
        let c = controller(FakeTransport::replying(500, json!({"error": "404 Client Error: Not Found"})));
        let outcome = block_on(c.submit_url("https://example.com/missing"));

        assert_eq!(outcome, UploadOutcome::Failed("404 Client Error: Not Found".to_string()));
        assert_eq!(
            c.view().modals.borrow()[0],
            ModalMessage::error("404 Client Error: Not Found")
        );
    }

    #[test]
    fn test_url_unparseable_reply_is_transport_error() {
        let c = controller(FakeTransport::raw(502, "Bad Gateway"));
        let outcome = block_on(c.submit_url("https://example.com/file"));

        assert_eq!(outcome, UploadOutcome::Failed(TRANSPORT_FAILURE.to_string()));
        assert_eq!(c.view().updates.borrow().last(), Some(&ProgressUpdate::Hide));
    }

    #[test]
    fn test_invalid_youtube_url_sends_nothing() {
        let c = controller(FakeTransport::replying(200, json!({})));
        let outcome = block_on(c.submit_youtube("https://example.com/video"));

        assert_eq!(outcome, UploadOutcome::Rejected(ValidationError::InvalidYoutubeUrl));
        assert!(c.transport().calls.borrow().is_empty());
        assert!(matches!(c.view().modals.borrow()[0].body, ModalBody::Rich(_)));
    }

    #[test]
    fn test_youtube_private_video_guidance() {
        let c = controller(FakeTransport::replying(
            500,
            json!({"error": "Failed to upload from YouTube: this is a private video"}),
        ));
        let outcome = block_on(c.submit_youtube("https://youtu.be/dQw4w9WgXcQ"));

        assert!(matches!(outcome, UploadOutcome::Failed(_)));
        let modals = c.view().modals.borrow();
        assert_eq!(modals[0].title, ModalTitle::Processing);
        match &modals[1].body {
            ModalBody::Rich(blocks) => {
                assert_eq!(blocks[0], Block::Heading("Private Video Error:".to_string()))
            }
            other => panic!("expected guidance, got {:?}", other),
        }
        assert_eq!(*c.view().peak_before_reply.borrow(), 95);
        assert_eq!(c.transport().calls.borrow()[0].1, "youtube_url");
    }

    #[test]
    fn test_youtube_success_without_message() {
        let c = controller(FakeTransport::replying(200, json!({"success": true})));
        let outcome = block_on(c.submit_youtube("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(outcome, UploadOutcome::Succeeded(REMOTE_SUCCESS_FALLBACK.to_string()));
    }
}
