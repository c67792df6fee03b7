//! Upload forms: direct file, remote URL and YouTube.
//!
//! Each form owns its progress signal and a [`SignalView`], the Leptos side
//! of the controller's [`UploadView`]. Submission hands the input to an
//! [`UploadController`] running on `spawn_local`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::controller::{ProgressUpdate, UploadController, UploadView};
use crate::services::{format_file_size, BrowserTransport};
use crate::{ModalMessage, ProgressState, UploadKind, MAX_FILE_SIZE};
use super::UploadProgress;

/// Timers driving one progress bar.
#[derive(Default)]
struct ProgressTimers {
    ticker: RefCell<Option<Interval>>,
    pending_hide: RefCell<Option<Timeout>>,
}

impl ProgressTimers {
    /// Dropping a gloo timer cancels it.
    fn stop_ticker(&self) {
        self.ticker.borrow_mut().take();
    }

    fn cancel_hide(&self) {
        self.pending_hide.borrow_mut().take();
    }
}

/// Renders controller feedback into signals and the form element.
#[derive(Clone)]
pub struct SignalView {
    set_progress: WriteSignal<ProgressState>,
    set_modal: WriteSignal<Option<ModalMessage>>,
    form: NodeRef<html::Form>,
    timers: Rc<ProgressTimers>,
}

impl SignalView {
    pub fn new(
        set_progress: WriteSignal<ProgressState>,
        set_modal: WriteSignal<Option<ModalMessage>>,
        form: NodeRef<html::Form>,
    ) -> Self {
        Self {
            set_progress,
            set_modal,
            form,
            timers: Rc::new(ProgressTimers::default()),
        }
    }
}

impl UploadView for SignalView {
    fn show_modal(&self, message: ModalMessage) {
        self.set_modal.set(Some(message));
    }

    fn progress(&self, update: ProgressUpdate) {
        let set_progress = self.set_progress;
        match update {
            ProgressUpdate::Start => {
                self.timers.cancel_hide();
                self.timers.stop_ticker();
                set_progress.set(ProgressState::at(0));
            }
            ProgressUpdate::Set(percent) => set_progress.set(ProgressState::at(percent)),
            ProgressUpdate::Simulate(mut sim) => {
                let interval = Interval::new(sim.interval_ms(), move || {
                    if let Some(percent) = sim.tick() {
                        set_progress.set(ProgressState::at(percent));
                    }
                });
                *self.timers.ticker.borrow_mut() = Some(interval);
            }
            ProgressUpdate::Complete => {
                self.timers.stop_ticker();
                set_progress.set(ProgressState::at(100));
            }
            ProgressUpdate::Hide => {
                self.timers.stop_ticker();
                set_progress.set(ProgressState::hidden());
            }
            ProgressUpdate::HideAfter(delay_ms) => {
                let timeout = Timeout::new(delay_ms, move || {
                    set_progress.set(ProgressState::hidden());
                });
                *self.timers.pending_hide.borrow_mut() = Some(timeout);
            }
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.get_untracked() {
            form.reset();
        }
    }
}

#[component]
pub fn DirectUploadForm(set_modal: WriteSignal<Option<ModalMessage>>) -> impl IntoView {
    let kind = UploadKind::File;
    let (progress, set_progress) = create_signal(ProgressState::hidden());
    let (selected, set_selected) = create_signal(None::<String>);
    let form_ref = create_node_ref::<html::Form>();
    let file_input = create_node_ref::<html::Input>();
    let feedback = SignalView::new(set_progress, set_modal, form_ref);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let label = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| format!("{} ({})", file.name(), format_file_size(file.size() as u64)));
        set_selected.set(label);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let controller = UploadController::new(BrowserTransport, feedback.clone());
        spawn_local(async move {
            controller.submit_file(file).await;
        });
    };

    view! {
        <form
            id=kind.form_id()
            node_ref=form_ref
            on:submit=on_submit
            on:reset=move |_| set_selected.set(None)
        >
            <div class="mb-3">
                <label for="file-input" class="form-label">"Choose a file"</label>
                <input
                    type="file"
                    class="form-control"
                    id="file-input"
                    name=kind.field_name()
                    node_ref=file_input
                    on:change=on_file_change
                />
                <div class="form-text">
                    {move || selected.get().unwrap_or_else(|| {
                        format!("Up to {}", format_file_size(MAX_FILE_SIZE))
                    })}
                </div>
            </div>
            <button type="submit" class="btn btn-primary">"Upload File"</button>
            <UploadProgress kind=kind state=progress/>
        </form>
    }
}

#[component]
pub fn UrlUploadForm(set_modal: WriteSignal<Option<ModalMessage>>) -> impl IntoView {
    let kind = UploadKind::Url;
    let (progress, set_progress) = create_signal(ProgressState::hidden());
    let form_ref = create_node_ref::<html::Form>();
    let url_input = create_node_ref::<html::Input>();
    let feedback = SignalView::new(set_progress, set_modal, form_ref);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let url = url_input
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        let controller = UploadController::new(BrowserTransport, feedback.clone());
        spawn_local(async move {
            controller.submit_url(&url).await;
        });
    };

    view! {
        <form id=kind.form_id() node_ref=form_ref on:submit=on_submit novalidate=true>
            <div class="mb-3">
                <label for="url-input" class="form-label">"File URL"</label>
                <input
                    type="url"
                    class="form-control"
                    id="url-input"
                    name=kind.field_name()
                    placeholder="https://example.com/document.pdf"
                    node_ref=url_input
                />
            </div>
            <button type="submit" class="btn btn-primary">"Upload from URL"</button>
            <UploadProgress kind=kind state=progress/>
        </form>
    }
}

#[component]
pub fn YoutubeUploadForm(set_modal: WriteSignal<Option<ModalMessage>>) -> impl IntoView {
    let kind = UploadKind::Youtube;
    let (progress, set_progress) = create_signal(ProgressState::hidden());
    let form_ref = create_node_ref::<html::Form>();
    let url_input = create_node_ref::<html::Input>();
    let feedback = SignalView::new(set_progress, set_modal, form_ref);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let url = url_input
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        let controller = UploadController::new(BrowserTransport, feedback.clone());
        spawn_local(async move {
            controller.submit_youtube(&url).await;
        });
    };

    view! {
        <form id=kind.form_id() node_ref=form_ref on:submit=on_submit novalidate=true>
            <div class="mb-3">
                <label for="youtube-url-input" class="form-label">"YouTube video URL"</label>
                <input
                    type="url"
                    class="form-control"
                    id="youtube-url-input"
                    name=kind.field_name()
                    placeholder="https://www.youtube.com/watch?v=VIDEO_ID"
                    node_ref=url_input
                />
            </div>
            <button type="submit" class="btn btn-danger">"Upload YouTube Video"</button>
            <UploadProgress kind=kind state=progress/>
        </form>
    }
}
