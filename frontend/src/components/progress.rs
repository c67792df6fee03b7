use leptos::*;
use crate::{ProgressState, UploadKind};

/// Bootstrap progress bar for one upload form.
#[component]
pub fn UploadProgress(kind: UploadKind, state: ReadSignal<ProgressState>) -> impl IntoView {
    let percent = move || state.get().percent;

    view! {
        <div
            id=kind.progress_id()
            class="progress mt-3"
            class:d-none=move || !state.get().visible
        >
            <div
                class="progress-bar progress-bar-striped progress-bar-animated"
                role="progressbar"
                style:width=move || format!("{}%", percent())
                aria-valuenow=move || percent().to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                {move || format!("{}%", percent())}
            </div>
        </div>
    }
}
