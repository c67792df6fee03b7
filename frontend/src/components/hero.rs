//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero text-center py-5">
            <h1>"Upload to Google Drive"</h1>
            <p class="lead">
                "Send files from your computer, from any public URL, or straight from YouTube "
                "into your Drive."
            </p>
            <a href="/uploads" class="btn btn-primary btn-lg">"Start uploading"</a>
        </div>
    }
}
