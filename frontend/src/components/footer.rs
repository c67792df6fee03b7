//! Footer component

use leptos::*;
use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer mt-5 py-3 bg-light">
            <div class="container text-center text-muted">
                {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
