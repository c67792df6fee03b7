//! Drive Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading local files, remote URLs and
//! YouTube videos to Google Drive through the server's `/upload/*`
//! endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NavBar (active link, account dropdown)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AlertStack (flash messages, auto-dismiss)                   │
//! │  Routes                                                      │
//! │  ├── /         HomePage (Hero)                               │
//! │  └── /uploads  UploadsPage                                   │
//! │                ├── DirectUploadForm  ─┐                      │
//! │                ├── UrlUploadForm      ├─► UploadController   │
//! │                └── YoutubeUploadForm ─┘                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ResponseModal (shared)          Footer                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadKind, UploadReply, errors, etc.)
//! - [`validation`] - Input checks run before any request
//! - [`progress`] - Real and simulated progress values
//! - [`feedback`] - Modal message model and YouTube failure guidance
//! - [`controller`] - Upload flows behind transport/view traits
//! - [`components`] - UI components (NavBar, forms, modal, etc.)
//! - [`services`] - Browser communication (HTTP, page bootstrap)

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod progress;
pub mod feedback;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Uploads
    UploadKind, ProgressState,
    // API
    HttpReply, UploadReply, FailureCode,
    // Alerts
    AlertCategory, FlashAlert,
    // Errors
    AppError, AppResult, ValidationError,
};

// Feedback
pub use feedback::{Block, ModalBody, ModalMessage, ModalTitle};

// Controller
pub use controller::{
    FileSource, ProgressUpdate, UploadController, UploadOutcome, UploadTransport, UploadView,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Drive Upload - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One modal serves every form
    let (modal, set_modal) = create_signal(None::<ModalMessage>);

    // Flash messages are handed over once, at startup
    let flashes = read_flash_messages(&gloo_utils::window());
    if !flashes.is_empty() {
        log::info!("📣 {} flash message(s) from server", flashes.len());
    }
    let alerts = create_rw_signal(alert_entries(flashes));

    view! {
        <Router>
            <NavBar/>
            <main class="container">
                <AlertStack alerts=alerts/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route
                        path="/uploads"
                        view=move || view! { <UploadsPage set_modal=set_modal/> }
                    />
                </Routes>
            </main>
            <ResponseModal message=modal set_message=set_modal/>
            <Footer/>
        </Router>
    }
}
