//! Routed pages.

use leptos::*;
use leptos_meta::Title;
use crate::services::activate_widgets;
use crate::{ModalMessage, APP_NAME};
use super::{DirectUploadForm, Hero, UrlUploadForm, YoutubeUploadForm};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=APP_NAME/>
        <Hero/>
    }
}

#[component]
pub fn UploadsPage(set_modal: WriteSignal<Option<ModalMessage>>) -> impl IntoView {
    let root = create_node_ref::<html::Div>();

    // tooltips live in this page's markup, which the router swaps in and out
    create_effect(move |_| {
        if let Some(el) = root.get() {
            activate_widgets(&el);
        }
    });

    view! {
        <Title text=format!("Upload • {}", APP_NAME)/>
        <div class="row g-4" node_ref=root>
            <UploadCard
                title="Upload a file"
                help="Send a file from this computer to your Drive."
            >
                <DirectUploadForm set_modal=set_modal/>
            </UploadCard>
            <UploadCard
                title="Upload from URL"
                help="The server downloads the file at this address and stores it in your Drive."
            >
                <UrlUploadForm set_modal=set_modal/>
            </UploadCard>
            <UploadCard
                title="Upload from YouTube"
                help="The server downloads the video and stores it in your Drive. Large videos take a while."
            >
                <YoutubeUploadForm set_modal=set_modal/>
            </UploadCard>
        </div>
    }
}

#[component]
fn UploadCard(title: &'static str, help: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="col-lg-4">
            <div class="card h-100">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span>{title}</span>
                    <span
                        class="badge rounded-pill bg-secondary"
                        data-bs-toggle="tooltip"
                        data-bs-placement="left"
                        title=help
                    >
                        "?"
                    </span>
                </div>
                <div class="card-body">{children()}</div>
            </div>
        </div>
    }
}
