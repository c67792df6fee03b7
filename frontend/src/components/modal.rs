//! Shared response modal.
//!
//! A single modal reports every upload outcome. It is open while the
//! message signal holds `Some`.

use leptos::*;
use crate::{Block, ModalBody, ModalMessage};

#[component]
pub fn ResponseModal(
    message: ReadSignal<Option<ModalMessage>>,
    set_message: WriteSignal<Option<ModalMessage>>,
) -> impl IntoView {
    let close = move |_| set_message.set(None);

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div
                class="modal fade show d-block"
                id="responseModal"
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                aria-labelledby="responseModalLabel"
            >
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title" id="responseModalLabel">
                                {move || message.with(|m| m.as_ref().map(|m| m.title.as_str()))}
                            </h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=close></button>
                        </div>
                        <div class="modal-body" id="responseModalBody">
                            {move || message.get().map(|m| render_body(m.body))}
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}

fn render_body(body: ModalBody) -> View {
    match body {
        ModalBody::Text(text) => view! { <p>{text}</p> }.into_view(),
        ModalBody::Rich(blocks) => blocks.into_iter().map(render_block).collect_view(),
    }
}

fn render_block(block: Block) -> View {
    match block {
        Block::Heading(text) => view! { <p><strong>{text}</strong></p> }.into_view(),
        Block::Paragraph(text) => view! { <p>{text}</p> }.into_view(),
        Block::List(items) => view! {
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
        Block::Note(text) => view! {
            <p class="text-warning"><strong>"Note: "</strong>{text}</p>
        }
        .into_view(),
    }
}
