use leptos::*;
use leptos_router::use_location;
use crate::services::{activate_widgets, nav_link_is_active};
use crate::APP_NAME;

/// Top-level nav entries. `external` links are pages rendered by the server.
const NAV_LINKS: [(&str, &str, bool); 3] = [
    ("/", "Home", false),
    ("/uploads", "Upload", false),
    ("/files", "My Files", true),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let nav_ref = create_node_ref::<html::Nav>();

    create_effect(move |_| {
        if let Some(nav) = nav_ref.get() {
            activate_widgets(&nav);
        }
    });

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label, external)| {
            let active = move || pathname.with(|path| nav_link_is_active(href, path));
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:active=active
                        href=href
                        rel=external.then_some("external")
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark mb-4" node_ref=nav_ref>
            <div class="container">
                <a class="navbar-brand" href="/">{APP_NAME}</a>
                <ul class="navbar-nav me-auto">{links}</ul>
                <ul class="navbar-nav">
                    <li class="nav-item dropdown">
                        <a
                            class="nav-link dropdown-toggle"
                            href="#"
                            role="button"
                            data-bs-toggle="dropdown"
                            aria-expanded="false"
                        >
                            "Account"
                        </a>
                        <ul class="dropdown-menu dropdown-menu-end">
                            <li><a class="dropdown-item" href="/google_login" rel="external">"Sign in with Google"</a></li>
                            <li><a class="dropdown-item" href="/setup" rel="external">"API credentials"</a></li>
                            <li><hr class="dropdown-divider"/></li>
                            <li><a class="dropdown-item" href="/logout" rel="external">"Log out"</a></li>
                        </ul>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
