//! Alert banners for server flash messages.
//!
//! Non-permanent alerts close themselves after `ALERT_DISMISS_MS`.

use gloo_timers::callback::Timeout;
use leptos::*;
use crate::{FlashAlert, ALERT_DISMISS_MS};

/// An alert with a stable key for the list.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertEntry {
    pub id: usize,
    pub alert: FlashAlert,
}

/// Number alerts in arrival order.
pub fn alert_entries(alerts: Vec<FlashAlert>) -> Vec<AlertEntry> {
    alerts
        .into_iter()
        .enumerate()
        .map(|(id, alert)| AlertEntry { id, alert })
        .collect()
}

/// Remove an alert; unknown ids are ignored.
pub fn dismiss_alert(entries: &mut Vec<AlertEntry>, id: usize) {
    entries.retain(|entry| entry.id != id);
}

#[component]
pub fn AlertStack(alerts: RwSignal<Vec<AlertEntry>>) -> impl IntoView {
    view! {
        <div class="alert-stack">
            <For
                each=move || alerts.get()
                key=|entry| entry.id
                children=move |entry| view! { <AlertBanner entry=entry alerts=alerts/> }
            />
        </div>
    }
}

#[component]
fn AlertBanner(entry: AlertEntry, alerts: RwSignal<Vec<AlertEntry>>) -> impl IntoView {
    let AlertEntry { id, alert } = entry;
    let close = move || alerts.update(|list| dismiss_alert(list, id));

    if !alert.permanent {
        // closing twice is a no-op, so the timer can outlive a manual close
        Timeout::new(ALERT_DISMISS_MS, close).forget();
    }

    let class = format!("alert {} alert-dismissible fade show", alert.category.css_class());

    view! {
        <div class=class class:alert-permanent=alert.permanent role="alert">
            {alert.message}
            <button type="button" class="btn-close" aria-label="Close" on:click=move |_| close()></button>
        </div>
    }
}
