//! Page bootstrap helpers.
//!
//! Everything here takes the element or window it works on as a parameter;
//! components call these once their markup is mounted.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::types::FlashAlert;

/// Marker set on elements whose widget is already attached.
const READY_ATTR: &str = "data-widget-ready";

const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
const DROPDOWN_SELECTOR: &str = ".dropdown-toggle";

/// Global the server may set to pass flash messages to the page.
const FLASH_GLOBAL: &str = "FLASH_MESSAGES";

/// Number of widgets attached by one [`activate_widgets`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetCount {
    pub tooltips: usize,
    pub dropdowns: usize,
}

/// Attach bootstrap tooltips and dropdowns below `root`.
///
/// Safe to call repeatedly; already activated elements are skipped.
pub fn activate_widgets(root: &Element) -> WidgetCount {
    let count = WidgetCount {
        tooltips: activate_each(root, TOOLTIP_SELECTOR, init_tooltip),
        dropdowns: activate_each(root, DROPDOWN_SELECTOR, init_dropdown),
    };
    if count != WidgetCount::default() {
        log::debug!(
            "🧩 Activated {} tooltips, {} dropdowns",
            count.tooltips,
            count.dropdowns
        );
    }
    count
}

fn activate_each(root: &Element, selector: &str, init: fn(&Element) -> bool) -> usize {
    let nodes = match root.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Invalid selector {}: {:?}", selector, e);
            return 0;
        }
    };

    let mut activated = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if el.has_attribute(READY_ATTR) {
            continue;
        }
        if !init(&el) {
            log::warn!("⚠️ bootstrap.js not loaded, skipping {}", selector);
            break;
        }
        let _ = el.set_attribute(READY_ATTR, "");
        activated += 1;
    }
    activated
}

/// Read the flash messages the server embedded in the page, if any.
pub fn read_flash_messages(window: &web_sys::Window) -> Vec<FlashAlert> {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(FLASH_GLOBAL)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return Vec::new(),
    };
    match serde_wasm_bindgen::from_value::<Vec<FlashAlert>>(value) {
        Ok(alerts) => alerts,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", FLASH_GLOBAL, e);
            Vec::new()
        }
    }
}

/// Whether a nav link points at the current page.
pub fn nav_link_is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`...
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[wasm_bindgen(module = "/src/js/widgets.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initTooltip")]
    fn init_tooltip(el: &Element) -> bool;

    #[wasm_bindgen(js_name = "initDropdown")]
    fn init_dropdown(el: &Element) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(500 * 1024 * 1024), "500 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
        assert_eq!(format_file_size(5 * 1024u64.pow(5)), "5120 TB");
    }

    #[test]
    fn test_nav_link_matching_is_exact() {
        assert!(nav_link_is_active("/uploads", "/uploads"));
        assert!(!nav_link_is_active("/", "/uploads"));
        assert!(!nav_link_is_active("/uploads", "/uploads/extra"));
    }
}
