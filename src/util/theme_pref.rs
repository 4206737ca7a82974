//! Dark/light theme preference persistence.
//!
//! The choice is stored in `localStorage` and applied as a `dark` class on
//! the `<html>` element. With no stored choice, the system color-scheme
//! preference wins. Requires a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "blogscope_dark";

/// The dark-mode setting to start with: stored choice, else system
/// preference, else light.
pub fn initial() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist a dark-mode choice and sync the `<html>` class.
pub fn set(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
            }
        }
    }
    apply(dark);
}

/// Apply or remove the `dark` class on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if dark {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
