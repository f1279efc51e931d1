//! Browser localStorage helpers and the persisted floor-plan layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages and
//! components can persist JSON values without repeating web-sys glue. The
//! layout itself lives under a versioned key and is written after every
//! mutating editor action, so storage is always consistent with memory.

use canvas::doc::Section;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Versioned storage key for the admin floor-plan layout.
pub const LAYOUT_KEY: &str = "stockflow_admin_layout_v2";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a stored value.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load the stored layout; corrupt or absent data resets to an empty list.
#[must_use]
pub fn load_layout() -> Vec<Section> {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(LAYOUT_KEY).ok().flatten())
        else {
            return Vec::new();
        };
        let sections = canvas::doc::sections_from_json(&raw);
        if sections.is_empty() && !raw.trim().is_empty() && raw.trim() != "[]" {
            log::warn!("stored layout could not be parsed; starting empty");
        }
        sections
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Persist the full section list under the versioned layout key.
pub fn save_layout(sections: &[Section]) {
    save_json(LAYOUT_KEY, &sections);
}
