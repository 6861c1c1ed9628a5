//! Browser host for the color-scheme preference.
//!
//! `BrowserStorage` persists the preference in `window.localStorage`;
//! `DocumentScheme` answers the `prefers-color-scheme` media query and paints
//! the `<html>` element (`dark` class plus `data-theme`). Outside the browser
//! both degrade to no-ops so SSR renders deterministically.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::preference::{ColorSchemePreference, PreferenceStorage, PreferenceStore, SchemeHost, StorageError};

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Rejected { op: "read", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { op: "write", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// The document root and the ambient `prefers-color-scheme` signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScheme;

impl SchemeHost for DocumentScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn apply(&self, scheme: ColorSchemePreference) {
        #[cfg(feature = "hydrate")]
        {
            let Some(theme) = theme_attribute(scheme) else {
                return;
            };
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force("dark", scheme.is_dark());
                let _ = el.set_attribute("data-theme", theme);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scheme;
        }
    }
}

/// Value for the root `data-theme` attribute.
#[must_use]
pub fn theme_attribute(scheme: ColorSchemePreference) -> Option<&'static str> {
    match scheme {
        ColorSchemePreference::Unset => None,
        ColorSchemePreference::Light => Some("light"),
        ColorSchemePreference::Dark => Some("dark"),
    }
}

/// Preference store wired to the browser host.
pub type BrowserPreferenceStore = PreferenceStore<BrowserStorage, DocumentScheme>;

pub fn browser_store() -> BrowserPreferenceStore {
    PreferenceStore::new(BrowserStorage, DocumentScheme)
}
