//! Color-scheme preference store.
//!
//! DESIGN
//! ======
//! The store owns the tri-state preference and talks to the host only through
//! two injected capabilities: durable key-value storage and the ambient scheme
//! signal (which also receives the resolved scheme to paint the document
//! root). Browser implementations live in `util::dark_mode`; tests use
//! in-memory fakes.
//!
//! Storage failures never reach callers. The first failed read or write drops
//! the store into session-only mode for the rest of its lifetime.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use thiserror::Error;

/// Storage key holding `"true"` / `"false"` for dark mode.
pub const STORAGE_KEY: &str = "darkMode";

/// Tri-state color-scheme preference.
///
/// `Unset` means "not resolved yet" and must never be rendered as a third
/// visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSchemePreference {
    #[default]
    Unset,
    Light,
    Dark,
}

impl ColorSchemePreference {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Parse the persisted representation. Anything other than `"true"`
    /// resolves to light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        Self::from_dark(raw == "true")
    }

    /// Persisted representation, or `None` while unset.
    #[must_use]
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Light => Some("false"),
            Self::Dark => Some("true"),
        }
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != Self::Unset
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite scheme; `Unset` stays `Unset`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Unset => Self::Unset,
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Failure talking to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The host has no storage (disabled, private mode, non-browser).
    #[error("storage unavailable")]
    Unavailable,

    /// The host refused the operation (quota, security policy).
    #[error("storage rejected {op} for key {key}")]
    Rejected { op: &'static str, key: String },
}

/// Durable string key-value storage scoped to the browsing client.
pub trait PreferenceStorage {
    /// Read `key`, returning `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the host cannot service the read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the host cannot service the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Host display environment.
pub trait SchemeHost {
    /// Whether the operating environment reports a dark-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Reflect the resolved scheme on the document root.
    fn apply(&self, scheme: ColorSchemePreference);
}

/// Explicitly constructed color-scheme store.
pub struct PreferenceStore<S, H> {
    value: ColorSchemePreference,
    storage: Option<S>,
    host: H,
    initialized: bool,
}

impl<S: PreferenceStorage, H: SchemeHost> PreferenceStore<S, H> {
    pub fn new(storage: S, host: H) -> Self {
        Self { value: ColorSchemePreference::Unset, storage: Some(storage), host, initialized: false }
    }

    /// Store with no durable storage; every change lives for the session only.
    pub fn session_only(host: H) -> Self {
        Self { value: ColorSchemePreference::Unset, storage: None, host, initialized: false }
    }

    #[must_use]
    pub fn get(&self) -> ColorSchemePreference {
        self.value
    }

    /// Whether writes still reach durable storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Resolve the preference once per session.
    ///
    /// A persisted value is adopted verbatim without writing. Otherwise the
    /// ambient signal decides and is persisted immediately. Later calls return
    /// the current value untouched.
    pub fn initialize(&mut self) -> ColorSchemePreference {
        if self.initialized {
            return self.value;
        }
        self.initialized = true;

        let resolved = match self.read_persisted() {
            Some(raw) => ColorSchemePreference::from_stored(&raw),
            None => {
                let ambient = ColorSchemePreference::from_dark(self.host.prefers_dark());
                self.persist(ambient);
                ambient
            }
        };

        log::debug!("color scheme resolved to {resolved:?}");
        self.value = resolved;
        self.host.apply(resolved);
        resolved
    }

    /// Adopt `value`, persist it, and repaint. `Unset` is ignored.
    pub fn set(&mut self, value: ColorSchemePreference) {
        if !value.is_resolved() {
            return;
        }
        self.value = value;
        self.persist(value);
        self.host.apply(value);
    }

    /// Flip light and dark. No-op while unset.
    pub fn toggle(&mut self) -> ColorSchemePreference {
        if self.value.is_resolved() {
            self.set(self.value.flipped());
        }
        self.value
    }

    fn read_persisted(&mut self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.read(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("preference storage read failed, keeping preference in memory: {e}");
                self.storage = None;
                None
            }
        }
    }

    fn persist(&mut self, value: ColorSchemePreference) {
        let (Some(storage), Some(raw)) = (self.storage.as_ref(), value.as_stored()) else {
            return;
        };
        if let Err(e) = storage.write(STORAGE_KEY, raw) {
            log::warn!("preference storage write failed, keeping preference in memory: {e}");
            self.storage = None;
        }
    }
}
