use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryStorage {
    fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    fn stored(&self) -> Option<String> {
        self.items.borrow().get(STORAGE_KEY).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.borrow_mut().push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

/// Storage whose reads succeed but whose writes are rejected.
#[derive(Clone, Default)]
struct ReadOnlyStorage {
    write_attempts: Rc<RefCell<usize>>,
}

impl PreferenceStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        *self.write_attempts.borrow_mut() += 1;
        Err(StorageError::Rejected { op: "write", key: key.to_owned() })
    }
}

struct DisabledStorage;

impl PreferenceStorage for DisabledStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[derive(Clone)]
struct FakeHost {
    dark: bool,
    applied: Rc<RefCell<Vec<ColorSchemePreference>>>,
}

impl FakeHost {
    fn new(dark: bool) -> Self {
        Self { dark, applied: Rc::default() }
    }

    fn last_applied(&self) -> Option<ColorSchemePreference> {
        self.applied.borrow().last().copied()
    }
}

impl SchemeHost for FakeHost {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn apply(&self, scheme: ColorSchemePreference) {
        self.applied.borrow_mut().push(scheme);
    }
}

fn store_with(storage: &MemoryStorage, host: &FakeHost) -> PreferenceStore<MemoryStorage, FakeHost> {
    PreferenceStore::new(storage.clone(), host.clone())
}

// =============================================================
// ColorSchemePreference
// =============================================================

#[test]
fn preference_defaults_to_unset() {
    assert_eq!(ColorSchemePreference::default(), ColorSchemePreference::Unset);
    assert!(!ColorSchemePreference::Unset.is_resolved());
}

#[test]
fn preference_stored_round_values() {
    assert_eq!(ColorSchemePreference::from_stored("true"), ColorSchemePreference::Dark);
    assert_eq!(ColorSchemePreference::from_stored("false"), ColorSchemePreference::Light);
    assert_eq!(ColorSchemePreference::from_stored("garbage"), ColorSchemePreference::Light);
    assert_eq!(ColorSchemePreference::Dark.as_stored(), Some("true"));
    assert_eq!(ColorSchemePreference::Light.as_stored(), Some("false"));
    assert_eq!(ColorSchemePreference::Unset.as_stored(), None);
}

#[test]
fn flipped_leaves_unset_alone() {
    assert_eq!(ColorSchemePreference::Unset.flipped(), ColorSchemePreference::Unset);
    assert_eq!(ColorSchemePreference::Light.flipped(), ColorSchemePreference::Dark);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_adopts_persisted_dark_without_writing() {
    let storage = MemoryStorage::with(STORAGE_KEY, "true");
    let host = FakeHost::new(false);
    let mut store = store_with(&storage, &host);

    assert_eq!(store.initialize(), ColorSchemePreference::Dark);
    assert_eq!(store.get(), ColorSchemePreference::Dark);
    assert!(storage.writes().is_empty());
    assert_eq!(host.last_applied(), Some(ColorSchemePreference::Dark));
}

#[test]
fn initialize_without_persisted_value_uses_ambient_and_writes_once() {
    let storage = MemoryStorage::default();
    let host = FakeHost::new(false);
    let mut store = store_with(&storage, &host);

    assert_eq!(store.initialize(), ColorSchemePreference::Light);
    assert_eq!(storage.writes(), vec![(STORAGE_KEY.to_owned(), "false".to_owned())]);
}

#[test]
fn fresh_session_with_dark_ambient_paints_dark_and_persists_true() {
    let storage = MemoryStorage::default();
    let host = FakeHost::new(true);
    let mut store = store_with(&storage, &host);

    store.initialize();

    assert_eq!(store.get(), ColorSchemePreference::Dark);
    assert_eq!(host.last_applied(), Some(ColorSchemePreference::Dark));
    assert_eq!(storage.stored().as_deref(), Some("true"));
}

#[test]
fn initialize_runs_once_per_session() {
    let storage = MemoryStorage::default();
    let host = FakeHost::new(true);
    let mut store = store_with(&storage, &host);

    store.initialize();
    store.toggle();
    let writes_before = storage.writes().len();

    assert_eq!(store.initialize(), ColorSchemePreference::Light);
    assert_eq!(storage.writes().len(), writes_before);
}

#[test]
fn persisted_value_wins_over_ambient() {
    let storage = MemoryStorage::with(STORAGE_KEY, "false");
    let host = FakeHost::new(true);
    let mut store = store_with(&storage, &host);

    assert_eq!(store.initialize(), ColorSchemePreference::Light);
}

// =============================================================
// set / toggle
// =============================================================

#[test]
fn toggle_is_noop_while_unset() {
    let storage = MemoryStorage::default();
    let host = FakeHost::new(true);
    let mut store = store_with(&storage, &host);

    assert_eq!(store.toggle(), ColorSchemePreference::Unset);
    assert!(storage.writes().is_empty());
    assert!(host.applied.borrow().is_empty());
}

#[test]
fn toggle_alternates_strictly_from_resolved_state() {
    let storage = MemoryStorage::with(STORAGE_KEY, "false");
    let host = FakeHost::new(false);
    let mut store = store_with(&storage, &host);
    store.initialize();

    let seen: Vec<_> = (0..6).map(|_| store.toggle()).collect();
    assert_eq!(
        seen,
        vec![
            ColorSchemePreference::Dark,
            ColorSchemePreference::Light,
            ColorSchemePreference::Dark,
            ColorSchemePreference::Light,
            ColorSchemePreference::Dark,
            ColorSchemePreference::Light,
        ]
    );
}

#[test]
fn set_persists_and_applies_each_change() {
    let storage = MemoryStorage::with(STORAGE_KEY, "false");
    let host = FakeHost::new(false);
    let mut store = store_with(&storage, &host);
    store.initialize();

    store.set(ColorSchemePreference::Dark);

    assert_eq!(storage.stored().as_deref(), Some("true"));
    assert_eq!(host.last_applied(), Some(ColorSchemePreference::Dark));
}

#[test]
fn set_ignores_unset() {
    let storage = MemoryStorage::with(STORAGE_KEY, "true");
    let host = FakeHost::new(false);
    let mut store = store_with(&storage, &host);
    store.initialize();

    store.set(ColorSchemePreference::Unset);

    assert_eq!(store.get(), ColorSchemePreference::Dark);
    assert!(storage.writes().is_empty());
}

// =============================================================
// Degraded storage
// =============================================================

#[test]
fn disabled_storage_degrades_to_session_only() {
    let host = FakeHost::new(true);
    let mut store = PreferenceStore::new(DisabledStorage, host.clone());

    assert_eq!(store.initialize(), ColorSchemePreference::Dark);
    assert!(!store.is_persistent());
    assert_eq!(store.toggle(), ColorSchemePreference::Light);
    assert_eq!(host.last_applied(), Some(ColorSchemePreference::Light));
}

#[test]
fn rejected_write_stops_further_writes() {
    let storage = ReadOnlyStorage::default();
    let attempts = Rc::clone(&storage.write_attempts);
    let mut store = PreferenceStore::new(storage, FakeHost::new(false));

    store.initialize();
    store.toggle();
    store.toggle();

    assert_eq!(*attempts.borrow(), 1);
    assert!(!store.is_persistent());
    assert_eq!(store.get(), ColorSchemePreference::Light);
}

#[test]
fn session_only_store_still_resolves_from_ambient() {
    let mut store = PreferenceStore::<MemoryStorage, _>::session_only(FakeHost::new(true));
    assert_eq!(store.initialize(), ColorSchemePreference::Dark);
    assert!(!store.is_persistent());
}
