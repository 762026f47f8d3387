// theme_store_tests.rs - Theme store behaviour through its public seams
//
// A recording document captures every side effect so the tests can check
// ordering and content without a browser.

use std::sync::{Arc, Mutex};

use aclon_site::web_app::theme::tokens::palette;
use aclon_site::web_app::theme::{
    MemoryStorage, Theme, ThemeDocument, ThemeError, ThemeStorage, ThemeStore, SYSTEM_THEME_KEY,
    THEME_KEY,
};

#[derive(Clone, Debug, PartialEq)]
enum Effect {
    RootClass(Theme),
    Properties(usize),
    MetaColor(String),
    Event(Theme),
}

#[derive(Clone, Default)]
struct RecordingDocument {
    effects: Arc<Mutex<Vec<Effect>>>,
}

impl RecordingDocument {
    fn take(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.effects.lock().unwrap())
    }

    fn push(&self, effect: Effect) -> Result<(), ThemeError> {
        self.effects.lock().unwrap().push(effect);
        Ok(())
    }
}

impl ThemeDocument for RecordingDocument {
    fn set_root_class(&self, theme: Theme) -> Result<(), ThemeError> {
        self.push(Effect::RootClass(theme))
    }

    fn set_properties(&self, properties: &[(&str, &str)]) -> Result<(), ThemeError> {
        self.push(Effect::Properties(properties.len()))
    }

    fn set_meta_theme_color(&self, color: &str) -> Result<(), ThemeError> {
        self.push(Effect::MetaColor(color.to_string()))
    }

    fn dispatch_theme_change(&self, theme: Theme) -> Result<(), ThemeError> {
        self.push(Effect::Event(theme))
    }
}

/// Storage that refuses every write
struct ReadOnlyStorage;

impl ThemeStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }
}

fn new_store(entries: &[(&'static str, &'static str)]) -> (ThemeStore, MemoryStorage, RecordingDocument) {
    let storage = MemoryStorage::with_entries(entries.iter().copied());
    let document = RecordingDocument::default();
    let store = ThemeStore::new(storage.clone(), document.clone());
    (store, storage, document)
}

fn stored(storage: &MemoryStorage, key: &str) -> Option<String> {
    storage.get(key).unwrap()
}

// ===== Initialisation =====

#[test]
fn test_store_starts_uninitialised_and_light() {
    let (store, storage, document) = new_store(&[]);

    assert!(!store.is_initialized());
    assert_eq!(store.theme(), Theme::Light);
    assert!(store.is_system_theme());
    assert!(document.take().is_empty());
    assert_eq!(stored(&storage, THEME_KEY), None);
}

#[test]
fn test_initialize_applies_every_effect_in_order() {
    let (mut store, _, document) = new_store(&[]);
    store.initialize(Theme::Dark);

    assert_eq!(
        document.take(),
        vec![
            Effect::RootClass(Theme::Dark),
            Effect::Properties(palette(Theme::Dark).len()),
            Effect::MetaColor("#000000".to_string()),
            Effect::Event(Theme::Dark),
        ]
    );
}

#[test]
fn test_saved_theme_without_flag_follows_system() {
    let (mut store, storage, _) = new_store(&[(THEME_KEY, "dark")]);
    store.initialize(Theme::Light);

    assert_eq!(store.theme(), Theme::Light);
    assert!(store.is_system_theme());
    assert_eq!(stored(&storage, SYSTEM_THEME_KEY).as_deref(), Some("true"));
}

#[test]
fn test_saved_explicit_choice_survives_reload() {
    let (mut store, _, _) = new_store(&[(THEME_KEY, "dark"), (SYSTEM_THEME_KEY, "false")]);
    store.initialize(Theme::Light);

    assert_eq!(store.theme(), Theme::Dark);
    assert!(!store.is_system_theme());
}

#[test]
fn test_corrupt_saved_theme_is_ignored() {
    let (mut store, _, _) = new_store(&[(THEME_KEY, "sepia"), (SYSTEM_THEME_KEY, "false")]);
    store.initialize(Theme::Dark);

    assert_eq!(store.theme(), Theme::Dark);
    assert!(store.is_system_theme());
}

// ===== Explicit choice vs. system =====

#[test]
fn test_toggle_persists_explicit_choice() {
    let (mut store, storage, _) = new_store(&[]);
    store.initialize(Theme::Light);

    store.toggle();

    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(stored(&storage, THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(stored(&storage, SYSTEM_THEME_KEY).as_deref(), Some("false"));

    // Explicit choice ignores the OS
    store.on_system_change(Theme::Light);
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.system_theme(), Theme::Light);
}

#[test]
fn test_following_system_tracks_os_changes() {
    let (mut store, storage, document) = new_store(&[]);
    store.initialize(Theme::Light);
    document.take();

    store.on_system_change(Theme::Dark);

    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(stored(&storage, THEME_KEY).as_deref(), Some("dark"));
    assert!(document.take().contains(&Effect::Event(Theme::Dark)));

    // Same value again is a no-op
    store.on_system_change(Theme::Dark);
    assert!(document.take().is_empty());
}

#[test]
fn test_follow_system_after_explicit_choice() {
    let (mut store, storage, _) = new_store(&[]);
    store.initialize(Theme::Dark);
    store.set_theme(Theme::Light);
    assert!(!store.is_system_theme());

    store.follow_system();

    assert_eq!(store.theme(), Theme::Dark);
    assert!(store.is_system_theme());
    assert_eq!(stored(&storage, SYSTEM_THEME_KEY).as_deref(), Some("true"));
}

// ===== Subscribers =====

#[test]
fn test_subscribers_receive_changes_until_unsubscribed() {
    let (mut store, _, _) = new_store(&[]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |theme| sink.lock().unwrap().push(theme));

    store.initialize(Theme::Light);
    store.toggle();
    assert!(store.unsubscribe(id));
    store.toggle();

    assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
    assert!(!store.unsubscribe(id));
}

// ===== Failing storage =====

#[test]
fn test_storage_failures_are_not_fatal() {
    let document = RecordingDocument::default();
    let mut store = ThemeStore::new(ReadOnlyStorage, document.clone());

    store.initialize(Theme::Dark);
    store.toggle();

    assert_eq!(store.theme(), Theme::Light);
    assert!(document.take().contains(&Effect::Event(Theme::Light)));
}
