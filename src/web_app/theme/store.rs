// web_app/theme/store.rs - Theme state machine
//
// One store per application root. It is created with its storage and
// document backends, initialised once with the OS preference, and from then
// on every change runs the same side effects: root class, CSS properties,
// persisted keys, meta theme-color, subscribers and the document event.

use super::document::ThemeDocument;
use super::storage::ThemeStorage;
use super::tokens::palette;
use super::{resolve, Theme, ThemeError, ThemePreference, SYSTEM_THEME_KEY, THEME_KEY};

type Listener = Box<dyn Fn(Theme) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ThemeStore {
    storage: Box<dyn ThemeStorage>,
    document: Box<dyn ThemeDocument>,
    preference: ThemePreference,
    system_theme: Theme,
    theme: Theme,
    initialized: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Uninitialised store: light, following the system, nothing applied yet
    pub fn new(
        storage: impl ThemeStorage + 'static,
        document: impl ThemeDocument + 'static,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            document: Box::new(document),
            preference: ThemePreference::FollowingSystem,
            system_theme: Theme::Light,
            theme: Theme::Light,
            initialized: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Restore the persisted preference and apply the resulting theme
    ///
    /// Storage read failures are treated as "nothing persisted".
    pub fn initialize(&mut self, system_theme: Theme) {
        let saved_theme = self.read_key(THEME_KEY);
        let saved_system = self.read_key(SYSTEM_THEME_KEY);

        self.system_theme = system_theme;
        self.preference =
            ThemePreference::from_persisted(saved_theme.as_deref(), saved_system.as_deref());
        self.initialized = true;

        tracing::info!(
            preference = ?self.preference,
            system = %system_theme,
            "Theme store initialised"
        );
        self.apply();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_system_theme(&self) -> bool {
        self.preference.is_system()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Last OS preference the store was told about
    pub fn system_theme(&self) -> Theme {
        self.system_theme
    }

    /// Explicit choice; stops following the system
    pub fn set_theme(&mut self, theme: Theme) {
        self.preference = ThemePreference::Explicit(theme);
        self.apply();
    }

    pub fn toggle(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Drop the explicit choice and mirror the OS preference again
    pub fn follow_system(&mut self) {
        self.preference = ThemePreference::FollowingSystem;
        self.apply();
    }

    /// OS preference changed
    ///
    /// Always recorded; only applied while following the system.
    pub fn on_system_change(&mut self, system_theme: Theme) {
        self.system_theme = system_theme;
        if self.preference.is_system() && system_theme != self.theme {
            self.apply();
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn apply(&mut self) {
        self.theme = resolve(self.preference, self.system_theme);
        let theme = self.theme;
        let is_system = self.preference.is_system();

        tracing::info!(theme = %theme, system = is_system, "Applying theme");

        report(self.document.set_root_class(theme));
        report(self.document.set_properties(palette(theme)));
        report(self.storage.set(THEME_KEY, theme.as_str()));
        report(self.storage.set(SYSTEM_THEME_KEY, if is_system { "true" } else { "false" }));
        report(self.document.set_meta_theme_color(theme.meta_color()));

        for (_, listener) in &self.listeners {
            listener(theme);
        }
        report(self.document.dispatch_theme_change(theme));
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Theme storage read failed: {}", e);
                None
            }
        }
    }
}

fn report(result: Result<(), ThemeError>) {
    if let Err(e) = result {
        tracing::warn!("Theme side effect failed: {}", e);
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("system_theme", &self.system_theme)
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
