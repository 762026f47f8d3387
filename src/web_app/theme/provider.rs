// web_app/theme/provider.rs - Leptos wiring for the theme store
//
// ThemeProvider owns the store for the lifetime of the application root and
// exposes a Copy handle through context. On the server the store uses
// in-memory storage and stays light; in the browser it is initialised after
// hydration so server and client render the same first frame.

use cfg_if::cfg_if;
use leptos::prelude::*;

use super::{SubscriptionId, Theme, ThemeStore};

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        fn new_store() -> ThemeStore {
            ThemeStore::new(super::browser::LocalStorageBackend, super::browser::BrowserDocument)
        }
    } else {
        fn new_store() -> ThemeStore {
            ThemeStore::new(super::MemoryStorage::new(), super::NoopDocument)
        }
    }
}

/// Reactive handle to the theme store
///
/// Outside a [`ThemeProvider`] the handle is inert: always light, and the
/// mutators do nothing.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    is_system: RwSignal<bool>,
    store: Option<StoredValue<ThemeStore>>,
}

impl ThemeContext {
    fn inert() -> Self {
        Self {
            theme: RwSignal::new(Theme::Light),
            is_system: RwSignal::new(false),
            store: None,
        }
    }

    /// Current theme (tracked)
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn theme_signal(&self) -> Signal<Theme> {
        let theme = self.theme;
        Signal::derive(move || theme.get())
    }

    pub fn is_system_theme(&self) -> bool {
        self.is_system.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update(|store| store.set_theme(theme));
    }

    pub fn toggle(&self) {
        self.update(ThemeStore::toggle);
    }

    pub fn follow_system(&self) {
        self.update(ThemeStore::follow_system);
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + Send + Sync + 'static) -> Option<SubscriptionId> {
        let store = self.store?;
        store.try_update_value(|s| s.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store
            .and_then(|store| store.try_update_value(|s| s.unsubscribe(id)))
            .unwrap_or(false)
    }

    fn update(&self, f: impl FnOnce(&mut ThemeStore)) {
        let Some(store) = self.store else {
            return;
        };
        store.update_value(f);
        if let Some(is_system) = store.try_with_value(|s| s.is_system_theme()) {
            self.is_system.set(is_system);
        }
    }
}

/// Theme handle provided by the nearest [`ThemeProvider`]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(ThemeContext::inert)
}

/// Owns the theme store for everything rendered inside it
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::Light);
    let is_system = RwSignal::new(false);
    let store = StoredValue::new(new_store());

    store.update_value(|s| {
        s.subscribe(move |t| theme.set(t));
    });

    let context = ThemeContext {
        theme,
        is_system,
        store: Some(store),
    };
    provide_context(context);

    #[cfg(feature = "hydrate")]
    {
        use super::browser::{system_theme, SystemThemeListener};

        let listener = StoredValue::new_local(None::<SystemThemeListener>);

        Effect::new(move |_| {
            store.update_value(|s| s.initialize(system_theme()));
            if let Some(system) = store.try_with_value(|s| s.is_system_theme()) {
                is_system.set(system);
            }

            match SystemThemeListener::attach(move |os_theme| {
                store.update_value(|s| s.on_system_change(os_theme));
            }) {
                Ok(attached) => listener.set_value(Some(attached)),
                Err(e) => tracing::warn!("Could not watch system theme: {}", e),
            }
        });

        on_cleanup(move || {
            listener.try_update_value(|l| l.take());
        });
    }

    view! {
        <div class="min-h-screen transition-colors duration-300">
            {children()}
        </div>
    }
}

/// Button flipping between light and dark
#[component]
pub fn ThemeToggle(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let label = move || match theme.theme() {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    view! {
        <button
            type="button"
            class=format!("theme-toggle p-2 rounded-full transition-colors {}", class)
            aria-label=label
            title=label
            on:click=move |_| theme.toggle()
        >
            {move || match theme.theme() {
                Theme::Light => "🌙",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
