// web_app/theme/browser.rs - Browser backends for the theme store (hydrate only)
//
// Both backends are unit structs that look the window up on every call, so
// they hold no JS handles and can live inside Send + Sync reactive storage.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage};

use super::{Theme, ThemeDocument, ThemeError, ThemeStorage, THEME_CHANGE_EVENT};

const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn document() -> Result<web_sys::Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::DocumentUnavailable)
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<Storage, ThemeError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl ThemeStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?.get_item(key).map_err(|e| ThemeError::Storage {
            action: "read",
            key: key.to_string(),
            reason: js_reason(e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?.set_item(key, value).map_err(|e| ThemeError::Storage {
            action: "write",
            key: key.to_string(),
            reason: js_reason(e),
        })
    }
}

/// The live page document
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl BrowserDocument {
    fn root() -> Result<HtmlElement, ThemeError> {
        document()?
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(ThemeError::DocumentUnavailable)
    }
}

impl ThemeDocument for BrowserDocument {
    fn set_root_class(&self, theme: Theme) -> Result<(), ThemeError> {
        let classes = Self::root()?.class_list();
        classes
            .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
            .and_then(|_| classes.add_1(theme.as_str()))
            .map_err(|e| ThemeError::Document(js_reason(e)))
    }

    fn set_properties(&self, properties: &[(&str, &str)]) -> Result<(), ThemeError> {
        let style = Self::root()?.style();
        for (name, value) in properties {
            style
                .set_property(name, value)
                .map_err(|e| ThemeError::Document(js_reason(e)))?;
        }
        Ok(())
    }

    fn set_meta_theme_color(&self, color: &str) -> Result<(), ThemeError> {
        let doc = document()?;
        let to_err = |e: JsValue| ThemeError::Document(js_reason(e));

        let meta = match doc.query_selector("meta[name=\"theme-color\"]").map_err(to_err)? {
            Some(meta) => meta,
            None => {
                let meta = doc.create_element("meta").map_err(to_err)?;
                meta.set_attribute("name", "theme-color").map_err(to_err)?;
                let head = doc.head().ok_or(ThemeError::DocumentUnavailable)?;
                head.append_child(&meta).map_err(to_err)?;
                meta
            }
        };
        meta.set_attribute("content", color).map_err(to_err)
    }

    fn dispatch_theme_change(&self, theme: Theme) -> Result<(), ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::DocumentUnavailable)?;
        let to_err = |e: JsValue| ThemeError::Document(js_reason(e));

        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &JsValue::from_str("theme"), &JsValue::from_str(theme.as_str()))
            .map_err(to_err)?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init).map_err(to_err)?;
        window.dispatch_event(&event).map(|_| ()).map_err(to_err)
    }
}

fn prefers_dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(PREFERS_DARK).ok().flatten()
}

/// Current OS colour scheme, light when it cannot be queried
pub fn system_theme() -> Theme {
    Theme::from_prefers_dark(prefers_dark_query().is_some_and(|mql| mql.matches()))
}

/// `prefers-color-scheme` change listener; detached when dropped
pub struct SystemThemeListener {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SystemThemeListener {
    pub fn attach(on_change: impl Fn(Theme) + 'static) -> Result<Self, ThemeError> {
        let query = prefers_dark_query().ok_or(ThemeError::DocumentUnavailable)?;
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
            on_change(Theme::from_prefers_dark(ev.matches()));
        });
        query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Document(js_reason(e)))?;
        Ok(Self { query, callback })
    }
}

impl Drop for SystemThemeListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
        tracing::debug!("System theme listener detached");
    }
}
