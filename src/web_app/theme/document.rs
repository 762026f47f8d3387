// web_app/theme/document.rs - Visual side effects of a theme change

use super::{Theme, ThemeError};

/// Everything a theme change does outside the store
///
/// Implementations apply each effect independently; the store logs a
/// failure and continues with the next effect.
pub trait ThemeDocument: Send + Sync {
    /// Replace the `light`/`dark` class on the root element
    fn set_root_class(&self, theme: Theme) -> Result<(), ThemeError>;

    fn set_properties(&self, properties: &[(&str, &str)]) -> Result<(), ThemeError>;

    /// Create or update `<meta name="theme-color">`
    fn set_meta_theme_color(&self, color: &str) -> Result<(), ThemeError>;

    /// Fire the page-wide `themeChange` event
    fn dispatch_theme_change(&self, theme: Theme) -> Result<(), ThemeError>;
}

/// Document used where there is no DOM (server rendering, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDocument;

impl ThemeDocument for NoopDocument {
    fn set_root_class(&self, _theme: Theme) -> Result<(), ThemeError> {
        Ok(())
    }

    fn set_properties(&self, _properties: &[(&str, &str)]) -> Result<(), ThemeError> {
        Ok(())
    }

    fn set_meta_theme_color(&self, _color: &str) -> Result<(), ThemeError> {
        Ok(())
    }

    fn dispatch_theme_change(&self, _theme: Theme) -> Result<(), ThemeError> {
        Ok(())
    }
}
