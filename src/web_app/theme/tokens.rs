// web_app/theme/tokens.rs - CSS custom properties per theme
//
// Fixed lookup table; nothing is computed from the theme.

use super::Theme;

pub type Palette = [(&'static str, &'static str); 14];

const LIGHT: Palette = [
    ("--bg-primary", "#FFFFFF"),
    ("--bg-secondary", "#F8F8F8"),
    ("--bg-tertiary", "#F5F5F5"),
    ("--text-primary", "#111111"),
    ("--text-secondary", "#666666"),
    ("--text-muted", "#999999"),
    ("--accent-primary", "#FF0000"),
    ("--accent-secondary", "#CC0000"),
    ("--accent-hover", "#E60000"),
    ("--border-color", "#E5E5E5"),
    ("--border-light", "#F0F0F0"),
    ("--shadow-light", "0 1px 3px rgba(0, 0, 0, 0.1)"),
    ("--shadow-medium", "0 4px 6px rgba(0, 0, 0, 0.1)"),
    ("--shadow-heavy", "0 10px 25px rgba(0, 0, 0, 0.15)"),
];

const DARK: Palette = [
    ("--bg-primary", "#000000"),
    ("--bg-secondary", "#111111"),
    ("--bg-tertiary", "#1A1A1A"),
    ("--text-primary", "#F5F5F5"),
    ("--text-secondary", "#CCCCCC"),
    ("--text-muted", "#999999"),
    ("--accent-primary", "#FF0000"),
    ("--accent-secondary", "#CC0000"),
    ("--accent-hover", "#E60000"),
    ("--border-color", "#333333"),
    ("--border-light", "#222222"),
    ("--shadow-light", "0 1px 3px rgba(0, 0, 0, 0.3)"),
    ("--shadow-medium", "0 4px 6px rgba(0, 0, 0, 0.3)"),
    ("--shadow-heavy", "0 10px 25px rgba(0, 0, 0, 0.5)"),
];

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_share_property_names() {
        let light: Vec<&str> = palette(Theme::Light).iter().map(|(k, _)| *k).collect();
        let dark: Vec<&str> = palette(Theme::Dark).iter().map(|(k, _)| *k).collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_dark_background() {
        assert_eq!(palette(Theme::Dark)[0], ("--bg-primary", "#000000"));
    }
}
