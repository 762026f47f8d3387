// web_app/config.rs - Site-wide settings
//
// Compiled-in defaults, overridable at build time so the server binary and
// the WASM bundle always agree on the same values during hydration:
//
//   ACLON_SITE_URL       canonical site origin used in meta tags and JSON-LD
//   ACLON_CONTACT_EMAIL  recipient of contact form drafts
//   ACLON_QUOTE_EMAIL    recipient of quote request drafts

use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_URL: &str = "https://aclon-sports.com";
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@aclonsports.com";
pub const DEFAULT_QUOTE_EMAIL: &str = "quotes@aclonsports.com";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub site_url: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub contact_email: String,
    pub quote_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Aclon Sports".to_string(),
            site_description: "Premium sportswear designed for athletes who demand excellence"
                .to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            og_image: "/images/og-image.jpg".to_string(),
            twitter_handle: "@aclonsports".to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            quote_email: DEFAULT_QUOTE_EMAIL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Defaults with any build-time overrides applied
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&'static str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            site_url: pick(option_env!("ACLON_SITE_URL"), defaults.site_url.clone())
                .trim_end_matches('/')
                .to_string(),
            contact_email: pick(option_env!("ACLON_CONTACT_EMAIL"), defaults.contact_email.clone()),
            quote_email: pick(option_env!("ACLON_QUOTE_EMAIL"), defaults.quote_email.clone()),
            ..defaults
        }
    }

    /// Absolute URL for a site path
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.site_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
