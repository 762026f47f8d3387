// web_app/seo.rs - Page metadata and JSON-LD
//
// `PageMeta` collects what a page declares about itself; the `Seo`
// component renders it through leptos_meta. Structured data is plain
// `serde_json` values so it can be checked without rendering.

use serde_json::{json, Value};

use crate::web_app::config::SiteSettings;
use crate::web_app::model::Product;

pub const DEFAULT_TITLE: &str = "Aclon Sports - Premium Sportswear Collection";
pub const DEFAULT_DESCRIPTION: &str = "Discover high-performance sportswear designed for athletes. Premium quality, innovative design, and unmatched comfort for your active lifestyle.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
    Product,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::Product => "product",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Site path of the page, e.g. `/products/activewear`
    pub path: String,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub og_type: OgType,
    pub noindex: bool,
    pub nofollow: bool,
    pub structured_data: Option<Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    pub fn with_og_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    /// `"<title> | Aclon Sports"`, or the site default
    pub fn full_title(&self) -> String {
        match &self.title {
            Some(title) => format!("{title} | Aclon Sports"),
            None => DEFAULT_TITLE.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn robots(&self) -> String {
        if self.noindex || self.nofollow {
            format!(
                "{},{}",
                if self.noindex { "noindex" } else { "index" },
                if self.nofollow { "nofollow" } else { "follow" }
            )
        } else {
            "index, follow".to_string()
        }
    }

    pub fn canonical_url(&self, settings: &SiteSettings) -> String {
        settings.absolute_url(&self.path)
    }

    pub fn og_image_url(&self, settings: &SiteSettings) -> String {
        settings.absolute_url(self.og_image.as_deref().unwrap_or(&settings.og_image))
    }

    /// Page-specific structured data, or a `WebPage` record
    pub fn json_ld(&self, settings: &SiteSettings) -> Value {
        self.structured_data
            .clone()
            .unwrap_or_else(|| web_page_json_ld(&self.full_title(), self.description(), &self.canonical_url(settings), settings))
    }
}

pub fn web_page_json_ld(name: &str, description: &str, url: &str, settings: &SiteSettings) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": url,
        "isPartOf": {
            "@type": "WebSite",
            "name": settings.site_name,
            "url": settings.site_url,
        },
    })
}

pub fn organization_json_ld(settings: &SiteSettings) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": settings.site_name,
        "url": settings.site_url,
        "logo": settings.absolute_url("/images/logo.png"),
        "description": settings.site_description,
        "contactPoint": {
            "@type": "ContactPoint",
            "email": settings.contact_email,
            "contactType": "customer service",
        },
    })
}

pub fn product_json_ld(product: &Product, settings: &SiteSettings) -> Value {
    let availability = if product.in_stock {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/OutOfStock"
    };
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": settings.absolute_url(&product.image),
        "category": product.category.name(),
        "brand": { "@type": "Brand", "name": settings.site_name },
        "offers": {
            "@type": "Offer",
            "price": product.price.to_string(),
            "priceCurrency": "USD",
            "availability": availability,
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": product.rating,
            "reviewCount": product.reviews,
        },
    })
}

/// `ItemList` of products, used on category pages
pub fn product_list_json_ld(name: &str, products: &[Product], settings: &SiteSettings) -> Value {
    let items: Vec<Value> = products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": product_json_ld(product, settings),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": name,
        "numberOfItems": products.len(),
        "itemListElement": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::catalog::product_by_id;

    #[test]
    fn test_full_title() {
        let meta = PageMeta::new("About Us", "x", "/about");
        assert_eq!(meta.full_title(), "About Us | Aclon Sports");
        assert_eq!(PageMeta::default().full_title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_robots() {
        let mut meta = PageMeta::default();
        assert_eq!(meta.robots(), "index, follow");
        meta.noindex = true;
        assert_eq!(meta.robots(), "noindex,follow");
    }

    #[test]
    fn test_default_json_ld_is_web_page() {
        let settings = SiteSettings::default();
        let meta = PageMeta::new("Contact", "Reach us", "/contact");
        let ld = meta.json_ld(&settings);
        assert_eq!(ld["@type"], "WebPage");
        assert_eq!(ld["url"], "https://aclon-sports.com/contact");
    }

    #[test]
    fn test_product_json_ld() {
        let settings = SiteSettings::default();
        let product = product_by_id(1).unwrap();
        let ld = product_json_ld(&product, &settings);
        assert_eq!(ld["@type"], "Product");
        assert_eq!(ld["offers"]["price"], "89.99");
        assert_eq!(ld["offers"]["priceCurrency"], "USD");
    }
}
