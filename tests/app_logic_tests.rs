// tests/app_logic_tests.rs - Site-level logic used by the pages
//
// Since the pages are Leptos components (view macros), we focus on testing:
// - Navigation and footer links resolve to routed pages
// - Head metadata and JSON-LD built for each page
// - Price and rating formatting used by the product cards
// - Site settings

use aclon_site::data::content::{footer_groups, hero, navigation, COMPANY};
use aclon_site::web_app::catalog::{category_by_slug, product_by_id, subcategory_by_slug};
use aclon_site::web_app::config::SiteSettings;
use aclon_site::web_app::display::{format_usd, star_counts, truncate_chars};
use aclon_site::web_app::model::{HeroAlignment, HeroPage};
use aclon_site::web_app::seo::*;
use rust_decimal::Decimal;

const STATIC_ROUTES: [&str; 6] = ["/", "/about", "/contact", "/manufacturing", "/quote", "/products"];

/// Whether a link lands on a page the router knows
fn is_routed(href: &str) -> bool {
    if STATIC_ROUTES.contains(&href) {
        return true;
    }
    let Some(rest) = href.strip_prefix("/products/") else {
        return false;
    };
    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(category), None, None) => category_by_slug(category).is_some(),
        (Some(category), Some(sub), None) => category_by_slug(category)
            .and_then(|c| subcategory_by_slug(c, sub))
            .is_some(),
        _ => false,
    }
}

// ===== Navigation =====

#[test]
fn test_navigation_links_are_routed() {
    for item in navigation() {
        assert!(is_routed(&item.href), "{}", item.href);
        for child in item.children {
            assert!(is_routed(&child.href), "{}", child.href);
        }
    }
}

#[test]
fn test_footer_links_are_routed() {
    let groups = footer_groups();
    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Company", "Products", "Support"]);

    for group in &groups {
        for link in &group.links {
            assert!(is_routed(&link.href), "{} -> {}", link.name, link.href);
        }
    }
}

#[test]
fn test_hero_ctas() {
    let home = hero(HeroPage::Home);
    assert_eq!(home.headline, "Redefining Performance Wear");
    assert_eq!(home.primary_cta.href, "#products");
    assert_eq!(home.secondary_cta.map(|c| c.href).as_deref(), Some("/quote"));
    assert_eq!(home.alignment, HeroAlignment::Center);
}

// ===== SEO =====

#[test]
fn test_page_meta_title_and_robots() {
    let mut meta = PageMeta::new("About Us", "Our story", "/about");
    assert_eq!(meta.full_title(), "About Us | Aclon Sports");
    assert_eq!(meta.robots(), "index, follow");

    meta.noindex = true;
    assert_eq!(meta.robots(), "noindex,follow");
}

#[test]
fn test_page_meta_defaults() {
    let meta = PageMeta::default();
    assert_eq!(meta.full_title(), DEFAULT_TITLE);
    assert_eq!(meta.description(), DEFAULT_DESCRIPTION);
}

#[test]
fn test_canonical_and_image_urls() {
    let settings = SiteSettings::default();
    let meta = PageMeta::new("Quote", "Get a quote", "/quote");

    assert_eq!(meta.canonical_url(&settings), "https://aclon-sports.com/quote");
    assert!(meta.og_image_url(&settings).starts_with("https://aclon-sports.com/"));
}

#[test]
fn test_default_json_ld_is_web_page() {
    let settings = SiteSettings::default();
    let value = PageMeta::new("Contact Us", "Reach us", "/contact").json_ld(&settings);

    assert_eq!(value["@type"], "WebPage");
    assert_eq!(value["name"], "Contact Us | Aclon Sports");
    assert_eq!(value["url"], "https://aclon-sports.com/contact");
}

#[test]
fn test_product_json_ld_offer() {
    let settings = SiteSettings::default();
    let leggings = product_by_id(1).expect("seed product 1");
    let value = product_json_ld(&leggings, &settings);

    assert_eq!(value["@type"], "Product");
    assert_eq!(value["name"], "Premium Yoga Leggings");
    assert_eq!(value["offers"]["price"], "89.99");
    assert_eq!(value["offers"]["priceCurrency"], "USD");
}

#[test]
fn test_organization_json_ld_uses_company_details() {
    let value = organization_json_ld(&SiteSettings::default());
    assert_eq!(value["@type"], "Organization");
    assert_eq!(value["name"], COMPANY.name);
}

// ===== Display formatting =====

#[test]
fn test_format_usd() {
    assert_eq!(format_usd(Decimal::new(8999, 2)), "$89.99");
    assert_eq!(format_usd(Decimal::new(123456, 2)), "$1,234.56");
    assert_eq!(format_usd(Decimal::new(5, 0)), "$5.00");
}

#[test]
fn test_star_counts() {
    let cases: [(f64, (usize, bool, usize)); 5] = [
        (0.0, (0, false, 5)),
        (4.8, (4, true, 0)),
        (4.2, (4, true, 0)),
        (3.0, (3, false, 2)),
        (5.0, (5, false, 0)),
    ];
    for (rating, expected) in cases {
        assert_eq!(star_counts(rating), expected, "rating {rating}");
    }
}

#[test]
fn test_truncate_chars() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("abcdefghij", 4), "abcd...");
}
