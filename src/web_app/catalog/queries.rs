// web_app/catalog/queries.rs - Product and manufacturing queries
//
// Lookups by category, subcategory and id, the combined category + text
// filter used by the product browser, and the derived category aggregates.
// Unknown inputs are never errors; they produce an empty result or `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::tables::{products::SUBCATEGORIES, ManufacturingTable, ProductsTable};
use crate::data::SeedTable;
use crate::web_app::model::*;

/// Number of products shown in the home page showcase
pub const FEATURED_COUNT: usize = 8;

fn products() -> &'static [Product] {
    ProductsTable::rows()
}

fn manufacturing() -> &'static [ManufacturingItem] {
    ManufacturingTable::rows()
}

/// Products whose category display name equals `name`, ignoring case
pub fn products_by_category(name: &str) -> Vec<Product> {
    let wanted = name.to_lowercase();
    let matches: Vec<Product> = products()
        .iter()
        .filter(|p| p.category.name().to_lowercase() == wanted)
        .cloned()
        .collect();
    tracing::debug!(category = name, count = matches.len(), "products_by_category");
    matches
}

/// Products whose subcategory equals `name`, ignoring case
pub fn products_by_subcategory(name: &str) -> Vec<Product> {
    let wanted = name.to_lowercase();
    let matches: Vec<Product> = products()
        .iter()
        .filter(|p| p.subcategory.to_lowercase() == wanted)
        .cloned()
        .collect();
    tracing::debug!(subcategory = name, count = matches.len(), "products_by_subcategory");
    matches
}

pub fn product_by_id(id: u32) -> Option<Product> {
    products().iter().find(|p| p.id == id).cloned()
}

/// First products of the catalog, in table order
pub fn featured_products() -> Vec<Product> {
    products().iter().take(FEATURED_COUNT).cloned().collect()
}

/// Combined category gate and free-text filter
///
/// The category selection is applied first as a strict equality gate. A
/// query that is blank after trimming matches everything; otherwise the
/// lowercased query (as typed, not trimmed) must be a substring of the
/// name, description, short description, category name or subcategory.
pub fn filter_products(filter: &CatalogFilter) -> Vec<Product> {
    let query = filter.query.to_lowercase();
    let has_query = !filter.query.trim().is_empty();

    let results: Vec<Product> = products()
        .iter()
        .filter(|p| filter.category.admits(p.category))
        .filter(|p| !has_query || matches_query(p, &query))
        .cloned()
        .collect();

    tracing::debug!(
        category = ?filter.category,
        query = %filter.query,
        count = results.len(),
        "filter_products"
    );
    results
}

fn matches_query(product: &Product, query: &str) -> bool {
    [
        product.name.as_str(),
        product.description.as_str(),
        product.short_description.as_str(),
        product.category.name(),
        product.subcategory.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Ordered subcategory names of a category, empty when the name is unknown
pub fn subcategories_by_category(name: &str) -> Vec<String> {
    let wanted = name.to_lowercase();
    SUBCATEGORIES
        .iter()
        .find(|(category, _)| category.name().to_lowercase() == wanted)
        .map(|(_, subs)| subs.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

pub fn category_summaries() -> Vec<CategorySummary> {
    ProductCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            id: category.slug().to_string(),
            name: category.name().to_string(),
            category,
            count: products().iter().filter(|p| p.category == category).count(),
            description: category.description().to_string(),
            subcategories: subcategories_by_category(category.name()),
        })
        .collect()
}

/// URL segment for a display name: lowercase, non-alphanumeric runs become `-`
pub fn slugify(name: &str) -> String {
    static NON_ALNUM: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug separator regex is valid"));
    NON_ALNUM
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// `/products/<category-slug>`
pub fn category_href(category: ProductCategory) -> String {
    format!("/products/{}", category.slug())
}

/// `/products/<category-slug>/<subcategory-slug>`
pub fn subcategory_href(category: ProductCategory, subcategory: &str) -> String {
    format!("/products/{}/{}", category.slug(), slugify(subcategory))
}

pub fn category_by_slug(slug: &str) -> Option<ProductCategory> {
    ProductCategory::ALL
        .into_iter()
        .find(|category| category.slug().eq_ignore_ascii_case(slug))
}

/// Resolve a subcategory route segment to its display name
pub fn subcategory_by_slug(category: ProductCategory, slug: &str) -> Option<String> {
    let wanted = slug.to_lowercase();
    subcategories_by_category(category.name())
        .into_iter()
        .find(|name| slugify(name) == wanted)
}

/// Manufacturing items whose category display name equals `name`, ignoring case
pub fn manufacturing_items_by_category(name: &str) -> Vec<ManufacturingItem> {
    let wanted = name.to_lowercase();
    manufacturing()
        .iter()
        .filter(|item| item.category.name().to_lowercase() == wanted)
        .cloned()
        .collect()
}

pub fn manufacturing_item_by_id(id: u32) -> Option<ManufacturingItem> {
    manufacturing().iter().find(|item| item.id == id).cloned()
}

/// Items shown under a manufacturing tab
pub fn filter_manufacturing(
    selection: CategorySelection<ManufacturingCategory>,
) -> Vec<ManufacturingItem> {
    let items: Vec<ManufacturingItem> = manufacturing()
        .iter()
        .filter(|item| selection.admits(item.category))
        .cloned()
        .collect();
    tracing::debug!(selection = ?selection, count = items.len(), "filter_manufacturing");
    items
}

pub fn manufacturing_summaries() -> Vec<ManufacturingCategorySummary> {
    ManufacturingCategory::ALL
        .into_iter()
        .map(|category| ManufacturingCategorySummary {
            id: category.slug().to_string(),
            name: category.tab_label().to_string(),
            category,
            count: manufacturing().iter().filter(|i| i.category == category).count(),
            description: category.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        assert_eq!(products_by_category("ACTIVEWEAR").len(), 5);
        assert_eq!(products_by_category("gym wear").len(), 5);
        assert!(products_by_category("Footwear").is_empty());
    }

    #[test]
    fn test_subcategory_lookup() {
        let jerseys = products_by_subcategory("basketball jerseys");
        assert_eq!(names(&jerseys), ["Pro Basketball Jersey"]);
        assert!(products_by_subcategory("Swimwear").is_empty());
    }

    #[test]
    fn test_product_by_id() {
        assert_eq!(product_by_id(1).map(|p| p.name), Some("Premium Yoga Leggings".to_string()));
        assert!(product_by_id(0).is_none());
        assert!(product_by_id(16).is_none());
    }

    #[test]
    fn test_filter_category_and_query() {
        let filter = CatalogFilter::new(CategorySelection::Only(ProductCategory::Activewear), "yoga");
        assert_eq!(names(&filter_products(&filter)), ["Premium Yoga Leggings"]);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        assert_eq!(filter_products(&CatalogFilter::new(CategorySelection::All, "   ")).len(), 15);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let padded = CatalogFilter::new(CategorySelection::All, "yoga\t");
        assert!(filter_products(&padded).is_empty());
        let plain = CatalogFilter::new(CategorySelection::All, "yoga");
        assert_eq!(filter_products(&plain).len(), 1);
    }

    #[test]
    fn test_query_matches_category_name() {
        let filter = CatalogFilter::new(CategorySelection::All, "sports uniforms");
        assert_eq!(filter_products(&filter).len(), 5);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sports Uniforms"), "sports-uniforms");
        assert_eq!(slugify("Performance T-Shirts"), "performance-t-shirts");
        assert_eq!(slugify("  Gym Wear  "), "gym-wear");
    }

    #[test]
    fn test_subcategory_by_slug() {
        assert_eq!(
            subcategory_by_slug(ProductCategory::SportsUniforms, "american-football-uniforms"),
            Some("American Football Uniforms".to_string())
        );
        assert_eq!(subcategory_by_slug(ProductCategory::GymWear, "yoga-leggings"), None);
    }

    #[test]
    fn test_manufacturing_tabs_never_empty() {
        for category in ManufacturingCategory::ALL {
            assert_eq!(filter_manufacturing(CategorySelection::Only(category)).len(), 3);
        }
        assert_eq!(filter_manufacturing(CategorySelection::All).len(), 9);
    }

    #[test]
    fn test_featured_products() {
        let featured = featured_products();
        assert_eq!(featured.len(), FEATURED_COUNT);
        assert_eq!(featured[0].id, 1);
    }
}
