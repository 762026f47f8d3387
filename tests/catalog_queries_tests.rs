// catalog_queries_tests.rs - Integration tests for the catalog queries
//
// Runs against the compiled-in product and manufacturing tables, so no
// features are needed.

use aclon_site::web_app::catalog::*;
use aclon_site::web_app::model::{
    CatalogFilter, CategorySelection, ManufacturingCategory, ProductCategory,
};

fn all_products() -> Vec<aclon_site::web_app::model::Product> {
    filter_products(&CatalogFilter::default())
}

// ===== Lookups =====

#[test]
fn test_product_by_id_finds_every_product() {
    let products = all_products();
    assert_eq!(products.len(), 15);

    for product in &products {
        assert_eq!(product_by_id(product.id).as_ref(), Some(product));
    }
    assert!(product_by_id(9999).is_none());
}

#[test]
fn test_products_by_category_keeps_table_order() {
    for category in ProductCategory::ALL {
        let expected: Vec<u32> = all_products()
            .into_iter()
            .filter(|p| p.category == category)
            .map(|p| p.id)
            .collect();
        let upper: Vec<u32> = products_by_category(&category.name().to_uppercase())
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(upper, expected, "category {}", category);
        assert_eq!(expected.len(), 5);
    }
}

#[test]
fn test_products_by_subcategory() {
    let leggings = products_by_subcategory("yoga leggings");
    assert_eq!(leggings.len(), 1);
    assert_eq!(leggings[0].name, "Premium Yoga Leggings");

    assert!(products_by_subcategory("Snowboards").is_empty());
}

// ===== Combined filter =====

#[test]
fn test_filter_category_and_query() {
    let filter = CatalogFilter::new(CategorySelection::Only(ProductCategory::Activewear), "yoga");
    let names: Vec<String> = filter_products(&filter).into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Premium Yoga Leggings"]);
}

#[test]
fn test_filter_query_searches_all_categories() {
    let filter = CatalogFilter::new(CategorySelection::All, "JERSEY");
    let results = filter_products(&filter);

    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|p| p.category == ProductCategory::SportsUniforms));
}

#[test]
fn test_blank_query_matches_everything_in_category() {
    let filter = CatalogFilter::new(CategorySelection::Only(ProductCategory::GymWear), "   ");
    assert_eq!(filter_products(&filter).len(), 5);
}

#[test]
fn test_query_is_matched_untrimmed() {
    // Only blankness is judged on the trimmed query
    let filter = CatalogFilter::new(CategorySelection::All, "yoga\t");
    assert!(filter_products(&filter).is_empty());
}

#[test]
fn test_featured_products_are_first_eight() {
    let featured: Vec<u32> = featured_products().into_iter().map(|p| p.id).collect();
    let first: Vec<u32> = all_products().into_iter().take(8).map(|p| p.id).collect();
    assert_eq!(featured, first);
}

// ===== Categories and slugs =====

#[test]
fn test_category_summaries_count_five_each() {
    let summaries = category_summaries();
    assert_eq!(summaries.len(), 3);
    for summary in summaries {
        assert_eq!(summary.count, 5, "{}", summary.name);
        assert_eq!(summary.subcategories.len(), 5);
    }
}

#[test]
fn test_subcategory_slugs_round_trip() {
    for category in ProductCategory::ALL {
        assert_eq!(category_by_slug(category.slug()), Some(category));

        for sub in subcategories_by_category(category.name()) {
            let slug = slugify(&sub);
            assert_eq!(subcategory_by_slug(category, &slug), Some(sub.clone()));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
        }
    }
}

#[test]
fn test_product_card_links_resolve_to_their_page() {
    assert_eq!(
        subcategory_href(ProductCategory::GymWear, "Performance T-Shirts"),
        "/products/gym-wear/performance-t-shirts"
    );

    for product in all_products() {
        let href = subcategory_href(product.category, &product.subcategory);
        let segments: Vec<&str> = href.trim_start_matches("/products/").split('/').collect();
        let [category_slug, sub_slug] = segments.as_slice() else {
            panic!("unexpected link {href}");
        };

        let category = category_by_slug(category_slug).expect("category slug resolves");
        assert_eq!(category, product.category);
        assert_eq!(subcategory_by_slug(category, sub_slug).as_deref(), Some(product.subcategory.as_str()));
        assert!(href.starts_with(&category_href(category)));
    }
}

#[test]
fn test_unknown_slugs() {
    assert!(category_by_slug("footwear").is_none());
    assert!(subcategory_by_slug(ProductCategory::GymWear, "yoga-leggings").is_none());
}

// ===== Manufacturing =====

#[test]
fn test_manufacturing_tabs_are_never_empty() {
    assert_eq!(filter_manufacturing(CategorySelection::All).len(), 9);

    for category in ManufacturingCategory::ALL {
        let items = filter_manufacturing(CategorySelection::Only(category));
        assert_eq!(items.len(), 3, "{category}");
        assert!(items.iter().all(|item| item.category == category));
    }
}

#[test]
fn test_manufacturing_summaries_match_tabs() {
    for summary in manufacturing_summaries() {
        let items = filter_manufacturing(CategorySelection::Only(summary.category));
        assert_eq!(summary.count, items.len());
    }
}

#[test]
fn test_manufacturing_item_lookup() {
    let first = filter_manufacturing(CategorySelection::All).remove(0);
    assert_eq!(manufacturing_item_by_id(first.id), Some(first.clone()));
    assert_eq!(
        manufacturing_items_by_category(&first.category.name().to_lowercase()).len(),
        3
    );
}
