// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application. Catalog records are
// built once from the seed tables in `crate::data` and never mutated.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Product category (closed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Activewear,
    SportsUniforms,
    GymWear,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Activewear,
        ProductCategory::SportsUniforms,
        ProductCategory::GymWear,
    ];

    /// Display name, as shown in the UI and matched by the catalog queries
    pub fn name(self) -> &'static str {
        match self {
            ProductCategory::Activewear => "Activewear",
            ProductCategory::SportsUniforms => "Sports Uniforms",
            ProductCategory::GymWear => "Gym Wear",
        }
    }

    /// URL segment under `/products/`
    pub fn slug(self) -> &'static str {
        match self {
            ProductCategory::Activewear => "activewear",
            ProductCategory::SportsUniforms => "sports-uniforms",
            ProductCategory::GymWear => "gym-wear",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProductCategory::Activewear => {
                "High-performance activewear for running, training, and sports activities"
            }
            ProductCategory::SportsUniforms => {
                "Professional team uniforms for basketball, soccer, baseball, and volleyball"
            }
            ProductCategory::GymWear => "Comfortable gym wear for workouts and training sessions",
        }
    }

    /// Case-insensitive lookup by display name or slug
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|category| {
            category.name().eq_ignore_ascii_case(value) || category.slug().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Manufacturing showcase category (closed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManufacturingCategory {
    Fabric,
    Machinery,
    SampleProduct,
}

impl ManufacturingCategory {
    pub const ALL: [ManufacturingCategory; 3] = [
        ManufacturingCategory::Fabric,
        ManufacturingCategory::Machinery,
        ManufacturingCategory::SampleProduct,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ManufacturingCategory::Fabric => "Fabric",
            ManufacturingCategory::Machinery => "Machinery",
            ManufacturingCategory::SampleProduct => "Sample Product",
        }
    }

    /// Plural label used on the showcase tabs
    pub fn tab_label(self) -> &'static str {
        match self {
            ManufacturingCategory::Fabric => "Fabrics",
            ManufacturingCategory::Machinery => "Machinery",
            ManufacturingCategory::SampleProduct => "Sample Products",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ManufacturingCategory::Fabric => "fabric",
            ManufacturingCategory::Machinery => "machinery",
            ManufacturingCategory::SampleProduct => "sample-product",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ManufacturingCategory::Fabric => "Premium fabrics for high-performance sportswear",
            ManufacturingCategory::Machinery => "State-of-the-art manufacturing equipment",
            ManufacturingCategory::SampleProduct => "Finished products showcasing our capabilities",
        }
    }
}

impl std::fmt::Display for ManufacturingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Product from the static catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: ProductCategory,
    pub subcategory: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub image: String,
    pub description: String,
    pub short_description: String,
    pub features: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub rating: f64,
    pub reviews: u32,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

impl Product {
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Whole-percent discount against the original price, if any
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original.is_zero() {
            return None;
        }
        let pct = (original - self.price) / original * Decimal::ONE_HUNDRED;
        pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}

/// Manufacturing record (fabric, machine or sample)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ManufacturingCategory,
    #[serde(default)]
    pub features: Vec<String>,
    /// Ordered key/value specification table
    #[serde(default)]
    pub specifications: Vec<(String, String)>,
    pub alt_text: String,
}

/// Aggregate view of one product category, derived from the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub count: usize,
    pub description: String,
    pub subcategories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingCategorySummary {
    pub id: String,
    pub name: String,
    pub category: ManufacturingCategory,
    pub count: usize,
    pub description: String,
}

/// Category gate of the catalog filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection<C> {
    All,
    Only(C),
}

impl<C> Default for CategorySelection<C> {
    fn default() -> Self {
        CategorySelection::All
    }
}

impl<C: Copy + PartialEq> CategorySelection<C> {
    pub fn admits(&self, category: C) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

/// Filters applied by the product browser
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: CategorySelection<ProductCategory>,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(category: CategorySelection<ProductCategory>, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }
}

/// Navigation entry (header menu and footer groups)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub name: String,
    pub href: String,
    pub description: Option<String>,
    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<NavigationItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroAlignment {
    Left,
    #[default]
    Center,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroBackground {
    pub src: String,
    pub alt: String,
}

/// Hero banner copy for one page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: Option<CallToAction>,
    pub background: Option<HeroBackground>,
    pub alignment: HeroAlignment,
}

/// Pages that carry a hero banner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroPage {
    Home,
    Products,
    Manufacturing,
    Contact,
    About,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal, original: Option<Decimal>) -> Product {
        Product {
            id: 1,
            name: "Test Leggings".to_string(),
            category: ProductCategory::Activewear,
            subcategory: "Yoga Leggings".to_string(),
            price,
            original_price: original,
            image: String::new(),
            description: "desc".to_string(),
            short_description: "short".to_string(),
            features: vec![],
            sizes: vec!["M".to_string()],
            colors: vec!["Black".to_string()],
            in_stock: true,
            rating: 4.5,
            reviews: 10,
            cta_text: None,
            cta_link: None,
        }
    }

    #[test]
    fn test_product_category_parse() {
        assert_eq!(ProductCategory::parse("activewear"), Some(ProductCategory::Activewear));
        assert_eq!(ProductCategory::parse("SPORTS UNIFORMS"), Some(ProductCategory::SportsUniforms));
        assert_eq!(ProductCategory::parse("gym-wear"), Some(ProductCategory::GymWear));
        assert_eq!(ProductCategory::parse("footwear"), None);
    }

    #[test]
    fn test_product_category_display() {
        assert_eq!(ProductCategory::SportsUniforms.to_string(), "Sports Uniforms");
        assert_eq!(ManufacturingCategory::SampleProduct.to_string(), "Sample Product");
        assert_eq!(ManufacturingCategory::SampleProduct.tab_label(), "Sample Products");
    }

    #[test]
    fn test_discount_percent() {
        let on_sale = product(Decimal::new(8999, 2), Some(Decimal::new(11999, 2)));
        assert!(on_sale.is_on_sale());
        assert_eq!(on_sale.discount_percent(), Some(25));

        let full_price = product(Decimal::new(6499, 2), None);
        assert!(!full_price.is_on_sale());
        assert_eq!(full_price.discount_percent(), None);
    }

    #[test]
    fn test_discount_percent_rounds_half_up() {
        // 12.5% off
        let tie = product(Decimal::new(8750, 2), Some(Decimal::new(10000, 2)));
        assert_eq!(tie.discount_percent(), Some(13));

        // 2.5% off
        let small = product(Decimal::new(19500, 2), Some(Decimal::new(20000, 2)));
        assert_eq!(small.discount_percent(), Some(3));
    }

    #[test]
    fn test_category_selection_admits() {
        let all = CategorySelection::<ProductCategory>::All;
        assert!(all.admits(ProductCategory::GymWear));

        let only = CategorySelection::Only(ProductCategory::Activewear);
        assert!(only.admits(ProductCategory::Activewear));
        assert!(!only.admits(ProductCategory::GymWear));
    }

    #[test]
    fn test_catalog_filter_default() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.category, CategorySelection::All);
        assert!(filter.query.is_empty());
    }
}
