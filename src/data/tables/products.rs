// data/tables/products.rs
//
// The product catalog: five products in each of the three categories.
// Seeds are plain `&'static` records so the table can live in a const;
// `ProductsTable::rows()` turns them into owned `Product` values once.

use std::sync::OnceLock;

use rust_decimal::Decimal;

use crate::data::SeedTable;
use crate::web_app::model::{Product, ProductCategory};

struct ProductSeed {
    id: u32,
    name: &'static str,
    category: ProductCategory,
    subcategory: &'static str,
    /// Price in cents
    price: i64,
    original_price: Option<i64>,
    image: &'static str,
    description: &'static str,
    short_description: &'static str,
    features: &'static [&'static str],
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    rating: f64,
    reviews: u32,
    cta_text: &'static str,
}

impl ProductSeed {
    fn to_product(&self) -> Product {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Product {
            id: self.id,
            name: self.name.to_string(),
            category: self.category,
            subcategory: self.subcategory.to_string(),
            price: Decimal::new(self.price, 2),
            original_price: self.original_price.map(|cents| Decimal::new(cents, 2)),
            image: self.image.to_string(),
            description: self.description.to_string(),
            short_description: self.short_description.to_string(),
            features: owned(self.features),
            sizes: owned(self.sizes),
            colors: owned(self.colors),
            in_stock: true,
            rating: self.rating,
            reviews: self.reviews,
            cta_text: Some(self.cta_text.to_string()),
            cta_link: Some(format!("#product-{}", self.id)),
        }
    }
}

const SEEDS: &[ProductSeed] = &[
    // Activewear
    ProductSeed {
        id: 1,
        name: "Premium Yoga Leggings",
        category: ProductCategory::Activewear,
        subcategory: "Yoga Leggings",
        price: 8999,
        original_price: Some(11999),
        image: "/images/products/activewear/yoga-leggings.jpg",
        description: "High-waisted yoga leggings with four-way stretch and moisture-wicking technology for ultimate comfort during practice.",
        short_description: "High-waisted with four-way stretch and moisture-wicking",
        features: &[
            "High-waisted design",
            "Four-way stretch fabric",
            "Moisture-wicking technology",
            "Squat-proof material",
            "Pocket design",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "Navy", "Gray", "Purple"],
        rating: 4.8,
        reviews: 1247,
        cta_text: "View Details",
    },
    ProductSeed {
        id: 2,
        name: "High-Impact Sports Bra",
        category: ProductCategory::Activewear,
        subcategory: "Sports Bras",
        price: 6499,
        original_price: None,
        image: "/images/products/activewear/sports-bra.jpg",
        description: "High-impact sports bra with adjustable straps and removable padding for maximum support during intense workouts.",
        short_description: "High-impact support with adjustable straps",
        features: &[
            "High-impact support",
            "Adjustable straps",
            "Removable padding",
            "Moisture-wicking",
            "Racerback design",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "White", "Pink", "Purple"],
        rating: 4.6,
        reviews: 892,
        cta_text: "Order Now",
    },
    ProductSeed {
        id: 3,
        name: "Performance Running Shorts",
        category: ProductCategory::Activewear,
        subcategory: "Running Shorts",
        price: 5499,
        original_price: Some(6999),
        image: "/images/products/activewear/running-shorts.jpg",
        description: "Lightweight running shorts with built-in liner and zippered pocket for essential items during your run.",
        short_description: "Lightweight with built-in liner and zippered pocket",
        features: &[
            "Built-in liner",
            "Zippered pocket",
            "Lightweight fabric",
            "Moisture-wicking",
            "Reflective details",
        ],
        sizes: &["S", "M", "L", "XL"],
        colors: &["Black", "Gray", "Navy", "Red"],
        rating: 4.7,
        reviews: 1563,
        cta_text: "View Details",
    },
    ProductSeed {
        id: 4,
        name: "Compression Performance Top",
        category: ProductCategory::Activewear,
        subcategory: "Compression Tops",
        price: 7999,
        original_price: None,
        image: "/images/products/activewear/compression-top.jpg",
        description: "High-performance compression top with UV protection and anti-odor treatment for enhanced muscle support.",
        short_description: "High-performance compression with UV protection",
        features: &[
            "Compression fit",
            "UV protection",
            "Anti-odor treatment",
            "Moisture-wicking",
            "Four-way stretch",
        ],
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        colors: &["Black", "White", "Red", "Navy"],
        rating: 4.9,
        reviews: 2156,
        cta_text: "Order Now",
    },
    ProductSeed {
        id: 5,
        name: "Training Jacket",
        category: ProductCategory::Activewear,
        subcategory: "Training Jackets",
        price: 12999,
        original_price: None,
        image: "/images/products/activewear/training-jacket.jpg",
        description: "Versatile training jacket with water-resistant finish and multiple pockets for outdoor workouts.",
        short_description: "Water-resistant with multiple pockets",
        features: &[
            "Water-resistant finish",
            "Multiple pockets",
            "Adjustable hood",
            "Breathable fabric",
            "Reflective elements",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["Black", "Gray", "Navy", "Charcoal"],
        rating: 4.5,
        reviews: 987,
        cta_text: "View Details",
    },
    // Sports Uniforms
    ProductSeed {
        id: 6,
        name: "Pro Basketball Jersey",
        category: ProductCategory::SportsUniforms,
        subcategory: "Basketball Jerseys",
        price: 7999,
        original_price: Some(9999),
        image: "/images/products/uniforms/basketball-jersey.jpg",
        description: "Professional-grade basketball jersey with mesh construction and ventilated design for optimal performance.",
        short_description: "Mesh construction with ventilated design",
        features: &[
            "Mesh construction",
            "Ventilated design",
            "Number customization",
            "Team colors available",
            "Durable stitching",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["White", "Black", "Red", "Blue"],
        rating: 4.9,
        reviews: 2156,
        cta_text: "Customize",
    },
    ProductSeed {
        id: 7,
        name: "Complete Soccer Kit",
        category: ProductCategory::SportsUniforms,
        subcategory: "Soccer Kits",
        price: 14999,
        original_price: None,
        image: "/images/products/uniforms/soccer-kit.jpg",
        description: "Complete soccer kit including jersey, shorts, and socks with team customization options.",
        short_description: "Complete kit with jersey, shorts, and socks",
        features: &[
            "Team customization",
            "Moisture-wicking fabric",
            "Ventilated design",
            "Number printing",
            "Logo embroidery",
        ],
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        colors: &["White", "Red", "Blue", "Green"],
        rating: 4.8,
        reviews: 1892,
        cta_text: "Get Quote",
    },
    ProductSeed {
        id: 8,
        name: "American Football Uniform",
        category: ProductCategory::SportsUniforms,
        subcategory: "American Football Uniforms",
        price: 19999,
        original_price: None,
        image: "/images/products/uniforms/football-uniform.jpg",
        description: "Professional American football uniform with reinforced stitching and team color customization.",
        short_description: "Professional uniform with reinforced stitching",
        features: &[
            "Reinforced stitching",
            "Team customization",
            "Number printing",
            "Durable fabric",
            "Comfortable fit",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["White", "Black", "Red", "Blue"],
        rating: 4.7,
        reviews: 1345,
        cta_text: "Customize",
    },
    ProductSeed {
        id: 9,
        name: "Baseball Jersey",
        category: ProductCategory::SportsUniforms,
        subcategory: "Baseball Jerseys",
        price: 8999,
        original_price: None,
        image: "/images/products/uniforms/baseball-jersey.jpg",
        description: "Authentic baseball jersey with button-up design and team number customization.",
        short_description: "Authentic button-up design with team customization",
        features: &[
            "Button-up design",
            "Team customization",
            "Number printing",
            "Authentic styling",
            "Comfortable fit",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["White", "Gray", "Navy", "Red"],
        rating: 4.6,
        reviews: 1123,
        cta_text: "View Details",
    },
    ProductSeed {
        id: 10,
        name: "Volleyball Team Uniform",
        category: ProductCategory::SportsUniforms,
        subcategory: "Volleyball Uniforms",
        price: 11999,
        original_price: None,
        image: "/images/products/uniforms/volleyball-uniform.jpg",
        description: "Lightweight volleyball uniform designed for quick movements and team customization.",
        short_description: "Lightweight design for quick movements",
        features: &[
            "Lightweight fabric",
            "Quick-dry technology",
            "Team customization",
            "Number printing",
            "Comfortable fit",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["White", "Black", "Red", "Blue"],
        rating: 4.5,
        reviews: 987,
        cta_text: "Customize",
    },
    // Gym Wear
    ProductSeed {
        id: 11,
        name: "Stringer Tank Top",
        category: ProductCategory::GymWear,
        subcategory: "Stringer Tank Tops",
        price: 4499,
        original_price: None,
        image: "/images/products/gym-wear/stringer-tank.jpg",
        description: "Classic stringer tank top for maximum freedom of movement and breathability during workouts.",
        short_description: "Classic design for maximum freedom of movement",
        features: &[
            "Classic stringer design",
            "Breathable fabric",
            "Moisture-wicking",
            "Comfortable fit",
            "Quick-dry technology",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "White", "Gray", "Red"],
        rating: 4.8,
        reviews: 2234,
        cta_text: "Order Now",
    },
    ProductSeed {
        id: 12,
        name: "Premium Sweatpants",
        category: ProductCategory::GymWear,
        subcategory: "Sweatpants",
        price: 9499,
        original_price: Some(10999),
        image: "/images/products/gym-wear/sweatpants.jpg",
        description: "Premium sweatpants with elastic waistband and side pockets for ultimate comfort.",
        short_description: "Premium fabric with elastic waistband",
        features: &[
            "Elastic waistband",
            "Side pockets",
            "Premium fabric",
            "Comfortable fit",
            "Ankle cuffs",
        ],
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "Gray", "Navy", "Charcoal"],
        rating: 4.7,
        reviews: 1563,
        cta_text: "View Details",
    },
    ProductSeed {
        id: 13,
        name: "Performance Hoodie",
        category: ProductCategory::GymWear,
        subcategory: "Hoodies",
        price: 8499,
        original_price: None,
        image: "/images/products/gym-wear/hoodie.jpg",
        description: "Performance hoodie with fleece lining and kangaroo pocket for pre and post-workout comfort.",
        short_description: "Fleece lining with kangaroo pocket",
        features: &[
            "Fleece lining",
            "Kangaroo pocket",
            "Drawstring hood",
            "Ribbed cuffs",
            "Moisture-wicking",
        ],
        sizes: &["S", "M", "L", "XL", "XXL"],
        colors: &["Black", "Gray", "Navy", "Charcoal"],
        rating: 4.8,
        reviews: 2234,
        cta_text: "View Details",
    },
    ProductSeed {
        id: 14,
        name: "Gym Shorts",
        category: ProductCategory::GymWear,
        subcategory: "Gym Shorts",
        price: 5999,
        original_price: None,
        image: "/images/products/gym-wear/gym-shorts.jpg",
        description: "Comfortable gym shorts with built-in liner and drawstring waist for ultimate workout comfort.",
        short_description: "Comfortable with built-in liner",
        features: &[
            "Built-in liner",
            "Drawstring waist",
            "Side pockets",
            "Quick-dry fabric",
            "Comfortable fit",
        ],
        sizes: &["S", "M", "L", "XL"],
        colors: &["Black", "Gray", "Navy", "Charcoal"],
        rating: 4.6,
        reviews: 1456,
        cta_text: "Order Now",
    },
    ProductSeed {
        id: 15,
        name: "Performance T-Shirt",
        category: ProductCategory::GymWear,
        subcategory: "Performance T-Shirts",
        price: 4999,
        original_price: Some(6499),
        image: "/images/products/gym-wear/performance-tshirt.jpg",
        description: "High-performance t-shirt with moisture-wicking technology and comfortable fit for intense workouts.",
        short_description: "Moisture-wicking technology for intense workouts",
        features: &[
            "Moisture-wicking",
            "Comfortable fit",
            "Quick-dry fabric",
            "Anti-odor treatment",
            "Four-way stretch",
        ],
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        colors: &["Black", "White", "Gray", "Red"],
        rating: 4.7,
        reviews: 1789,
        cta_text: "View Details",
    },
];

/// Subcategory lists per category, in navigation order
pub const SUBCATEGORIES: &[(ProductCategory, &[&str])] = &[
    (
        ProductCategory::Activewear,
        &[
            "Yoga Leggings",
            "Sports Bras",
            "Running Shorts",
            "Compression Tops",
            "Training Jackets",
        ],
    ),
    (
        ProductCategory::SportsUniforms,
        &[
            "Basketball Jerseys",
            "Soccer Kits",
            "American Football Uniforms",
            "Baseball Jerseys",
            "Volleyball Uniforms",
        ],
    ),
    (
        ProductCategory::GymWear,
        &[
            "Stringer Tank Tops",
            "Sweatpants",
            "Hoodies",
            "Gym Shorts",
            "Performance T-Shirts",
        ],
    ),
];

pub struct ProductsTable;

impl SeedTable for ProductsTable {
    type Row = Product;

    fn rows() -> &'static [Product] {
        static ROWS: OnceLock<Vec<Product>> = OnceLock::new();
        ROWS.get_or_init(|| {
            tracing::debug!("Building product table from {} seeds", SEEDS.len());
            SEEDS.iter().map(ProductSeed::to_product).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<u32> = ProductsTable::rows().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), ProductsTable::rows().len());
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_every_subcategory_is_listed() {
        for product in ProductsTable::rows() {
            let (_, listed) = SUBCATEGORIES
                .iter()
                .find(|(category, _)| *category == product.category)
                .expect("category has a subcategory list");
            assert!(
                listed.contains(&product.subcategory.as_str()),
                "{} is not listed under {}",
                product.subcategory,
                product.category
            );
        }
    }

    #[test]
    fn test_prices_are_in_dollars() {
        let leggings = &ProductsTable::rows()[0];
        assert_eq!(leggings.price, Decimal::new(8999, 2));
        assert_eq!(leggings.original_price, Some(Decimal::new(11999, 2)));
        assert_eq!(leggings.cta_link.as_deref(), Some("#product-1"));
    }

    #[test]
    fn test_ratings_within_bounds() {
        for product in ProductsTable::rows() {
            assert!((0.0..=5.0).contains(&product.rating), "{}", product.name);
        }
    }
}
