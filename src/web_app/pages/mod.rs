// web_app/pages/mod.rs - Page components module
//
// One routed component per page. Product pages resolve their category and
// subcategory from URL slugs and fall back to NotFound.

pub mod about;
pub mod contact;
pub mod home;
pub mod manufacturing;
pub mod not_found;
pub mod products;
pub mod quote;

// Re-export page components
pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use manufacturing::ManufacturingPage;
pub use not_found::NotFound;
pub use products::{CategoryPage, ProductsPage, SubcategoryPage};
pub use quote::QuotePage;
