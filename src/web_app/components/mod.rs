// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Badge, fields, etc.)
// - layout.rs: Navbar, Footer, Hero and the static page sections
// - product.rs: Product cards, grids and category showcases
// - manufacturing.rs: Manufacturing cards and the tabbed showcase
// - forms.rs: Contact and quote forms
// - seo.rs: Head tags for a page

pub mod common;
pub mod forms;
pub mod layout;
pub mod manufacturing;
pub mod product;
pub mod seo;

// Re-export commonly used components for convenience
pub use common::*;
pub use forms::*;
pub use layout::*;
pub use manufacturing::*;
pub use product::*;
pub use seo::Seo;
