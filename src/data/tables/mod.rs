// data/tables/mod.rs
//
// Seed tables for the product catalog and the manufacturing showcase.

pub mod manufacturing;
pub mod products;

pub use manufacturing::ManufacturingTable;
pub use products::ProductsTable;
