// web_app/catalog/mod.rs - Catalog lookups over the static seed tables
//
// Everything here is synchronous and pure: the tables are built once and
// every query returns fresh owned results in table order.

pub mod queries;

pub use queries::*;
