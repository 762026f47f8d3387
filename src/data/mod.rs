// data/mod.rs - Static seed data bundled into the site
//
// Everything the site shows is compiled in. Each table is a struct that
// implements `SeedTable`; rows are built on first access and then shared
// read-only for the rest of the process (server) or page session (browser).

pub mod content;
pub mod tables;

/// A static table of seed records
pub trait SeedTable {
    /// Record type stored in the table
    type Row: 'static;

    /// All rows, in their original (display) order
    fn rows() -> &'static [Self::Row];
}
