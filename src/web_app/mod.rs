// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (catalog records, navigation, hero copy)
// - catalog/: Pure queries over the static tables
// - theme/: Light/dark theme store and its browser backends
// - forms/: Contact and quote form data, validation and submission
// - config.rs, display.rs, seo.rs, error.rs: Settings, formatting, page
//   metadata and error types
// - components/, pages/, app.rs: Leptos UI (SSR and hydrate only)

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod model;
pub mod seo;
pub mod theme;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
