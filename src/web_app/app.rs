// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, site settings, the theme provider and the page chrome.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{Footer, Navbar};
use crate::web_app::config::SiteSettings;
use crate::web_app::pages::{
    AboutPage, CategoryPage, ContactPage, HomePage, ManufacturingPage, NotFound, ProductsPage,
    QuotePage, SubcategoryPage,
};
use crate::web_app::theme::{Theme, ThemeProvider};

/// Root application component
///
/// Sets up:
/// - Meta context and document-wide tags
/// - Site settings and theme contexts
/// - Router with every page route
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(SiteSettings::from_build_env());

    view! {
        <Html attr:lang="en" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Meta name="theme-color" content=Theme::default().meta_color() />
        <Link rel="icon" href="/favicon.ico" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/aclon_site.css" />

        <ThemeProvider>
            <Router>
                <div class="min-h-screen flex flex-col bg-[var(--bg-primary)] text-[var(--text-primary)]">
                    <Navbar />
                    <main class="flex-1">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <Route path=path!("/contact") view=ContactPage />
                            <Route path=path!("/manufacturing") view=ManufacturingPage />
                            <Route path=path!("/quote") view=QuotePage />
                            <Route path=path!("/products") view=ProductsPage />
                            <Route path=path!("/products/:category") view=CategoryPage />
                            <Route path=path!("/products/:category/:subcategory") view=SubcategoryPage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Router>
        </ThemeProvider>
    }
}
