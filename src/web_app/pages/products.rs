// web_app/pages/products.rs - Catalog pages
//
// /products, /products/:category and /products/:category/:subcategory.
// Unknown slugs render NotFound.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::NotFound;
use crate::web_app::catalog::{
    category_by_slug, category_href, category_summaries, featured_products, products_by_category,
    products_by_subcategory, subcategory_by_slug, subcategory_href,
};
use crate::web_app::components::{
    AllProducts, CategoryShowcase, Container, Hero, ManufacturingShowcase, SectionHeading, Seo,
    SubcategoryShowcase,
};
use crate::web_app::config::SiteSettings;
use crate::web_app::model::{HeroPage, ProductCategory};
use crate::web_app::seo::{product_list_json_ld, PageMeta};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let meta = PageMeta::new(
        "Products",
        "Explore our premium collection of activewear, sports uniforms, and gym wear designed for athletes who demand excellence.",
        "/products",
    )
    .with_keywords(&["sports apparel", "activewear", "sports uniforms", "gym wear", "athletic clothing", "performance wear"])
    .with_structured_data(product_list_json_ld("Featured Products", &featured_products(), &settings));

    let categories = category_summaries()
        .into_iter()
        .map(|summary| view! {
            <A
                href=category_href(summary.category)
                attr:class="block p-8 rounded-xl bg-[var(--bg-secondary)] border border-[var(--border-color)] hover:shadow-[var(--shadow-medium)] transition-shadow"
            >
                <h3 class="text-2xl font-bold text-[var(--text-primary)] mb-3">{summary.name.clone()}</h3>
                <p class="text-[var(--text-secondary)] mb-4">{summary.description.clone()}</p>
                <ul class="text-sm text-[var(--text-muted)] mb-4 space-y-1">
                    {summary.subcategories.iter().map(|sub| view! { <li>"• " {sub.clone()}</li> }).collect_view()}
                </ul>
                <span class="text-sm font-semibold text-[var(--accent-primary)]">
                    {format!("{} products", summary.count)}
                </span>
            </A>
        })
        .collect_view();

    view! {
        <Seo meta=meta />
        <Hero page=HeroPage::Products />
        <Container>
            <AllProducts />
            <section class="py-16">
                <SectionHeading
                    title="Explore Our Categories"
                    subtitle="From professional sports uniforms to everyday activewear, we have everything you need to perform at your best."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{categories}</div>
            </section>
            <ManufacturingShowcase
                title="Crafted with Precision"
                subtitle="Every piece in our collection is manufactured using state-of-the-art technology and premium materials to ensure the highest quality and performance."
            />
        </Container>
    }
}

fn category_meta(category: ProductCategory, settings: &SiteSettings) -> PageMeta {
    PageMeta::new(
        category.name(),
        category.description(),
        category_href(category),
    )
    .with_structured_data(product_list_json_ld(
        category.name(),
        &products_by_category(category.name()),
        settings,
    ))
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let category = Memo::new(move |_| {
        params.with(|p| p.get("category")).and_then(|slug| category_by_slug(&slug))
    });

    move || match category.get() {
        Some(category) => view! {
            <Seo meta=category_meta(category, &settings) />
            <Hero page=HeroPage::Products />
            <Container>
                <CategoryShowcase category=category />
            </Container>
        }
        .into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn SubcategoryPage() -> impl IntoView {
    let params = use_params_map();
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let resolved = Memo::new(move |_| {
        params.with(|p| {
            let category = category_by_slug(&p.get("category")?)?;
            let subcategory = subcategory_by_slug(category, &p.get("subcategory")?)?;
            Some((category, subcategory))
        })
    });

    move || match resolved.get() {
        Some((category, subcategory)) => {
            let meta = PageMeta::new(
                format!("{subcategory} - {}", category.name()),
                format!("Shop {} from our {} collection.", subcategory, category.name().to_lowercase()),
                subcategory_href(category, &subcategory),
            )
            .with_structured_data(product_list_json_ld(
                &subcategory,
                &products_by_subcategory(&subcategory),
                &settings,
            ));
            view! {
                <Seo meta=meta />
                <Container class="pt-16">
                    <SubcategoryShowcase category=category subcategory=subcategory />
                </Container>
            }
            .into_any()
        }
        None => view! { <NotFound /> }.into_any(),
    }
}
