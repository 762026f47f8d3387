// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card with sale badge, rating, price, sizes and colours
// - ProductGrid: Grid layout for multiple products
// - FeaturedProducts: The home-page selection
// - CategoryShowcase: One category with subcategory filter chips
// - SubcategoryShowcase: One subcategory with links to its siblings
// - AllProducts: The whole catalog with category buttons and text search

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{Badge, ButtonVariant, LinkButton, PriceDisplay, SectionHeading, StarRating};
use crate::data::content::{category_heading, subcategory_blurb};
use crate::web_app::catalog::{
    category_href, featured_products, filter_products, products_by_category,
    products_by_subcategory, subcategories_by_category, subcategory_href,
};
use crate::web_app::display::truncate_chars;
use crate::web_app::model::{CatalogFilter, CategorySelection, Product, ProductCategory};

const CARD_DESCRIPTION_CHARS: usize = 120;

/// Product card for the catalog grids
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let discount = product.discount_percent();
    let description = truncate_chars(&product.short_description, CARD_DESCRIPTION_CHARS);
    let cta_text = product.cta_text.clone().unwrap_or_else(|| "View Details".to_string());
    let cta_link = product
        .cta_link
        .clone()
        .unwrap_or_else(|| format!("#product-{}", product.id));
    let subcategory_link = subcategory_href(product.category, &product.subcategory);

    view! {
        <article
            id=format!("product-{}", product.id)
            class="product-card group bg-[var(--bg-secondary)] rounded-xl shadow-[var(--shadow-light)] \
                   hover:shadow-[var(--shadow-heavy)] transition-all duration-300 border border-[var(--border-color)] \
                   flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
        >
            <div class="relative aspect-square bg-[var(--bg-tertiary)] overflow-hidden">
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <div class="absolute top-3 left-3 flex gap-2">
                    {discount.map(|pct| view! {
                        <Badge variant="red">"SALE -" {pct} "%"</Badge>
                    })}
                    <Badge variant="dark">{product.category.name()}</Badge>
                </div>
                {(!product.in_stock).then(|| view! {
                    <div class="absolute inset-0 bg-black/50 flex items-center justify-center">
                        <span class="text-white font-semibold">"Out of Stock"</span>
                    </div>
                })}
            </div>

            <div class="p-5 flex flex-col flex-1">
                <A href=subcategory_link attr:class="text-xs uppercase tracking-wide text-[var(--accent-primary)] mb-1">
                    {product.subcategory.clone()}
                </A>
                <h3 class="font-bold text-[var(--text-primary)] mb-2 text-lg line-clamp-2">
                    {product.name.clone()}
                </h3>
                <p class="text-[var(--text-secondary)] text-sm mb-4 line-clamp-3 flex-1">
                    {description}
                </p>

                <div class="flex justify-between items-center mb-3">
                    <StarRating rating=product.rating reviews=product.reviews />
                    <PriceDisplay price=product.price original_price=product.original_price />
                </div>

                <div class="flex flex-wrap gap-1 mb-2 text-xs text-[var(--text-muted)]">
                    <span class="font-medium">"Sizes:"</span>
                    {product.sizes.join(", ")}
                </div>
                <div class="flex flex-wrap gap-1 mb-4 text-xs text-[var(--text-muted)]">
                    <span class="font-medium">"Colors:"</span>
                    {product.colors.join(", ")}
                </div>

                <LinkButton href=cta_link class="w-full">{cta_text}</LinkButton>
            </div>
        </article>
    }
}

/// Grid layout for product cards
#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Shown when there is nothing to list
    #[prop(default = "No products found")]
    empty_message: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=move || view! {
                <div class="text-center py-16 text-[var(--text-secondary)]">
                    <p class="text-xl font-semibold mb-2">{empty_message}</p>
                    <p class="text-sm">"Try a different category or search term."</p>
                </div>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn FeaturedProducts(
    #[prop(default = "/products")]
    view_all_href: &'static str,
) -> impl IntoView {
    view! {
        <section id="featured" class="py-16" aria-label="Featured products">
            <SectionHeading
                title="Featured Products"
                subtitle="Discover our premium collection of high-performance sportswear designed for athletes who demand excellence."
            />
            <ProductGrid products=Signal::stored(featured_products()) />
            <div class="text-center mt-12">
                <LinkButton href=view_all_href variant=ButtonVariant::Secondary>"View All Products"</LinkButton>
            </div>
        </section>
    }
}

/// Pill button used for category and subcategory filters
#[component]
fn FilterChip(
    #[prop(into)]
    label: String,
    #[prop(into)]
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if active.get() {
                "px-4 py-2 rounded-full text-sm font-semibold bg-[var(--accent-primary)] text-white"
            } else {
                "px-4 py-2 rounded-full text-sm font-medium bg-[var(--bg-tertiary)] text-[var(--text-secondary)] hover:text-[var(--text-primary)]"
            }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            {label}
        </button>
    }
}

/// One category with its subcategory filter
#[component]
pub fn CategoryShowcase(
    category: ProductCategory,
    /// Show the "Browse by Type" subcategory cards
    #[prop(default = true)]
    show_subcategory_cards: bool,
) -> impl IntoView {
    let (title, description) = category_heading(category);
    let subcategories = subcategories_by_category(category.name());
    let selected = RwSignal::new(None::<String>);

    let products = Signal::derive(move || match selected.get() {
        Some(sub) => products_by_subcategory(&sub),
        None => products_by_category(category.name()),
    });

    let chips = subcategories
        .iter()
        .cloned()
        .map(|sub| {
            let value = sub.clone();
            let active = Signal::derive({
                let value = value.clone();
                move || selected.with(|s| s.as_deref() == Some(value.as_str()))
            });
            view! {
                <FilterChip
                    label=sub
                    active=active
                    on_select=Callback::new(move |()| selected.set(Some(value.clone())))
                />
            }
        })
        .collect_view();

    let cards = show_subcategory_cards.then(|| {
        let cards = subcategories
            .iter()
            .cloned()
            .map(|sub| {
                let href = subcategory_href(category, &sub);
                let count = products_by_subcategory(&sub).len();
                view! {
                    <A href=href attr:class="block p-6 rounded-xl bg-[var(--bg-secondary)] border border-[var(--border-color)] hover:shadow-[var(--shadow-medium)] transition-shadow">
                        <h4 class="font-bold text-[var(--text-primary)] mb-2">{sub.clone()}</h4>
                        <p class="text-sm text-[var(--text-secondary)] mb-3">
                            {subcategory_blurb(&sub).unwrap_or_default()}
                        </p>
                        <span class="text-sm font-semibold text-[var(--accent-primary)]">
                            "View Collection (" {count} ")"
                        </span>
                    </A>
                }
            })
            .collect_view();
        view! {
            <div class="mt-16">
                <SectionHeading
                    title="Browse by Type"
                    subtitle=format!("Explore our {} collection by category", category.name().to_lowercase())
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            </div>
        }
    });

    view! {
        <section id=category.slug() class="py-16">
            <SectionHeading title=title subtitle=description />
            <div class="flex flex-wrap justify-center gap-3 mb-10">
                <FilterChip
                    label="All"
                    active=Signal::derive(move || selected.with(Option::is_none))
                    on_select=Callback::new(move |()| selected.set(None))
                />
                {chips}
            </div>
            <ProductGrid products=products />
            {cards}
        </section>
    }
}

/// One subcategory, with links to the other subcategories of its category
#[component]
pub fn SubcategoryShowcase(category: ProductCategory, subcategory: String) -> impl IntoView {
    let products = products_by_subcategory(&subcategory);
    let blurb = subcategory_blurb(&subcategory).unwrap_or(category.description());
    let siblings = subcategories_by_category(category.name())
        .into_iter()
        .map(|sub| {
            let href = subcategory_href(category, &sub);
            let current = sub == subcategory;
            view! {
                <A
                    href=href
                    attr:class=if current {
                        "px-4 py-2 rounded-full text-sm font-semibold bg-[var(--accent-primary)] text-white"
                    } else {
                        "px-4 py-2 rounded-full text-sm bg-[var(--bg-tertiary)] text-[var(--text-secondary)]"
                    }
                    attr:aria-current=current.then_some("page")
                >
                    {sub.clone()}
                </A>
            }
        })
        .collect_view();

    view! {
        <section class="py-16">
            <nav class="text-sm text-[var(--text-muted)] mb-8" aria-label="Breadcrumb">
                <A href="/">"Home"</A>
                " / "
                <A href="/products">"Products"</A>
                " / "
                <A href=category_href(category)>{category.name()}</A>
                " / "
                <span class="text-[var(--text-primary)]">{subcategory.clone()}</span>
            </nav>
            <SectionHeading title=subcategory.clone() subtitle=blurb />
            <div class="flex flex-wrap justify-center gap-3 mb-10">{siblings}</div>
            <ProductGrid products=Signal::stored(products) />
        </section>
    }
}

/// The whole catalog with category buttons and a search box
#[component]
pub fn AllProducts() -> impl IntoView {
    let category = RwSignal::new(CategorySelection::<ProductCategory>::All);
    let query = RwSignal::new(String::new());

    // Recomputed from scratch whenever either input changes
    let filtered = Memo::new(move |_| filter_products(&CatalogFilter::new(category.get(), query.get())));
    let total = filter_products(&CatalogFilter::default()).len();

    let heading = move || match category.get() {
        CategorySelection::All => "All Products".to_string(),
        CategorySelection::Only(c) => format!("{} Collection", c.name()),
    };

    let category_chips = ProductCategory::ALL
        .into_iter()
        .map(|c| {
            view! {
                <FilterChip
                    label=c.name()
                    active=Signal::derive(move || category.get() == CategorySelection::Only(c))
                    on_select=Callback::new(move |()| category.set(CategorySelection::Only(c)))
                />
            }
        })
        .collect_view();

    view! {
        <section id="products" class="py-16">
            <div class="flex flex-col md:flex-row gap-4 md:items-center md:justify-between mb-8">
                <div class="flex flex-wrap gap-3">
                    <FilterChip
                        label="All"
                        active=Signal::derive(move || category.get() == CategorySelection::All)
                        on_select=Callback::new(move |()| category.set(CategorySelection::All))
                    />
                    {category_chips}
                </div>
                <input
                    type="search"
                    placeholder="Search products..."
                    aria-label="Search products"
                    class="w-full md:w-72 px-4 py-2 rounded-lg border border-[var(--border-color)] \
                           bg-[var(--bg-primary)] text-[var(--text-primary)] outline-none \
                           focus:ring-2 focus:ring-[var(--accent-primary)]"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <h2 class="text-2xl font-bold text-[var(--text-primary)] mb-2">{heading}</h2>
            <p class="text-sm text-[var(--text-muted)] mb-8">
                {move || format!("Showing {} of {} products", filtered.with(Vec::len), total)}
            </p>

            <ProductGrid products=filtered />
        </section>
    }
}
