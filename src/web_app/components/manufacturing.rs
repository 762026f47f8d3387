// web_app/components/manufacturing.rs - Manufacturing showcase
//
// Tabs are typed by `ManufacturingCategory`, so every tab label maps to
// exactly the items it names.

use leptos::prelude::*;

use super::common::{Badge, SectionHeading};
use crate::web_app::catalog::{filter_manufacturing, manufacturing_summaries};
use crate::web_app::model::{CategorySelection, ManufacturingCategory, ManufacturingItem};

const FEATURE_PREVIEW: usize = 3;
const SPEC_PREVIEW: usize = 2;

/// Card for one fabric, machine or sample
///
/// Shows the first few features and specifications; the card expands to
/// the full lists.
#[component]
pub fn ManufacturingCard(item: ManufacturingItem) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let hidden_features = item.features.len().saturating_sub(FEATURE_PREVIEW);
    let features = item.features.clone();
    let specifications = item.specifications.clone();
    let has_more = hidden_features > 0 || specifications.len() > SPEC_PREVIEW;

    view! {
        <article class="manufacturing-card bg-[var(--bg-secondary)] rounded-xl overflow-hidden border border-[var(--border-color)] shadow-[var(--shadow-light)] flex flex-col">
            <div class="relative aspect-video bg-[var(--bg-tertiary)]">
                <img src=item.image.clone() alt=item.alt_text.clone() loading="lazy" class="w-full h-full object-cover" />
                <div class="absolute top-3 left-3">
                    <Badge variant="dark">{item.category.name()}</Badge>
                </div>
            </div>
            <div class="p-6 flex flex-col flex-1">
                <h3 class="text-xl font-bold text-[var(--text-primary)] mb-2">{item.title.clone()}</h3>
                <p class="text-sm text-[var(--text-secondary)] mb-4">{item.description.clone()}</p>

                {(!features.is_empty()).then(|| {
                    let features = features.clone();
                    view! {
                        <ul class="flex flex-wrap gap-2 mb-4">
                            {move || {
                                let shown = if expanded.get() { features.len() } else { FEATURE_PREVIEW };
                                features.iter().take(shown).map(|feature| view! {
                                    <li class="text-xs px-2 py-1 rounded bg-[var(--bg-tertiary)] text-[var(--text-secondary)]">
                                        {feature.clone()}
                                    </li>
                                }).collect_view()
                            }}
                            <Show when=move || { !expanded.get() && hidden_features > 0 }>
                                <li class="text-xs px-2 py-1 text-[var(--text-muted)]">
                                    {format!("+{hidden_features} more")}
                                </li>
                            </Show>
                        </ul>
                    }
                })}

                {(!specifications.is_empty()).then(|| {
                    let specifications = specifications.clone();
                    view! {
                        <dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm mb-4">
                            {move || {
                                let shown = if expanded.get() { specifications.len() } else { SPEC_PREVIEW };
                                specifications.iter().take(shown).map(|(key, value)| view! {
                                    <dt class="text-[var(--text-muted)]">{key.clone()}</dt>
                                    <dd class="text-[var(--text-primary)] font-medium">{value.clone()}</dd>
                                }).collect_view()
                            }}
                        </dl>
                    }
                })}

                <Show when=move || has_more>
                    <button
                        type="button"
                        class="mt-auto text-sm font-semibold text-[var(--accent-primary)] hover:underline self-start"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Show Less" } else { "Learn More" }}
                    </button>
                </Show>
            </div>
        </article>
    }
}

/// Tabbed grid of manufacturing items
#[component]
pub fn ManufacturingShowcase(
    #[prop(default = "Manufacturing & Materials")]
    title: &'static str,
    #[prop(default = "Explore our latest fabrics, machinery, and premium manufacturing capabilities.")]
    subtitle: &'static str,
) -> impl IntoView {
    let selected = RwSignal::new(CategorySelection::<ManufacturingCategory>::All);
    let items = Memo::new(move |_| filter_manufacturing(selected.get()));
    let total = filter_manufacturing(CategorySelection::All).len();

    let tab_class = move |selection: CategorySelection<ManufacturingCategory>| {
        if selected.get() == selection {
            "px-5 py-2 rounded-full text-sm font-semibold bg-[var(--accent-primary)] text-white"
        } else {
            "px-5 py-2 rounded-full text-sm font-medium bg-[var(--bg-tertiary)] text-[var(--text-secondary)]"
        }
    };

    let tabs = manufacturing_summaries()
        .into_iter()
        .map(|summary| {
            let selection = CategorySelection::Only(summary.category);
            view! {
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(selection)
                    aria-selected=move || (selected.get() == selection).to_string()
                    on:click=move |_| selected.set(selection)
                >
                    {format!("{} ({})", summary.name, summary.count)}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="manufacturing" class="py-16">
            <SectionHeading title=title subtitle=subtitle />
            <div class="flex flex-wrap justify-center gap-3 mb-10" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(CategorySelection::All)
                    aria-selected=move || (selected.get() == CategorySelection::All).to_string()
                    on:click=move |_| selected.set(CategorySelection::All)
                >
                    {format!("All Items ({total})")}
                </button>
                {tabs}
            </div>

            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=|| view! {
                    <p class="text-center py-12 text-[var(--text-secondary)]">"No Items Found"</p>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=|item| view! { <ManufacturingCard item=item /> }
                    />
                </div>
            </Show>
        </section>
    }
}
