// web_app/components/seo.rs - Per-page head tags
//
// Renders a `PageMeta` into title, description, Open Graph, Twitter card,
// canonical link and JSON-LD tags through leptos_meta.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};

use crate::web_app::config::SiteSettings;
use crate::web_app::seo::PageMeta;

#[component]
pub fn Seo(meta: PageMeta) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    let title = meta.full_title();
    let description = meta.description().to_string();
    let canonical = meta.canonical_url(&settings);
    let image = meta.og_image_url(&settings);
    let keywords = (!meta.keywords.is_empty()).then(|| meta.keywords.join(", "));
    let json_ld = meta.json_ld(&settings).to_string();

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        {keywords.map(|k| view! { <Meta name="keywords" content=k /> })}
        <Meta name="robots" content=meta.robots() />
        <Link rel="canonical" href=canonical.clone() />

        <Meta property="og:type" content=meta.og_type.as_str() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description.clone() />
        <Meta property="og:url" content=canonical />
        <Meta property="og:image" content=image.clone() />
        <Meta property="og:site_name" content=settings.site_name.clone() />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:site" content=settings.twitter_handle.clone() />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />
        <Meta name="twitter:image" content=image />

        <Script type_="application/ld+json">{json_ld}</Script>
    }
}
