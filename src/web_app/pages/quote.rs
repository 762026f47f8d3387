// web_app/pages/quote.rs - Quote request page

use leptos::prelude::*;

use crate::web_app::components::{Container, QuoteSection, Seo};
use crate::web_app::seo::PageMeta;

#[component]
pub fn QuotePage() -> impl IntoView {
    let meta = PageMeta::new(
        "Request a Quote",
        "Get a custom quote for your sports apparel and team uniform needs. Fill out our form and receive competitive pricing within 24 hours.",
        "/quote",
    )
    .with_keywords(&["quote request", "custom pricing", "bulk orders", "team uniforms", "sports apparel"]);

    view! {
        <Seo meta=meta />
        <Container class="pt-24">
            <QuoteSection
                subtitle="Get competitive pricing for your sports apparel and team uniform needs. Fill out the form below and we'll provide you with a custom quote within 24 hours."
            />
        </Container>
    }
}
