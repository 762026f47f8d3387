// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use crate::web_app::components::{
    AboutSection, AllProducts, Container, ContactSection, FeaturedProducts, Hero,
    ManufacturingShowcase, QuoteSection, Seo,
};
use crate::web_app::config::SiteSettings;
use crate::web_app::model::HeroPage;
use crate::web_app::seo::{organization_json_ld, PageMeta};

pub const HOME_KEYWORDS: &[&str] = &[
    "sportswear",
    "athletic wear",
    "sports clothing",
    "activewear",
    "sports uniforms",
    "gym wear",
    "fitness apparel",
    "performance wear",
    "athletic clothing",
    "sports gear",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let meta = PageMeta::new(
        "Premium Sportswear Collection",
        "Discover high-performance sportswear designed for athletes. Shop premium activewear, sports uniforms, and gym wear with exceptional quality, innovative design, and unmatched comfort.",
        "/",
    )
    .with_keywords(HOME_KEYWORDS)
    .with_structured_data(organization_json_ld(&settings));

    view! {
        <Seo meta=meta />
        <Hero page=HeroPage::Home />
        <Container>
            <FeaturedProducts view_all_href="#products" />
            <AllProducts />
            <ManufacturingShowcase
                title="Manufacturing Excellence"
                subtitle="Discover our state-of-the-art manufacturing capabilities and premium materials that ensure the highest quality in every product."
            />
        </Container>
        <AboutSection />
        <Container>
            <QuoteSection />
        </Container>
        <ContactSection />
    }
}
