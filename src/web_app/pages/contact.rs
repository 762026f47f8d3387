// web_app/pages/contact.rs - Contact page

use leptos::prelude::*;

use crate::web_app::components::{ContactSection, Hero, Seo};
use crate::web_app::model::HeroPage;
use crate::web_app::seo::PageMeta;

#[component]
pub fn ContactPage() -> impl IntoView {
    let meta = PageMeta::new(
        "Contact Us",
        "Get in touch with Aclon Sports. We're here to help with your sportswear needs, custom orders, and any questions you may have.",
        "/contact",
    )
    .with_keywords(&["contact Aclon Sports", "sportswear contact", "custom orders", "team uniforms", "customer service"]);

    view! {
        <Seo meta=meta />
        <Hero page=HeroPage::Contact />
        <ContactSection />
    }
}
