// web_app/pages/manufacturing.rs - Manufacturing capabilities

use leptos::prelude::*;

use crate::web_app::components::{Container, ContactSection, Hero, ManufacturingShowcase, SectionHeading, Seo};
use crate::web_app::model::HeroPage;
use crate::web_app::seo::PageMeta;

const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Design & Planning", "Our design team creates detailed specifications and production plans for each product, ensuring optimal performance and fit."),
    ("Material Selection", "We carefully select premium materials that meet our strict quality standards for durability, comfort, and performance."),
    ("Production", "Our skilled craftsmen use advanced manufacturing techniques to create each product with precision and attention to detail."),
    ("Quality Control", "Every product undergoes rigorous quality testing to ensure it meets our high standards before being shipped to customers."),
];

#[component]
pub fn ManufacturingPage() -> impl IntoView {
    let meta = PageMeta::new(
        "Manufacturing",
        "Discover our state-of-the-art manufacturing capabilities and quality standards that set us apart in the sportswear industry.",
        "/manufacturing",
    )
    .with_keywords(&["sportswear manufacturing", "quality control", "production facilities", "custom manufacturing", "athletic wear production"]);

    view! {
        <Seo meta=meta />
        <Hero page=HeroPage::Manufacturing />
        <Container>
            <ManufacturingShowcase
                title="Crafted with Precision"
                subtitle="Every piece in our collection is manufactured using state-of-the-art technology and premium materials to ensure the highest quality and performance."
            />
            <section class="py-16">
                <SectionHeading
                    title="Our Manufacturing Process"
                    subtitle="From design to delivery, every step of our manufacturing process is carefully controlled to ensure the highest quality standards."
                />
                <ol class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {PROCESS_STEPS.iter().enumerate().map(|(i, (title, text))| view! {
                        <li class="text-center">
                            <div class="w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-6 bg-[var(--accent-primary)]">
                                <span class="text-white text-2xl font-bold">{i + 1}</span>
                            </div>
                            <h3 class="text-xl font-bold mb-4 text-[var(--text-primary)]">{*title}</h3>
                            <p class="text-[var(--text-secondary)]">{*text}</p>
                        </li>
                    }).collect_view()}
                </ol>
            </section>
        </Container>
        <ContactSection />
    }
}
