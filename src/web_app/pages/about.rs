// web_app/pages/about.rs - Company story

use leptos::prelude::*;

use crate::web_app::components::{AboutSection, Container, ContactSection, Hero, SectionHeading, Seo};
use crate::web_app::model::HeroPage;
use crate::web_app::seo::PageMeta;

const VALUES: [(&str, &str, &str); 3] = [
    ("🏆", "Quality First", "Every product we create meets the highest standards of quality, durability, and performance. We never compromise on excellence."),
    ("💡", "Innovation", "We continuously research and develop new materials and technologies to provide athletes with cutting-edge performance wear."),
    ("🤝", "Customer Focus", "Our customers are at the heart of everything we do. We listen, adapt, and deliver solutions that exceed expectations."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let meta = PageMeta::new(
        "About Us",
        "Learn about Aclon Sports journey from humble beginnings to becoming a leading manufacturer of premium sportswear for athletes worldwide.",
        "/about",
    )
    .with_keywords(&["about Aclon Sports", "company history", "sportswear manufacturer", "athletic clothing", "team uniforms"]);

    view! {
        <Seo meta=meta />
        <Hero page=HeroPage::About />
        <AboutSection />
        <section class="py-20">
            <Container>
                <SectionHeading
                    title="Our Mission & Values"
                    subtitle="We're driven by a simple mission: to empower athletes with the highest quality sportswear that enhances their performance and confidence."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {VALUES.iter().map(|(icon, title, text)| view! {
                        <div class="p-8 rounded-xl text-center bg-[var(--bg-secondary)] border border-[var(--border-color)]">
                            <div class="text-4xl mb-4">{*icon}</div>
                            <h3 class="text-2xl font-bold mb-4 text-[var(--text-primary)]">{*title}</h3>
                            <p class="text-[var(--text-secondary)]">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Container>
        </section>
        <ContactSection />
    }
}
