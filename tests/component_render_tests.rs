// component_render_tests.rs - Server-rendered HTML of the page sections
//
// Built with `--features ssr`. Components that render router links need a
// <Router> around them and are left to the app.

use std::sync::Arc;

use leptos::prelude::*;
use aclon_site::web_app::catalog::manufacturing_item_by_id;
use aclon_site::web_app::components::{
    ContactForm, ManufacturingCard, ManufacturingShowcase, QuoteForm,
};
use aclon_site::web_app::config::SiteSettings;
use aclon_site::web_app::forms::{CallbackSubmitter, ContactFormData, FormSubmitter};
use aclon_site::web_app::theme::provider::ThemeProviderProps;
use aclon_site::web_app::theme::{use_theme, Theme, ThemeProvider, ThemeToggle};

fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.set();
    f().into_view().to_html()
}

// ===== Manufacturing =====

#[test]
fn test_manufacturing_card_previews_features() {
    let item = manufacturing_item_by_id(1).expect("seed item 1");
    let hidden = item.features.len().saturating_sub(3);
    let html = render(|| view! { <ManufacturingCard item=item.clone() /> });

    assert!(html.contains(&item.title));
    assert!(html.contains("Learn More"));
    if hidden > 0 {
        assert!(html.contains(&format!("+{hidden} more")));
    }
}

#[test]
fn test_manufacturing_showcase_tabs() {
    let html = render(|| view! { <ManufacturingShowcase /> });

    assert!(html.contains("All Items (9)"));
    assert!(html.contains("Fabrics (3)"));
    assert!(html.contains("Machinery (3)"));
    assert!(html.contains("Sample Products (3)"));
    assert!(!html.contains("No Items Found"));
}

// ===== Forms =====

#[test]
fn test_contact_form_initial_render() {
    let html = render(|| view! { <ContactForm /> });

    assert!(html.contains("aria-label=\"Contact form\""));
    assert!(html.contains("Your Name"));
    assert!(html.contains("Subject (Optional)"));
    assert!(html.contains("Send Message"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn test_contact_form_accepts_injected_submitter() {
    let submitter: Arc<dyn FormSubmitter<ContactFormData>> =
        Arc::new(CallbackSubmitter::new(|_: &ContactFormData| Ok(())));
    let html = render(move || view! { <ContactForm submitter=submitter button_text="Send" /> });

    assert!(html.contains("Send"));
    assert!(!html.contains("Send Message"));
}

#[test]
fn test_quote_form_hides_subcategory_until_category_chosen() {
    let html = render(|| {
        provide_context(SiteSettings::default());
        view! { <QuoteForm /> }
    });

    assert!(html.contains("Select a category"));
    assert!(html.contains("Sports Uniforms"));
    assert!(!html.contains("Select a subcategory"));
    assert!(html.contains("Request Quote"));
}

// ===== Theme =====

#[test]
fn test_theme_toggle_outside_provider_is_light() {
    let html = render(|| view! { <ThemeToggle /> });
    assert!(html.contains("Switch to dark mode"));
}

#[test]
fn test_theme_provider_renders_light_on_server() {
    let owner = Owner::new();
    owner.set();

    let html = view! {
        <ThemeProvider>
            <ThemeToggle />
        </ThemeProvider>
    }
    .to_html();
    assert!(html.contains("Switch to dark mode"));
}

#[test]
fn test_theme_context_toggle() {
    let owner = Owner::new();
    owner.set();

    let _ = ThemeProvider(ThemeProviderProps {
        children: Box::new(|| {
            let theme = use_theme();
            assert_eq!(theme.theme(), Theme::Light);
            theme.toggle();
            assert_eq!(theme.theme(), Theme::Dark);
            assert!(!theme.is_system_theme());
            ().into_any()
        }),
    });
}
