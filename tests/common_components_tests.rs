// common_components_tests.rs - Instantiation tests for the shared components
//
// Built with `--features ssr`; each test runs under its own reactive owner.

use leptos::prelude::*;
use aclon_site::web_app::components::common::*;
use rust_decimal::Decimal;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.set();
    f();
}

#[test]
fn test_star_rating_instantiation() {
    with_runtime(|| {
        let _ = StarRating(StarRatingProps {
            rating: 4.8,
            show_value: true,
            reviews: Some(1247),
        });

        let _ = StarRating(StarRatingProps {
            rating: 0.0,
            show_value: false,
            reviews: None,
        });
    });
}

#[test]
fn test_star_rating_renders_half_star() {
    with_runtime(|| {
        let html = view! { <StarRating rating=4.2 reviews=12 /> }.to_html();

        assert_eq!(html.matches("star-full").count(), 4);
        assert_eq!(html.matches("star-half").count(), 1);
        assert!(!html.contains("star-empty"));
        assert!(html.contains("4.2"));
        assert!(html.contains("(12)"));
    });
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        let _ = Badge(BadgeProps {
            children: Box::new(move || view! { "SALE" }.into_any()),
            variant: "red",
        });
    });
}

#[test]
fn test_price_display_shows_original_price() {
    with_runtime(|| {
        let html = view! {
            <PriceDisplay price=Decimal::new(8999, 2) original_price=Some(Decimal::new(11999, 2)) />
        }
        .to_html();

        assert!(html.contains("$89.99"));
        assert!(html.contains("$119.99"));
        assert!(html.contains("line-through"));
    });
}

#[test]
fn test_price_display_hides_lower_original_price() {
    with_runtime(|| {
        let html = view! {
            <PriceDisplay price=Decimal::new(5000, 2) original_price=Some(Decimal::new(4000, 2)) />
        }
        .to_html();

        assert!(html.contains("$50.00"));
        assert!(!html.contains("$40.00"));
    });
}

#[test]
fn test_section_heading_instantiation() {
    with_runtime(|| {
        let _ = SectionHeading(SectionHeadingProps {
            title: "Featured Products".to_string(),
            subtitle: None,
        });

        let html = view! { <SectionHeading title="Browse by Type" subtitle="By category" /> }.to_html();
        assert!(html.contains("Browse by Type"));
        assert!(html.contains("By category"));
    });
}

#[test]
fn test_link_button_variants() {
    with_runtime(|| {
        let html = view! {
            <LinkButton href="/quote" variant=ButtonVariant::Secondary>"Get Quote"</LinkButton>
        }
        .to_html();

        assert!(html.contains("href=\"/quote\""));
        assert!(html.contains("border-2"));
        assert!(html.contains("Get Quote"));
    });
}

#[test]
fn test_text_field_shows_error() {
    with_runtime(|| {
        let value = RwSignal::new(String::new());
        let error = RwSignal::new(Some("Name is required".to_string()));

        let html = view! {
            <TextField
                id="name"
                label="Name"
                required=true
                value=value
                on_input=Callback::new(move |v: String| value.set(v))
                error=error
            />
        }
        .to_html();

        assert!(html.contains("Name is required"));
        assert!(html.contains("id=\"name-error\""));
        assert!(html.contains("aria-invalid=\"true\""));
    });
}

#[test]
fn test_select_field_lists_options() {
    with_runtime(|| {
        let options = vec![
            ("Activewear".to_string(), "Activewear".to_string()),
            ("Gym Wear".to_string(), "Gym Wear".to_string()),
        ];
        let html = view! {
            <SelectField
                id="category"
                label="Product Category"
                placeholder="Select a category"
                options=options
                value=Signal::stored(String::new())
                on_change=Callback::new(|_: String| {})
            />
        }
        .to_html();

        assert!(html.contains("Select a category"));
        assert!(html.contains("Gym Wear"));
    });
}
