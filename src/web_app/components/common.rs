// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the site.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::display::{format_usd, star_counts};

/// Primary button component
///
/// A styled button with hover effects. Pass a signal to `disabled` to lock
/// it while a form is submitting.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold \
                      bg-[var(--accent-primary)] text-white hover:bg-[var(--accent-hover)] \
                      transition-colors disabled:opacity-50 disabled:cursor-not-allowed \
                      shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Visual style of a [`LinkButton`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-[var(--accent-primary)] text-white hover:bg-[var(--accent-hover)] shadow-sm"
            }
            ButtonVariant::Secondary => {
                "border-2 border-[var(--accent-primary)] text-[var(--accent-primary)] \
                 hover:bg-[var(--accent-primary)] hover:text-white"
            }
            ButtonVariant::Ghost => "text-[var(--text-primary)] hover:bg-[var(--bg-tertiary)]",
        }
    }
}

/// Call-to-action link styled as a button
#[component]
pub fn LinkButton(
    /// Target URL, path or `#anchor`
    #[prop(into)]
    href: String,
    children: Children,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=format!(
                "inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold transition-all {} {}",
                variant.class(),
                class,
            )
        >
            {children()}
        </a>
    }
}

/// Centered, width-limited page section
#[component]
pub fn Container(
    children: Children,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("mx-auto w-full max-w-7xl px-4 sm:px-6 lg:px-8 {}", class)>
            {children()}
        </div>
    }
}

/// Section title with optional subtitle
#[component]
pub fn SectionHeading(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold text-[var(--text-primary)] mb-4">{title}</h2>
            {subtitle.map(|text| view! {
                <p class="text-lg text-[var(--text-secondary)] max-w-2xl mx-auto">{text}</p>
            })}
        </div>
    }
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled, half and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value
    #[prop(default = true)]
    show_value: bool,
    /// Review count shown after the value
    #[prop(optional)]
    reviews: Option<u32>,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            // Full stars
            {(0..full_stars).map(|_| view! {
                <span class="star-full text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <span class="star-half relative inline-block text-lg">
                    <span class="text-gray-300">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </span>
            })}

            // Empty stars
            {(0..empty_stars).map(|_| view! {
                <span class="star-empty text-gray-300 text-lg">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-semibold text-[var(--text-secondary)]">
                    {format!("{:.1}", rating)}
                    {reviews.map(|count| format!(" ({count})"))}
                </span>
            </Show>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "red" => "px-2.5 py-0.5 text-xs font-bold rounded-full bg-red-600 text-white",
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "dark" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-black/70 text-white",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Price display component
///
/// Formats the price as US dollars; a higher original price is shown
/// struck through next to it.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Price before discount, if any
    #[prop(default = None)]
    original_price: Option<Decimal>,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-[var(--text-primary)]"
    } else {
        "text-lg font-semibold text-[var(--text-primary)]"
    };
    let original = original_price.filter(|original| *original > price);

    view! {
        <span class="flex items-baseline gap-2">
            <span class=class>{format_usd(price)}</span>
            {original.map(|original| view! {
                <span class="text-sm line-through text-[var(--text-muted)]">{format_usd(original)}</span>
            })}
        </span>
    }
}

/// Inline error under a form field
#[component]
pub fn FieldErrorText(
    /// Element id referenced by the field's `aria-describedby`
    #[prop(into)]
    id: String,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        error.get().map(|message| view! {
            <p id=id.clone() class="mt-1 text-sm text-red-500" role="alert">{message}</p>
        })
    }
}

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-3 rounded-lg border border-red-500 bg-[var(--bg-primary)] \
         text-[var(--text-primary)] focus:ring-2 focus:ring-red-500 outline-none"
    } else {
        "w-full px-4 py-3 rounded-lg border border-[var(--border-color)] bg-[var(--bg-primary)] \
         text-[var(--text-primary)] focus:ring-2 focus:ring-[var(--accent-primary)] outline-none"
    }
}

/// Labelled text input with inline error
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
    /// Input type (text, email, tel, number)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2 text-[var(--text-primary)]">
                {label} {required.then_some(" *")}
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=move || field_class(error.with(Option::is_some))
                prop:value=move || value.get()
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorText id=error_id error=error />
        </div>
    }
}

/// Labelled textarea with inline error
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 5)]
    rows: u32,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2 text-[var(--text-primary)]">
                {label} {required.then_some(" *")}
            </label>
            <textarea
                id=id
                rows=rows
                placeholder=placeholder
                class=move || format!("{} resize-none", field_class(error.with(Option::is_some)))
                prop:value=move || value.get()
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldErrorText id=error_id error=error />
        </div>
    }
}

/// Select dropdown component
///
/// A styled select for string values. The first option is the empty
/// placeholder.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    /// Placeholder option text (value "")
    placeholder: &'static str,
    /// Available options as (value, label) pairs
    options: Vec<(String, String)>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2 text-[var(--text-primary)]">
                {label} {required.then_some(" *")}
            </label>
            <select
                id=id
                class=move || format!("{} cursor-pointer", field_class(error.with(Option::is_some)))
                aria-invalid=move || error.with(Option::is_some).to_string()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.with(String::is_empty)>{placeholder}</option>
                {options.into_iter().map(|(opt_value, label)| {
                    let opt_val = opt_value.clone();
                    view! {
                        <option
                            value=opt_value
                            selected=move || value.with(|v| *v == opt_val)
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <FieldErrorText id=error_id error=error />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_marks_errors() {
        assert!(field_class(true).contains("border-red-500"));
        assert!(!field_class(false).contains("border-red-500"));
    }

    #[test]
    fn test_button_variants_differ() {
        assert_ne!(ButtonVariant::Primary.class(), ButtonVariant::Secondary.class());
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
