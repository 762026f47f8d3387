// web_app/components/forms.rs - Contact and quote form components
//
// Both forms keep their data and errors in signals, validate on submit and
// hand valid data to a `FormSubmitter` after a short delay. The status
// banner returns to idle on its own.

use std::sync::Arc;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::common::{Button, SelectField, TextAreaField, TextField};
use crate::web_app::catalog::subcategories_by_category;
use crate::web_app::config::SiteSettings;
use crate::web_app::forms::{
    ContactField, ContactFormData, ContactFormErrors, FormSubmitter, MailtoSubmitter,
    QuoteField, QuoteFormData, QuoteFormErrors, SubmissionTicket, SubmissionTracker, SubmitStatus,
    submit_form, STATUS_RESET_MS, SUBMIT_DELAY_MS,
};
use crate::web_app::model::ProductCategory;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const QUOTE_SUCCESS_MESSAGE: &str =
    "Quote request submitted successfully! We'll get back to you within 24 hours.";
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Something went wrong. Please try again or contact us directly.";

/// Schedules the submission and the status reset
///
/// `on_success` receives the cleared form after a successful submit, before
/// the status banner appears.
fn submit_after_delay<F>(
    data: F,
    ticket: SubmissionTicket,
    submitter: StoredValue<Arc<dyn FormSubmitter<F>>>,
    tracker: RwSignal<SubmissionTracker>,
    on_success: impl FnOnce(F) + 'static,
) where
    F: Default + Send + Sync + 'static,
{
    set_timeout(
        move || {
            let Some(submitter) = submitter.try_get_value() else {
                return;
            };
            let mut form = data;
            let result = submit_form(submitter.as_ref(), &mut form);
            if result.is_ok() {
                on_success(form);
            }
            let _ = tracker.try_update(|t| t.complete(ticket, &result));

            set_timeout(
                move || {
                    let _ = tracker.try_update(|t| t.reset(ticket));
                },
                Duration::from_millis(STATUS_RESET_MS),
            );
        },
        Duration::from_millis(SUBMIT_DELAY_MS),
    );
}

#[component]
fn StatusBanner(status: Signal<SubmitStatus>, success_message: &'static str) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Success => Some(view! {
            <div class="p-4 rounded-lg bg-green-100 border border-green-300 text-green-800" role="status">
                {success_message}
            </div>
        }
        .into_any()),
        SubmitStatus::Error => Some(view! {
            <div class="p-4 rounded-lg bg-red-100 border border-red-300 text-red-800" role="alert">
                {SUBMIT_ERROR_MESSAGE}
            </div>
        }
        .into_any()),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

/// Contact form
///
/// Without a `submitter` the form opens a mail draft to the configured
/// contact address.
#[component]
pub fn ContactForm(
    #[prop(optional)]
    submitter: Option<Arc<dyn FormSubmitter<ContactFormData>>>,
    #[prop(default = "Send Message")]
    button_text: &'static str,
) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let submitter = StoredValue::new(submitter.unwrap_or_else(|| {
        Arc::new(MailtoSubmitter::to(settings.contact_email.clone())) as Arc<dyn FormSubmitter<_>>
    }));

    let data = RwSignal::new(ContactFormData::default());
    let errors = RwSignal::new(ContactFormErrors::default());
    let tracker = RwSignal::new(SubmissionTracker::default());
    let status = Signal::derive(move || tracker.with(|t| t.status()));

    let value = move |field: ContactField| Signal::derive(move || data.with(|d| d.value(field).to_string()));
    let error = move |field: ContactField| {
        Signal::derive(move || errors.with(|e| e.get(field).map(ToString::to_string)))
    };
    let on_input = move |field: ContactField| {
        Callback::new(move |input: String| {
            data.update(|d| d.set(field, input));
            errors.update(|e| e.clear(field));
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let snapshot = data.get_untracked();
        match snapshot.validate() {
            Err(found) => errors.set(found),
            Ok(()) => {
                errors.set(ContactFormErrors::default());
                let Some(ticket) = tracker.try_update(|t| t.begin()).flatten() else {
                    return;
                };
                submit_after_delay(snapshot, ticket, submitter, tracker, move |cleared| {
                    data.set(cleared)
                });
            }
        }
    };

    view! {
        <form class="space-y-6" aria-label="Contact form" novalidate=true on:submit=on_submit>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <TextField
                    id="contact-name"
                    label="Name"
                    placeholder="Your Name"
                    required=true
                    value=value(ContactField::Name)
                    on_input=on_input(ContactField::Name)
                    error=error(ContactField::Name)
                />
                <TextField
                    id="contact-email"
                    label="Email"
                    input_type="email"
                    placeholder="Your Email"
                    required=true
                    value=value(ContactField::Email)
                    on_input=on_input(ContactField::Email)
                    error=error(ContactField::Email)
                />
            </div>
            <TextField
                id="contact-subject"
                label="Subject"
                placeholder="Subject (Optional)"
                value=value(ContactField::Subject)
                on_input=on_input(ContactField::Subject)
            />
            <TextAreaField
                id="contact-message"
                label="Message"
                placeholder="Tell us about your project or inquiry..."
                required=true
                value=value(ContactField::Message)
                on_input=on_input(ContactField::Message)
                error=error(ContactField::Message)
            />
            <Button button_type="submit" class="w-full" disabled=Signal::derive(move || status.get().is_submitting())>
                {move || if status.get().is_submitting() { "Sending..." } else { button_text }}
            </Button>
            <StatusBanner status=status success_message=CONTACT_SUCCESS_MESSAGE />
        </form>
    }
}

/// Quote request form
///
/// The subcategory select only appears once a category is chosen, and
/// changing the category clears it.
#[component]
pub fn QuoteForm(
    #[prop(optional)]
    submitter: Option<Arc<dyn FormSubmitter<QuoteFormData>>>,
    #[prop(default = "Request Quote")]
    button_text: &'static str,
) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let submitter = StoredValue::new(submitter.unwrap_or_else(|| {
        Arc::new(MailtoSubmitter::to(settings.quote_email.clone())) as Arc<dyn FormSubmitter<_>>
    }));

    let data = RwSignal::new(QuoteFormData::default());
    let errors = RwSignal::new(QuoteFormErrors::default());
    let tracker = RwSignal::new(SubmissionTracker::default());
    let status = Signal::derive(move || tracker.with(|t| t.status()));

    let value = move |field: QuoteField| Signal::derive(move || data.with(|d| d.value(field)));
    let error = move |field: QuoteField| {
        Signal::derive(move || errors.with(|e| e.get(field).map(ToString::to_string)))
    };
    let on_input = move |field: QuoteField| {
        Callback::new(move |input: String| {
            data.update(|d| d.set(field, input));
            errors.update(|e| e.clear(field));
        })
    };

    let category_options = ProductCategory::ALL
        .into_iter()
        .map(|c| (c.name().to_string(), c.name().to_string()))
        .collect::<Vec<_>>();
    let selected_category = Memo::new(move |_| data.with(|d| d.category));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let snapshot = data.get_untracked();
        match snapshot.validate() {
            Err(found) => errors.set(found),
            Ok(()) => {
                errors.set(QuoteFormErrors::default());
                let Some(ticket) = tracker.try_update(|t| t.begin()).flatten() else {
                    return;
                };
                submit_after_delay(snapshot, ticket, submitter, tracker, move |cleared| {
                    data.set(cleared)
                });
            }
        }
    };

    view! {
        <form class="space-y-6" aria-label="Quote request form" novalidate=true on:submit=on_submit>
            <TextField
                id="quote-name"
                label="Full Name"
                placeholder="Your Full Name"
                required=true
                value=value(QuoteField::Name)
                on_input=on_input(QuoteField::Name)
                error=error(QuoteField::Name)
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <TextField
                    id="quote-email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Your Email Address"
                    required=true
                    value=value(QuoteField::Email)
                    on_input=on_input(QuoteField::Email)
                    error=error(QuoteField::Email)
                />
                <TextField
                    id="quote-phone"
                    label="Phone Number"
                    input_type="tel"
                    placeholder="Your Phone Number (Optional)"
                    value=value(QuoteField::Phone)
                    on_input=on_input(QuoteField::Phone)
                    error=error(QuoteField::Phone)
                />
            </div>
            <SelectField
                id="quote-category"
                label="Product Category"
                placeholder="Select a category"
                options=category_options
                required=true
                value=value(QuoteField::Category)
                on_change=on_input(QuoteField::Category)
                error=error(QuoteField::Category)
            />
            {move || selected_category.get().map(|category| {
                let options = subcategories_by_category(category.name())
                    .into_iter()
                    .map(|sub| (sub.clone(), sub))
                    .collect::<Vec<_>>();
                view! {
                    <SelectField
                        id="quote-subcategory"
                        label="Product Subcategory"
                        placeholder="Select a subcategory (optional)"
                        options=options
                        value=value(QuoteField::Subcategory)
                        on_change=on_input(QuoteField::Subcategory)
                    />
                }
            })}
            <TextField
                id="quote-quantity"
                label="Quantity Needed"
                input_type="number"
                placeholder="Quantity Needed"
                required=true
                value=value(QuoteField::Quantity)
                on_input=on_input(QuoteField::Quantity)
                error=error(QuoteField::Quantity)
            />
            <TextAreaField
                id="quote-requirements"
                label="Custom Requirements"
                placeholder="Size specifications, color preferences, customization needs, etc."
                rows=3
                value=value(QuoteField::CustomRequirements)
                on_input=on_input(QuoteField::CustomRequirements)
            />
            <TextAreaField
                id="quote-message"
                label="Additional Details"
                placeholder="Additional Requirements or Special Instructions"
                rows=4
                value=value(QuoteField::Message)
                on_input=on_input(QuoteField::Message)
            />
            <Button button_type="submit" class="w-full" disabled=Signal::derive(move || status.get().is_submitting())>
                {move || if status.get().is_submitting() { "Processing..." } else { button_text }}
            </Button>
            <StatusBanner status=status success_message=QUOTE_SUCCESS_MESSAGE />
        </form>
    }
}

/// Quote form with the benefits column
#[component]
pub fn QuoteSection(
    #[prop(default = "Request a Quote")]
    title: &'static str,
    #[prop(default = "Fill out the form and select your products to get a custom price.")]
    subtitle: &'static str,
) -> impl IntoView {
    const BENEFITS: [(&str, &str, &str); 4] = [
        ("💰", "Competitive Pricing", "Get the best rates for bulk orders and custom requirements"),
        ("⚡", "Fast Response", "Receive your custom quote within 24 hours"),
        ("🎯", "Custom Solutions", "Tailored products to meet your specific needs"),
        ("📦", "Bulk Orders", "Special pricing for team uniforms and large quantities"),
    ];

    view! {
        <section id="quote" class="py-16">
            <div class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 text-[var(--text-primary)]">{title}</h2>
                <p class="text-lg sm:text-xl max-w-3xl mx-auto text-[var(--text-secondary)]">{subtitle}</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div class="space-y-6">
                    {BENEFITS.iter().map(|(icon, title, description)| view! {
                        <div class="flex gap-4 p-6 rounded-xl bg-[var(--bg-secondary)] border border-[var(--border-color)]">
                            <div class="text-3xl">{*icon}</div>
                            <div>
                                <h3 class="font-bold text-[var(--text-primary)] mb-1">{*title}</h3>
                                <p class="text-sm text-[var(--text-secondary)]">{*description}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
                <div class="p-8 rounded-xl bg-[var(--bg-secondary)] border border-[var(--border-color)]">
                    <QuoteForm />
                </div>
            </div>
        </section>
    }
}
