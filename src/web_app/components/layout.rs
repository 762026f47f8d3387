// web_app/components/layout.rs - Site chrome and static sections
//
// Navbar and Footer wrap every page; Hero, AboutSection and ContactSection
// are composed by the pages.

use chrono::Datelike;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::common::{Container, LinkButton, ButtonVariant};
use super::forms::ContactForm;
use crate::data::content::{footer_groups, hero, navigation, ABOUT_FEATURES, COMPANY};
use crate::web_app::config::SiteSettings;
use crate::web_app::model::{HeroAlignment, HeroPage, NavigationItem};
use crate::web_app::theme::ThemeToggle;

/// Whether `href` is the current page or one of its ancestors
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-semibold text-[var(--accent-primary)]"
    } else {
        "text-sm font-medium text-[var(--text-secondary)] hover:text-[var(--text-primary)] transition-colors"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();
    let menu_open = RwSignal::new(false);
    let open_dropdown = RwSignal::new(None::<String>);

    // Close menus after navigating
    Effect::new(move |_| {
        let _ = location.pathname.get();
        menu_open.set(false);
        open_dropdown.set(None);
    });

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            menu_open.set(false);
            open_dropdown.set(None);
        }
    };

    let desktop_items = navigation()
        .into_iter()
        .map(|item| desktop_nav_item(item, pathname, open_dropdown))
        .collect_view();

    let mobile_items = navigation()
        .into_iter()
        .map(|item| {
            let href = item.href.clone();
            let children = item
                .children
                .into_iter()
                .map(|child| view! {
                    <A href=child.href.clone() attr:class="block pl-8 py-2 text-sm text-[var(--text-secondary)]">
                        {child.name.clone()}
                    </A>
                })
                .collect_view();
            view! {
                <A
                    href=item.href.clone()
                    attr:class=move || format!("block px-4 py-3 {}", nav_link_class(is_active(&pathname(), &href)))
                >
                    {item.name.clone()}
                </A>
                {children}
            }
        })
        .collect_view();

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-[var(--bg-primary)]/90 backdrop-blur-md border-b border-[var(--border-color)]"
            on:keydown=on_keydown
        >
            <Container class="h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2 font-black text-xl tracking-tight text-[var(--text-primary)]">
                    <span class="text-[var(--accent-primary)]">"ACLON"</span>
                    <span>"SPORTS"</span>
                </A>

                <nav class="hidden md:flex items-center gap-8" aria-label="Main navigation">
                    {desktop_items}
                </nav>

                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg text-[var(--text-primary)]"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </Container>

            <Show when=move || menu_open.get()>
                <nav id="mobile-menu" class="md:hidden border-t border-[var(--border-color)] bg-[var(--bg-primary)]" aria-label="Mobile navigation">
                    {mobile_items.clone()}
                </nav>
            </Show>
        </header>
    }
}

fn desktop_nav_item(
    item: NavigationItem,
    pathname: impl Fn() -> String + Copy + Send + Sync + 'static,
    open_dropdown: RwSignal<Option<String>>,
) -> AnyView {
    let href = item.href.clone();
    let active = move || is_active(&pathname(), &href);

    if item.children.is_empty() {
        return view! {
            <A href=item.href.clone() attr:class=move || nav_link_class(active()) attr:title=item.description.clone()>
                {item.name.clone()}
            </A>
        }
        .into_any();
    }

    let name = item.name.clone();
    let is_open = {
        let name = name.clone();
        move || open_dropdown.with(|open| open.as_deref() == Some(name.as_str()))
    };
    let open_name = name.clone();
    let children = item
        .children
        .into_iter()
        .map(|child| view! {
            <A href=child.href.clone() attr:class="block px-4 py-2 text-sm text-[var(--text-secondary)] hover:bg-[var(--bg-tertiary)] hover:text-[var(--text-primary)]">
                {child.name.clone()}
            </A>
        })
        .collect_view();

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| open_dropdown.set(Some(open_name.clone()))
            on:mouseleave=move |_| open_dropdown.set(None)
        >
            <A href=item.href.clone() attr:class=move || nav_link_class(active()) attr:aria-haspopup="true">
                {name} " ▾"
            </A>
            <Show when=is_open.clone()>
                <div class="absolute left-0 mt-2 w-56 rounded-lg shadow-[var(--shadow-medium)] bg-[var(--bg-secondary)] border border-[var(--border-color)] py-2">
                    {children.clone()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let year = chrono::Utc::now().year();

    let groups = footer_groups()
        .into_iter()
        .map(|group| view! {
            <div>
                <h3 class="text-sm font-semibold uppercase tracking-wider text-[var(--text-primary)] mb-4">
                    {group.title.clone()}
                </h3>
                <ul class="space-y-2">
                    {group.links.into_iter().map(|link| view! {
                        <li>
                            <A href=link.href.clone() attr:class="text-sm text-[var(--text-secondary)] hover:text-[var(--accent-primary)] transition-colors">
                                {link.name.clone()}
                            </A>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        })
        .collect_view();

    let social = COMPANY
        .social
        .iter()
        .map(|(name, url)| view! {
            <a href=*url target="_blank" rel="noopener noreferrer" aria-label=*name
               class="text-[var(--text-muted)] hover:text-[var(--accent-primary)] transition-colors text-sm">
                {*name}
            </a>
        })
        .collect_view();

    view! {
        <footer class="border-t border-[var(--border-color)] bg-[var(--bg-secondary)] pt-16 pb-8 mt-auto">
            <Container>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-10 mb-12">
                    <div class="lg:col-span-2">
                        <p class="font-black text-xl text-[var(--text-primary)] mb-4">{COMPANY.name}</p>
                        <p class="text-sm text-[var(--text-secondary)] mb-6">{COMPANY.tagline}</p>
                        <ul class="space-y-1 text-sm text-[var(--text-secondary)]">
                            <li>
                                <a href=format!("mailto:{}", settings.contact_email)>{settings.contact_email.clone()}</a>
                            </li>
                            <li>{COMPANY.phone}</li>
                            <li>{COMPANY.address}</li>
                        </ul>
                    </div>
                    {groups}
                </div>

                <div class="border-t border-[var(--border-color)] pt-8 flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-[var(--text-muted)]">
                    <p>{format!("© {year} {}. All rights reserved.", COMPANY.name)}</p>
                    <div class="flex gap-6">{social}</div>
                    <p>"Made with ❤️ for athletes"</p>
                </div>
            </Container>
        </footer>
    }
}

/// Full-width banner at the top of a page
#[component]
pub fn Hero(page: HeroPage) -> impl IntoView {
    let config = hero(page);
    let align = match config.alignment {
        HeroAlignment::Left => "items-start text-left",
        HeroAlignment::Center => "items-center text-center mx-auto",
    };

    view! {
        <section class="hero relative min-h-[70vh] flex items-center overflow-hidden pt-16">
            {config.background.map(|bg| view! {
                <img src=bg.src alt=bg.alt class="absolute inset-0 w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/60"></div>
            })}
            <Container class="relative z-10 py-24">
                <div class=format!("flex flex-col max-w-3xl {}", align)>
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-black text-white tracking-tight mb-6">
                        {config.headline}
                    </h1>
                    <p class="text-lg sm:text-xl text-gray-200 mb-10 leading-relaxed">
                        {config.subheadline}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <LinkButton href=config.primary_cta.href>{config.primary_cta.text}</LinkButton>
                        {config.secondary_cta.map(|cta| view! {
                            <LinkButton href=cta.href variant=ButtonVariant::Secondary class="text-white border-white">
                                {cta.text}
                            </LinkButton>
                        })}
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let features = ABOUT_FEATURES
        .iter()
        .map(|(icon, title, description)| view! {
            <div class="p-6 rounded-xl bg-[var(--bg-primary)] border border-[var(--border-color)]">
                <div class="text-3xl mb-3">{*icon}</div>
                <h3 class="font-bold text-[var(--text-primary)] mb-2">{*title}</h3>
                <p class="text-sm text-[var(--text-secondary)]">{*description}</p>
            </div>
        })
        .collect_view();

    view! {
        <section id="story" class="py-20 bg-[var(--bg-secondary)]">
            <Container class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-6 text-[var(--text-primary)]">
                        "About " <span class="text-[var(--accent-primary)]">"Aclon Sports"</span>
                    </h2>
                    <p class="text-lg text-[var(--text-secondary)] mb-6 leading-relaxed">
                        "We're passionate about creating premium sportswear that empowers athletes to achieve their best performance. "
                        "Every piece is crafted with precision, using the finest materials and innovative technologies."
                    </p>
                    <p class="text-lg text-[var(--text-secondary)] mb-8 leading-relaxed">
                        "From professional athletes to fitness enthusiasts, our gear is designed to support your journey, "
                        "enhance your performance, and reflect your dedication to excellence."
                    </p>
                    <LinkButton href="/about">"Our Story"</LinkButton>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">{features}</div>
            </Container>
        </section>
    }
}

/// Contact details next to the contact form
#[component]
pub fn ContactSection() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let hours = COMPANY
        .business_hours
        .iter()
        .map(|line| view! { <li>{*line}</li> })
        .collect_view();
    let social = COMPANY
        .social
        .iter()
        .map(|(name, url)| view! {
            <a href=*url target="_blank" rel="noopener noreferrer" class="text-sm text-[var(--accent-primary)] hover:underline">
                {*name}
            </a>
        })
        .collect_view();

    view! {
        <section id="contact" class="py-20">
            <Container>
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-[var(--text-primary)] mb-4">"Get in Touch"</h2>
                    <p class="text-lg text-[var(--text-secondary)] max-w-2xl mx-auto">
                        "Ready to elevate your sportswear game? We're here to help you find the perfect solution for your needs."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <dl class="space-y-6">
                            <div>
                                <dt class="font-semibold text-[var(--text-primary)]">"Email"</dt>
                                <dd class="text-[var(--text-secondary)]">
                                    <a href=format!("mailto:{}", settings.contact_email)>{settings.contact_email.clone()}</a>
                                </dd>
                            </div>
                            <div>
                                <dt class="font-semibold text-[var(--text-primary)]">"Phone"</dt>
                                <dd class="text-[var(--text-secondary)]">{COMPANY.phone}</dd>
                            </div>
                            <div>
                                <dt class="font-semibold text-[var(--text-primary)]">"Address"</dt>
                                <dd class="text-[var(--text-secondary)]">{COMPANY.address}</dd>
                            </div>
                        </dl>
                        <div>
                            <h3 class="font-semibold text-[var(--text-primary)] mb-2">"Business Hours"</h3>
                            <ul class="text-sm text-[var(--text-secondary)] space-y-1">{hours}</ul>
                        </div>
                        <div>
                            <h3 class="font-semibold text-[var(--text-primary)] mb-2">"Follow Us"</h3>
                            <div class="flex gap-4">{social}</div>
                        </div>
                    </div>
                    <div id="contact-form" class="p-8 rounded-xl bg-[var(--bg-secondary)] border border-[var(--border-color)]">
                        <h3 class="text-2xl font-bold text-[var(--text-primary)] mb-6">"Send us a Message"</h3>
                        <ContactForm />
                    </div>
                </div>
            </Container>
        </section>
    }
}
