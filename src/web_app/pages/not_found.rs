// web_app/pages/not_found.rs - 404 page

use leptos::prelude::*;

use crate::web_app::components::{LinkButton, Seo};
use crate::web_app::seo::PageMeta;

/// 404 Not Found page
///
/// Also rendered by the product routes for unknown slugs. During SSR the
/// response status is set to 404.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    let mut meta = PageMeta::new("Page Not Found", "The page you are looking for does not exist.", "/404");
    meta.noindex = true;

    view! {
        <Seo meta=meta />
        <div class="min-h-[60vh] flex items-center justify-center pt-16">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                <p class="text-xl text-[var(--text-secondary)] mb-8">"Page not found"</p>
                <LinkButton href="/">"Back to Home"</LinkButton>
            </div>
        </div>
    }
}
