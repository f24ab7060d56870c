use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Fallback for unmatched paths
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    tracing::warn!(path = %location.pathname.get_untracked(), "no route matched");

    view! {
        <div class="page not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <A href="/">
                <span class="btn primary">"Return to Home"</span>
            </A>
        </div>
    }
}
