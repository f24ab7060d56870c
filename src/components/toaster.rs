//! Toaster Component
//!
//! Renders pending toasts bottom-right and dismisses each one after
//! `TOAST_TTL_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::toast::TOAST_TTL_MS;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || !ctx.toasts.with(|q| q.is_empty())>
            <div class="toaster" aria-live="polite">
                <For
                    each=move || ctx.toasts.get().toasts().to_vec()
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        // One timer per toast, started when it first renders
                        spawn_local(async move {
                            TimeoutFuture::new(TOAST_TTL_MS).await;
                            ctx.dismiss_toast(id);
                        });
                        view! {
                            <div class=toast.kind.class() on:click=move |_| ctx.dismiss_toast(id)>
                                {toast.message}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
