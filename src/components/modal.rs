//! Modal Dialog Component
//!
//! Overlay with title, description and a footer slot. Closing is left to the
//! caller so a rejected submission keeps the dialog open.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] description: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{move || title.get()}</h3>
                        <p class="modal-description">{move || description.get()}</p>
                        <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
