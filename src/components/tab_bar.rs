//! Tab Bar Component
//!
//! Row of tabs switching a page between panels.

use leptos::prelude::*;

#[component]
pub fn TabBar(
    /// (value, label) pairs
    tabs: Vec<(&'static str, Signal<String>)>,
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {tabs.into_iter().map(|(value, label)| {
                let tab_class = move || {
                    if active.get() == value { "tab active" } else { "tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_active.set(value)>
                        {move || label.get()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Tab with a fixed label
pub fn tab(value: &'static str, label: &str) -> (&'static str, Signal<String>) {
    (value, Signal::stored(label.to_string()))
}
