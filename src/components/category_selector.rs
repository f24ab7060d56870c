use leptos::prelude::*;

use crate::models::CATEGORY_NAMES;

/// Category dropdown. `any_label` adds a leading "all" option with an empty
/// value, used by filter bars.
#[component]
pub fn CategorySelector(
    #[prop(into)] id: String,
    #[prop(into)] current: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
    #[prop(into, default = "Select category".to_string())] any_label: String,
) -> impl IntoView {
    view! {
        <select id=id class="select" on:change=move |ev| on_change(event_target_value(&ev))>
            <option value="" selected=move || current.get().is_empty()>{any_label}</option>
            {CATEGORY_NAMES.iter().map(|name| {
                let is_selected = move || current.get() == *name;
                view! {
                    <option value=*name selected=is_selected>{*name}</option>
                }
            }).collect_view()}
        </select>
    }
}
