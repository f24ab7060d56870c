//! Unit Selector Component
//!
//! Dropdown over the shared unit list.

use leptos::prelude::*;

use crate::models::UNITS;

#[component]
pub fn UnitSelector(
    #[prop(into)] id: String,
    current_unit: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select id=id class="select" on:change=move |ev| on_change(event_target_value(&ev))>
            {UNITS.iter().map(|(value, label)| {
                let is_selected = move || current_unit.get() == *value;
                view! {
                    <option value=*value selected=is_selected>{*label}</option>
                }
            }).collect_view()}
        </select>
    }
}
