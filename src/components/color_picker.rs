//! Color Picker Component
//!
//! Swatch grid for category colours.

use leptos::prelude::*;

/// Swatch options: (name, hex)
pub const COLORS: &[(&str, &str)] = &[
    ("Green", "#84cc16"),
    ("Blue", "#0ea5e9"),
    ("Purple", "#4f46e5"),
    ("Pink", "#ec4899"),
    ("Yellow", "#f59e0b"),
    ("Gray", "#64748b"),
    ("Indigo", "#6366f1"),
    ("Orange", "#d97706"),
    ("Red", "#ef4444"),
    ("Teal", "#14b8a6"),
];

#[component]
pub fn ColorPicker(
    selected: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="color-grid">
            {COLORS.iter().map(|(name, value)| {
                let is_selected = move || selected.get() == *value;
                view! {
                    <button
                        type="button"
                        class="color-swatch"
                        style=format!("background-color: {};", value)
                        aria-label=format!("Select {} color", name)
                        on:click=move |_| on_change(value.to_string())
                    >
                        <Show when=is_selected>
                            <span class="color-swatch-dot"></span>
                        </Show>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
