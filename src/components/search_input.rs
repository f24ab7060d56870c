use leptos::prelude::*;

/// Search box feeding a list filter on every keystroke
#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
