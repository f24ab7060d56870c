use leptos::prelude::*;

/// Horizontal bar filled to `value` percent
#[component]
pub fn ProgressBar(value: f64) -> impl IntoView {
    let width = value.clamp(0.0, 100.0);
    view! {
        <div class="progress">
            <div class="progress-fill" style=format!("width: {:.1}%;", width)></div>
        </div>
    }
}
