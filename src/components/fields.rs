//! Form Field Components
//!
//! Reusable labeled input and textarea wired through get/set callbacks.

use leptos::prelude::*;

/// Labeled single-line text input
///
/// # Arguments
/// * `value` - callback returning the current field value
/// * `on_input` - callback invoked with the new value on every keystroke
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] value: Callback<(), String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.run(())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labeled multi-line textarea
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(into)] value: Callback<(), String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <textarea
                placeholder=placeholder
                rows=rows
                prop:value=move || value.run(())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
