//! Report Result Panel
//!
//! Read-only view of the latest generated document, hidden until one exists.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ReportPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.report().read().is_empty()>
            <section class="card result-card">
                <h2>"Resultado Final (BOPM)"</h2>
                <textarea
                    class="report-output"
                    readonly=true
                    rows=20
                    prop:value=move || store.report().get()
                ></textarea>
            </section>
        </Show>
    }
}
