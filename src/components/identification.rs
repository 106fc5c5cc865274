//! Identification Section
//!
//! Report number, date, time and vehicle prefix.

use leptos::prelude::*;

use crate::components::TextField;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn IdentificationSection() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <p class="field-notice">
                "Atenção: Campos sem informação devem permanecer em branco."
            </p>
            <h2>"Identificação"</h2>
            <div class="field-grid">
                <TextField
                    label="Número do BOPM"
                    placeholder="Ex: 1234"
                    value=Callback::new(move |_| store.form().read().number.clone())
                    on_input=Callback::new(move |v| store.form().write().number = v)
                />
                <TextField
                    label="Data"
                    value=Callback::new(move |_| store.form().read().date.clone())
                    on_input=Callback::new(move |v| store.form().write().date = v)
                />
                <TextField
                    label="Horário"
                    placeholder="Ex: 14h30"
                    value=Callback::new(move |_| store.form().read().time.clone())
                    on_input=Callback::new(move |v| store.form().write().time = v)
                />
                <TextField
                    label="Prefixo"
                    placeholder="Ex: E-M09030"
                    value=Callback::new(move |_| store.form().read().prefix.clone())
                    on_input=Callback::new(move |v| store.form().write().prefix = v)
                />
            </div>
        </section>
    }
}
