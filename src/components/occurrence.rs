//! Occurrence Section
//!
//! Location, duty officer, nature and the two narrative fields.

use leptos::prelude::*;

use crate::components::{TextAreaField, TextField};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OccurrenceSection() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2>"Ocorrência"</h2>
            <div class="field-grid">
                <TextField
                    label="Local"
                    placeholder="Endereço da ocorrência"
                    value=Callback::new(move |_| store.form().read().location.clone())
                    on_input=Callback::new(move |v| store.form().write().location = v)
                />
                <TextField
                    label="Delegado de Plantão"
                    placeholder="Nome do delegado"
                    value=Callback::new(move |_| store.form().read().duty_officer.clone())
                    on_input=Callback::new(move |v| store.form().write().duty_officer = v)
                />
                <TextField
                    label="Natureza dos Fatos"
                    placeholder="Ex: Roubo, Flagrante..."
                    value=Callback::new(move |_| store.form().read().nature.clone())
                    on_input=Callback::new(move |v| store.form().write().nature = v)
                />
            </div>
            <TextAreaField
                label="Apresentação dos Fatos"
                placeholder="Descreva brevemente a apresentação dos fatos..."
                rows=3
                value=Callback::new(move |_| store.form().read().presentation.clone())
                on_input=Callback::new(move |v| store.form().write().presentation = v)
            />
            <TextAreaField
                label="Descrição dos Fatos"
                placeholder="Descreva detalhadamente os fatos ocorridos..."
                rows=5
                value=Callback::new(move |_| store.form().read().description.clone())
                on_input=Callback::new(move |v| store.form().write().description = v)
            />
        </section>
    }
}
