//! Crew Section
//!
//! One rank-select + name row per fixed role, then the supervisor field.

use leptos::prelude::*;

use crate::components::TextField;
use crate::models::Role;
use crate::ranks::RANKS;
use crate::store::{use_app_store, AppStateStoreFields};

/// Rank select plus name input for one crew role
#[component]
fn CrewRow(role: Role) -> impl IntoView {
    let store = use_app_store();
    let selected_rank = move || store.form().read().crew(role).rank.clone();

    view! {
        <div class="crew-row">
            <div class="field">
                <label>{role.label()}</label>
                <select
                    prop:value=selected_rank
                    on:change=move |ev| {
                        store.form().write().crew_mut(role).rank = event_target_value(&ev);
                    }
                >
                    {RANKS
                        .iter()
                        .map(|rank| view! { <option value=*rank>{*rank}</option> })
                        .collect_view()}
                </select>
            </div>
            <TextField
                label="Nome"
                placeholder="Nome completo"
                value=Callback::new(move |_| store.form().read().crew(role).name.clone())
                on_input=Callback::new(move |v| store.form().write().crew_mut(role).name = v)
            />
        </div>
    }
}

#[component]
pub fn CrewSection() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2>"Equipe"</h2>
            {Role::ALL
                .iter()
                .map(|&role| view! { <CrewRow role=role /> })
                .collect_view()}
            <TextField
                label="Supervisor Presente na Ocorrência"
                placeholder="Nome do supervisor"
                value=Callback::new(move |_| store.form().read().supervisor.clone())
                on_input=Callback::new(move |v| store.form().write().supervisor = v)
            />
        </section>
    }
}
