//! Support Actions Section
//!
//! Dynamic list of free-text support entries, keyed by id.

use leptos::prelude::*;

use crate::store::{
    store_add_support, store_remove_support, store_update_support, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn SupportList() -> impl IntoView {
    let store = use_app_store();
    let entries = move || store.form().read().support.clone();

    view! {
        <section class="card">
            <div class="card-header">
                <h2>"Apoios"</h2>
                <button class="add-btn" on:click=move |_| store_add_support(&store)>
                    "+ Adicionar Apoio"
                </button>
            </div>
            <Show when=move || entries().is_empty()>
                <p class="empty-hint">"Nenhum apoio adicionado."</p>
            </Show>
            <For
                each=entries
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class="list-row">
                            <input
                                type="text"
                                placeholder="Descrição do apoio"
                                prop:value=move || {
                                    store
                                        .form()
                                        .read()
                                        .support
                                        .iter()
                                        .find(|e| e.id == id)
                                        .map(|e| e.text.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    store_update_support(&store, id, event_target_value(&ev));
                                }
                            />
                            <button
                                class="remove-btn"
                                on:click=move |_| store_remove_support(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </section>
    }
}
