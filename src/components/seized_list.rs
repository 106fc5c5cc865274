//! Seized Materials Section
//!
//! Dynamic list of quantity + description rows, keyed by id. Partially
//! filled rows stay editable here; the renderer is what drops them.

use leptos::prelude::*;

use crate::models::SeizedField;
use crate::store::{
    store_add_seized, store_remove_seized, store_update_seized, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn SeizedList() -> impl IntoView {
    let store = use_app_store();
    let items = move || store.form().read().seized.clone();

    view! {
        <section class="card">
            <div class="card-header">
                <h2>"Material Apreendido"</h2>
                <button class="add-btn" on:click=move |_| store_add_seized(&store)>
                    "+ Adicionar Material"
                </button>
            </div>
            <Show when=move || items().is_empty()>
                <p class="empty-hint">"Nenhum material adicionado."</p>
            </Show>
            <For
                each=items
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <div class="list-row">
                            <input
                                type="text"
                                class="qty-input"
                                placeholder="Qtd"
                                prop:value=move || {
                                    store
                                        .form()
                                        .read()
                                        .seized
                                        .iter()
                                        .find(|m| m.id == id)
                                        .map(|m| m.quantity.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    store_update_seized(
                                        &store,
                                        id,
                                        SeizedField::Quantity,
                                        event_target_value(&ev),
                                    );
                                }
                            />
                            <input
                                type="text"
                                placeholder="Descrição do material"
                                prop:value=move || {
                                    store
                                        .form()
                                        .read()
                                        .seized
                                        .iter()
                                        .find(|m| m.id == id)
                                        .map(|m| m.description.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    store_update_seized(
                                        &store,
                                        id,
                                        SeizedField::Description,
                                        event_target_value(&ev),
                                    );
                                }
                            />
                            <button
                                class="remove-btn"
                                on:click=move |_| store_remove_seized(&store, id)
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
