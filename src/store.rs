//! Global Application State Store
//!
//! Uses Leptos reactive_stores, provided to the component tree via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FormState, SeizedField};
use crate::report;

/// Application state: the editable form plus the latest generated report
/// (empty string = nothing generated yet)
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub form: FormState,
    pub report: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            report: String::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Render the current form snapshot into the report slot
pub fn store_generate_report(store: &AppStore) {
    let text = report::render(&store.form().read());
    *store.report().write() = text;
}

/// Restore the form defaults and clear the generated report
pub fn store_reset(store: &AppStore) {
    store.form().write().reset();
    store.report().write().clear();
}

pub fn store_add_support(store: &AppStore) {
    store.form().write().add_support_entry();
}

pub fn store_remove_support(store: &AppStore, id: u32) {
    store.form().write().remove_support_entry(id);
}

pub fn store_update_support(store: &AppStore, id: u32, text: String) {
    store.form().write().update_support_entry(id, text);
}

pub fn store_add_seized(store: &AppStore) {
    store.form().write().add_seized_item();
}

pub fn store_remove_seized(store: &AppStore, id: u32) {
    store.form().write().remove_seized_item(id);
}

pub fn store_update_seized(store: &AppStore, id: u32, field: SeizedField, value: String) {
    store.form().write().update_seized_item(id, field, value);
}
