//! BOPM Generator App
//!
//! Main application component: form sections, action row and result panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::clipboard;
use crate::components::{
    CrewSection, IdentificationSection, OccurrenceSection, ReportPanel, SeizedList, SupportList,
};
use crate::store::{store_generate_report, store_reset, AppState, AppStateStoreFields};

/// How long the copy status message stays visible
const STATUS_TIMEOUT_MS: u32 = 2_500;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (status, set_status) = signal::<Option<String>>(None);

    let flash_status = move |message: String| {
        set_status.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
            set_status.set(None);
        });
    };

    let on_generate = move |_| {
        store_generate_report(&store);
        web_sys::console::log_1(&"[APP] BOPM gerado".into());
    };

    let on_copy = move |_| {
        let text = store.report().get();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => flash_status("BOPM copiado com sucesso!".to_string()),
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    flash_status("Falha ao copiar o BOPM.".to_string());
                }
            }
        });
    };

    let on_reset = move |_| {
        store_reset(&store);
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Gerador de BOPM — CAEP"</h1>
                <p class="subtitle">"Boletim de Ocorrência Policial Militar"</p>
            </header>

            <main class="app-main">
                <IdentificationSection />
                <CrewSection />
                <OccurrenceSection />
                <SupportList />
                <SeizedList />

                <div class="action-row">
                    <button class="generate-btn" on:click=on_generate>
                        "Gerar BOPM"
                    </button>
                    <button
                        class="copy-btn"
                        disabled=move || store.report().read().is_empty()
                        on:click=on_copy
                    >
                        "Copiar"
                    </button>
                    <button class="reset-btn" on:click=on_reset>
                        "Limpar"
                    </button>
                </div>

                {move || {
                    status
                        .get()
                        .map(|message| view! { <p class="status-message">{message}</p> })
                }}

                <ReportPanel />
            </main>
        </div>
    }
}
