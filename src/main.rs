//! BOPM Generator Entry Point

mod app;
mod clipboard;
mod components;
mod models;
mod ranks;
mod report;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
