pub mod tabs;

use contracts::shared::tabs::load_config;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

fn on_page_ready(document: Document, config_json: Option<String>) {
    let config = match load_config(config_json.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("tabs: {}, using defaults", err);
            Default::default()
        }
    };
    let widget = tabs::initialize_with(&document, config);
    log::info!("tabs: {} group(s) ready", widget.groups().len());
}

/// Scans the page for tab containers once the DOM is parsed.
///
/// `config_json` overrides the embedded widget config.
#[wasm_bindgen]
pub fn init_tabs(config_json: Option<String>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("tabs: no document available");
        return;
    };

    if document.ready_state() != "loading" {
        on_page_ready(document, config_json);
        return;
    }

    // DOM ещё не разобран - ждём DOMContentLoaded
    let document_for_ready = document.clone();
    let mut pending = Some(config_json);
    let on_ready = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(config_json) = pending.take() {
            on_page_ready(document_for_ready.clone(), config_json);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    init_tabs(None);
}
