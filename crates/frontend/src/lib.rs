pub mod app;
pub mod config;
pub mod shared;
pub mod views;

use config::ShellConfig;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    let config = body
        .as_ref()
        .map(ShellConfig::from_body)
        .unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    let Some(body) = body else {
        log::error!("document body is not available, no view mounted");
        return;
    };

    let view_name = config.view_name(&body);
    let handle = leptos::mount::mount_to(body, move || {
        view! { <app::App config=config view_name=view_name /> }
    });

    // Dropping the handle disposes the owner, which runs the view's unmount.
    let mut handle = Some(handle);
    let on_pagehide = Closure::<dyn FnMut()>::new(move || {
        if handle.take().is_some() {
            log::debug!("pagehide: view host disposed");
        }
    });
    if let Some(window) = web_sys::window() {
        if let Err(err) = window
            .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
        {
            log::warn!("pagehide listener not registered: {:?}", err);
        }
    }
    on_pagehide.forget();
}
