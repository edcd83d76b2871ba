//! ViewHost - компонент, который держит смонтированный вид страницы
//!
//! Отвечает за:
//! - Резолв имени вида через `ViewRegistry` из context
//! - Вызов `mount` при создании и `unmount` при очистке owner'а
//! - Логирование ошибок lifecycle (сами виды их не перехватывают)

use super::registry::ViewRegistry;
use super::view::{Lifecycle, ViewKit};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn ViewHost(name: String) -> impl IntoView {
    let registry = use_context::<ViewRegistry>().expect("ViewRegistry context not found");
    let kit = use_context::<ViewKit>().expect("ViewKit context not found");

    let page_view = registry.build(&name, &kit);
    let kind = page_view.kind();

    log!("🔨 ViewHost MOUNT: '{}' as {}", name, kind);
    if let Err(err) = page_view.mount() {
        log::error!("{} mount failed: {}", kind, err);
    }

    on_cleanup(move || {
        log!("💥 ViewHost UNMOUNT: {}", kind);
        if let Err(err) = page_view.unmount() {
            log::error!("{} unmount failed: {}", kind, err);
        }
    });

    view! { <span hidden=true data-view=kind.code()></span> }
}
