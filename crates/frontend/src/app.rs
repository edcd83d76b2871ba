use crate::config::ShellConfig;
use crate::views::{ViewHost, ViewKit, ViewRegistry};
use leptos::prelude::*;

#[component]
pub fn App(config: ShellConfig, view_name: String) -> impl IntoView {
    // Registry is built once here and shared with the tree via context.
    provide_context(ViewRegistry::new());

    // Collaborators every view is constructed from
    provide_context(ViewKit::browser(&config));

    view! {
        <ViewHost name=view_name />
    }
}
