//! Виды страниц
//!
//! Содержит:
//! - `registry` - маппинг имени вида → `ViewKind` с fallback на базовый вид
//! - `view` - `View`: базовый lifecycle + расширение конкретного вида
//! - `main_view` - базовый lifecycle `MainView`
//! - `tour` - расширения видов тура
//! - `host` - компонент, который монтирует вид и размонтирует его при очистке

pub mod error;
pub mod host;
pub mod main_view;
pub mod registry;
pub mod tour;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ViewError;
pub use host::ViewHost;
pub use main_view::MainView;
pub use registry::ViewRegistry;
pub use view::{Lifecycle, View, ViewKit};
