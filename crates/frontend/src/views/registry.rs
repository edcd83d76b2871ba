//! View registry - маппинг имени вида → `ViewKind`
//!
//! Собирается один раз оболочкой приложения и раздаётся через context.
//! Резолв тотален: любое неизвестное имя даёт базовый вид.

use super::view::{View, ViewKit};
use contracts::enums::ViewKind;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: HashMap<&'static str, ViewKind>,
    fallback: ViewKind,
}

impl ViewRegistry {
    /// Пять именованных видов, fallback - `MainView`
    pub fn new() -> Self {
        Self::with_views(ViewKind::routable(), ViewKind::Main)
    }

    pub fn with_views(kinds: impl IntoIterator<Item = ViewKind>, fallback: ViewKind) -> Self {
        let views = kinds.into_iter().map(|kind| (kind.code(), kind)).collect();
        Self { views, fallback }
    }

    /// Вид по имени. Сравнение точное, с учётом регистра.
    pub fn resolve(&self, name: &str) -> ViewKind {
        match self.views.get(name) {
            Some(kind) => {
                log::debug!("view '{}' resolved to {}", name, kind);
                *kind
            }
            None => {
                log::debug!("view '{}' is not registered, using {}", name, self.fallback);
                self.fallback
            }
        }
    }

    /// Резолв и сборка вида из кита
    pub fn build(&self, name: &str, kit: &ViewKit) -> View {
        View::new(self.resolve(name), kit)
    }

    pub fn fallback(&self) -> ViewKind {
        self.fallback
    }

    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Зарегистрированные имена, по алфавиту
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.views.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
