use super::error::ViewError;
use super::main_view::MainView;
use super::tour;
use crate::config::ShellConfig;
use crate::shared::map::{DomMapFactory, MapFactory};
use contracts::enums::ViewKind;
use std::sync::Arc;

/// Набор операций, который поддерживает любой вид.
pub trait Lifecycle: Send + Sync {
    fn mount(&self) -> Result<(), ViewError>;
    fn unmount(&self) -> Result<(), ViewError>;
}

/// Коллабораторы, из которых собирается вид.
#[derive(Clone)]
pub struct ViewKit {
    base: Option<Arc<dyn Lifecycle>>,
    maps: Arc<dyn MapFactory>,
}

impl ViewKit {
    /// Кит без базового lifecycle
    pub fn new(maps: Arc<dyn MapFactory>) -> Self {
        Self { base: None, maps }
    }

    pub fn with_base(mut self, base: Arc<dyn Lifecycle>) -> Self {
        self.base = Some(base);
        self
    }

    /// `MainView` как база и карта поверх DOM страницы
    pub fn browser(config: &ShellConfig) -> Self {
        Self::new(Arc::new(DomMapFactory::from_config(config))).with_base(Arc::new(MainView))
    }
}

/// Экземпляр вида: базовый lifecycle (если есть) плюс расширение по `ViewKind`.
#[derive(Clone)]
pub struct View {
    kind: ViewKind,
    base: Option<Arc<dyn Lifecycle>>,
    maps: Arc<dyn MapFactory>,
}

impl View {
    pub fn new(kind: ViewKind, kit: &ViewKit) -> Self {
        Self {
            kind,
            base: kit.base.clone(),
            maps: kit.maps.clone(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }
}

impl Lifecycle for View {
    fn mount(&self) -> Result<(), ViewError> {
        log::debug!("mount {}", self.kind);
        if let Some(base) = &self.base {
            base.mount()?;
        }
        match self.kind {
            ViewKind::TourShow => tour::show::mount(self.maps.as_ref()),
            ViewKind::Main
            | ViewKind::TourEdit
            | ViewKind::WaypointShow
            | ViewKind::WaypointEdit
            | ViewKind::WaypointNew => Ok(()),
        }
    }

    fn unmount(&self) -> Result<(), ViewError> {
        log::debug!("unmount {}", self.kind);
        if let Some(base) = &self.base {
            base.unmount()?;
        }
        // ни у одного вида нет собственной очистки
        Ok(())
    }
}
