//! Записывающие заглушки для тестов lifecycle.

use super::error::ViewError;
use super::view::{Lifecycle, ViewKit};
use crate::shared::map::{MapFactory, MapWidget};
use std::sync::{Arc, Mutex};

/// Общий журнал вызовов базы и карты
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: &str) {
        self.0.lock().unwrap().push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

pub struct RecordingBase {
    journal: Journal,
    fail: bool,
}

impl RecordingBase {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail: false,
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail: true,
        }
    }

    fn record(&self, entry: &str) -> Result<(), ViewError> {
        self.journal.push(entry);
        if self.fail {
            return Err(ViewError::Dom(format!("{} failed", entry)));
        }
        Ok(())
    }
}

impl Lifecycle for RecordingBase {
    fn mount(&self) -> Result<(), ViewError> {
        self.record("base_mount")
    }

    fn unmount(&self) -> Result<(), ViewError> {
        self.record("base_unmount")
    }
}

pub struct RecordingMaps {
    journal: Journal,
    fail_on: Option<&'static str>,
}

impl RecordingMaps {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_on: None,
        }
    }

    pub fn failing(journal: &Journal, step: &'static str) -> Self {
        Self {
            journal: journal.clone(),
            fail_on: Some(step),
        }
    }
}

impl MapFactory for RecordingMaps {
    fn create(&self) -> Box<dyn MapWidget> {
        self.journal.push("map_new");
        Box::new(RecordingMap {
            journal: self.journal.clone(),
            fail_on: self.fail_on,
        })
    }
}

struct RecordingMap {
    journal: Journal,
    fail_on: Option<&'static str>,
}

impl RecordingMap {
    fn record(&self, step: &'static str) -> Result<(), ViewError> {
        self.journal.push(step);
        if self.fail_on == Some(step) {
            return Err(ViewError::Dom(format!("{} failed", step)));
        }
        Ok(())
    }
}

impl MapWidget for RecordingMap {
    fn init(&mut self) -> Result<(), ViewError> {
        self.record("init")
    }

    fn load_markers(&mut self) -> Result<(), ViewError> {
        self.record("load_markers")
    }

    fn center_markers(&mut self) -> Result<(), ViewError> {
        self.record("center_markers")
    }
}

/// Кит с записывающей базой и картой над одним журналом
pub fn recording_kit(journal: &Journal) -> ViewKit {
    ViewKit::new(Arc::new(RecordingMaps::new(journal)))
        .with_base(Arc::new(RecordingBase::new(journal)))
}
