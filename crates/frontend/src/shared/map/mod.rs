//! Карта тура - коллаборатор вида `TourShowView`
//!
//! Содержит:
//! - `MapWidget` / `MapFactory` - контракт карты, через который вид её создаёт и ведёт
//! - `bounds` - чистая геометрия: рамка точек, центр, проекция в проценты
//! - `dom` - браузерная реализация поверх контейнера `#map`

pub mod bounds;
pub mod dom;

pub use bounds::MapBounds;
pub use dom::{parse_markers, DomMap, DomMapFactory};

use crate::views::error::ViewError;

/// Карта, которую вид инициализирует, наполняет точками и центрирует.
///
/// Порядок вызовов фиксирован: `init` → `load_markers` → `center_markers`.
pub trait MapWidget {
    fn init(&mut self) -> Result<(), ViewError>;
    fn load_markers(&mut self) -> Result<(), ViewError>;
    fn center_markers(&mut self) -> Result<(), ViewError>;
}

/// Конструктор карты. Каждый вызов `create` даёт новый, независимый экземпляр.
pub trait MapFactory: Send + Sync {
    fn create(&self) -> Box<dyn MapWidget>;
}
