//! Расширение вида `TourShowView`: карта тура со всеми точками.

use crate::shared::map::MapFactory;
use crate::views::error::ViewError;

/// Создаёт карту и проводит её через `init` → `load_markers` → `center_markers`.
///
/// Карта не сохраняется: всё, что должно пережить mount, живёт в DOM.
/// Поэтому у вида нет своего unmount - только базовый.
pub fn mount(maps: &dyn MapFactory) -> Result<(), ViewError> {
    let mut map = maps.create();
    map.init()?;
    map.load_markers()?;
    map.center_markers()?;
    Ok(())
}
