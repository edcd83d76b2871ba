use super::bounds::MapBounds;
use super::{MapFactory, MapWidget};
use crate::config::ShellConfig;
use crate::views::error::ViewError;
use contracts::shared::MapMarker;
use web_sys::Element;

const READY_CLASS: &str = "map--ready";
const MARKER_CLASS: &str = "map__marker";
/// Доля размаха рамки, добавляемая с каждой стороны при центрировании
const BOUNDS_PADDING: f64 = 0.1;

/// Разбирает JSON-массив точек из data-атрибута. Пустая строка - пустой список.
pub fn parse_markers(raw: &str) -> Result<Vec<MapMarker>, ViewError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

/// Создаёт `DomMap` над контейнером из конфигурации.
#[derive(Debug, Clone)]
pub struct DomMapFactory {
    container_id: String,
    markers_attribute: String,
}

impl DomMapFactory {
    pub fn new(container_id: impl Into<String>, markers_attribute: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            markers_attribute: markers_attribute.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(&config.map_container_id, &config.markers_attribute)
    }
}

impl MapFactory for DomMapFactory {
    fn create(&self) -> Box<dyn MapWidget> {
        Box::new(DomMap::new(&self.container_id, &self.markers_attribute))
    }
}

/// Карта поверх обычного DOM: точки - абсолютно позиционированные `div`
/// внутри контейнера, центр рамки пишется в data-атрибуты контейнера.
pub struct DomMap {
    container_id: String,
    markers_attribute: String,
    container: Option<Element>,
    markers: Option<Vec<(MapMarker, Element)>>,
}

impl DomMap {
    pub fn new(container_id: &str, markers_attribute: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            markers_attribute: markers_attribute.to_string(),
            container: None,
            markers: None,
        }
    }
}

/// Контейнер, найденный по id, или `MapContainerMissing`
fn require_container<C>(found: Option<C>, container_id: &str) -> Result<C, ViewError> {
    found.ok_or_else(|| ViewError::MapContainerMissing(container_id.to_string()))
}

/// Состояние для центрирования: нужны и `init`, и `load_markers`
fn require_loaded<C, M>(container: Option<C>, markers: Option<M>) -> Result<(C, M), ViewError> {
    let container = container.ok_or(ViewError::MapNotInitialized)?;
    let markers = markers.ok_or(ViewError::MarkersNotLoaded)?;
    Ok((container, markers))
}

/// Атрибуты элемента точки: `data-lat`, `data-lng` и `title`, если он есть
pub fn marker_attributes(marker: &MapMarker) -> Vec<(&'static str, String)> {
    let mut attributes = vec![
        ("data-lat", marker.lat.to_string()),
        ("data-lng", marker.lng.to_string()),
    ];
    if let Some(title) = &marker.title {
        attributes.push(("title", title.clone()));
    }
    attributes
}

pub fn marker_style(left: f64, top: f64) -> String {
    format!("position: absolute; left: {:.4}%; top: {:.4}%;", left, top)
}

/// Атрибуты центра рамки для контейнера
pub fn center_attributes(bounds: &MapBounds) -> [(&'static str, String); 2] {
    let (lat, lng) = bounds.center();
    [
        ("data-center-lat", lat.to_string()),
        ("data-center-lng", lng.to_string()),
    ]
}

impl MapWidget for DomMap {
    fn init(&mut self) -> Result<(), ViewError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ViewError::Dom("document is not available".to_string()))?;
        let container =
            require_container(document.get_element_by_id(&self.container_id), &self.container_id)?;
        container.class_list().add_1(READY_CLASS)?;
        log::debug!("map initialized on #{}", self.container_id);
        self.container = Some(container);
        Ok(())
    }

    fn load_markers(&mut self) -> Result<(), ViewError> {
        let container = self.container.as_ref().ok_or(ViewError::MapNotInitialized)?;
        let markers = match container.get_attribute(&self.markers_attribute) {
            Some(raw) => parse_markers(&raw)?,
            None => Vec::new(),
        };
        let document = container
            .owner_document()
            .ok_or_else(|| ViewError::Dom("map container is detached".to_string()))?;

        // сначала собираем все элементы, в DOM они попадают только целой пачкой
        let mut placed = Vec::with_capacity(markers.len());
        for marker in markers {
            let element = document.create_element("div")?;
            element.set_class_name(MARKER_CLASS);
            for (name, value) in marker_attributes(&marker) {
                element.set_attribute(name, &value)?;
            }
            placed.push((marker, element));
        }

        let selector = format!(".{}", MARKER_CLASS);
        while let Some(stale) = container.query_selector(&selector)? {
            stale.remove();
        }
        for (_, element) in &placed {
            container.append_child(element)?;
        }

        log::debug!("map loaded {} markers", placed.len());
        self.markers = Some(placed);
        Ok(())
    }

    fn center_markers(&mut self) -> Result<(), ViewError> {
        let (container, placed) = require_loaded(self.container.as_ref(), self.markers.as_ref())?;

        let Some(bounds) = MapBounds::from_markers(placed.iter().map(|(m, _)| m)) else {
            log::debug!("map has no markers to center");
            return Ok(());
        };
        let bounds = bounds.padded(BOUNDS_PADDING);

        for (marker, element) in placed {
            let (left, top) = bounds.project(marker);
            element.set_attribute("style", &marker_style(left, top))?;
        }

        for (name, value) in center_attributes(&bounds) {
            container.set_attribute(name, &value)?;
        }
        log::debug!("map centered at {:?}", bounds.center());
        Ok(())
    }
}
