//! Настройки оболочки страницы.
//!
//! Значения по умолчанию совпадают с разметкой, которую рендерит сервер.
//! Отдельные поля можно переопределить data-атрибутами на `<body>`.

use web_sys::HtmlElement;

pub const DEFAULT_VIEW_NAME_ATTRIBUTE: &str = "data-js-view-name";
pub const DEFAULT_MAP_CONTAINER_ID: &str = "map";
pub const DEFAULT_MARKERS_ATTRIBUTE: &str = "data-markers";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Атрибут `<body>` с именем вида
    pub view_name_attribute: String,
    pub map_container_id: String,
    /// Атрибут контейнера карты с JSON-массивом точек
    pub markers_attribute: String,
    pub log_level: log::Level,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            view_name_attribute: DEFAULT_VIEW_NAME_ATTRIBUTE.to_string(),
            map_container_id: DEFAULT_MAP_CONTAINER_ID.to_string(),
            markers_attribute: DEFAULT_MARKERS_ATTRIBUTE.to_string(),
            log_level: log::Level::Debug,
        }
    }
}

impl ShellConfig {
    /// Читает переопределения из `data-log-level` и `data-map-container`.
    pub fn from_body(body: &HtmlElement) -> Self {
        Self::from_overrides(
            body.get_attribute("data-log-level").as_deref(),
            body.get_attribute("data-map-container").as_deref(),
        )
    }

    fn from_overrides(log_level: Option<&str>, map_container: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(level) = log_level.and_then(parse_level) {
            config.log_level = level;
        }
        if let Some(id) = map_container.map(str::trim).filter(|id| !id.is_empty()) {
            config.map_container_id = id.to_string();
        }
        config
    }

    /// Имя вида страницы. Отсутствующий атрибут - пустая строка (уйдёт в fallback).
    pub fn view_name(&self, body: &HtmlElement) -> String {
        body.get_attribute(&self.view_name_attribute)
            .unwrap_or_default()
    }
}

/// Уровень логирования по имени, без учёта регистра.
pub fn parse_level(raw: &str) -> Option<log::Level> {
    raw.trim().parse().ok()
}
