use serde::{Deserialize, Serialize};

/// Виды страниц, которые сервер может указать в `<body data-js-view-name>`.
///
/// `Main` — базовый вид, он же fallback для неизвестных имён.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    #[serde(rename = "MainView")]
    Main,
    #[serde(rename = "TourShowView")]
    TourShow,
    #[serde(rename = "TourEditView")]
    TourEdit,
    #[serde(rename = "WaypointShowView")]
    WaypointShow,
    #[serde(rename = "WaypointEditView")]
    WaypointEdit,
    #[serde(rename = "WaypointNewView")]
    WaypointNew,
}

impl ViewKind {
    /// Имя вида, как его рендерит сервер
    pub fn code(&self) -> &'static str {
        match self {
            ViewKind::Main => "MainView",
            ViewKind::TourShow => "TourShowView",
            ViewKind::TourEdit => "TourEditView",
            ViewKind::WaypointShow => "WaypointShowView",
            ViewKind::WaypointEdit => "WaypointEditView",
            ViewKind::WaypointNew => "WaypointNewView",
        }
    }

    /// Виды, доступные по имени (всё, кроме базового)
    pub fn routable() -> Vec<ViewKind> {
        vec![
            ViewKind::TourShow,
            ViewKind::TourEdit,
            ViewKind::WaypointShow,
            ViewKind::WaypointEdit,
            ViewKind::WaypointNew,
        ]
    }

    /// Все виды, включая базовый
    pub fn all() -> Vec<ViewKind> {
        let mut kinds = vec![ViewKind::Main];
        kinds.extend(Self::routable());
        kinds
    }

    /// Парсинг из строки. Сравнение точное, с учётом регистра.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MainView" => Some(ViewKind::Main),
            "TourShowView" => Some(ViewKind::TourShow),
            "TourEditView" => Some(ViewKind::TourEdit),
            "WaypointShowView" => Some(ViewKind::WaypointShow),
            "WaypointEditView" => Some(ViewKind::WaypointEdit),
            "WaypointNewView" => Some(ViewKind::WaypointNew),
            _ => None,
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
