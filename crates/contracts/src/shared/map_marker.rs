use serde::{Deserialize, Serialize};

/// Точка на карте тура. Сервер кладёт массив таких точек в data-атрибут
/// контейнера карты.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MapMarker {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_accepts_lon_alias() {
        let marker: MapMarker = serde_json::from_str(r#"{"lat": 48.1, "lon": 11.5}"#).unwrap();
        assert_eq!(marker, MapMarker::new(48.1, 11.5));
    }

    #[test]
    fn test_title_is_optional() {
        let marker: MapMarker =
            serde_json::from_str(r#"{"lat": 1.0, "lng": 2.0, "title": "Hut"}"#).unwrap();
        assert_eq!(marker.title.as_deref(), Some("Hut"));

        let json = serde_json::to_string(&MapMarker::new(1.0, 2.0)).unwrap();
        assert!(!json.contains("title"));
    }
}
