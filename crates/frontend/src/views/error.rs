use wasm_bindgen::JsValue;

/// Ошибки жизненного цикла видов и карты.
///
/// Виды не переводят и не глушат ошибки коллабораторов: всё, что вернул
/// base-lifecycle или карта, уходит вызывающему как есть.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("map container #{0} not found")]
    MapContainerMissing(String),

    #[error("map is not initialized")]
    MapNotInitialized,

    #[error("markers must be loaded before centering")]
    MarkersNotLoaded,

    #[error("invalid markers payload: {0}")]
    InvalidMarkers(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ViewError::Dom(text)
    }
}
