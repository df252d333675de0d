use super::PageDocument;
use crate::core::error::VerifyError;
use serde_json::Value;

/// Attribute carrying the analytics payload of a core component.
pub const DATA_LAYER_ATTRIBUTE: &str = "data-cmp-data-layer";

/// Parse the data layer of the single element matched by `css`.
pub fn data_layer(doc: &PageDocument, css: &str) -> Result<Value, VerifyError> {
    let raw = doc.single_attr(css, DATA_LAYER_ATTRIBUTE)?;
    serde_json::from_str(&raw).map_err(|e| VerifyError::Json {
        origin: format!("{} attribute of `{}`", DATA_LAYER_ATTRIBUTE, css),
        source: e,
    })
}
