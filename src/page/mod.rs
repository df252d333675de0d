mod datalayer;
mod document;

pub use datalayer::{data_layer, DATA_LAYER_ATTRIBUTE};
pub use document::PageDocument;
