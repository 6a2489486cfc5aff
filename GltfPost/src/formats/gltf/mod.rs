//! glTF 2.0 JSON format module
//!
//! Only the `.gltf` text form is handled; binary buffers referenced by the
//! document are left alone.

mod document;
mod reader;
mod writer;

pub use document::GltfDocument;
pub(crate) use document::{index_array, object_entry};
pub use reader::{parse_gltf, read_gltf};
pub use writer::{serialize_gltf, write_gltf};
