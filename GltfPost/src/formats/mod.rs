//! File format handlers

pub mod gltf;

pub use gltf::{GltfDocument, parse_gltf, read_gltf, serialize_gltf, write_gltf};
