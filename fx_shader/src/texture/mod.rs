//! Texture module - CPU-side pixel storage and region copies.

mod pixels;

pub use pixels::{mip_level_count, TexturePixels};
