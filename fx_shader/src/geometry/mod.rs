//! Geometry module - integer rectangle used for texture regions.

mod rectangle;

pub use rectangle::Rectangle;
