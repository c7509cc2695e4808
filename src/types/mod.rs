//! Basic value types shared by entities, tools and the codec

pub mod angle;
pub mod color;
pub mod font;
pub mod layer;
pub mod point;

pub use angle::normalize_angle;
pub use color::Color;
pub use font::Font;
pub use layer::LayerAffinity;
pub use point::{DevicePoint, DeviceRect, Point};
