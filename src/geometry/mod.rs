//! Geometry kernel: vectors, rotations, rectangles and oriented transforms.
//!
//! World coordinates have the y axis pointing down. Rotations are clockwise in
//! that frame, which is the usual screen convention.

mod rect;
mod rotation;
mod transform;
mod vec2;

pub use rect::Rect2;
pub use rotation::{Rotation, to_positive_degree};
pub use transform::Transform;
pub use vec2::Vec2;
