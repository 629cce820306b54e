//! Oriented boxes: center, size and rotation.
//!
//! Shapes store a transform; groups compute one from their children with
//! [`Transform::from_transforms_and_rotation`]. Moving and resizing a
//! selection maps every member from the old selection bounds to the new ones
//! with [`Transform::transform_by_bounds`].

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use super::{Rect2, Rotation, Vec2};

/// Oriented bounding box: a center, an extent and a rotation around the center.
///
/// Position, size and rotation change independently; this is not a general
/// affine matrix. The size is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "FlatTransform", into = "FlatTransform")]
pub struct Transform {
    position: Vec2,
    size: Vec2,
    rotation: Rotation,
}

impl Transform {
    pub const ZERO: Self = Self { position: Vec2::ZERO, size: Vec2::ZERO, rotation: Rotation::ZERO };

    #[must_use]
    pub fn new(position: Vec2, size: Vec2, rotation: Rotation) -> Self {
        Self { position, size: size.max(Vec2::ZERO), rotation }
    }

    /// Unrotated transform covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect2) -> Self {
        Self::new(rect.center(), rect.size(), Rotation::ZERO)
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Corner points in world space, clockwise from the top-left corner.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.size * 0.5;
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|offset| self.position + offset.rotated_around(Vec2::ZERO, self.rotation))
    }

    /// Axis-aligned box around the rotated corners.
    #[must_use]
    pub fn aabb(&self) -> Rect2 {
        Rect2::from_points(self.corners())
    }

    #[must_use]
    pub fn move_to(&self, position: Vec2) -> Self {
        Self::new(position, self.size, self.rotation)
    }

    #[must_use]
    pub fn move_by(&self, delta: Vec2) -> Self {
        self.move_to(self.position + delta)
    }

    #[must_use]
    pub fn resize_to(&self, size: Vec2) -> Self {
        Self::new(self.position, size, self.rotation)
    }

    #[must_use]
    pub fn resize_by(&self, delta: Vec2) -> Self {
        self.resize_to(self.size + delta)
    }

    #[must_use]
    pub fn rotate_to(&self, rotation: Rotation) -> Self {
        Self::new(self.position, self.size, rotation)
    }

    #[must_use]
    pub fn rotate_by(&self, rotation: Rotation) -> Self {
        self.rotate_to(self.rotation + rotation)
    }

    /// Re-map this transform from the frame of `old_bounds` into the frame of `new_bounds`.
    ///
    /// The center keeps its relative position inside the bounds, the size scales
    /// with the bounds along the axes it is aligned to, and the rotation follows
    /// the rotation delta of the bounds.
    #[must_use]
    pub fn transform_by_bounds(&self, old_bounds: &Self, new_bounds: &Self) -> Self {
        if old_bounds == new_bounds {
            return *self;
        }
        if self == old_bounds {
            return *new_bounds;
        }

        let scale = Vec2::new(
            axis_scale(old_bounds.size.x, new_bounds.size.x),
            axis_scale(old_bounds.size.y, new_bounds.size.y),
        );

        let local = (self.position - old_bounds.position).rotated_around(Vec2::ZERO, -old_bounds.rotation);
        let position = new_bounds.position + local.mul_vec(scale).rotated_around(Vec2::ZERO, new_bounds.rotation);

        let relative = self.rotation - old_bounds.rotation;
        let (cos, sin) = (relative.cos().abs(), relative.sin().abs());
        let own_scale = Vec2::new(cos * scale.x + sin * scale.y, sin * scale.x + cos * scale.y);

        let rotation = self.rotation + (new_bounds.rotation - old_bounds.rotation);
        Self::new(position, self.size.mul_vec(own_scale), rotation)
    }

    /// Smallest transform with the given rotation that encloses every transform.
    ///
    /// Corners are projected into the rotated frame, bounded there, and the
    /// bounding box center is projected back. No transforms yields [`Transform::ZERO`].
    #[must_use]
    pub fn from_transforms_and_rotation(transforms: &[Self], rotation: Rotation) -> Self {
        if transforms.is_empty() {
            return Self::ZERO;
        }
        let inverse = -rotation;
        let rect = Rect2::from_points(
            transforms
                .iter()
                .flat_map(Self::corners)
                .map(|corner| corner.rotated_around(Vec2::ZERO, inverse)),
        );
        let center = rect.center().rotated_around(Vec2::ZERO, rotation);
        Self::new(center, rect.size(), rotation)
    }
}

fn axis_scale(old: f64, new: f64) -> f64 {
    if old == 0.0 { 1.0 } else { new / old }
}

/// Wire shape of a transform: plain numbers, rotation in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct FlatTransform {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    #[serde(default)]
    r: f64,
}

impl From<FlatTransform> for Transform {
    fn from(flat: FlatTransform) -> Self {
        Self::new(Vec2::new(flat.x, flat.y), Vec2::new(flat.w, flat.h), Rotation::from_degree(flat.r))
    }
}

impl From<Transform> for FlatTransform {
    fn from(transform: Transform) -> Self {
        Self {
            x: transform.position.x,
            y: transform.position.y,
            w: transform.size.x,
            h: transform.size.y,
            r: transform.rotation.degree(),
        }
    }
}
