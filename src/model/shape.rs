//! Visual items: renderer, appearance and a transform.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde_json::Value;

use super::{Appearance, Configurable, Constraint, ItemId};
use crate::collections::{ImmutableList, Record};
use crate::geometry::{Transform, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProps {
    pub id: ItemId,
    pub renderer: String,
    pub appearance: Appearance,
    pub transform: Transform,
    pub configurables: ImmutableList<Configurable>,
    pub constraints: ImmutableList<Constraint>,
    pub locked: bool,
}

/// A visual: a diagram item drawn by an external renderer.
///
/// Every edit follows the no-op contract: when nothing changes the same
/// instance comes back and `ptr_eq` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    record: Record<ShapeProps>,
}

impl Shape {
    #[must_use]
    pub fn new(props: ShapeProps) -> Self {
        Self { record: Record::new(props) }
    }

    /// Shape with no appearance, configurables or constraints.
    #[must_use]
    pub fn create(id: impl Into<ItemId>, renderer: impl Into<String>, transform: Transform) -> Self {
        Self::new(ShapeProps {
            id: id.into(),
            renderer: renderer.into(),
            appearance: Appearance::empty(),
            transform,
            configurables: ImmutableList::empty(),
            constraints: ImmutableList::empty(),
            locked: false,
        })
    }

    #[must_use]
    pub fn props(&self) -> &ShapeProps {
        self.record.props()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.props().id
    }

    #[must_use]
    pub fn renderer(&self) -> &str {
        &self.props().renderer
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.props().appearance
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.props().transform
    }

    #[must_use]
    pub fn configurables(&self) -> &ImmutableList<Configurable> {
        &self.props().configurables
    }

    #[must_use]
    pub fn constraints(&self) -> &ImmutableList<Constraint> {
        &self.props().constraints
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.props().locked
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.record.ptr_eq(&other.record)
    }

    #[must_use]
    pub fn with_id(&self, id: impl Into<ItemId>) -> Self {
        let id = id.into();
        self.update(|props| props.id = id)
    }

    // =========================================================================
    // TRANSFORM
    // =========================================================================

    /// Replace the transform with the result of `f`.
    ///
    /// `None` or an equal transform keeps this instance. The resulting size is
    /// passed through the shape's constraints.
    #[must_use]
    pub fn transform_with(&self, f: impl FnOnce(&Transform) -> Option<Transform>) -> Self {
        let current = self.transform();
        let Some(next) = f(current) else {
            return self.clone();
        };
        let next = if next.size() == current.size() {
            next
        } else {
            next.resize_to(Constraint::apply_all(self.constraints(), next.size(), self.appearance()))
        };
        if next == *current {
            return self.clone();
        }
        self.update(|props| props.transform = next)
    }

    #[must_use]
    pub fn resize_to(&self, size: Vec2) -> Self {
        self.transform_with(|transform| Some(transform.resize_to(size)))
    }

    #[must_use]
    pub fn move_by(&self, delta: Vec2) -> Self {
        self.transform_with(|transform| Some(transform.move_by(delta)))
    }

    /// Re-map the transform from `old_bounds` into `new_bounds`.
    #[must_use]
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        if old_bounds == new_bounds {
            return self.clone();
        }
        self.transform_with(|transform| Some(transform.transform_by_bounds(old_bounds, new_bounds)))
    }

    // =========================================================================
    // APPEARANCE
    // =========================================================================

    #[must_use]
    pub fn set_appearance(&self, key: &str, value: Value) -> Self {
        self.with_appearance(self.appearance().set(key, value))
    }

    #[must_use]
    pub fn unset_appearance(&self, key: &str) -> Self {
        self.with_appearance(self.appearance().unset(key))
    }

    #[must_use]
    pub fn replace_appearance(&self, appearance: Appearance) -> Self {
        self.with_appearance(self.appearance().replace(appearance))
    }

    #[must_use]
    pub fn set_locked(&self, locked: bool) -> Self {
        self.update(|props| props.locked = locked)
    }

    /// Constraints that read a changed key are re-applied to the current size.
    fn with_appearance(&self, appearance: Appearance) -> Self {
        let current = self.appearance();
        if appearance == *current {
            return self.clone();
        }
        let stale = current
            .iter()
            .chain(appearance.iter())
            .filter(|(key, _)| current.get(key) != appearance.get(key))
            .any(|(key, _)| self.constraints().iter().any(|constraint| constraint.reads_appearance(key)));
        let transform = if stale {
            let size = Constraint::apply_all(self.constraints(), self.transform().size(), &appearance);
            self.transform().resize_to(size)
        } else {
            *self.transform()
        };
        self.update(|props| {
            props.appearance = appearance;
            props.transform = transform;
        })
    }

    fn update(&self, f: impl FnOnce(&mut ShapeProps)) -> Self {
        Self { record: self.record.update(f) }
    }
}
