//! Appearance: the open-ended style bag of a shape.
//!
//! Values are arbitrary JSON so renderers can add their own keys. The typed
//! accessors cover the keys every renderer understands and fall back to the
//! defaults in [`crate::consts`]. Colors may be stored either as CSS strings
//! or as packed `0xRRGGBB` numbers; the accessors always return a CSS string.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collections::ImmutableMap;
use crate::consts;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Appearance {
    values: ImmutableMap<Value>,
}

impl Appearance {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { values: ImmutableMap::of(entries) }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.values.ptr_eq(&other.values)
    }

    /// Set one key. An equal value is a no-op.
    #[must_use]
    pub fn set(&self, key: impl Into<String>, value: Value) -> Self {
        let values = self.values.set(key, value);
        if values.ptr_eq(&self.values) { self.clone() } else { Self { values } }
    }

    /// Remove one key. A missing key is a no-op.
    #[must_use]
    pub fn unset(&self, key: &str) -> Self {
        let values = self.values.remove(&[key]);
        if values.ptr_eq(&self.values) { self.clone() } else { Self { values } }
    }

    /// Swap in `other` wholesale. An equal appearance keeps this instance.
    #[must_use]
    pub fn replace(&self, other: Self) -> Self {
        if other == *self { self.clone() } else { other }
    }

    /// Layer `other` on top of this appearance.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let values = self.values.set_many(other.iter().map(|(key, value)| (key.to_owned(), value.clone())));
        if values.ptr_eq(&self.values) { self.clone() } else { Self { values } }
    }

    // --- Typed accessors ---

    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Color value as a CSS string, accepting strings or packed RGB numbers.
    #[must_use]
    pub fn color(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(color) => Some(color.clone()),
            Value::Number(packed) => packed.as_u64().map(|rgb| format!("#{:06x}", rgb & 0x00ff_ffff)),
            _ => None,
        }
    }

    /// Opacity in [0, 1]. Defaults to fully opaque.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.number(consts::OPACITY).unwrap_or(consts::DEFAULT_OPACITY).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn stroke_color(&self) -> String {
        self.color(consts::STROKE_COLOR).unwrap_or_else(|| consts::DEFAULT_STROKE_COLOR.to_owned())
    }

    #[must_use]
    pub fn stroke_thickness(&self) -> f64 {
        self.number(consts::STROKE_THICKNESS).unwrap_or(consts::DEFAULT_STROKE_THICKNESS)
    }

    #[must_use]
    pub fn foreground_color(&self) -> String {
        self.color(consts::FOREGROUND_COLOR).unwrap_or_else(|| consts::DEFAULT_FOREGROUND_COLOR.to_owned())
    }

    #[must_use]
    pub fn background_color(&self) -> String {
        self.color(consts::BACKGROUND_COLOR).unwrap_or_else(|| consts::DEFAULT_BACKGROUND_COLOR.to_owned())
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.number(consts::FONT_SIZE).unwrap_or(consts::DEFAULT_FONT_SIZE)
    }

    /// Label text. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.string(consts::TEXT).unwrap_or("")
    }

    #[must_use]
    pub fn text_alignment(&self) -> &str {
        self.string(consts::TEXT_ALIGNMENT).unwrap_or(consts::DEFAULT_TEXT_ALIGNMENT)
    }
}
