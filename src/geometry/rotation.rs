//! Rotations stored in degrees and radians.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rotation angle.
///
/// The canonical value is the degree angle reduced into (-360°, 360°); the
/// radian, cosine and sine are derived from it once at construction. Two
/// rotations are equal when their radian values are equal.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    degree: f64,
    radian: f64,
    cos: f64,
    sin: f64,
}

impl Rotation {
    pub const ZERO: Self = Self { degree: 0.0, radian: 0.0, cos: 1.0, sin: 0.0 };

    #[must_use]
    pub fn from_degree(degree: f64) -> Self {
        let degree = if degree.is_finite() { degree % 360.0 } else { 0.0 };
        let radian = degree.to_radians();
        Self { degree, radian, cos: radian.cos(), sin: radian.sin() }
    }

    #[must_use]
    pub fn from_radian(radian: f64) -> Self {
        Self::from_degree(radian.to_degrees())
    }

    #[must_use]
    pub fn degree(self) -> f64 {
        self.degree
    }

    #[must_use]
    pub fn radian(self) -> f64 {
        self.radian
    }

    #[must_use]
    pub fn cos(self) -> f64 {
        self.cos
    }

    #[must_use]
    pub fn sin(self) -> f64 {
        self.sin
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::from_degree(-self.degree)
    }
}

impl Add for Rotation {
    type Output = Self;

    /// Sum of both angles, normalized into [0°, 360°).
    fn add(self, rhs: Self) -> Self {
        Self::from_degree(to_positive_degree(self.degree + rhs.degree))
    }
}

impl Sub for Rotation {
    type Output = Self;

    /// Difference of both angles, normalized into [0°, 360°).
    fn sub(self, rhs: Self) -> Self {
        Self::from_degree(to_positive_degree(self.degree - rhs.degree))
    }
}

impl Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        self.radian == other.radian
    }
}

impl Serialize for Rotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.degree)
    }
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_degree)
    }
}

/// Normalize a degree angle into [0, 360).
#[must_use]
pub fn to_positive_degree(degree: f64) -> f64 {
    if !degree.is_finite() {
        return 0.0;
    }
    let positive = degree.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if positive >= 360.0 { 0.0 } else { positive }
}
