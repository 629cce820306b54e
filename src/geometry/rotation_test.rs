#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn add_wraps_into_positive_range() {
    let sum = Rotation::from_degree(180.0) + Rotation::from_degree(45.0);
    assert_eq!(sum, Rotation::from_degree(225.0));

    let wrapped = Rotation::from_degree(300.0) + Rotation::from_degree(90.0);
    assert_eq!(wrapped.degree(), 30.0);
}

#[test]
fn sub_wraps_into_positive_range() {
    let diff = Rotation::from_degree(45.0) - Rotation::from_degree(90.0);
    assert_eq!(diff.degree(), 315.0);
}

#[test]
fn negate_flips_sign() {
    assert_eq!(Rotation::from_degree(30.0).negate().degree(), -30.0);
    assert_eq!(-Rotation::from_degree(30.0), Rotation::from_degree(-30.0));
}

#[test]
fn from_degree_reduces_full_turns() {
    assert_eq!(Rotation::from_degree(360.0), Rotation::ZERO);
    assert_eq!(Rotation::from_degree(450.0).degree(), 90.0);
    assert_eq!(Rotation::from_degree(-450.0).degree(), -90.0);
}

#[test]
fn non_finite_degree_is_zero() {
    assert_eq!(Rotation::from_degree(f64::NAN), Rotation::ZERO);
    assert_eq!(Rotation::from_degree(f64::INFINITY), Rotation::ZERO);
}

#[test]
fn radian_and_degree_agree() {
    let rotation = Rotation::from_radian(std::f64::consts::FRAC_PI_2);
    assert!((rotation.degree() - 90.0).abs() < 1e-9);
    assert!((rotation.sin() - 1.0).abs() < 1e-9);
    assert!(rotation.cos().abs() < 1e-9);
}

#[test]
fn to_positive_degree_normalizes() {
    assert_eq!(to_positive_degree(36.5 - 720.0), 36.5);
    assert_eq!(to_positive_degree(720.0), 0.0);
    assert_eq!(to_positive_degree(-90.0), 270.0);
    assert_eq!(to_positive_degree(359.0), 359.0);
}

#[test]
fn serializes_as_degrees() {
    let json = serde_json::to_string(&Rotation::from_degree(45.0)).expect("serialize");
    assert_eq!(json, "45.0");
    let back: Rotation = serde_json::from_str("90").expect("deserialize");
    assert_eq!(back, Rotation::from_degree(90.0));
}
