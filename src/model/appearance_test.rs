#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn styled() -> Appearance {
    Appearance::of([
        (consts::STROKE_COLOR.to_owned(), json!(0x00ff_0000)),
        (consts::FOREGROUND_COLOR.to_owned(), json!("#123456")),
        (consts::OPACITY.to_owned(), json!(1.7)),
        (consts::TEXT.to_owned(), json!("Submit")),
    ])
}

#[test]
fn accessors_fall_back_to_defaults() {
    let appearance = Appearance::empty();
    assert_eq!(appearance.opacity(), 1.0);
    assert_eq!(appearance.stroke_color(), "#333333");
    assert_eq!(appearance.stroke_thickness(), 1.0);
    assert_eq!(appearance.background_color(), "#ffffff");
    assert_eq!(appearance.font_size(), 14.0);
    assert_eq!(appearance.text(), "");
    assert_eq!(appearance.text_alignment(), "center");
}

#[test]
fn colors_accept_packed_numbers_and_strings() {
    let appearance = styled();
    assert_eq!(appearance.stroke_color(), "#ff0000");
    assert_eq!(appearance.foreground_color(), "#123456");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(styled().opacity(), 1.0);
}

#[test]
fn set_same_value_returns_same_instance() {
    let appearance = styled();
    assert!(appearance.set(consts::TEXT, json!("Submit")).ptr_eq(&appearance));
    assert_eq!(appearance.set(consts::TEXT, json!("Cancel")).text(), "Cancel");
}

#[test]
fn unset_missing_key_returns_same_instance() {
    let appearance = styled();
    assert!(appearance.unset("MISSING").ptr_eq(&appearance));
    assert_eq!(appearance.unset(consts::TEXT).text(), "");
}

#[test]
fn merge_layers_values() {
    let base = styled();
    let merged = base.merge(&Appearance::of([(consts::TEXT.to_owned(), json!("OK"))]));
    assert_eq!(merged.text(), "OK");
    assert_eq!(merged.foreground_color(), "#123456");
    assert!(base.merge(&Appearance::empty()).ptr_eq(&base));
}

#[test]
fn serializes_as_plain_object() {
    let appearance = Appearance::of([(consts::TEXT.to_owned(), json!("Hi"))]);
    assert_eq!(serde_json::to_value(&appearance).expect("serialize"), json!({"TEXT": "Hi"}));
}

#[test]
fn replace_with_equal_appearance_keeps_instance() {
    let appearance = styled();
    assert!(appearance.replace(styled()).ptr_eq(&appearance));
    assert_eq!(appearance.replace(Appearance::empty()), Appearance::empty());
}
