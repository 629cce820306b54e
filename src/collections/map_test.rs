use super::*;

fn sample() -> ImmutableMap<i32> {
    ImmutableMap::of([("a".to_owned(), 1), ("b".to_owned(), 2), ("c".to_owned(), 3)])
}

#[test]
fn keys_follow_insertion_order() {
    assert_eq!(sample().keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(sample().values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn set_equal_value_returns_same_instance() {
    let map = sample();
    assert!(map.set("a", 1).ptr_eq(&map));
}

#[test]
fn set_new_key_appends_and_existing_key_keeps_position() {
    let map = sample().set("d", 4).set("a", 10);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    assert_eq!(map.get("a"), Some(&10));
}

#[test]
fn set_does_not_touch_original() {
    let map = sample();
    let next = map.set("a", 99);
    assert_eq!(map.get("a"), Some(&1));
    assert_eq!(next.get("a"), Some(&99));
}

#[test]
fn set_many_with_no_changes_returns_same_instance() {
    let map = sample();
    assert!(map.set_many([("a".to_owned(), 1), ("b".to_owned(), 2)]).ptr_eq(&map));
    assert!(map.set_many([]).ptr_eq(&map));
}

#[test]
fn set_many_applies_all_changes() {
    let map = sample().set_many([("a".to_owned(), 5), ("z".to_owned(), 26)]);
    assert_eq!(map.get("a"), Some(&5));
    assert_eq!(map.get("z"), Some(&26));
    assert_eq!(map.len(), 4);
}

#[test]
fn remove_unknown_keys_returns_same_instance() {
    let map = sample();
    assert!(map.remove(&["x"]).ptr_eq(&map));
    assert!(map.remove::<&str>(&[]).ptr_eq(&map));
}

#[test]
fn remove_drops_keys_and_order_entries() {
    let map = sample().remove(&["b"]);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(!map.contains_key("b"));
}

#[test]
fn remove_all_yields_empty_instance() {
    let map = sample().remove(&["a", "b", "c"]);
    assert!(map.ptr_eq(&ImmutableMap::empty()));
}

#[test]
fn update_missing_or_unchanged_returns_same_instance() {
    let map = sample();
    assert!(map.update("missing", |value| value + 1).ptr_eq(&map));
    assert!(map.update("a", |value| *value).ptr_eq(&map));
    assert_eq!(map.update("a", |value| value + 1).get("a"), Some(&2));
}

#[test]
fn equality_ignores_insertion_order() {
    let reversed = ImmutableMap::of([("c".to_owned(), 3), ("b".to_owned(), 2), ("a".to_owned(), 1)]);
    assert_eq!(sample(), reversed);
    assert_ne!(sample(), sample().set("a", 0));
}

#[test]
fn deserialize_preserves_document_order() {
    let map: ImmutableMap<i32> = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).expect("deserialize");
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    assert_eq!(serde_json::to_string(&map).expect("serialize"), r#"{"z":1,"a":2,"m":3}"#);
}
