use super::*;

fn ids(values: &[&str]) -> ImmutableSet<String> {
    ImmutableSet::of(values.iter().map(|value| (*value).to_owned()))
}

#[test]
fn of_without_elements_is_the_empty_instance() {
    let set = ImmutableSet::<String>::of([]);
    assert!(set.ptr_eq(&ImmutableSet::empty()));
}

#[test]
fn of_drops_duplicates_and_keeps_first_position() {
    let set = ids(&["b", "a", "b", "c"]);
    assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn equality_ignores_order() {
    assert_eq!(ids(&["a", "b"]), ids(&["b", "a"]));
    assert_ne!(ids(&["a", "b"]), ids(&["a"]));
}

#[test]
fn add_existing_members_returns_same_instance() {
    let set = ids(&["a", "b"]);
    assert!(set.add(["a".to_owned()]).ptr_eq(&set));
    assert!(set.add([]).ptr_eq(&set));
}

#[test]
fn add_appends_new_members() {
    let set = ids(&["a"]).add(["b".to_owned(), "a".to_owned()]);
    assert_eq!(set.to_vec(), vec!["a", "b"]);
}

#[test]
fn remove_unknown_members_returns_same_instance() {
    let set = ids(&["a", "b"]);
    assert!(set.remove(&["z".to_owned()]).ptr_eq(&set));
    assert!(set.remove(&[]).ptr_eq(&set));
}

#[test]
fn remove_last_member_yields_empty_instance() {
    let set = ids(&["a"]).remove(&["a".to_owned()]);
    assert!(set.ptr_eq(&ImmutableSet::empty()));
}

#[test]
fn toggle_flips_membership() {
    let set = ids(&["a"]);
    assert!(set.toggle("b".to_owned()).contains(&"b".to_owned()));
    assert!(!set.toggle("a".to_owned()).contains(&"a".to_owned()));
}

#[test]
fn deserialize_drops_duplicates() {
    let set: ImmutableSet<String> = serde_json::from_str(r#"["a","a","b"]"#).expect("deserialize");
    assert_eq!(set.to_vec(), vec!["a", "b"]);
}

#[test]
fn remove_keeps_order_of_remaining_members() {
    let set = ids(&["a", "b", "c", "d"]).remove(&["b".to_owned()]);
    assert_eq!(set.to_vec(), vec!["a", "c", "d"]);
    assert_eq!(set.iter().rev().cloned().collect::<Vec<_>>(), vec!["d", "c", "a"]);
}
