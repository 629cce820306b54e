use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Props {
    name: String,
    width: f64,
}

fn sample() -> Record<Props> {
    Record::new(Props { name: "button".to_owned(), width: 100.0 })
}

#[test]
fn update_with_same_value_returns_same_instance() {
    let record = sample();
    let next = record.update(|props| props.width = 100.0);
    assert!(next.ptr_eq(&record));
}

#[test]
fn update_with_new_value_returns_new_instance() {
    let record = sample();
    let next = record.update(|props| props.name = "label".to_owned());
    assert!(!next.ptr_eq(&record));
    assert_eq!(next.name, "label");
    assert_eq!(record.name, "button");
}

#[test]
fn equality_is_structural() {
    assert_eq!(sample(), sample());
    assert_ne!(sample(), sample().update(|props| props.width = 1.0));
}
