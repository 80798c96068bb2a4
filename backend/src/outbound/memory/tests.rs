//! Tests for the in-memory entity store.

use rstest::rstest;

use super::*;

fn store_with(values: &[&str]) -> MemoryRepository<String> {
    let store = MemoryRepository::new();
    for value in values {
        let _ = store.next_id();
        store.add((*value).to_owned()).expect("add never fails");
    }
    store
}

#[test]
fn identities_are_sequential_from_zero() {
    let store = MemoryRepository::<String>::new();
    let issued: Vec<i64> = (0..5).map(|_| store.next_id()).collect();
    assert_eq!(issued, vec![0, 1, 2, 3, 4]);
}

#[test]
fn added_records_round_trip() {
    let store = store_with(&["first", "second"]);

    assert_eq!(store.get(0).expect("stored"), "first");
    assert_eq!(store.get(1).expect("stored"), "second");
    assert!(store.exists(0));
    assert!(store.exists(1));
}

#[rstest]
#[case(-1)]
#[case(2)]
#[case(i64::MAX)]
fn absent_ids_fail_every_lookup(#[case] id: i64) {
    let store = store_with(&["only"]);
    assert!(!store.exists(id));

    let expected = EntityRepositoryError::no_such_entity(id);
    assert_eq!(store.get(id), Err(expected));
    assert_eq!(store.update(id, "value".to_owned()), Err(expected));
    assert_eq!(store.delete(id), Err(expected));
}

#[test]
fn update_replaces_the_stored_record() {
    let store = store_with(&["before"]);

    store.update(0, "after".to_owned()).expect("occupied id");
    assert_eq!(store.get(0).expect("stored"), "after");
}

#[test]
fn delete_removes_permanently() {
    let store = store_with(&["doomed"]);

    store.delete(0).expect("occupied id");
    assert!(!store.exists(0));
    assert_eq!(store.get(0), Err(EntityRepositoryError::no_such_entity(0)));
}

#[test]
fn identities_are_never_reused_after_delete() {
    let store = store_with(&["doomed"]);
    store.delete(0).expect("occupied id");

    assert_eq!(store.next_id(), 1);
    store.add("fresh".to_owned()).expect("add never fails");
    assert!(!store.exists(0));
    assert_eq!(store.get(1).expect("stored"), "fresh");
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let store = store_with(&["first", "second"]);

    let mut snapshot = store.snapshot();
    snapshot.sort();
    assert_eq!(snapshot, vec!["first".to_owned(), "second".to_owned()]);

    store.delete(0).expect("occupied id");
    store.update(1, "changed".to_owned()).expect("occupied id");
    assert_eq!(snapshot, vec!["first".to_owned(), "second".to_owned()]);

    let mut fresh = store.snapshot();
    fresh.sort();
    assert_eq!(fresh, vec!["changed".to_owned()]);
}
