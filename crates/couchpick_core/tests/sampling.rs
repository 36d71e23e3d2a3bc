use couchpick_core::sample;
use std::collections::HashSet;

#[test]
fn returns_all_elements_when_n_exceeds_len() {
    let items = vec![1, 2, 3];
    let picked = sample(&items, 10);

    assert_eq!(picked.len(), 3);
    let picked_set: HashSet<i32> = picked.into_iter().collect();
    assert_eq!(picked_set, HashSet::from([1, 2, 3]));
}

#[test]
fn returns_exactly_n_distinct_members() {
    let items: Vec<i32> = (0..100).collect();
    let picked = sample(&items, 5);

    assert_eq!(picked.len(), 5);
    let picked_set: HashSet<i32> = picked.iter().copied().collect();
    assert_eq!(picked_set.len(), 5, "sampling is without replacement");
    assert!(picked_set.iter().all(|value| items.contains(value)));
}

#[test]
fn zero_and_empty_inputs_yield_empty_output() {
    let items = vec![1, 2, 3];
    assert!(sample(&items, 0).is_empty());

    let empty: Vec<i32> = Vec::new();
    assert!(sample(&empty, 5).is_empty());
}
