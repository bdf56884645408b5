//! Integration tests for persistent collections
//!
//! Tests LtVec and LtOrdSet with structural sharing and immutability.

use anatomy_foundation::{LtOrdSet, LtVec};

// =============================================================================
// LtVec
// =============================================================================

#[test]
fn vector_immutability() {
    let v1 = LtVec::unit(1);
    let v2 = v1.push_back(2);

    // v1 is unchanged
    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
}

#[test]
fn vector_insert_and_remove() {
    let v: LtVec<u32> = [10, 20, 30].into_iter().collect();

    let inserted = v.insert(1, 15).unwrap();
    assert_eq!(inserted.iter().copied().collect::<Vec<_>>(), vec![10, 15, 20, 30]);
    assert!(v.insert(4, 40).is_some());
    assert!(v.insert(5, 50).is_none());

    let (removed, value) = v.remove(0).unwrap();
    assert_eq!(value, 10);
    assert_eq!(removed.iter().copied().collect::<Vec<_>>(), vec![20, 30]);
    assert!(v.remove(3).is_none());
    assert_eq!(v.len(), 3);
}

#[test]
fn vector_update_out_of_bounds() {
    let v = LtVec::unit('a');
    assert!(v.update(1, 'b').is_none());
    assert_eq!(v.update(0, 'b').unwrap().get(0), Some(&'b'));
}

#[test]
fn vector_structural_sharing() {
    let mut v = LtVec::new();
    for i in 0..1000 {
        v = v.push_back(i);
    }

    let v2 = v.clone();
    let v3 = v2.push_back(1000);
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
    assert_eq!(v3.position(&1000), Some(1000));
}

// =============================================================================
// LtOrdSet
// =============================================================================

#[test]
fn ord_set_first_is_minimum() {
    let set: LtOrdSet<usize> = [7, 3, 9].into_iter().collect();
    assert_eq!(set.first(), Some(&3));

    let set = set.remove(&3);
    assert_eq!(set.first(), Some(&7));
    assert!(!set.contains(&3));
}

#[test]
fn ord_set_immutability() {
    let s1 = LtOrdSet::new().insert(4);
    let s2 = s1.extend([1, 2]);

    assert!(!s1.contains(&1));
    assert_eq!(s1.first(), Some(&4));
    assert_eq!(s2.first(), Some(&1));
    assert!(s2.contains(&2) && s2.contains(&4));
}
