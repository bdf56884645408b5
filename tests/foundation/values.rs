//! Integration tests for Maybe and Pool

use anatomy_foundation::{ErrorKind, Maybe, Pool};

// =============================================================================
// Maybe
// =============================================================================

#[test]
fn maybe_of_is_present() {
    let value = Maybe::of(7);
    assert!(value.is_present());
    assert_eq!(value.get(), Some(&7));
    assert_eq!(value.unwrap().unwrap(), 7);
}

#[test]
fn maybe_none_unwrap_fails() {
    let value: Maybe<String> = Maybe::none();
    assert!(!value.is_present());
    assert_eq!(value.unwrap().unwrap_err().kind, ErrorKind::EmptyValue);
}

#[test]
fn maybe_default_is_none() {
    assert_eq!(Maybe::<u8>::default(), Maybe::none());
}

#[test]
fn maybe_option_conversions() {
    assert_eq!(Maybe::from(Some(3)).into_option(), Some(3));
    assert_eq!(Maybe::<i32>::from(None).into_option(), None);
}

#[test]
fn maybe_debug() {
    assert_eq!(format!("{:?}", Maybe::of("arm")), "Some(\"arm\")");
    assert_eq!(format!("{:?}", Maybe::<u8>::none()), "None");
}

// =============================================================================
// Pool
// =============================================================================

#[derive(Debug, Default, PartialEq)]
struct Tagged {
    tag: u32,
}

#[test]
fn pool_prefill_then_construct_then_reuse() {
    let mut pool: Pool<Tagged> = Pool::new(2);

    let first = pool.take();
    let second = pool.take();
    assert_eq!(first, Tagged::default());
    assert_eq!(second, Tagged::default());
    assert!(pool.is_empty());

    // Nothing given back yet: a fresh default value
    let third = pool.take();
    assert_eq!(third, Tagged::default());
    assert!(pool.is_empty());

    pool.give_back(Tagged { tag: 42 });
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.take(), Tagged { tag: 42 });
}

#[test]
fn pool_is_lifo() {
    let mut pool: Pool<Tagged> = Pool::default();
    pool.give_back(Tagged { tag: 1 });
    pool.give_back(Tagged { tag: 2 });

    assert_eq!(pool.take().tag, 2);
    assert_eq!(pool.take().tag, 1);
}
