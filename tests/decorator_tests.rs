#![cfg(feature = "function")]
//! Unit tests for the synchronous function decorators.
//!
//! Tests cover:
//! - identity
//! - once: single execution, remembered result, poisoning
//! - memoize: per-argument caching, tuple arguments, clearing

use std::cell::{Cell, RefCell};
use std::panic::{AssertUnwindSafe, catch_unwind};

use rstest::rstest;
use underbar::UnderbarError;
use underbar::function::{Memoized, Once, identity, memoize, once};

// =============================================================================
// identity
// =============================================================================

#[rstest]
#[case(0)]
#[case(-7)]
#[case(i64::MAX)]
fn identity_returns_its_argument(#[case] value: i64) {
    assert_eq!(identity(value), value);
}

#[rstest]
fn identity_moves_owned_values() {
    let words = vec!["moe".to_string()];
    let same = identity(words);
    assert_eq!(same, vec!["moe".to_string()]);
}

// =============================================================================
// once
// =============================================================================

#[rstest]
fn once_runs_the_function_a_single_time() {
    let calls = Cell::new(0);
    let increment = once(|amount: i32| {
        calls.set(calls.get() + amount);
        calls.get()
    });

    assert_eq!(increment.call(1), 1);
    assert_eq!(increment.call(10), 1);
    assert_eq!(increment.call(100), 1);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn once_ignores_later_arguments() {
    let first_word = once(|word: String| word.to_uppercase());
    assert_eq!(first_word.call("moe".to_string()), "MOE");
    assert_eq!(first_word.call("curly".to_string()), "MOE");
}

#[rstest]
fn once_state_transitions() {
    let wrapped = Once::new(|value: u8| value);
    assert!(!wrapped.is_called());
    assert_eq!(wrapped.get(), None);

    wrapped.call(4);
    assert!(wrapped.is_called());
    assert_eq!(wrapped.get(), Some(4));
}

#[rstest]
fn once_with_unit_result() {
    let log = RefCell::new(Vec::new());
    let record = once(|entry: &str| log.borrow_mut().push(entry.to_string()));
    record.call("start");
    record.call("again");
    assert_eq!(*log.borrow(), vec!["start".to_string()]);
}

#[rstest]
fn once_is_poisoned_by_a_panic() {
    let wrapped = once(|value: i32| -> i32 {
        if value < 0 {
            panic!("negative input");
        }
        value
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| wrapped.call(-1)));
    assert!(outcome.is_err());
    assert!(wrapped.is_poisoned());
    assert_eq!(wrapped.try_call(5), Err(UnderbarError::Poisoned));
}

#[rstest]
fn once_debug_format() {
    let wrapped = once(|value: i32| value * 2);
    assert_eq!(format!("{wrapped:?}"), "Once(<pending>)");
    wrapped.call(4);
    assert_eq!(format!("{wrapped:?}"), "Once(8)");
}

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn memoize_caches_per_argument() {
    let calls = Cell::new(0);
    let square = memoize(|number: u32| {
        calls.set(calls.get() + 1);
        number * number
    });

    assert_eq!(square.call(3), 9);
    assert_eq!(square.call(4), 16);
    assert_eq!(square.call(3), 9);
    assert_eq!(calls.get(), 2);
    assert_eq!(square.len(), 2);
    assert!(square.is_cached(&4));
    assert!(!square.is_cached(&5));
}

#[rstest]
fn memoize_tuple_arguments() {
    let calls = Cell::new(0);
    let add = memoize(|(left, right): (i32, i32)| {
        calls.set(calls.get() + 1);
        left + right
    });

    assert_eq!(add.call((1, 2)), 3);
    assert_eq!(add.call((2, 1)), 3);
    assert_eq!(add.call((1, 2)), 3);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn memoize_string_keys() {
    let calls = Cell::new(0);
    let shout = memoize(|word: String| {
        calls.set(calls.get() + 1);
        format!("{}!", word.to_uppercase())
    });

    assert_eq!(shout.call("hey".to_string()), "HEY!");
    assert_eq!(shout.call("hey".to_string()), "HEY!");
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn memoize_clear_forgets_results() {
    let calls = Cell::new(0);
    let double = memoize(|number: i32| {
        calls.set(calls.get() + 1);
        number * 2
    });

    double.call(1);
    double.clear();
    assert!(double.is_empty());
    double.call(1);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn memoize_with_explicit_hasher() {
    let lengths: Memoized<_, &str, usize, std::collections::hash_map::RandomState> =
        Memoized::new(|word: &str| word.len());
    assert_eq!(lengths.call("curly"), 5);
    assert_eq!(lengths.len(), 1);
}

#[rstest]
fn memoize_debug_format() {
    let negate = memoize(|number: i8| -number);
    negate.call(1);
    assert_eq!(format!("{negate:?}"), "Memoized { cached: 1, .. }");
}
