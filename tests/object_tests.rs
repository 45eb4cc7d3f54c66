#![cfg(feature = "object")]
//! Unit tests for the object operations.
//!
//! Tests cover:
//! - extend: later sources win, target keys are overwritten
//! - defaults: existing keys are kept, first source wins
//! - both: in-place mutation, returned reference, untouched sources

use rstest::rstest;
use underbar::collection::Mapping;
use underbar::object::{defaults, extend};

fn mapping(entries: &[(&str, i32)]) -> Mapping<i32> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
#[case(&[("a", 1)], &[("b", 2)], &[], &[("a", 1), ("b", 2)])]
#[case(&[("a", 1)], &[("a", 2)], &[("a", 3)], &[("a", 3)])]
#[case(&[], &[("x", 1), ("y", 2)], &[("y", 20)], &[("x", 1), ("y", 20)])]
#[case(&[("k", 0)], &[], &[], &[("k", 0)])]
fn extend_cases(
    #[case] target: &[(&str, i32)],
    #[case] first: &[(&str, i32)],
    #[case] second: &[(&str, i32)],
    #[case] expected: &[(&str, i32)],
) {
    let mut target = mapping(target);
    let (first, second) = (mapping(first), mapping(second));
    extend(&mut target, &[&first, &second]);
    assert_eq!(target, mapping(expected));
}

#[rstest]
fn extend_returns_the_target_for_chaining() {
    let mut target = mapping(&[("a", 1)]);
    let source = mapping(&[("b", 2)]);
    extend(&mut target, &[&source]).insert("c".to_string(), 3);
    assert_eq!(target, mapping(&[("a", 1), ("b", 2), ("c", 3)]));
}

#[rstest]
fn extend_with_owned_values() {
    let mut settings: Mapping<String> = Mapping::from([("theme".to_string(), "dark".to_string())]);
    let overrides = Mapping::from([("theme".to_string(), "light".to_string())]);
    extend(&mut settings, &[&overrides]);
    assert_eq!(settings["theme"], "light");
    assert_eq!(overrides["theme"], "light");
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
#[case(&[("a", 1)], &[("a", 10), ("b", 2)], &[], &[("a", 1), ("b", 2)])]
#[case(&[], &[("a", 1)], &[("a", 2), ("b", 3)], &[("a", 1), ("b", 3)])]
#[case(&[("a", 1)], &[], &[], &[("a", 1)])]
fn defaults_cases(
    #[case] target: &[(&str, i32)],
    #[case] first: &[(&str, i32)],
    #[case] second: &[(&str, i32)],
    #[case] expected: &[(&str, i32)],
) {
    let mut target = mapping(target);
    let (first, second) = (mapping(first), mapping(second));
    defaults(&mut target, &[&first, &second]);
    assert_eq!(target, mapping(expected));
}

#[rstest]
fn defaults_then_extend() {
    let mut options = mapping(&[("retries", 5)]);
    let fallback = mapping(&[("retries", 3), ("timeout", 30)]);
    let forced = mapping(&[("timeout", 10)]);

    extend(defaults(&mut options, &[&fallback]), &[&forced]);
    assert_eq!(options, mapping(&[("retries", 5), ("timeout", 10)]));
    assert_eq!(fallback, mapping(&[("retries", 3), ("timeout", 30)]));
}
