//! Property tests for the exactly-once and idempotence guarantees.

use proptest::prelude::*;
use std::collections::HashMap;
use whatif::{Selection, WhatIfNotNullOrEmpty, dispatch};

mod common;
use common::CallCount;

proptest! {
    #[test]
    fn exactly_one_callback_runs_for_sequences(items in proptest::collection::vec(any::<i32>(), 0..16)) {
        let present = CallCount::new();
        let absent = CallCount::new();

        (&items).what_if_not_null_or_empty_or_else(|_| present.bump(), || absent.bump());

        prop_assert_eq!(present.get() + absent.get(), 1);
        prop_assert_eq!(present.get() == 1, !items.is_empty());
    }

    #[test]
    fn exactly_one_callback_runs_for_maps(entries in proptest::collection::hash_map(".{0,8}", any::<i32>(), 0..8)) {
        let present = CallCount::new();
        let absent = CallCount::new();

        (&entries).what_if_not_null_or_empty_or_else(|_| present.bump(), || absent.bump());

        prop_assert_eq!(present.get() + absent.get(), 1);
        prop_assert_eq!(absent.get() == 1, entries.is_empty());
    }

    #[test]
    fn optional_receiver_matches_selection_of(receiver in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..8))) {
        let present = CallCount::new();
        let absent = CallCount::new();

        let back = receiver.clone().what_if_not_null_or_empty_or_else(
            |_| present.bump(),
            || absent.bump(),
        );

        let expected = Selection::of(receiver.as_ref());
        prop_assert_eq!(present.get() == 1, expected == Selection::Present);
        prop_assert_eq!(absent.get() == 1, expected == Selection::Absent);
        prop_assert_eq!(back, receiver);
    }

    #[test]
    fn primary_sees_the_original_elements(items in proptest::collection::vec(any::<i64>(), 1..16)) {
        let expected = items.clone();

        Some(items).what_if_not_null_or_empty_or_else(
            |seen| assert_eq!(seen, &expected),
            || unreachable!("receiver is non-empty"),
        );
    }

    #[test]
    fn dispatch_is_idempotent(receiver in proptest::option::of(proptest::collection::hash_map(".{0,4}", any::<i8>(), 0..4))) {
        let first = dispatch(receiver.as_ref(), |_: &HashMap<String, i8>| {}, || {});
        let second = dispatch(receiver.as_ref(), |_| {}, || {});
        prop_assert_eq!(first, second);
    }
}
