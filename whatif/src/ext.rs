//! # Extension Surface
//!
//! The public face of the crate family: `what_if_not_null_or_empty` and
//! friends, attached to `Option<C>` (the nullable receiver) and to plain
//! container references. All methods hand the receiver back for
//! chaining; no computed result is produced.

use whatif_core::{Presence, dispatch, try_dispatch};

/// Null/empty-checking conditional execution.
///
/// The methods inspect the receiver and run the primary callback when it
/// is *present* (exists and holds at least one element), or the fallback
/// when it is *absent* (missing or empty). Exactly one callback runs per
/// call, at most once.
///
/// Rust has no overloading, so the fallback-taking form carries the
/// `_or_else` suffix; the short form behaves exactly like `_or_else`
/// with a no-op fallback.
///
/// Callbacks run synchronously in place: an early `return` inside a
/// callback leaves the callback only, and a panic or an `Err` (in the
/// `try_` forms) reaches the caller unmodified.
///
/// # Example
///
/// ```
/// use whatif::WhatIfNotNullOrEmpty;
///
/// let tags: Option<Vec<&str>> = None;
///
/// tags.what_if_not_null_or_empty_or_else(
///     |tags| println!("{} tags", tags.len()),
///     || println!("no tags"),
/// );
/// ```
pub trait WhatIfNotNullOrEmpty: Sized {
    /// The container handed to the primary callback.
    type Container: Presence + ?Sized;

    /// Runs `what_if` when the receiver is present; does nothing otherwise.
    fn what_if_not_null_or_empty<P>(self, what_if: P) -> Self
    where
        P: FnOnce(&Self::Container),
    {
        self.what_if_not_null_or_empty_or_else(what_if, || {})
    }

    /// Runs `what_if` when the receiver is present, `what_if_not` otherwise.
    fn what_if_not_null_or_empty_or_else<P, A>(self, what_if: P, what_if_not: A) -> Self
    where
        P: FnOnce(&Self::Container),
        A: FnOnce();

    /// Fallible form of [`what_if_not_null_or_empty`][Self::what_if_not_null_or_empty].
    ///
    /// An `Err` from `what_if` propagates unmodified; an absent receiver
    /// yields `Ok`.
    fn try_what_if_not_null_or_empty<P, E>(self, what_if: P) -> Result<Self, E>
    where
        P: FnOnce(&Self::Container) -> Result<(), E>,
    {
        self.try_what_if_not_null_or_empty_or_else(what_if, || Ok(()))
    }

    /// Fallible form of [`what_if_not_null_or_empty_or_else`][Self::what_if_not_null_or_empty_or_else].
    ///
    /// The chosen callback's error propagates unmodified.
    fn try_what_if_not_null_or_empty_or_else<P, A, E>(
        self,
        what_if: P,
        what_if_not: A,
    ) -> Result<Self, E>
    where
        P: FnOnce(&Self::Container) -> Result<(), E>,
        A: FnOnce() -> Result<(), E>;
}

/// The nullable receiver. `None` and `Some(empty)` both count as absent.
impl<C: Presence> WhatIfNotNullOrEmpty for Option<C> {
    type Container = C;

    fn what_if_not_null_or_empty_or_else<P, A>(self, what_if: P, what_if_not: A) -> Self
    where
        P: FnOnce(&C),
        A: FnOnce(),
    {
        dispatch(self.as_ref(), what_if, what_if_not);
        self
    }

    fn try_what_if_not_null_or_empty_or_else<P, A, E>(
        self,
        what_if: P,
        what_if_not: A,
    ) -> Result<Self, E>
    where
        P: FnOnce(&C) -> Result<(), E>,
        A: FnOnce() -> Result<(), E>,
    {
        try_dispatch(self.as_ref(), what_if, what_if_not)?;
        Ok(self)
    }
}

/// Plain containers, reached through method-call autoref. A plain
/// receiver is never absent, only possibly empty.
impl<'a, C: Presence + ?Sized> WhatIfNotNullOrEmpty for &'a C {
    type Container = C;

    fn what_if_not_null_or_empty_or_else<P, A>(self, what_if: P, what_if_not: A) -> Self
    where
        P: FnOnce(&C),
        A: FnOnce(),
    {
        dispatch(Some(self), what_if, what_if_not);
        self
    }

    fn try_what_if_not_null_or_empty_or_else<P, A, E>(
        self,
        what_if: P,
        what_if_not: A,
    ) -> Result<Self, E>
    where
        P: FnOnce(&C) -> Result<(), E>,
        A: FnOnce() -> Result<(), E>,
    {
        try_dispatch(Some(self), what_if, what_if_not)?;
        Ok(self)
    }
}
