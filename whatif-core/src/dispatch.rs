//! # Dispatch Kernel
//!
//! A single branch over a possibly-absent container. From outside it is
//! just a function call; the only decision it makes is which of the two
//! supplied callbacks runs.
//!
//! The kernel is stateless and side-effect free. Everything observable
//! comes from the callbacks themselves, and `FnOnce` bounds make running
//! a callback twice unrepresentable.

use crate::presence::Presence;

/// Which callback a dispatch selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The container existed and held at least one element.
    Present,
    /// The container was missing or empty.
    Absent,
}

impl Selection {
    /// Computes the selection for a container without running callbacks.
    ///
    /// `dispatch` on the same input always selects the branch this
    /// function reports.
    pub fn of<C>(container: Option<&C>) -> Self
    where
        C: Presence + ?Sized,
    {
        match container {
            Some(c) if c.is_present() => Selection::Present,
            _ => Selection::Absent,
        }
    }
}

/// Runs `on_present` with the container when it is present, `on_absent`
/// otherwise.
///
/// Exactly one of the two callbacks runs, exactly once, and `on_present`
/// receives the original container reference. The kernel never raises; a
/// panic inside a callback unwinds to the caller untouched.
///
/// # Example
///
/// ```
/// use whatif_core::{Presence, Selection, dispatch};
///
/// struct Bag(usize);
///
/// impl Presence for Bag {
///     fn is_present(&self) -> bool {
///         self.0 > 0
///     }
/// }
///
/// let selection = dispatch(
///     Some(&Bag(2)),
///     |bag| assert_eq!(bag.0, 2),
///     || unreachable!("container is present"),
/// );
/// assert_eq!(selection, Selection::Present);
/// ```
pub fn dispatch<C, P, A>(container: Option<&C>, on_present: P, on_absent: A) -> Selection
where
    C: Presence + ?Sized,
    P: FnOnce(&C),
    A: FnOnce(),
{
    match container {
        Some(c) if c.is_present() => {
            on_present(c);
            Selection::Present
        }
        _ => {
            on_absent();
            Selection::Absent
        }
    }
}

/// Fallible form of [`dispatch`].
///
/// Callback selection is identical; an `Err` from the chosen callback
/// propagates unmodified (no wrapping, no retry, no suppression).
pub fn try_dispatch<C, P, A, E>(
    container: Option<&C>,
    on_present: P,
    on_absent: A,
) -> Result<Selection, E>
where
    C: Presence + ?Sized,
    P: FnOnce(&C) -> Result<(), E>,
    A: FnOnce() -> Result<(), E>,
{
    match container {
        Some(c) if c.is_present() => {
            on_present(c)?;
            Ok(Selection::Present)
        }
        _ => {
            on_absent()?;
            Ok(Selection::Absent)
        }
    }
}
