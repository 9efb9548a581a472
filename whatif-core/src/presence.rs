//! # Predicate Layer (Presence)
//!
//! A container is *present* when it holds at least one element, and
//! *absent* when it is missing or empty. This module defines the element
//! half of that rule; absence of a surrounding `Option` is decided by the
//! dispatch layer, so a present callback always receives the unwrapped
//! container.

/// The "has at least one element" predicate over container shapes.
///
/// Implemented for the standard sequence, set and map types in this
/// crate. Implement it for your own container to make it usable with
/// [`dispatch`] and the `whatif` extension trait.
///
/// `Presence` is deliberately not implemented for `Option<C>`: the
/// dispatch layer unwraps the `Option` itself, which keeps the present
/// callback's argument a plain container.
///
/// [`dispatch`]: crate::dispatch()
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot report presence",
    label = "missing `Presence` implementation",
    note = "implement `is_present` for this container, or use one of the covered std containers."
)]
pub trait Presence {
    /// Returns `true` when the container holds at least one element.
    fn is_present(&self) -> bool;

    /// Returns `true` when the container holds no elements.
    fn is_absent(&self) -> bool {
        !self.is_present()
    }
}

impl<'a, C: Presence + ?Sized> Presence for &'a C {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}
