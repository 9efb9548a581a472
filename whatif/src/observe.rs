//! Observed dispatch for debugging/observation.

use whatif_core::{Presence, Selection, dispatch};

/// Dispatches like [`dispatch`] and records the selection under `helper`.
///
/// With the `tracing` feature enabled this emits a trace event before the
/// chosen callback runs; without it the call behaves exactly like
/// [`dispatch`].
pub fn observed<C, P, A>(
    helper: &'static str,
    container: Option<&C>,
    on_present: P,
    on_absent: A,
) -> Selection
where
    C: Presence + ?Sized,
    P: FnOnce(&C),
    A: FnOnce(),
{
    let selection = Selection::of(container);
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(helper, ?selection, "dispatching");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (helper, selection); // Suppress unused warning
    }
    dispatch(container, on_present, on_absent)
}
