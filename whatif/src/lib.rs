//! # whatif - Null/Empty-Conditional Dispatch Helpers
//!
//! `whatif` provides extension-style helpers that inspect a
//! possibly-absent collection and run exactly one of two callbacks: the
//! primary callback with the collection when it exists and holds at least
//! one element, the fallback otherwise.
//!
//! ## Quick Start
//!
//! ```rust
//! use whatif::WhatIfNotNullOrEmpty;
//!
//! let names: Option<Vec<&str>> = Some(vec!["ada", "grace"]);
//!
//! names.what_if_not_null_or_empty_or_else(
//!     |names| println!("greeting {} people", names.len()),
//!     || println!("nobody to greet"),
//! );
//! ```
//!
//! Plain containers work through the same trait; a plain receiver is
//! never absent, only possibly empty:
//!
//! ```rust
//! use whatif::WhatIfNotNullOrEmpty;
//!
//! vec![1, 2, 3].what_if_not_null_or_empty(|items| {
//!     assert_eq!(items, &[1, 2, 3]);
//! });
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod ext;
mod observe;

pub use ext::WhatIfNotNullOrEmpty;
pub use observe::observed;
pub use whatif_core::{
    // Error convenience
    BoxError,
    // Predicate
    Presence,
    // Dispatch kernel
    Selection,
    dispatch,
    try_dispatch,
};

/// Convenience re-exports for glob import.
pub mod prelude {
    pub use crate::{Presence, Selection, WhatIfNotNullOrEmpty};
}
