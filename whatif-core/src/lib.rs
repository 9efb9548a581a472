//! # whatif-core
//!
//! Core traits and the dispatch kernel for the WhatIf conditional
//! dispatch helpers.
//!
//! This crate has no dependencies and is designed to be imported by
//! extensions that don't need the `whatif` facade surface.
//!
//! # Two-Layer Architecture
//!
//! ## Layer 1: Predicate ([`Presence`])
//!
//! The single boolean question the whole crate family is built on:
//! does this container hold at least one element?
//!
//! - **Shape-agnostic**: one trait covers sequence-like, set-like and
//!   map-like containers; the std collections are covered out of the box
//! - **Open**: implement [`Presence`] for your own container to make it
//!   dispatchable
//!
//! ## Layer 2: Dispatch kernel ([`dispatch()`])
//!
//! A single branch over a possibly-absent container: run the primary
//! callback with the container when it is present, run the fallback
//! otherwise. Exactly one callback runs per call, at most once.
//!
//! - **Stateless**: no hidden state; the same input selects the same
//!   callback every time
//! - **Transparent**: the kernel raises nothing of its own; panics and
//!   `Err`s from callbacks reach the caller unmodified

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod containers;
mod dispatch;
mod error;
mod presence;

pub use dispatch::{Selection, dispatch, try_dispatch};
pub use error::BoxError;
pub use presence::Presence;
