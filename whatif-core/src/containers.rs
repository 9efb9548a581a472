//! `Presence` for the standard library containers.
//!
//! Every impl delegates to the container's inherent `is_empty`. Hashed
//! collections stay generic over their hasher state so non-default
//! hashers dispatch the same way.

use crate::presence::Presence;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// Sequence-like

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Presence for [T; N] {
    fn is_present(&self) -> bool {
        N > 0
    }
}

impl<T> Presence for VecDeque<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

// Set-like

impl<T, S> Presence for HashSet<T, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for BTreeSet<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

// Map-like

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

// Strings, as degenerate sequences of chars

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}
