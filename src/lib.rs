#![deny(missing_docs)]

//! Ordered map backed by an unbalanced binary search tree, see [`collections::TreeMap`].
//!
//! The generic map contract ( nullable keys, unsupported operations reported as errors ) is
//! the [`collections::OrderedMap`] trait, implemented for [`collections::TreeMap`] and for
//! [`std::collections::BTreeMap`].

//!# Features
//!
//! This crate supports the following cargo features:
//! - `testing` : exposes `TreeMap::make_node` and `TreeMap::set_tree`,
//!   which build trees of a chosen shape. Not for production use.
//! - `cap` : tests report allocated memory using the cap crate.

/// Containers.
pub mod collections;
