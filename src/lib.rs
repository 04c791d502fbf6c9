//! A generic set of unique elements with copy-out into caller-owned buffers.
//!
//! [`KeySet`] stores each distinct element once and exposes the usual set
//! operations. The [`Collection`] trait describes the same capabilities for
//! code that wants to be generic over the container.

mod collections;

pub use collections::{start_position, Collection, CopyToError, DefaultHashBuilder, Drain, IntoIter, Iter, KeySet};
