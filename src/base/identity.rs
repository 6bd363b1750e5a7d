//! Identity bound for addressing vertices.

use std::fmt;
use std::hash::Hash;

/// Capability bound for vertex identities.
///
/// An identity is an opaque, cheaply copyable, equality-comparable value
/// used to address vertices within a graph. Any type satisfying the bound
/// qualifies (`usize`, `u32`, `(u16, u16)`, a newtype over a UUID, ...);
/// the core never inspects identities beyond equality and hashing.
///
/// There is no in-band "no identity" value: absence is expressed as
/// `Option<I>` wherever a lookup or selection can come up empty.
pub trait VertexId: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> VertexId for T {}
