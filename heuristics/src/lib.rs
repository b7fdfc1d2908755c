//! Distance functions between n-dimensional points.
//!
//! Pure and stateless. A search loop typically uses one of these as `h` when
//! it computes a node's ordering value `g + h` before queueing it.

#![forbid(unsafe_code)]

pub mod distance;

pub use distance::{chebyshev, l1_norm, l2_norm, Distance, HeuristicError};
