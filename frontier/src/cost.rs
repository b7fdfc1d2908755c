//! Numeric cost types usable as node path costs and ordering values.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric type that can serve as `path_cost` or `value` on a node.
///
/// The priority frontier needs a total order. Integers use their natural
/// order; floats use `total_cmp`, so `NaN` sorts after every finite value
/// instead of poisoning the heap.
pub trait Cost: Copy + PartialOrd + Debug {
    /// Additive identity, the path cost of a root node.
    const ZERO: Self;

    /// Total order over all values of the type.
    fn cost_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_cost_int {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                fn cost_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_cost_float {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;

                fn cost_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_cost_int!(i32, i64, u32, u64, usize);
impl_cost_float!(f32, f64);
