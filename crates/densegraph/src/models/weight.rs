//! Edge weights and the "no edge" sentinel.
//!
//! A dense adjacency matrix stores one weight per ordered vertex pair. Pairs
//! without an edge hold a reserved sentinel value that no real edge may carry.

use std::fmt::Debug;

/// Numeric edge weight.
///
/// Weights only need a partial order at the type level; values that are not
/// comparable with themselves (NaN) are rejected when a matrix is built, so
/// every weight stored in an [`AdjacencyMatrix`](crate::AdjacencyMatrix) is
/// totally ordered.
pub trait Weight: Copy + PartialOrd + Debug {
    /// Whether this value takes part in the weight order.
    #[inline]
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(impl Weight for $t {})*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Returns false exactly when `weight` is the sentinel.
#[inline]
pub fn is_edge<W: Weight>(weight: W, sentinel: W) -> bool {
    weight != sentinel
}

/// The reserved "no edge" value of a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Sentinel<W>(W);

impl<W: Weight> Sentinel<W> {
    /// Wrap a sentinel value, or `None` if it is not comparable.
    pub fn new(value: W) -> Option<Self> {
        value.is_comparable().then_some(Sentinel(value))
    }

    /// The raw sentinel value.
    #[inline]
    pub fn value(&self) -> W {
        self.0
    }

    /// Check whether a stored weight denotes an edge.
    #[inline]
    pub fn is_edge(&self, weight: W) -> bool {
        is_edge(weight, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_edge() {
        assert!(!is_edge(0, 0));
        assert!(is_edge(5, 0));
        assert!(is_edge(-1i64, 0));
        assert!(!is_edge(f64::INFINITY, f64::INFINITY));
        assert!(is_edge(0.0, f64::INFINITY));
    }

    #[test]
    fn test_comparable() {
        assert!(3u8.is_comparable());
        assert!(f32::INFINITY.is_comparable());
        assert!(!f64::NAN.is_comparable());
    }

    #[test]
    fn test_sentinel() {
        let s = Sentinel::new(-1i32).unwrap();
        assert_eq!(s.value(), -1);
        assert!(s.is_edge(0));
        assert!(!s.is_edge(-1));

        assert!(Sentinel::new(f64::NAN).is_none());
    }
}
