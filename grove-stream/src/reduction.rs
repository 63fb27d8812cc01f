//! Ready-made combine functions for [`crate::Stream::reduce`] and friends.
//!
//! ```
//! use grove_stream::{reduction, stream};
//!
//! let s = stream(vec![3, 1, 2]);
//! assert_eq!(s.reduce(reduction::sum), Some(6));
//! assert_eq!(s.reduce(reduction::max), Some(3));
//! assert_eq!(s.reduce_with(1, reduction::product), 6);
//! ```

use std::ops::{Add, Mul};

pub fn sum<T>(a: T, b: T) -> T
where
    T: Add<Output = T>,
{
    a + b
}

pub fn product<T>(a: T, b: T) -> T
where
    T: Mul<Output = T>,
{
    a * b
}

/// The smaller of the two; the earlier one on ties.
pub fn min<T>(a: T, b: T) -> T
where
    T: Ord,
{
    std::cmp::min(a, b)
}

/// The larger of the two; the later one on ties.
pub fn max<T>(a: T, b: T) -> T
where
    T: Ord,
{
    std::cmp::max(a, b)
}
