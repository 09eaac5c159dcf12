//! `min`, `max` and `sum` over mixed operand types.
//!
//! Each binary function promotes both operands to their common type with
//! [`Promote`] before comparing or adding. The variadic macros fold left to
//! right, promoting at every step, so `min!(a, b, c)` is
//! `min(min(a, b), c)` and the result type is built up one pair at a time.
//! On a tie both `min` and `max` return the left operand.
//!
//! ```
//! use seqkit_core::{max, min, sum};
//!
//! let smallest: usize = min!(4i32, 2usize, 9u8);
//! assert_eq!(smallest, 2);
//! assert_eq!(max!(1.5f32, 3i64), 3.0f32);
//! assert_eq!(sum!(1u8, 2i32, 0.5f64), 3.5);
//! assert_eq!(min!(7), 7);
//! ```

use core::ops::Add;

use crate::common::{Common, Promote};

/// The smaller of `a` and `b` in their common type; `a` on a tie.
#[inline]
pub fn min<A, B>(a: A, b: B) -> Common<A, B>
where
    A: Promote<B>,
    Common<A, B>: PartialOrd,
{
    let (left, right) = a.promote(b);
    if right < left { right } else { left }
}

/// The larger of `a` and `b` in their common type; `a` on a tie.
#[inline]
pub fn max<A, B>(a: A, b: B) -> Common<A, B>
where
    A: Promote<B>,
    Common<A, B>: PartialOrd,
{
    let (left, right) = a.promote(b);
    if right > left { right } else { left }
}

/// `a + b` in their common type.
#[inline]
pub fn sum<A, B>(a: A, b: B) -> <Common<A, B> as Add>::Output
where
    A: Promote<B>,
    Common<A, B>: Add,
{
    let (left, right) = a.promote(b);
    left + right
}

/// Left fold of [`fold::min`](crate::fold::min) over one or more arguments.
#[macro_export]
macro_rules! min {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!($crate::fold::min($first, $second) $(, $rest)*)
    };
}

/// Left fold of [`fold::max`](crate::fold::max) over one or more arguments.
#[macro_export]
macro_rules! max {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!($crate::fold::max($first, $second) $(, $rest)*)
    };
}

/// Left fold of [`fold::sum`](crate::fold::sum) over one or more arguments.
#[macro_export]
macro_rules! sum {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::sum!($crate::fold::sum($first, $second) $(, $rest)*)
    };
}
