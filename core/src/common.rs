//! Pairwise common-type promotion.
//!
//! Rust never converts numeric operands implicitly, so mixing `i32` with
//! `usize` (or a user type with a primitive) goes through [`Promote`]: both
//! operands are cast to a shared type before they are compared or added.
//! Promotion is always between two types at a time; a chain of arguments is
//! promoted step by step from left to right, which lets a user type take part
//! even when no single type is common to every argument.
//!
//! The primitive table follows the usual arithmetic conversions:
//!
//! - any float with any integer gives the float; `f32` with `f64` gives `f64`
//! - two integers of the same signedness give the wider one
//! - a signed and an unsigned integer give the unsigned one when it is at
//!   least as wide, else the signed one
//! - pointer-sized integers count as 64 bits and win ties against `i64`/`u64`
//!
//! ```
//! use seqkit_core::common::{Common, Promote};
//!
//! let (a, b): (usize, usize) = 3i32.promote(4usize);
//! assert_eq!(a + b, 7);
//!
//! let widened: Common<u8, f32> = 2u8.promote(0.5f32).0;
//! assert_eq!(widened, 2.0);
//! ```

use core::fmt::Debug;

/// Casts `self` and `rhs` to a type able to represent both.
pub trait Promote<Rhs = Self> {
    type Output;

    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// The common type of `A` and `B`.
pub type Common<A, B> = <A as Promote<B>>::Output;

macro_rules! promote_table {
    ($($lhs:ty => { $($rhs:ty: $out:ty),+ $(,)? }),+ $(,)?) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )+)+
    };
}

promote_table! {
    i8 => {
        i8: i8, i16: i16, i32: i32, i64: i64, isize: isize, u8: u8,
        u16: u16, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    i16 => {
        i8: i16, i16: i16, i32: i32, i64: i64, isize: isize, u8: i16,
        u16: u16, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    i32 => {
        i8: i32, i16: i32, i32: i32, i64: i64, isize: isize, u8: i32,
        u16: i32, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    i64 => {
        i8: i64, i16: i64, i32: i64, i64: i64, isize: isize, u8: i64,
        u16: i64, u32: i64, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    isize => {
        i8: isize, i16: isize, i32: isize, i64: isize, isize: isize, u8: isize,
        u16: isize, u32: isize, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    u8 => {
        i8: u8, i16: i16, i32: i32, i64: i64, isize: isize, u8: u8,
        u16: u16, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    u16 => {
        i8: u16, i16: u16, i32: i32, i64: i64, isize: isize, u8: u16,
        u16: u16, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    u32 => {
        i8: u32, i16: u32, i32: u32, i64: i64, isize: isize, u8: u32,
        u16: u32, u32: u32, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    u64 => {
        i8: u64, i16: u64, i32: u64, i64: u64, isize: u64, u8: u64,
        u16: u64, u32: u64, u64: u64, usize: usize, f32: f32, f64: f64,
    },
    usize => {
        i8: usize, i16: usize, i32: usize, i64: usize, isize: usize, u8: usize,
        u16: usize, u32: usize, u64: usize, usize: usize, f32: f32, f64: f64,
    },
    f32 => {
        i8: f32, i16: f32, i32: f32, i64: f32, isize: f32, u8: f32,
        u16: f32, u32: f32, u64: f32, usize: f32, f32: f32, f64: f64,
    },
    f64 => {
        i8: f64, i16: f64, i32: f64, i64: f64, isize: f64, u8: f64,
        u16: f64, u32: f64, u64: f64, usize: f64, f32: f64, f64: f64,
    },
}

/// Primitive integers usable as `range` elements.
///
/// Arithmetic that could leave the element type (distances, aligned stops)
/// is carried out in `i128`, which holds every value of every implementor.
pub trait Integral: Copy + Ord + Debug {
    const ZERO: Self;

    fn to_i128(self) -> i128;

    /// Converts back, or `None` if `value` does not fit.
    fn from_i128(value: i128) -> Option<Self>;

    /// Converts back, truncating to the low bits when `value` does not fit.
    fn wrapping_from_i128(value: i128) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Integral for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline(always)]
                fn wrapping_from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )+
    };
}

impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

static_assertions::assert_not_impl_any!(f32: Integral);
static_assertions::assert_not_impl_any!(f64: Integral);
