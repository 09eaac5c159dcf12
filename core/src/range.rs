//! Lazy arithmetic progressions.
//!
//! A [`Range`] stores its first element, its step and its element count. The
//! count is derived once at construction from the aligned stop, the first
//! value reachable from `start` in whole steps that is not strictly before
//! `stop`. The cursor then counts down instead of comparing against `stop`,
//! so a step that does not divide the distance can never skip past the end,
//! and the element type never overflows while stepping.
//!
//! ```
//! use seqkit_core::range::{range, range_between, range_step};
//!
//! assert!(range(3).into_iter().eq([0, 1, 2]));
//! assert!(range_between(1, 12).into_iter().rev().take(2).eq([11, 10]));
//! assert!(range_step(21, 7, -5)?.into_iter().eq([21, 16, 11]));
//! assert!(range_step(5, 10, -1)?.is_empty());
//! # Ok::<(), seqkit_core::Error>(())
//! ```

use core::iter::{FusedIterator, Rev};

use tracing::{debug, trace};

use crate::common::{Common, Integral, Promote};
use crate::error::{Error, Result};
use crate::sequence::{ReverseSequence, Sequence};

/// `range(stop)` is `range(0, stop, 1)`.
pub fn range<T: Integral>(stop: T) -> Range<T> {
    Range::from_parts(T::ZERO, stop, 1)
}

/// `range(start, stop)` with a step of one. Both ends are promoted to their
/// common type.
pub fn range_between<A, B>(start: A, stop: B) -> Range<Common<A, B>>
where
    A: Promote<B>,
    Common<A, B>: Integral,
{
    let (start, stop) = start.promote(stop);
    Range::from_parts(start, stop, 1)
}

/// `range(start, stop, step)`. The element type is the common type of all
/// three arguments; the step keeps its own sign even when that type is
/// unsigned.
pub fn range_step<A, B, C>(start: A, stop: B, step: C) -> Result<Range<Common<Common<A, B>, C>>>
where
    A: Promote<B>,
    Common<A, B>: Promote<C>,
    Common<Common<A, B>, C>: Integral,
    C: Integral,
{
    let step_value = step.to_i128();
    if step_value == 0 {
        debug!("range rejected: step is zero");
        return Err(Error::ZeroStep);
    }
    let (start, stop) = start.promote(stop);
    let (start, _) = start.promote(step);
    let (stop, _) = stop.promote(step);
    Ok(Range::from_parts(start, stop, step_value))
}

/// `range!(stop)`, `range!(start, stop)` or `range!(start, stop, step)`.
///
/// The three-argument form evaluates to a `Result` because the step may be
/// zero.
#[macro_export]
macro_rules! range {
    ($stop:expr $(,)?) => {
        $crate::range::range($stop)
    };
    ($start:expr, $stop:expr $(,)?) => {
        $crate::range::range_between($start, $stop)
    };
    ($start:expr, $stop:expr, $step:expr $(,)?) => {
        $crate::range::range_step($start, $stop, $step)
    };
}

/// A lazy arithmetic progression over an integral type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    start: T,
    step: i128,
    len: usize,
}

impl<T: Integral> Range<T> {
    fn from_parts(start: T, stop: T, step: i128) -> Self {
        let distance = stop.to_i128() - start.to_i128();
        let count = if step > 0 {
            if distance <= 0 { 0 } else { (distance + step - 1) / step }
        } else if distance >= 0 {
            0
        } else {
            (distance + step + 1) / step
        };
        // Only reachable for 64-bit element types on targets with a narrower
        // `usize`.
        let len = usize::try_from(count).unwrap_or(usize::MAX);
        trace!(?start, ?stop, step, len, "range");
        Range { start, step, len }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn step(&self) -> i128 {
        self.step
    }

    /// One step past the last element, if the element type can hold it.
    ///
    /// For an empty range this is `start`.
    pub fn aligned_stop(&self) -> Option<T> {
        T::from_i128(self.start.to_i128() + self.len as i128 * self.step)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<T> {
        (self.len > 0).then_some(self.start)
    }

    pub fn last(&self) -> Option<T> {
        self.iter().next_back()
    }

    /// True when `value` is one of the produced elements.
    pub fn contains(&self, value: &T) -> bool {
        let offset = value.to_i128() - self.start.to_i128();
        if offset % self.step != 0 {
            return false;
        }
        let index = offset / self.step;
        index >= 0 && index < (self.len as i128)
    }

    pub fn iter(&self) -> RangeCursor<T> {
        RangeCursor {
            front: self.start,
            step: self.step,
            remaining: self.len,
        }
    }
}

impl<T: Integral> Sequence for Range<T> {
    type Item<'a>
        = T
    where
        Self: 'a;
    type Cursor<'a>
        = RangeCursor<T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Integral> ReverseSequence for Range<T> {
    type RevCursor<'a>
        = Rev<RangeCursor<T>>
    where
        Self: 'a;

    #[inline]
    fn rcursor(&self) -> Self::RevCursor<'_> {
        self.iter().rev()
    }
}

impl<T: Integral> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Integral> IntoIterator for &Range<T> {
    type Item = T;
    type IntoIter = RangeCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeCursor<T> {
    front: T,
    step: i128,
    remaining: usize,
}

impl<T: Integral> RangeCursor<T> {
    #[inline]
    fn offset(&self, steps: usize) -> T {
        T::wrapping_from_i128(self.front.to_i128() + steps as i128 * self.step)
    }
}

impl<T: Integral> Iterator for RangeCursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.offset(1);
        }
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.front = self.offset(n);
        self.remaining -= n;
        self.next()
    }

    fn last(mut self) -> Option<T> {
        self.next_back()
    }
}

impl<T: Integral> DoubleEndedIterator for RangeCursor<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.offset(self.remaining))
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.remaining -= n;
        self.next_back()
    }
}

impl<T: Integral> ExactSizeIterator for RangeCursor<T> {}

impl<T: Integral> FusedIterator for RangeCursor<T> {}
