//! Lock-step iteration over several sources.
//!
//! `zip!(a, b, c)` walks its sources together and yields one tuple per step.
//! It stops as soon as any source is exhausted, so the number of steps is the
//! length of the shortest source. The cursor is itself a tuple of cursors:
//! advancing maps "next" over that tuple, and the size hint folds the
//! sources' hints down to the shortest one.
//!
//! ```
//! use seqkit_core::zip;
//!
//! let names = ["ada", "grace", "barbara"];
//! let years = vec![1815, 1906];
//! let pairs: Vec<_> = zip!(&names, &years).into_iter().collect();
//! assert_eq!(pairs, [(&"ada", &1815), (&"grace", &1906)]);
//! ```

use core::iter::FusedIterator;

use seqkit_tuple::{PolyFn, PolyFold, Record, tuple_map, tuple_reduce};

use crate::sequence::Sequence;

/// Zips a tuple of one to eight sources.
pub fn zip<T>(sources: T) -> Zip<T> {
    Zip { sources }
}

/// `zip!(a, b, ...)` is `zip((a, b, ...))`.
#[macro_export]
macro_rules! zip {
    ($($source:expr),+ $(,)?) => {
        $crate::zip::zip(($($source,)+))
    };
}

/// A view over a tuple of sources walked in lock step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zip<T> {
    sources: T,
}

impl<T> Zip<T> {
    pub fn sources(&self) -> &T {
        &self.sources
    }

    pub fn into_inner(self) -> T {
        self.sources
    }
}

/// Cursor of a [`Zip`] view: one cursor per source.
#[derive(Debug, Clone)]
pub struct Zipped<T> {
    cursors: T,
}

/// Advances cursors left to right until one runs dry. Cursors after the
/// exhausted one are left untouched.
struct Advance {
    exhausted: bool,
}

impl<I: Iterator + ?Sized> PolyFn<(&mut I,)> for Advance {
    type Output = Option<I::Item>;

    #[inline]
    fn call(&mut self, (cursor,): (&mut I,)) -> Self::Output {
        if self.exhausted {
            return None;
        }
        let item = cursor.next();
        self.exhausted = item.is_none();
        item
    }
}

struct Retreat;

impl<I: DoubleEndedIterator + ?Sized> PolyFn<(&mut I,)> for Retreat {
    type Output = Option<I::Item>;

    #[inline]
    fn call(&mut self, (cursor,): (&mut I,)) -> Self::Output {
        cursor.next_back()
    }
}

/// Drops trailing elements until a cursor is no longer than `len`.
struct TrimBack {
    len: usize,
}

impl<I: DoubleEndedIterator + ExactSizeIterator + ?Sized> PolyFold<(), (&mut I,)> for TrimBack {
    fn fold(&mut self, (): (), (cursor,): (&mut I,)) {
        let excess = cursor.len().saturating_sub(self.len);
        if excess > 0 {
            cursor.nth_back(excess - 1);
        }
    }
}

/// Narrows a size hint to the shortest cursor.
struct Shortest;

type SizeHint = (usize, Option<usize>);

impl<I: Iterator + ?Sized> PolyFold<SizeHint, (&I,)> for Shortest {
    fn fold(&mut self, (lower, upper): SizeHint, (cursor,): (&I,)) -> SizeHint {
        let (cursor_lower, cursor_upper) = cursor.size_hint();
        let upper = match (upper, cursor_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (lower.min(cursor_lower), upper)
    }
}

struct ShortestLen;

impl<S: Sequence + ?Sized> PolyFold<usize, (&S,)> for ShortestLen {
    fn fold(&mut self, len: usize, (source,): (&S,)) -> usize {
        len.min(source.len())
    }
}

struct CursorOf;

impl<'a, S: Sequence + ?Sized + 'a> PolyFn<(&'a S,)> for CursorOf {
    type Output = S::Cursor<'a>;

    #[inline]
    fn call(&mut self, (source,): (&'a S,)) -> Self::Output {
        source.cursor()
    }
}

macro_rules! impl_zip {
    ($( ($s:ident $n:tt) )+) => {
        impl<$($s),+> Iterator for Zipped<($($s,)+)>
        where
            $($s: Iterator,)+
        {
            type Item = ($($s::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let advanced = tuple_map(Advance { exhausted: false }, (self.cursors.as_muts(),));
                Some(($(advanced.$n?,)+))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                tuple_reduce(Shortest, (usize::MAX, None), (self.cursors.as_refs(),))
            }
        }

        impl<$($s),+> ExactSizeIterator for Zipped<($($s,)+)>
        where
            $($s: ExactSizeIterator,)+
        {
        }

        impl<$($s),+> DoubleEndedIterator for Zipped<($($s,)+)>
        where
            $($s: DoubleEndedIterator + ExactSizeIterator,)+
        {
            fn next_back(&mut self) -> Option<Self::Item> {
                let len = self.len();
                tuple_reduce(TrimBack { len }, (), (self.cursors.as_muts(),));
                let taken = tuple_map(Retreat, (self.cursors.as_muts(),));
                Some(($(taken.$n?,)+))
            }
        }

        impl<$($s),+> FusedIterator for Zipped<($($s,)+)>
        where
            $($s: FusedIterator,)+
        {
        }

        impl<$($s),+> Zip<($($s,)+)>
        where
            $($s: Sequence,)+
        {
            pub fn iter(&self) -> Zipped<($($s::Cursor<'_>,)+)> {
                Zipped {
                    cursors: tuple_map(CursorOf, (self.sources.as_refs(),)),
                }
            }

            /// Length of the shortest source.
            pub fn len(&self) -> usize {
                tuple_reduce(ShortestLen, usize::MAX, (self.sources.as_refs(),))
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        impl<$($s),+> Sequence for Zip<($($s,)+)>
        where
            $($s: Sequence,)+
        {
            type Item<'a>
                = ($($s::Item<'a>,)+)
            where
                Self: 'a;
            type Cursor<'a>
                = Zipped<($($s::Cursor<'a>,)+)>
            where
                Self: 'a;

            fn cursor(&self) -> Self::Cursor<'_> {
                self.iter()
            }

            fn len(&self) -> usize {
                <Self>::len(self)
            }

            fn is_empty(&self) -> bool {
                <Self>::is_empty(self)
            }
        }

        impl<$($s),+> IntoIterator for Zip<($($s,)+)>
        where
            $($s: IntoIterator,)+
        {
            type Item = ($($s::Item,)+);
            type IntoIter = Zipped<($($s::IntoIter,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                Zipped {
                    cursors: ($(self.sources.$n.into_iter(),)+),
                }
            }
        }

        impl<'a, $($s),+> IntoIterator for &'a Zip<($($s,)+)>
        where
            $($s: Sequence,)+
        {
            type Item = ($($s::Item<'a>,)+);
            type IntoIter = Zipped<($($s::Cursor<'a>,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, $($s),+> IntoIterator for &'a mut Zip<($($s,)+)>
        where
            $(&'a mut $s: IntoIterator,)+
        {
            type Item = ($(<&'a mut $s as IntoIterator>::Item,)+);
            type IntoIter = Zipped<($(<&'a mut $s as IntoIterator>::IntoIter,)+)>;

            fn into_iter(self) -> Self::IntoIter {
                Zipped {
                    cursors: ($((&mut self.sources.$n).into_iter(),)+),
                }
            }
        }
    };
}

seqkit_tuple::for_each_arity!(impl_zip;
    (S0 0) (S1 1) (S2 2) (S3 3) (S4 4) (S5 5) (S6 6) (S7 7)
);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::range::range;
    use crate::sequence::ReverseSequence;

    #[test]
    fn test_stops_at_shortest_source() {
        let numbers = [1, 2, 3];
        let letters = ['a', 'b'];
        let pairs: Vec<_> = zip!(&numbers, &letters).into_iter().collect();
        assert_eq!(pairs, vec![(&1, &'a'), (&2, &'b')]);

        let empty: Vec<i32> = Vec::new();
        assert_eq!(zip!(&numbers, &empty).into_iter().count(), 0);
    }

    #[test]
    fn test_sources_after_the_exhausted_one_are_not_advanced() {
        let mut short = [1, 2].into_iter();
        let mut long = [10, 20, 30, 40].into_iter();
        let pairs: Vec<_> = zip!(&mut short, &mut long).into_iter().collect();
        assert_eq!(pairs, vec![(1, 10), (2, 20)]);
        assert_eq!(long.next(), Some(30));

        let mut first = [1, 2, 3].into_iter();
        let mut empty = core::iter::empty::<i32>();
        let mut last = [7, 8].into_iter();
        assert_eq!(zip!(&mut first, &mut empty, &mut last).into_iter().next(), None);
        assert_eq!(first.next(), Some(2));
        assert_eq!(last.next(), Some(7));
    }

    #[test]
    fn test_sequence_len_of_zip() {
        let view = zip!(vec![1, 2, 3], range(2), ['a']);
        assert_eq!(Sequence::len(&view), 1);
        assert!(!Sequence::is_empty(&view));
        assert!(Sequence::is_empty(&zip!(vec![1], Vec::<u8>::new())));
    }

    #[test]
    fn test_heterogeneous_sources() {
        let words = vec![String::from("one"), String::from("two")];
        let rows: Vec<_> = zip!(range(10), &words, "xyz".chars()).into_iter().collect();
        assert_eq!(rows, vec![(0, &words[0], 'x'), (1, &words[1], 'y')]);
    }

    #[test]
    fn test_single_source() {
        let rows: Vec<_> = zip!([7, 8]).into_iter().collect();
        assert_eq!(rows, vec![(7,), (8,)]);
    }

    #[test]
    fn test_mutation_through_borrowed_sources() {
        let mut totals = vec![1, 2, 3];
        let deltas = [10, 20, 30, 40];
        for (total, delta) in zip!(&mut totals, &deltas) {
            *total += *delta;
        }
        assert_eq!(totals, vec![11, 22, 33]);
    }

    #[test]
    fn test_mutation_through_owned_sources() {
        let mut view = zip!(vec![1, 2], vec![3, 4]);
        for (a, b) in &mut view {
            core::mem::swap(a, b);
        }
        assert_eq!(view.into_inner(), (vec![3, 4], vec![1, 2]));
    }

    #[test]
    fn test_view_is_restartable() {
        let view = zip!(vec![1, 2, 3], range(2));
        assert_eq!(view.len(), 2);
        let first: Vec<_> = (&view).into_iter().collect();
        let second: Vec<_> = view.cursor().collect();
        assert_eq!(first, vec![(&1, 0), (&2, 1)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reverse_aligns_to_shortest() {
        let numbers = [1, 2, 3, 4];
        let rows: Vec<_> = zip!(&numbers, range(3)).into_iter().rev().collect();
        assert_eq!(rows, vec![(&3, 2), (&2, 1), (&1, 0)]);

        let mut cursor = zip!(&numbers, range(3)).into_iter();
        assert_eq!(cursor.next(), Some((&1, 0)));
        assert_eq!(cursor.next_back(), Some((&3, 2)));
        assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn test_size_hint_ignores_unbounded_sources() {
        let v = vec!['a', 'b', 'c'];
        let cursor = zip!(0.., &v).into_iter();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_map_sources() {
        let map: BTreeMap<_, _> = [(1, "one"), (2, "two")].into_iter().collect();
        let rows: Vec<_> = zip!(&map, range(5)).into_iter().collect();
        assert_eq!(rows, vec![((&1, &"one"), 0), ((&2, &"two"), 1)]);
    }

    #[test]
    fn test_eight_sources() {
        let row = zip!([1u8], [2u16], [3u32], [4u64], [5i8], [6i16], [7i32], [8i64])
            .into_iter()
            .next();
        assert_eq!(row, Some((1u8, 2u16, 3u32, 4u64, 5i8, 6i16, 7i32, 8i64)));
    }

    static_assertions::assert_not_impl_any!(Zip<(Vec<i32>, Vec<i32>)>: ReverseSequence);
}
