//! Bounded prefixes.
//!
//! `head(source, k)` yields at most the first `k` elements of `source`. The
//! cursor stops at whichever comes first: its remaining count reaching zero,
//! or the source running out.

use core::iter::FusedIterator;

use crate::sequence::Sequence;

pub fn head<S>(source: S, limit: usize) -> Head<S> {
    Head { source, limit }
}

/// A view over at most `limit` leading elements of `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head<S> {
    source: S,
    limit: usize,
}

impl<S> Head<S> {
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Sequence> Head<S> {
    pub fn iter(&self) -> HeadCursor<S::Cursor<'_>> {
        HeadCursor::new(self.source.cursor(), self.limit)
    }

    /// `min(source.len(), limit)`.
    pub fn len(&self) -> usize {
        self.source.len().min(self.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0 || self.source.is_empty()
    }
}

impl<S: Sequence> Sequence for Head<S> {
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;
    type Cursor<'a>
        = HeadCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        Head::len(self)
    }

    fn is_empty(&self) -> bool {
        Head::is_empty(self)
    }
}

impl<S: IntoIterator> IntoIterator for Head<S> {
    type Item = S::Item;
    type IntoIter = HeadCursor<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        HeadCursor::new(self.source.into_iter(), self.limit)
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Head<S> {
    type Item = S::Item<'a>;
    type IntoIter = HeadCursor<S::Cursor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S> IntoIterator for &'a mut Head<S>
where
    &'a mut S: IntoIterator,
{
    type Item = <&'a mut S as IntoIterator>::Item;
    type IntoIter = HeadCursor<<&'a mut S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        HeadCursor::new((&mut self.source).into_iter(), self.limit)
    }
}

/// Cursor of a [`Head`] view.
#[derive(Debug, Clone)]
pub struct HeadCursor<I> {
    iter: I,
    remaining: usize,
}

impl<I> HeadCursor<I> {
    fn new(iter: I, remaining: usize) -> Self {
        HeadCursor { iter, remaining }
    }
}

impl<I: Iterator> Iterator for HeadCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.remaining -= n + 1;
        let item = self.iter.nth(n);
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for HeadCursor<I> {}

impl<I: Iterator> FusedIterator for HeadCursor<I> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::range::range;
    use crate::sequence::ReverseSequence;

    #[test]
    fn test_truncates() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(head(&v, 2).into_iter().collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(head(&v, 2).len(), 2);
    }

    #[test]
    fn test_limit_past_end_is_full_source() {
        let v = vec![1, 2, 3];
        assert_eq!(head(&v, 10).into_iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
        assert_eq!(head(&v, 10).len(), 3);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let v = vec![1, 2, 3];
        let view = head(&v, 0);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.into_iter().next(), None);
    }

    #[test]
    fn test_empty_source_is_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(head(&empty, 5).is_empty());
    }

    #[test]
    fn test_unbounded_source() {
        let cursor = head(0u64.., 3).into_iter();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        assert_eq!(cursor.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mutation_through_borrowed_source() {
        let mut v = vec![1, 2, 3];
        for x in head(&mut v, 2) {
            *x = 0;
        }
        assert_eq!(v, vec![0, 0, 3]);
    }

    #[test]
    fn test_view_is_restartable() {
        let view = head(range(100), 3);
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!((&view).into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_nth() {
        let mut cursor = head(range(10), 4).into_iter();
        assert_eq!(cursor.nth(2), Some(2));
        assert_eq!(cursor.len(), 1);
        assert_eq!(cursor.nth(1), None);
        assert_eq!(cursor.next(), None);
    }

    static_assertions::assert_not_impl_any!(Head<Vec<i32>>: ReverseSequence);
}
