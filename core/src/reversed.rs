//! Reverse-order views.
//!
//! [`reversed`] never buffers. It only accepts sources that can already be
//! walked backwards: as a view the source must be a [`ReverseSequence`], and
//! when consumed its iterator must be a [`DoubleEndedIterator`]. Anything else
//! (a hash set, a `head` view, a one-shot iterator) does not compile.
//!
//! Reversing twice restores the original order. When the inner view owns its
//! source, the outer view wraps that owned value and nothing else:
//!
//! ```
//! use seqkit_core::reversed::reversed;
//!
//! let x = vec![1, 2, 3];
//! let mut twice = reversed(reversed(x.clone()));
//! for v in &mut twice {
//!     *v *= 10;
//! }
//! assert_eq!(twice.into_inner().into_inner(), [10, 20, 30]);
//! assert_eq!(x, [1, 2, 3]);
//! ```

use core::iter::Rev;

use crate::sequence::{ReverseSequence, Sequence};

pub fn reversed<S>(source: S) -> Reversed<S> {
    Reversed { source }
}

/// A view walking `S` from its last element to its first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversed<S> {
    source: S,
}

impl<S> Reversed<S> {
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ReverseSequence> Reversed<S> {
    pub fn iter(&self) -> S::RevCursor<'_> {
        self.source.rcursor()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<S: ReverseSequence> Sequence for Reversed<S> {
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;
    type Cursor<'a>
        = S::RevCursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.rcursor()
    }

    fn len(&self) -> usize {
        self.source.len()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<S: ReverseSequence> ReverseSequence for Reversed<S> {
    type RevCursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn rcursor(&self) -> Self::RevCursor<'_> {
        self.source.cursor()
    }
}

impl<S> IntoIterator for Reversed<S>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
{
    type Item = S::Item;
    type IntoIter = Rev<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().rev()
    }
}

impl<'a, S: ReverseSequence> IntoIterator for &'a Reversed<S> {
    type Item = S::Item<'a>;
    type IntoIter = S::RevCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.rcursor()
    }
}

impl<'a, S> IntoIterator for &'a mut Reversed<S>
where
    &'a mut S: IntoIterator,
    <&'a mut S as IntoIterator>::IntoIter: DoubleEndedIterator,
{
    type Item = <&'a mut S as IntoIterator>::Item;
    type IntoIter = Rev<<&'a mut S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.source).into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, LinkedList};
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::range::range;

    #[test]
    fn test_reverses_borrowed_sources() {
        let v = vec![1, 2, 3];
        let out: Vec<_> = reversed(&v).into_iter().collect();
        assert_eq!(out, vec![&3, &2, &1]);

        let list: LinkedList<_> = ['a', 'b'].into_iter().collect();
        assert_eq!(reversed(&list).iter().collect::<Vec<_>>(), vec![&'b', &'a']);
    }

    #[test]
    fn test_reverses_ranges_and_maps() {
        assert_eq!(reversed(range(4)).into_iter().collect::<Vec<_>>(), vec![3, 2, 1, 0]);

        let m: BTreeMap<_, _> = [(1, 'x'), (2, 'y')].into_iter().collect();
        let keys: Vec<_> = reversed(&m).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![2, 1]);
    }

    #[test]
    fn test_empty_source() {
        let empty: Vec<i32> = Vec::new();
        let view = reversed(&empty);
        assert!(view.is_empty());
        assert_eq!(view.into_iter().next(), None);
    }

    #[test]
    fn test_double_reversal_by_reference_is_identity() {
        let v = vec![1, 2, 3];
        let twice = reversed(reversed(&v));
        assert_eq!(twice.cursor().collect::<Vec<_>>(), vec![&1, &2, &3]);
        assert_eq!(twice.rcursor().collect::<Vec<_>>(), vec![&3, &2, &1]);
        assert_eq!(twice.into_iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_double_reversal_of_owned_source_wraps_the_copy() {
        let x = vec![1, 2, 3];
        let mut twice = reversed(reversed(x.clone()));
        for v in &mut twice {
            *v += 100;
        }
        let inner = twice.into_inner().into_inner();
        assert_eq!(inner, vec![101, 102, 103]);
        assert_eq!(x, vec![1, 2, 3]);
        assert_ne!(inner, x);
    }

    #[test]
    fn test_mutation_through_borrowed_source() {
        let mut v = vec![1, 2, 3];
        let mut next = 0;
        for x in reversed(&mut v) {
            *x = next;
            next += 1;
        }
        assert_eq!(v, vec![2, 1, 0]);
    }

    #[test]
    fn test_view_is_restartable() {
        let view = reversed(vec![1, 2]);
        assert_eq!((&view).into_iter().collect::<Vec<_>>(), vec![&2, &1]);
        assert_eq!((&view).into_iter().collect::<Vec<_>>(), vec![&2, &1]);
        assert_eq!(view.len(), 2);
    }

    static_assertions::assert_not_impl_any!(Reversed<hashbrown::HashSet<i32>>: Sequence, IntoIterator);
    static_assertions::assert_not_impl_any!(Reversed<crate::head::Head<Vec<i32>>>: Sequence);
}
