//! The view abstraction shared by every adapter in this crate.
//!
//! A [`Sequence`] hands out fresh cursors from a shared reference, so a view
//! can be walked any number of times even though each cursor is single-pass.
//! [`ReverseSequence`] is the capability to walk backwards natively; sources
//! without it (hash-based collections, `enumerate`, `head`, `zip`) are
//! rejected at compile time by anything that needs reverse traversal.
//!
//! Ownership follows the caller's argument form:
//!
//! | Argument      | Mode              | Items                              |
//! |---------------|-------------------|------------------------------------|
//! | `&source`     | shared borrow     | `&T`                               |
//! | `&mut source` | mutable borrow    | `&mut T`                           |
//! | `source`      | owned by the view | `T`, or `&T` / `&mut T` via `&view` / `&mut view` |

use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque, btree_map, btree_set, linked_list, vec_deque};
use alloc::vec::Vec;
use core::{iter::Rev, slice};

/// A logical run of elements that can produce any number of cursors.
pub trait Sequence {
    type Item<'a>
    where
        Self: 'a;

    type Cursor<'a>: Iterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Returns a fresh cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Number of elements. Defaults to walking a fresh cursor.
    fn len(&self) -> usize {
        self.cursor().count()
    }

    fn is_empty(&self) -> bool {
        self.cursor().next().is_none()
    }
}

/// A sequence that can be walked from its last element to its first without
/// buffering.
pub trait ReverseSequence: Sequence {
    type RevCursor<'a>: Iterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Returns a fresh cursor positioned at the last element.
    fn rcursor(&self) -> Self::RevCursor<'_>;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<S: ReverseSequence + ?Sized> ReverseSequence for &S {
    type RevCursor<'a>
        = S::RevCursor<'a>
    where
        Self: 'a;

    #[inline]
    fn rcursor(&self) -> Self::RevCursor<'_> {
        (**self).rcursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<S: ReverseSequence + ?Sized> ReverseSequence for &mut S {
    type RevCursor<'a>
        = S::RevCursor<'a>
    where
        Self: 'a;

    #[inline]
    fn rcursor(&self) -> Self::RevCursor<'_> {
        (**self).rcursor()
    }
}

/// Implements `Sequence` (and optionally `ReverseSequence`) for a collection
/// whose inherent `iter`, `len` and `is_empty` already do the work.
macro_rules! impl_collection {
    (
        impl<$($g:ident),*> $ty:ty,
        item = |$lt:lifetime| $item:ty,
        cursor = $cursor:ty,
        reverse = $reverse:tt
    ) => {
        impl<$($g),*> Sequence for $ty {
            type Item<$lt>
                = $item
            where
                Self: $lt;
            type Cursor<$lt>
                = $cursor
            where
                Self: $lt;

            #[inline]
            fn cursor(&self) -> Self::Cursor<'_> {
                self.iter()
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn is_empty(&self) -> bool {
                <$ty>::is_empty(self)
            }
        }

        impl_collection!(@reverse $reverse, impl<$($g),*> $ty, |$lt| $cursor);
    };

    (@reverse true, impl<$($g:ident),*> $ty:ty, |$lt:lifetime| $cursor:ty) => {
        impl<$($g),*> ReverseSequence for $ty {
            type RevCursor<$lt>
                = Rev<$cursor>
            where
                Self: $lt;

            #[inline]
            fn rcursor(&self) -> Self::RevCursor<'_> {
                self.iter().rev()
            }
        }
    };

    (@reverse false, impl<$($g:ident),*> $ty:ty, |$lt:lifetime| $cursor:ty) => {};
}

impl_collection!(
    impl<T> [T],
    item = |'a| &'a T,
    cursor = slice::Iter<'a, T>,
    reverse = true
);

impl_collection!(
    impl<T> Vec<T>,
    item = |'a| &'a T,
    cursor = slice::Iter<'a, T>,
    reverse = true
);

impl_collection!(
    impl<T> VecDeque<T>,
    item = |'a| &'a T,
    cursor = vec_deque::Iter<'a, T>,
    reverse = true
);

impl_collection!(
    impl<T> LinkedList<T>,
    item = |'a| &'a T,
    cursor = linked_list::Iter<'a, T>,
    reverse = true
);

impl_collection!(
    impl<T> BTreeSet<T>,
    item = |'a| &'a T,
    cursor = btree_set::Iter<'a, T>,
    reverse = true
);

impl_collection!(
    impl<K, V> BTreeMap<K, V>,
    item = |'a| (&'a K, &'a V),
    cursor = btree_map::Iter<'a, K, V>,
    reverse = true
);

impl_collection!(
    impl<T, S> hashbrown::HashSet<T, S>,
    item = |'a| &'a T,
    cursor = hashbrown::hash_set::Iter<'a, T>,
    reverse = false
);

impl_collection!(
    impl<K, V, S> hashbrown::HashMap<K, V, S>,
    item = |'a| (&'a K, &'a V),
    cursor = hashbrown::hash_map::Iter<'a, K, V>,
    reverse = false
);

#[cfg(feature = "std")]
impl_collection!(
    impl<T, S> std::collections::HashSet<T, S>,
    item = |'a| &'a T,
    cursor = std::collections::hash_set::Iter<'a, T>,
    reverse = false
);

#[cfg(feature = "std")]
impl_collection!(
    impl<K, V, S> std::collections::HashMap<K, V, S>,
    item = |'a| (&'a K, &'a V),
    cursor = std::collections::hash_map::Iter<'a, K, V>,
    reverse = false
);

impl<T, const N: usize> Sequence for [T; N] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> ReverseSequence for [T; N] {
    type RevCursor<'a>
        = Rev<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn rcursor(&self) -> Self::RevCursor<'_> {
        self.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::*;

    fn forward<S: Sequence>(s: &S) -> Vec<S::Item<'_>> {
        s.cursor().collect()
    }

    fn backward<S: ReverseSequence>(s: &S) -> Vec<S::Item<'_>> {
        s.rcursor().collect()
    }

    #[test]
    fn test_collections_walk_forward_and_back() {
        let v = vec![1, 2, 3];
        assert_eq!(forward(&v), vec![&1, &2, &3]);
        assert_eq!(backward(&v), vec![&3, &2, &1]);

        let d: VecDeque<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(backward(&d), vec![&3, &2, &1]);

        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(backward(&l), vec![&3, &2, &1]);

        let s: BTreeSet<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(forward(&s), vec![&1, &2, &3]);

        let m: BTreeMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(backward(&m), vec![(&2, &'b'), (&1, &'a')]);
    }

    #[test]
    fn test_cursor_restarts() {
        let a = [4, 5, 6];
        let first: Vec<_> = a.cursor().collect();
        let second: Vec<_> = a.cursor().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_len_and_is_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(Sequence::is_empty(&empty));
        assert_eq!(Sequence::len(&empty), 0);

        let s: &[i32] = &[1, 2];
        assert_eq!(Sequence::len(&s), 2);
        assert_eq!(Sequence::len(&[0u8; 7]), 7);
    }

    #[test]
    fn test_references_forward() {
        let mut v = vec![1, 2];
        {
            let r = &mut v;
            assert_eq!(forward(&r), vec![&1, &2]);
            assert_eq!(backward(&r), vec![&2, &1]);
        }
        let r = &v;
        assert_eq!(Sequence::len(&r), 2);
    }

    #[test]
    fn test_hash_collections_are_forward_only() {
        let set: hashbrown::HashSet<i32> = [1, 2, 3].into_iter().collect();
        let mut seen: Vec<_> = forward(&set).into_iter().copied().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    static_assertions::assert_not_impl_any!(hashbrown::HashSet<i32>: ReverseSequence);
    static_assertions::assert_not_impl_any!(hashbrown::HashMap<i32, i32>: ReverseSequence);
    #[cfg(feature = "std")]
    static_assertions::assert_not_impl_any!(std::collections::HashSet<i32>: ReverseSequence);
}
