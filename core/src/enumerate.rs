//! Index/element pairing.
//!
//! [`enumerate`] differs from [`Iterator::enumerate`] in three ways: the index
//! is an `isize` and may start anywhere, the view can be walked repeatedly
//! when its source is a [`Sequence`], and ownership of the source follows the
//! argument form (`&v`, `&mut v` or `v`).

use core::iter::FusedIterator;
use core::slice;

use crate::sequence::Sequence;

/// Pairs every element of `source` with its position, counting from zero.
pub fn enumerate<S>(source: S) -> Enumerate<S> {
    enumerate_from(source, 0)
}

/// Pairs every element of `source` with its position, counting from `start`.
pub fn enumerate_from<S>(source: S, start: isize) -> Enumerate<S> {
    Enumerate { source, start }
}

/// Enumerates the raw span `[begin, end)`.
///
/// # Safety
///
/// Unless `begin == end`, both pointers must be derived from the same
/// allocation, `begin <= end`, and the span must be valid for reads of
/// initialized `T` for `'a`, with no mutable access for that long.
pub unsafe fn enumerate_raw<'a, T>(begin: *const T, end: *const T, start: isize) -> Enumerate<&'a [T]> {
    let empty: &'a [T] = &[];
    if begin == end {
        return enumerate_from(empty, start);
    }
    // SAFETY: the caller guarantees both pointers lie in one allocation.
    let len = unsafe { end.offset_from(begin) };
    let span = match usize::try_from(len) {
        // SAFETY: the caller guarantees `[begin, end)` is readable for `'a`.
        Ok(len) => unsafe { slice::from_raw_parts(begin, len) },
        Err(_) => empty,
    };
    enumerate_from(span, start)
}

/// A view pairing each element of `S` with a running `isize` index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerate<S> {
    source: S,
    start: isize,
}

impl<S> Enumerate<S> {
    pub fn start(&self) -> isize {
        self.start
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Sequence> Enumerate<S> {
    pub fn iter(&self) -> Enumerated<S::Cursor<'_>> {
        Enumerated::new(self.source.cursor(), self.start)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item<'a>
        = (isize, S::Item<'a>)
    where
        Self: 'a;
    type Cursor<'a>
        = Enumerated<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        self.source.len()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<S: IntoIterator> IntoIterator for Enumerate<S> {
    type Item = (isize, S::Item);
    type IntoIter = Enumerated<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        Enumerated::new(self.source.into_iter(), self.start)
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Enumerate<S> {
    type Item = (isize, S::Item<'a>);
    type IntoIter = Enumerated<S::Cursor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S> IntoIterator for &'a mut Enumerate<S>
where
    &'a mut S: IntoIterator,
{
    type Item = (isize, <&'a mut S as IntoIterator>::Item);
    type IntoIter = Enumerated<<&'a mut S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        Enumerated::new((&mut self.source).into_iter(), self.start)
    }
}

/// Cursor of an [`Enumerate`] view.
#[derive(Debug, Clone)]
pub struct Enumerated<I> {
    iter: I,
    index: isize,
}

impl<I> Enumerated<I> {
    fn new(iter: I, index: isize) -> Self {
        Enumerated { iter, index }
    }

    /// The index the next element will be paired with.
    pub fn index(&self) -> isize {
        self.index
    }
}

impl<I: Iterator> Iterator for Enumerated<I> {
    type Item = (isize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index = index.wrapping_add(1);
        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.iter.nth(n)?;
        let index = self.index.wrapping_add(n as isize);
        self.index = index.wrapping_add(1);
        Some((index, item))
    }

    fn count(self) -> usize {
        self.iter.count()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerated<I> {}

impl<I: FusedIterator> FusedIterator for Enumerated<I> {}

#[cfg(test)]
mod tests {
    use alloc::collections::LinkedList;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sequence::ReverseSequence;

    #[test]
    fn test_enumerate_from_offset() {
        let pairs: Vec<_> = enumerate_from([5, 6, 7], 5).into_iter().collect();
        assert_eq!(pairs, vec![(5, 5), (6, 6), (7, 7)]);
    }

    #[test]
    fn test_enumerate_negative_start() {
        let pairs: Vec<_> = enumerate_from(&['a', 'b'], -1).into_iter().collect();
        assert_eq!(pairs, vec![(-1, &'a'), (0, &'b')]);
    }

    #[test]
    fn test_enumerate_empty() {
        let empty: Vec<u8> = Vec::new();
        let view = enumerate(&empty);
        assert!(view.is_empty());
        assert_eq!(view.into_iter().next(), None);
    }

    #[test]
    fn test_mutation_through_borrowed_source() {
        let mut v = vec![10, 20, 30];
        for (i, x) in enumerate(&mut v) {
            *x += i as i32;
        }
        assert_eq!(v, vec![10, 21, 32]);
    }

    #[test]
    fn test_mutation_through_owned_source() {
        let mut view = enumerate(vec![String::from("a"), String::from("b")]);
        for (i, s) in &mut view {
            s.push(char::from(b'0' + i as u8));
        }
        assert_eq!(view.into_inner(), vec!["a0", "b1"]);
    }

    #[test]
    fn test_borrowed_view_is_restartable() {
        let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let view = enumerate_from(&list, 1);
        let first: Vec<_> = (&view).into_iter().collect();
        let second: Vec<_> = view.cursor().collect();
        assert_eq!(first, second);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_raw_span() {
        let data = [3u16, 1, 4, 1, 5];
        let range = data.as_ptr_range();
        let view = unsafe { enumerate_raw(range.start, range.end, 0) };
        let pairs: Vec<_> = view.into_iter().map(|(i, x)| (i, *x)).collect();
        assert_eq!(pairs, vec![(0, 3), (1, 1), (2, 4), (3, 1), (4, 5)]);

        let view = unsafe { enumerate_raw(range.end, range.end, 0) };
        assert!(view.is_empty());
    }

    #[test]
    fn test_cursor_is_exact_size_and_skips() {
        let v = vec!['x', 'y', 'z', 'w'];
        let mut cursor = enumerate_from(&v, 10).into_iter();
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.nth(2), Some((12, &'z')));
        assert_eq!(cursor.index(), 13);
        assert_eq!(cursor.next(), Some((13, &'w')));
        assert_eq!(cursor.next(), None);
    }

    static_assertions::assert_not_impl_any!(Enumerate<Vec<i32>>: ReverseSequence);
}
