//! Sequence views over external record providers.
//!
//! A [`RecordProvider`] is a data source that must be loaded before use and
//! then answers positional and code-keyed lookups one record at a time.
//! [`make_loaded_list`] loads it once and wraps it in a [`LoadedList`], which
//! exposes the records as a random-access, double-ended sequence. Records are
//! fetched lazily, one provider call per element produced.

use alloc::rc::Rc;
use core::fmt;
use core::iter::{FusedIterator, Rev};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sequence::{ReverseSequence, Sequence};

/// A source of records addressable by position and by code.
pub trait RecordProvider {
    type Record: Clone;
    type Query;
    type Error;

    /// Fills the provider. Called exactly once, before any other method.
    fn load(&self, query: Self::Query) -> Result<(), Self::Error>;

    fn count(&self) -> usize;

    /// Only called with `index < count()`.
    fn record_by_index(&self, index: usize) -> Self::Record;

    fn record_by_code(&self, code: i64) -> Option<Self::Record>;
}

/// Key for [`LoadedList::by_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByCode(pub i64);

/// Loads `provider` with `query` and wraps it as a sequence.
pub fn make_loaded_list<P: RecordProvider>(provider: Rc<P>, query: P::Query) -> Result<LoadedList<P>, P::Error> {
    provider.load(query)?;
    let len = provider.count();
    trace!(len, "loaded list");
    Ok(LoadedList { provider, len })
}

/// A loaded provider viewed as a sequence of its records.
pub struct LoadedList<P> {
    provider: Rc<P>,
    len: usize,
}

impl<P> Clone for LoadedList<P> {
    fn clone(&self) -> Self {
        LoadedList {
            provider: Rc::clone(&self.provider),
            len: self.len,
        }
    }
}

impl<P> fmt::Debug for LoadedList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedList").field("len", &self.len).finish_non_exhaustive()
    }
}

impl<P: RecordProvider> LoadedList<P> {
    pub fn provider(&self) -> &Rc<P> {
        &self.provider
    }

    /// Record count, as reported by the provider right after loading.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<P::Record> {
        (index < self.len).then(|| self.provider.record_by_index(index))
    }

    /// Like [`get`](Self::get), but reports a bad index as an error.
    pub fn at(&self, index: usize) -> Result<P::Record> {
        self.get(index).ok_or_else(|| {
            debug!(index, len = self.len, "loaded list index out of range");
            Error::OutOfRange { index, len: self.len }
        })
    }

    pub fn by_code(&self, code: ByCode) -> Option<P::Record> {
        self.provider.record_by_code(code.0)
    }

    pub fn first(&self) -> Option<P::Record> {
        self.get(0)
    }

    pub fn last(&self) -> Option<P::Record> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> Records<P> {
        Records {
            provider: Rc::clone(&self.provider),
            front: 0,
            back: self.len,
        }
    }
}

impl<P: RecordProvider> Sequence for LoadedList<P> {
    type Item<'a>
        = P::Record
    where
        Self: 'a;
    type Cursor<'a>
        = Records<P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<P: RecordProvider> ReverseSequence for LoadedList<P> {
    type RevCursor<'a>
        = Rev<Records<P>>
    where
        Self: 'a;

    fn rcursor(&self) -> Self::RevCursor<'_> {
        self.iter().rev()
    }
}

impl<P: RecordProvider> IntoIterator for LoadedList<P> {
    type Item = P::Record;
    type IntoIter = Records<P>;

    fn into_iter(self) -> Self::IntoIter {
        Records {
            provider: self.provider,
            front: 0,
            back: self.len,
        }
    }
}

impl<P: RecordProvider> IntoIterator for &LoadedList<P> {
    type Item = P::Record;
    type IntoIter = Records<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over the records of a [`LoadedList`] in `[front, back)`.
pub struct Records<P> {
    provider: Rc<P>,
    front: usize,
    back: usize,
}

impl<P> Records<P> {
    /// Position of the next record [`next`](Iterator::next) would return.
    pub fn position(&self) -> usize {
        self.front
    }
}

impl<P> Clone for Records<P> {
    fn clone(&self) -> Self {
        Records {
            provider: Rc::clone(&self.provider),
            front: self.front,
            back: self.back,
        }
    }
}

impl<P> fmt::Debug for Records<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Records")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<P: RecordProvider> Iterator for Records<P> {
    type Item = P::Record;

    fn next(&mut self) -> Option<P::Record> {
        if self.front >= self.back {
            return None;
        }
        let record = self.provider.record_by_index(self.front);
        self.front += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<P::Record> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<P::Record> {
        self.next_back()
    }
}

impl<P: RecordProvider> DoubleEndedIterator for Records<P> {
    fn next_back(&mut self) -> Option<P::Record> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.provider.record_by_index(self.back))
    }

    fn nth_back(&mut self, n: usize) -> Option<P::Record> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<P: RecordProvider> ExactSizeIterator for Records<P> {}

impl<P: RecordProvider> FusedIterator for Records<P> {}
