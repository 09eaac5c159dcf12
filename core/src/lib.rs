#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Lazy views and mixed-type folds.
//!
//! Every view wraps a source and produces elements on demand: [`range()`],
//! [`enumerate()`], [`zip()`], [`reversed()`], [`head()`] and the
//! provider-backed [`LoadedList`]. Views are walked by value (consuming the
//! source), or through `&view` / `&mut view` when the view owns its source,
//! and they nest freely. Alongside them sit the membership test
//! [`is_in!`] and the variadic folds [`min!`], [`max!`] and [`sum!`].

// Views and tests allocate through `alloc` on both std and no_std.
extern crate alloc;

pub mod common;
pub mod enumerate;
pub mod error;
pub mod fold;
pub mod head;
pub mod loaded_list;
pub mod membership;
pub mod range;
pub mod reversed;
pub mod sequence;
pub mod zip;

pub use common::{Common, Integral, Promote};
pub use enumerate::{Enumerate, Enumerated, enumerate, enumerate_from, enumerate_raw};
pub use error::{Error, Result};
pub use head::{Head, HeadCursor, head};
pub use loaded_list::{ByCode, LoadedList, RecordProvider, Records, make_loaded_list};
pub use membership::{KeyLookup, Membership, is_in, linear_scan};
pub use range::{Range, RangeCursor, range, range_between, range_step};
pub use reversed::{Reversed, reversed};
pub use sequence::{ReverseSequence, Sequence};
pub use zip::{Zip, Zipped, zip};

pub use seqkit_tuple::{PolyFn, PolyFold, Record, Transpose, Uniform, tuple_map, tuple_reduce};
