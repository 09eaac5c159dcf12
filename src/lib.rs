//! Seqkit - lazy views and mixed-type folds
//!
//! # Overview
//!
//! Seqkit is a set of small, independent iteration adapters. Each one wraps
//! an existing source and produces elements on demand, without copying:
//!
//! - [`range()`], [`range_between`], [`range_step`]: arithmetic progressions
//! - [`enumerate()`], [`enumerate_from`]: `(index, element)` pairs
//! - [`zip!`]: lock-step iteration over up to eight sources
//! - [`reversed()`]: reverse traversal of sources that support it natively
//! - [`head()`]: a bounded prefix
//! - [`make_loaded_list`]: a sequence over an external record provider
//!
//! Next to the views sit the membership test [`is_in!`], the mixed-type
//! folds [`min!`], [`max!`], [`sum!`], and the positional record utilities
//! [`tuple_map!`] and [`tuple_reduce!`].
//!
//! # Quick Start
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let scores = vec![72, 91, 85, 60];
//!
//! // Views nest, and borrowing the source lets the view be walked again.
//! let top: Vec<_> = enumerate_from(head(reversed(&scores), 2), 1).into_iter().collect();
//! assert_eq!(top, [(1, &60), (2, &85)]);
//!
//! // Ranges never overshoot their stop, whatever the step.
//! let evens: Vec<_> = range_step(10, 0, -4)?.into_iter().collect();
//! assert_eq!(evens, [10, 6, 2]);
//!
//! // Mixed operand types are promoted pairwise.
//! let smallest: usize = min!(3i32, 8usize, 5u8);
//! assert_eq!(smallest, 3);
//!
//! assert!(is_in!(85, scores));
//! # Ok::<(), seqkit::Error>(())
//! ```
//!
//! # Ownership
//!
//! The argument form picks how a view holds its source: `&source` borrows it,
//! `&mut source` borrows it mutably so elements can be updated in place, and
//! `source` moves it into the view. A view that owns its source can still be
//! walked by reference with `&view` or `&mut view`.
//!
//! # Features
//!
//! - `std` (default): adds `std::collections::{HashMap, HashSet}` support.
//!   Without it the crate only needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the whole core API
pub use seqkit_core::*;

// Re-export the record utilities under their own path too
pub use seqkit_tuple as tuple;
pub use seqkit_tuple::{tuple_map, tuple_reduce};

/// Traits and constructors for glob import.
pub mod prelude {
    pub use seqkit_core::{
        ByCode, Promote, RecordProvider, ReverseSequence, Sequence, enumerate, enumerate_from, head,
        is_in, make_loaded_list, max, min, range, range_between, range_step, reversed, sum, zip,
    };
    pub use seqkit_tuple::{PolyFn, PolyFold, Uniform, tuple_map, tuple_reduce};
}
