//! Membership tests.
//!
//! `is_in!(v, a, b, c)` compares `v` against each alternative in turn and
//! stops at the first match. `is_in!(v, container)` asks the container, and
//! the container type alone decides how: keyed containers answer through
//! [`KeyLookup`] (a tree walk or a hash probe), sequential ones through
//! [`linear_scan`]. Maps are searched by key.
//!
//! ```
//! use std::collections::BTreeMap;
//! use seqkit_core::{is_in, membership};
//!
//! let color = "teal";
//! assert!(is_in!(color, "red", "teal", "blue"));
//!
//! let names = vec![String::from("ada"), String::from("grace")];
//! assert!(membership::is_in("grace", &names));
//!
//! let ages = BTreeMap::from([("ada", 36), ("grace", 85)]);
//! assert!(is_in!("ada", ages));
//! assert!(!is_in!("36", ages));
//! ```

use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use hashbrown::Equivalent;

use crate::common::Integral;
use crate::range::Range;

/// True if `container` holds `value`.
pub fn is_in<Q, C>(value: &Q, container: &C) -> bool
where
    Q: ?Sized,
    C: Membership<Q> + ?Sized,
{
    container.has_member(value)
}

/// `is_in!(value, a, b, ...)` or `is_in!(value, container)`.
///
/// With two or more alternatives the macro expands to a chain of `==` that
/// short-circuits left to right; the alternatives after the first match are
/// never evaluated.
#[macro_export]
macro_rules! is_in {
    ($value:expr, $first:expr, $($rest:expr),+ $(,)?) => {
        match &$value {
            value => *value == $first $(|| *value == $rest)+,
        }
    };
    ($value:expr, $container:expr $(,)?) => {
        $crate::membership::is_in(&$value, &$container)
    };
}

/// A container that can say whether it holds a value.
pub trait Membership<Q: ?Sized> {
    fn has_member(&self, value: &Q) -> bool;
}

/// Sub-linear lookup by key.
pub trait KeyLookup<Q: ?Sized> {
    fn lookup(&self, key: &Q) -> bool;
}

/// Compares `value` against every item until one matches.
pub fn linear_scan<'a, I, T, Q>(items: I, value: &Q) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: PartialEq<Q> + 'a,
    Q: ?Sized,
{
    items.into_iter().any(|item| item == value)
}

impl<C, Q> Membership<Q> for &C
where
    C: Membership<Q> + ?Sized,
    Q: ?Sized,
{
    #[inline]
    fn has_member(&self, value: &Q) -> bool {
        (**self).has_member(value)
    }
}

macro_rules! sequential {
    ($(impl<$($g:ident),*> $ty:ty;)+) => {
        $(
            impl<Q: ?Sized, $($g),*> Membership<Q> for $ty
            where
                T: PartialEq<Q>,
            {
                #[inline]
                fn has_member(&self, value: &Q) -> bool {
                    linear_scan(self, value)
                }
            }
        )+
    };
}

sequential! {
    impl<T> [T];
    impl<T> Vec<T>;
    impl<T> VecDeque<T>;
    impl<T> LinkedList<T>;
}

impl<Q: ?Sized, T: PartialEq<Q>, const N: usize> Membership<Q> for [T; N] {
    #[inline]
    fn has_member(&self, value: &Q) -> bool {
        linear_scan(self, value)
    }
}

macro_rules! keyed {
    ($(impl<$($g:ident),*> $ty:ty where { $($bounds:tt)* } => |$this:ident, $key:ident| $lookup:expr;)+) => {
        $(
            impl<Q: ?Sized, $($g),*> KeyLookup<Q> for $ty
            where
                $($bounds)*
            {
                #[inline]
                fn lookup(&self, $key: &Q) -> bool {
                    let $this = self;
                    $lookup
                }
            }

            impl<Q: ?Sized, $($g),*> Membership<Q> for $ty
            where
                $($bounds)*
            {
                #[inline]
                fn has_member(&self, value: &Q) -> bool {
                    self.lookup(value)
                }
            }
        )+
    };
}

keyed! {
    impl<T> BTreeSet<T> where { T: Borrow<Q> + Ord, Q: Ord }
        => |set, key| set.contains(key);
    impl<K, V> BTreeMap<K, V> where { K: Borrow<Q> + Ord, Q: Ord }
        => |map, key| map.contains_key(key);
    impl<T, S> hashbrown::HashSet<T, S> where { T: Hash + Eq, Q: Hash + Equivalent<T>, S: BuildHasher }
        => |set, key| set.contains(key);
    impl<K, V, S> hashbrown::HashMap<K, V, S> where { K: Hash + Eq, Q: Hash + Equivalent<K>, S: BuildHasher }
        => |map, key| map.contains_key(key);
}

#[cfg(feature = "std")]
keyed! {
    impl<T, S> std::collections::HashSet<T, S> where { T: Borrow<Q> + Hash + Eq, Q: Hash + Eq, S: BuildHasher }
        => |set, key| set.contains(key);
    impl<K, V, S> std::collections::HashMap<K, V, S> where { K: Borrow<Q> + Hash + Eq, Q: Hash + Eq, S: BuildHasher }
        => |map, key| map.contains_key(key);
}

impl<T: Integral> KeyLookup<T> for Range<T> {
    #[inline]
    fn lookup(&self, key: &T) -> bool {
        self.contains(key)
    }
}

impl<T: Integral> Membership<T> for Range<T> {
    #[inline]
    fn has_member(&self, value: &T) -> bool {
        self.lookup(value)
    }
}
