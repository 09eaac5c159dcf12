//! Positional maps and folds over fixed-arity, heterogeneous records.
//!
//! A *record* is a tuple or an array, of arity 1 to 8. Up to eight records of
//! the same arity, in any mix of tuples and arrays, can be combined position
//! by position. Arrays are read as tuples of their elements, and the result
//! is always a tuple:
//!
//! ```text
//! records:     (a0, a1, a2)   (b0, b1, b2)
//! transposed:  ((a0, b0), (a1, b1), (a2, b2))
//! mapped:      (f(a0, b0), f(a1, b1), f(a2, b2))
//! ```
//!
//! Because the positions may hold different types, the function is not a
//! closure but a [`PolyFn`]: a callable with one implementation per argument
//! group it accepts. Records of unequal arity have no [`Transpose`]
//! implementation, so mismatches are rejected at compile time.
//!
//! # Example
//!
//! ```
//! use seqkit_tuple::{PolyFn, Uniform, tuple_map, tuple_reduce};
//!
//! // Homogeneous records can use a plain closure.
//! let doubled = tuple_map(Uniform(|(x,): (i32,)| x * 2), ((1, 2, 3),));
//! assert_eq!(doubled, (2, 4, 6));
//!
//! // Heterogeneous records need one impl per position type.
//! struct Describe;
//!
//! impl PolyFn<(i32,)> for Describe {
//!     type Output = bool;
//!     fn call(&mut self, (x,): (i32,)) -> bool {
//!         x > 0
//!     }
//! }
//!
//! impl PolyFn<(&'static str,)> for Describe {
//!     type Output = usize;
//!     fn call(&mut self, (s,): (&'static str,)) -> usize {
//!         s.len()
//!     }
//! }
//!
//! assert_eq!(tuple_map(Describe, ((7, "seven"),)), (true, 5));
//!
//! let total = tuple_reduce(Uniform(|acc: i32, (x,): (i32,)| acc + x), 0, ((1, 2, 3),));
//! assert_eq!(total, 6);
//! ```
//!
//! # Reference preservation
//!
//! The result record holds exactly what the callable returns. A callable that
//! returns references at every position produces a record of references that
//! alias the inputs; a callable that returns values produces a record that
//! aliases nothing.

#![no_std]

/// A fixed-arity record: a tuple or an array.
pub trait Record {
    /// Number of positions.
    const ARITY: usize;

    /// The same positions as a tuple. Tuples are their own tuple form.
    type Tuple;

    /// The record of shared references to each position.
    type Refs<'r>
    where
        Self: 'r;

    /// The record of mutable references to each position.
    type Muts<'r>
    where
        Self: 'r;

    fn into_tuple(self) -> Self::Tuple;

    fn as_refs(&self) -> Self::Refs<'_>;

    fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// A callable that accepts every argument group of a transposed record.
///
/// `Args` is always a tuple holding one element per input record, so a map
/// over a single record receives `(x,)` and a map over two records receives
/// `(x, y)`.
pub trait PolyFn<Args> {
    type Output;

    fn call(&mut self, args: Args) -> Self::Output;
}

/// A left fold step that accepts every argument group of a transposed record.
pub trait PolyFold<Acc, Args> {
    fn fold(&mut self, acc: Acc, args: Args) -> Acc;
}

impl<Args, F> PolyFn<Args> for &mut F
where
    F: PolyFn<Args> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn call(&mut self, args: Args) -> Self::Output {
        (**self).call(args)
    }
}

impl<Acc, Args, F> PolyFold<Acc, Args> for &mut F
where
    F: PolyFold<Acc, Args> + ?Sized,
{
    #[inline]
    fn fold(&mut self, acc: Acc, args: Args) -> Acc {
        (**self).fold(acc, args)
    }
}

/// Adapts one closure into a [`PolyFn`] or [`PolyFold`] for records whose
/// positions all share a type.
#[derive(Debug, Clone, Copy)]
pub struct Uniform<F>(pub F);

impl<F, A, O> PolyFn<A> for Uniform<F>
where
    F: FnMut(A) -> O,
{
    type Output = O;

    #[inline]
    fn call(&mut self, args: A) -> O {
        (self.0)(args)
    }
}

impl<F, Acc, A> PolyFold<Acc, A> for Uniform<F>
where
    F: FnMut(Acc, A) -> Acc,
{
    #[inline]
    fn fold(&mut self, acc: Acc, args: A) -> Acc {
        (self.0)(acc, args)
    }
}

/// Turns a tuple of records into one tuple of positional groups.
///
/// Implemented for one to eight records of equal arity, in any mix of tuples
/// and arrays.
pub trait Transpose {
    type Output;

    fn transpose(self) -> Self::Output;
}

/// Wraps every position of a tuple in a one-element group.
pub trait Singles {
    type Output;

    fn singles(self) -> Self::Output;
}

/// Appends `T` to the end of a tuple.
pub trait Push<T> {
    type Output;

    fn push(self, value: T) -> Self::Output;
}

/// Appends each position of `Rhs` to the matching group of `Self`.
pub trait Attach<Rhs> {
    type Output;

    fn attach(self, rhs: Rhs) -> Self::Output;
}

/// A record whose every position can be passed to `F`.
pub trait MapWith<F> {
    type Output;

    fn map_with(self, f: &mut F) -> Self::Output;
}

/// A record whose every position can be folded by `F` into `Acc`.
pub trait ReduceWith<F, Acc> {
    fn reduce_with(self, f: &mut F, init: Acc) -> Acc;
}

/// Applies `f` positionally across `records` and returns the tuple of results.
///
/// `records` is a tuple of one or more records of equal arity, e.g.
/// `(r,)` or `(r1, r2)`. See [`tuple_map!`] for the variadic form.
#[inline]
pub fn tuple_map<F, R>(mut f: F, records: R) -> <R::Output as MapWith<F>>::Output
where
    R: Transpose,
    R::Output: MapWith<F>,
{
    records.transpose().map_with(&mut f)
}

/// Folds `f(acc, group)` over every position of `records`, left to right.
#[inline]
pub fn tuple_reduce<F, Acc, R>(mut f: F, initial: Acc, records: R) -> Acc
where
    R: Transpose,
    R::Output: ReduceWith<F, Acc>,
{
    records.transpose().reduce_with(&mut f, initial)
}

/// Variadic form of [`tuple_map`]: `tuple_map!(f, r1, r2, ...)`.
#[macro_export]
macro_rules! tuple_map {
    ($f:expr, $($record:expr),+ $(,)?) => {
        $crate::tuple_map($f, ($($record,)+))
    };
}

/// Variadic form of [`tuple_reduce`]: `tuple_reduce!(f, init, r1, r2, ...)`.
#[macro_export]
macro_rules! tuple_reduce {
    ($f:expr, $init:expr, $($record:expr),+ $(,)?) => {
        $crate::tuple_reduce($f, $init, ($($record,)+))
    };
}

/// Invokes `$mac!` once per prefix of the given groups, so that a macro
/// written for "arity N" gets instantiated for every N.
#[doc(hidden)]
#[macro_export]
macro_rules! for_each_arity {
    ($mac:ident; $($group:tt)+) => {
        $crate::for_each_arity!(@step $mac; [] $($group)+);
    };
    (@step $mac:ident; [$($done:tt)*] $next:tt $($rest:tt)*) => {
        $mac!($($done)* $next);
        $crate::for_each_arity!(@step $mac; [$($done)* $next] $($rest)*);
    };
    (@step $mac:ident; [$($done:tt)*]) => {};
}

macro_rules! impl_records {
    ($( ($a:ident $b:ident $n:tt) )+) => {
        impl<$($a),+> Record for ($($a,)+) {
            const ARITY: usize = [$($n),+].len();

            type Tuple = Self;
            type Refs<'r> = ($(&'r $a,)+) where Self: 'r;
            type Muts<'r> = ($(&'r mut $a,)+) where Self: 'r;

            #[inline]
            fn into_tuple(self) -> Self {
                self
            }

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                ($(&self.$n,)+)
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                ($(&mut self.$n,)+)
            }
        }

        impl<$($a),+> Singles for ($($a,)+) {
            type Output = ($(($a,),)+);

            #[inline]
            fn singles(self) -> Self::Output {
                ($((self.$n,),)+)
            }
        }

        impl<$($a, $b),+> Attach<($($b,)+)> for ($($a,)+)
        where
            $($a: Push<$b>,)+
        {
            type Output = ($(<$a as Push<$b>>::Output,)+);

            #[inline]
            fn attach(self, rhs: ($($b,)+)) -> Self::Output {
                ($(Push::push(self.$n, rhs.$n),)+)
            }
        }

        impl<Func, $($a),+> MapWith<Func> for ($($a,)+)
        where
            $(Func: PolyFn<$a>,)+
        {
            type Output = ($(<Func as PolyFn<$a>>::Output,)+);

            #[inline]
            fn map_with(self, f: &mut Func) -> Self::Output {
                ($(<Func as PolyFn<$a>>::call(f, self.$n),)+)
            }
        }

        impl<Func, Acc, $($a),+> ReduceWith<Func, Acc> for ($($a,)+)
        where
            $(Func: PolyFold<Acc, $a>,)+
        {
            #[inline]
            fn reduce_with(self, f: &mut Func, init: Acc) -> Acc {
                let acc = init;
                $(let acc = <Func as PolyFold<Acc, $a>>::fold(f, acc, self.$n);)+
                acc
            }
        }
    };
}

for_each_arity!(impl_records;
    (A0 B0 0) (A1 B1 1) (A2 B2 2) (A3 B3 3)
    (A4 B4 4) (A5 B5 5) (A6 B6 6) (A7 B7 7)
);

macro_rules! same_type {
    ($_position:ident, $t:ty) => {
        $t
    };
}

macro_rules! impl_array_records {
    ($( $len:literal => $($x:ident)+ ;)+) => {$(
        impl<T> Record for [T; $len] {
            const ARITY: usize = $len;

            type Tuple = ($(same_type!($x, T),)+);
            type Refs<'r> = [&'r T; $len] where Self: 'r;
            type Muts<'r> = [&'r mut T; $len] where Self: 'r;

            #[inline]
            fn into_tuple(self) -> Self::Tuple {
                let [$($x),+] = self;
                ($($x,)+)
            }

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                self.each_ref()
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                self.each_mut()
            }
        }
    )+};
}

impl_array_records! {
    1 => x0;
    2 => x0 x1;
    3 => x0 x1 x2;
    4 => x0 x1 x2 x3;
    5 => x0 x1 x2 x3 x4;
    6 => x0 x1 x2 x3 x4 x5;
    7 => x0 x1 x2 x3 x4 x5 x6;
    8 => x0 x1 x2 x3 x4 x5 x6 x7;
}

macro_rules! impl_push {
    ($( ($g:ident $n:tt) )+) => {
        impl<$($g,)+ New> Push<New> for ($($g,)+) {
            type Output = ($($g,)+ New);

            #[inline]
            fn push(self, value: New) -> Self::Output {
                ($(self.$n,)+ value)
            }
        }
    };
}

// Groups hold one element per record, at most eight.
for_each_arity!(impl_push;
    (G0 0) (G1 1) (G2 2) (G3 3) (G4 4) (G5 5) (G6 6)
);

impl<R0: Record> Transpose for (R0,)
where
    R0::Tuple: Singles,
{
    type Output = <R0::Tuple as Singles>::Output;

    #[inline]
    fn transpose(self) -> Self::Output {
        self.0.into_tuple().singles()
    }
}

macro_rules! impl_transpose {
    ($( ($init:ident $i:tt) )+ ; ($last:ident $l:tt)) => {
        impl<$($init,)+ $last> Transpose for ($($init,)+ $last,)
        where
            ($($init,)+): Transpose,
            $last: Record,
            <($($init,)+) as Transpose>::Output: Attach<<$last as Record>::Tuple>,
        {
            type Output =
                <<($($init,)+) as Transpose>::Output as Attach<<$last as Record>::Tuple>>::Output;

            #[inline]
            fn transpose(self) -> Self::Output {
                let init = ($(self.$i,)+);
                init.transpose().attach(self.$l.into_tuple())
            }
        }
    };
}

impl_transpose!((R0 0) ; (R1 1));
impl_transpose!((R0 0) (R1 1) ; (R2 2));
impl_transpose!((R0 0) (R1 1) (R2 2) ; (R3 3));
impl_transpose!((R0 0) (R1 1) (R2 2) (R3 3) ; (R4 4));
impl_transpose!((R0 0) (R1 1) (R2 2) (R3 3) (R4 4) ; (R5 5));
impl_transpose!((R0 0) (R1 1) (R2 2) (R3 3) (R4 4) (R5 5) ; (R6 6));
impl_transpose!((R0 0) (R1 1) (R2 2) (R3 3) (R4 4) (R5 5) (R6 6) ; (R7 7));

static_assertions::const_assert_eq!(<(u8,) as Record>::ARITY, 1);
static_assertions::const_assert_eq!(<(u8, u16, u32, u64, i8, i16, i32, i64) as Record>::ARITY, 8);
static_assertions::const_assert_eq!(<[u8; 5] as Record>::ARITY, 5);
static_assertions::assert_not_impl_any!(((i32, i32), (i32,)): Transpose);
static_assertions::assert_not_impl_any!(([i32; 2], [i32; 3]): Transpose);
static_assertions::assert_not_impl_any!(((i32, i32), [i32; 3]): Transpose);
