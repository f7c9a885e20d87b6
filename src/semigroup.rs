use std::{
    cmp,
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use derive_more::{Display, From};
use num_traits::Num;

/// A type whose values can be merged by an associative operation, so that
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
///
/// Failures of an [`Outcome`](crate::Outcome) are merged with this when both operands of an
/// accumulating combinator have failed.
pub trait Semigroup {
    fn combine(self, other: Self) -> Self;
}

/// Combines every item in order, or returns `None` if there are none.
pub fn combine_all<S: Semigroup>(items: impl IntoIterator<Item = S>) -> Option<S> {
    items.into_iter().reduce(Semigroup::combine)
}

macro_rules! additive_semigroup {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Semigroup for $ty {
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

additive_semigroup!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Semigroup for bool {
    fn combine(self, other: Self) -> Self {
        self || other
    }
}

impl Semigroup for () {
    fn combine(self, _: Self) -> Self {}
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher> Semigroup for HashSet<T, S> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// `None` is neutral.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

/// Keeps the leftmost value.
#[derive(Clone, Copy, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<T>(pub T);

impl<T> Semigroup for First<T> {
    fn combine(self, _: Self) -> Self {
        self
    }
}

/// Keeps the rightmost value.
#[derive(Clone, Copy, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<T>(pub T);

impl<T> Semigroup for Last<T> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

#[derive(Clone, Copy, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        Self(cmp::max(self.0, other.0))
    }
}

#[derive(Clone, Copy, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        Self(cmp::min(self.0, other.0))
    }
}

/// Multiplies numbers, where the bare integer impls add them.
#[derive(Clone, Copy, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<N>(pub N);

impl<N: Num> Semigroup for Product<N> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<N: Num> Default for Product<N> {
    fn default() -> Self {
        Self(N::one())
    }
}
