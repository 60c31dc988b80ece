//! Statically composed filter groups.
//!
//! A composite is a fixed, ordered group of filters whose result is the
//! logical AND of its members, evaluated left to right and stopping at the
//! first rejection. The group is a plain value type: every combination of
//! members is its own type, and each member's `accepts` is called through
//! static dispatch so the compiler can inline the whole stack.
//!
//! Three shapes are provided:
//!
//! - Tuples: `(A, B, C)` is a filter whenever each member is. `()` is the
//!   empty group and accepts everything.
//! - [`MetaFilter`]: a named wrapper around a tuple that derefs to it, so
//!   members stay reachable for configuration (`filter.0.set_max_cost(..)`).
//! - [`And`]: the pairwise form produced by [`Filter::and`].

use std::ops::{Deref, DerefMut};

use crate::filter::Filter;

impl<R: ?Sized> Filter<R> for () {
    #[inline]
    fn accepts(&self, _record: &R) -> bool {
        true
    }
}

macro_rules! impl_tuple_filter {
    ($($member:ident)+) => {
        impl<R: ?Sized, $($member: Filter<R>),+> Filter<R> for ($($member,)+) {
            #[inline]
            fn accepts(&self, record: &R) -> bool {
                #[allow(non_snake_case)]
                let ($($member,)+) = self;
                $($member.accepts(record))&&+
            }
        }
    };
}

impl_tuple_filter!(A);
impl_tuple_filter!(A B);
impl_tuple_filter!(A B C);
impl_tuple_filter!(A B C D);
impl_tuple_filter!(A B C D E);
impl_tuple_filter!(A B C D E F);
impl_tuple_filter!(A B C D E F G);
impl_tuple_filter!(A B C D E F G H);
impl_tuple_filter!(A B C D E F G H I);
impl_tuple_filter!(A B C D E F G H I J);
impl_tuple_filter!(A B C D E F G H I J K);
impl_tuple_filter!(A B C D E F G H I J K L);

/// A fixed group of filters combined with AND.
///
/// `T` is the group of members, normally a tuple. The wrapper adds no
/// configuration of its own; it embeds the members and derefs to them.
///
/// # Example
///
/// ```
/// use metafilter::{Card, CostFilter, Filter, MetaFilter, VersionFilter};
///
/// let mut filter: MetaFilter<(CostFilter, VersionFilter)> = MetaFilter::default();
/// filter.0.set_max_cost(50.0);
/// filter.1.add_version(1).add_version(3);
///
/// assert!(filter.accepts(&Card::new(2, "Card3", 12.5, 1, 1)));
/// assert!(!filter.accepts(&Card::new(3, "Card4", 100.0, 1, 1)));
/// assert!(!filter.accepts(&Card::new(4, "Card5", 45.0, 2, 1)));
///
/// // No members: accepts everything.
/// let everything = MetaFilter::<()>::default();
/// assert!(everything.accepts(&Card::new(3, "Card4", 100.0, 1, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetaFilter<T = ()> {
    filters: T,
}

impl<T> MetaFilter<T> {
    /// Wraps a group of already configured filters.
    pub fn new(filters: T) -> Self {
        MetaFilter { filters }
    }

    /// The member filters.
    pub fn filters(&self) -> &T {
        &self.filters
    }

    /// The member filters, for configuration.
    pub fn filters_mut(&mut self) -> &mut T {
        &mut self.filters
    }

    /// Unwraps the member filters.
    pub fn into_inner(self) -> T {
        self.filters
    }
}

impl<T> Deref for MetaFilter<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.filters
    }
}

impl<T> DerefMut for MetaFilter<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.filters
    }
}

impl<T> From<T> for MetaFilter<T> {
    fn from(filters: T) -> Self {
        MetaFilter::new(filters)
    }
}

impl<R: ?Sized, T: Filter<R>> Filter<R> for MetaFilter<T> {
    #[inline]
    fn accepts(&self, record: &R) -> bool {
        self.filters.accepts(record)
    }
}

/// Two filters combined with AND. Created by [`Filter::and`].
///
/// Chaining `and` nests pairs, so `a.and(b).and(c)` evaluates `a`, then
/// `b`, then `c`, stopping at the first rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, second: B) -> Self {
        And { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<R: ?Sized, A: Filter<R>, B: Filter<R>> Filter<R> for And<A, B> {
    #[inline]
    fn accepts(&self, record: &R) -> bool {
        self.first.accepts(record) && self.second.accepts(record)
    }
}
