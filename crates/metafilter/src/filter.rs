//! The [`Filter`] trait and closure adapters.
//!
//! Every predicate in this crate, single or composite, implements
//! [`Filter`]. The scanner and the composites are generic over it, so a
//! filter stack is resolved entirely through static dispatch.

use std::fmt;

use crate::meta::And;

/// A pure predicate over records of type `R`.
///
/// Implementations must be deterministic and free of side effects: the
/// same filter state and the same record always give the same answer.
/// `accepts` borrows both sides immutably, so neither the filter nor the
/// record can change during evaluation.
///
/// # Manual Implementation
///
/// ```
/// use metafilter::{Card, Filter};
///
/// struct LeaderFilter {
///     leader_id: i32,
/// }
///
/// impl Filter<Card> for LeaderFilter {
///     fn accepts(&self, card: &Card) -> bool {
///         card.leader_id == self.leader_id
///     }
/// }
///
/// let card = Card::new(0, "Card1", 30.0, 1, 0);
/// assert!(LeaderFilter { leader_id: 0 }.accepts(&card));
/// ```
pub trait Filter<R: ?Sized> {
    /// Returns `true` if the record passes this filter.
    fn accepts(&self, record: &R) -> bool;

    /// Combines this filter with another into a statically dispatched AND.
    ///
    /// `self` is evaluated first; `other` only runs if `self` accepts.
    ///
    /// ```
    /// use metafilter::{Card, CostFilter, Filter, VersionFilter};
    ///
    /// let filter = CostFilter::new()
    ///     .with_max_cost(50.0)
    ///     .and(VersionFilter::from([1, 3]));
    ///
    /// assert!(filter.accepts(&Card::new(0, "Card1", 30.0, 1, 0)));
    /// assert!(!filter.accepts(&Card::new(4, "Card5", 45.0, 2, 1)));
    /// ```
    fn and<G>(self, other: G) -> And<Self, G>
    where
        Self: Sized,
        G: Filter<R>,
    {
        And::new(self, other)
    }
}

impl<R: ?Sized, F: Filter<R> + ?Sized> Filter<R> for &F {
    #[inline]
    fn accepts(&self, record: &R) -> bool {
        (**self).accepts(record)
    }
}

impl<R: ?Sized, F: Filter<R> + ?Sized> Filter<R> for Box<F> {
    #[inline]
    fn accepts(&self, record: &R) -> bool {
        (**self).accepts(record)
    }
}

/// Creates a filter from a closure.
///
/// ```
/// use metafilter::{from_fn, Card, Filter};
///
/// let led_by_one = from_fn(|card: &Card| card.leader_id == 1);
/// assert!(led_by_one.accepts(&Card::new(3, "Card4", 100.0, 1, 1)));
/// ```
pub fn from_fn<R, F>(predicate: F) -> FnFilter<F>
where
    R: ?Sized,
    F: Fn(&R) -> bool,
{
    FnFilter { predicate }
}

/// A filter backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnFilter<F> {
    predicate: F,
}

impl<R: ?Sized, F> Filter<R> for FnFilter<F>
where
    F: Fn(&R) -> bool,
{
    #[inline]
    fn accepts(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").finish_non_exhaustive()
    }
}
