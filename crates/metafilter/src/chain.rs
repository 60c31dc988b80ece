//! Runtime-composed filter lists.
//!
//! [`FilterChain`] is the counterpart of [`MetaFilter`](crate::MetaFilter)
//! for when the set of active filters is only known at run time. Members
//! are boxed and called through dynamic dispatch; evaluation semantics are
//! identical: AND in insertion order, stopping at the first rejection, and
//! an empty chain accepts everything.

use std::fmt;

use crate::filter::{from_fn, Filter};

type BoxedFilter<R> = Box<dyn Filter<R> + Send + Sync>;

/// An ordered list of boxed filters combined with AND.
///
/// # Example
///
/// ```
/// use metafilter::{Card, CostFilter, Filter, FilterChain, VersionFilter};
///
/// let only_cheap = true;
///
/// let mut chain = FilterChain::new().with(VersionFilter::from([1]));
/// if only_cheap {
///     chain.push(CostFilter::new().with_max_cost(20.0));
/// }
///
/// assert!(chain.accepts(&Card::new(1, "Card2", 10.0, 1, 0)));
/// assert!(!chain.accepts(&Card::new(0, "Card1", 30.0, 1, 0)));
/// ```
pub struct FilterChain<R: ?Sized> {
    filters: Vec<BoxedFilter<R>>,
}

impl<R: ?Sized> FilterChain<R> {
    /// Creates an empty chain, which accepts everything.
    pub fn new() -> Self {
        FilterChain {
            filters: Vec::new(),
        }
    }

    /// Appends a filter.
    pub fn with<F>(mut self, filter: F) -> Self
    where
        F: Filter<R> + Send + Sync + 'static,
    {
        self.push(filter);
        self
    }

    /// Appends a closure as a filter.
    pub fn with_fn<F>(self, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.with(from_fn(predicate))
    }

    /// Appends a filter in place.
    pub fn push<F>(&mut self, filter: F) -> &mut Self
    where
        F: Filter<R> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<R: ?Sized> Default for FilterChain<R> {
    fn default() -> Self {
        FilterChain::new()
    }
}

impl<R: ?Sized> Filter<R> for FilterChain<R> {
    fn accepts(&self, record: &R) -> bool {
        self.filters.iter().all(|filter| filter.accepts(record))
    }
}

impl<R: ?Sized> fmt::Debug for FilterChain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}
