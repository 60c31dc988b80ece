//! Single-purpose card filters.
//!
//! Each filter owns a narrow slice of configuration and inspects one
//! field. Configuration comes in two flavours:
//!
//! - `with_*` builders take and return `self`, for building a filter in
//!   one expression.
//! - `set_*` / `add_*` setters take `&mut self` and return `&mut Self`, for
//!   configuring a filter that already lives inside a
//!   [`MetaFilter`](crate::MetaFilter).
//!
//! Neither flavour validates. Bounds that cannot be satisfied produce a
//! filter that accepts nothing; use [`CostFilter::try_between`] to reject
//! them instead.

use std::str::FromStr;

use crate::card::Card;
use crate::error::{FilterError, Result};
use crate::filter::Filter;

/// Accepts every record.
///
/// The neutral element of composition: adding it to any filter stack
/// leaves the stack's result unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyFilter;

impl<R: ?Sized> Filter<R> for EmptyFilter {
    #[inline]
    fn accepts(&self, _record: &R) -> bool {
        true
    }
}

/// Accepts cards whose cost lies strictly between two bounds.
///
/// Defaults to `(0, +inf)`, so free cards are rejected even by an
/// unconfigured filter.
///
/// # Example
///
/// ```
/// use metafilter::{Card, CostFilter, Filter};
///
/// let filter = CostFilter::new().with_min_cost(5.0).with_max_cost(50.0);
///
/// assert!(filter.accepts(&Card::new(0, "Card1", 30.0, 1, 0)));
/// assert!(!filter.accepts(&Card::new(1, "Card2", 50.0, 1, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostFilter {
    min_cost: f32,
    max_cost: f32,
}

impl Default for CostFilter {
    fn default() -> Self {
        CostFilter {
            min_cost: 0.0,
            max_cost: f32::INFINITY,
        }
    }
}

impl CostFilter {
    /// Creates a filter with the default bounds `(0, +inf)`.
    pub fn new() -> Self {
        CostFilter::default()
    }

    /// Creates a filter for `(min, max)`, rejecting bounds that can never
    /// accept anything.
    ///
    /// Fails with [`FilterError::InvalidCostRange`] when either bound is NaN
    /// or `min >= max`.
    pub fn try_between(min: f32, max: f32) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min >= max {
            return Err(FilterError::InvalidCostRange { min, max });
        }
        Ok(CostFilter {
            min_cost: min,
            max_cost: max,
        })
    }

    /// Sets the exclusive lower bound.
    pub fn with_min_cost(mut self, value: f32) -> Self {
        self.min_cost = value;
        self
    }

    /// Sets the exclusive upper bound.
    pub fn with_max_cost(mut self, value: f32) -> Self {
        self.max_cost = value;
        self
    }

    /// Sets the exclusive lower bound in place.
    pub fn set_min_cost(&mut self, value: f32) -> &mut Self {
        self.min_cost = value;
        self
    }

    /// Sets the exclusive upper bound in place.
    pub fn set_max_cost(&mut self, value: f32) -> &mut Self {
        self.max_cost = value;
        self
    }

    pub fn min_cost(&self) -> f32 {
        self.min_cost
    }

    pub fn max_cost(&self) -> f32 {
        self.max_cost
    }
}

impl Filter<Card> for CostFilter {
    #[inline]
    fn accepts(&self, card: &Card) -> bool {
        card.cost > self.min_cost && card.cost < self.max_cost
    }
}

/// Accepts cards whose version is one of an accepted set.
///
/// An empty set accepts nothing: a default-constructed filter rejects
/// every card until versions are added.
///
/// Two filters are equal when they accept the same versions; insertion
/// order and duplicates do not matter.
///
/// # Example
///
/// ```
/// use metafilter::{Card, Filter, VersionFilter};
///
/// let filter = VersionFilter::from([1, 3]);
///
/// assert!(filter.accepts(&Card::new(0, "Card1", 30.0, 1, 0)));
/// assert!(!filter.accepts(&Card::new(4, "Card5", 45.0, 2, 1)));
///
/// let parsed: VersionFilter = "1, 3".parse().unwrap();
/// assert_eq!(parsed, filter);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionFilter {
    accepted: Vec<i32>,
}

impl VersionFilter {
    /// Creates a filter accepting the given versions.
    pub fn new(versions: impl IntoIterator<Item = i32>) -> Self {
        VersionFilter {
            accepted: versions.into_iter().collect(),
        }
    }

    /// Adds an accepted version.
    pub fn with_version(mut self, version: i32) -> Self {
        self.accepted.push(version);
        self
    }

    /// Adds an accepted version in place.
    pub fn add_version(&mut self, version: i32) -> &mut Self {
        self.accepted.push(version);
        self
    }

    /// The accepted versions, in insertion order.
    pub fn versions(&self) -> &[i32] {
        &self.accepted
    }

    fn sorted_versions(&self) -> Vec<i32> {
        let mut versions = self.accepted.clone();
        versions.sort_unstable();
        versions.dedup();
        versions
    }
}

impl PartialEq for VersionFilter {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_versions() == other.sorted_versions()
    }
}

impl Eq for VersionFilter {}

impl Filter<Card> for VersionFilter {
    #[inline]
    fn accepts(&self, card: &Card) -> bool {
        self.accepted.contains(&card.version)
    }
}

impl FromIterator<i32> for VersionFilter {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        VersionFilter::new(iter)
    }
}

impl<const N: usize> From<[i32; N]> for VersionFilter {
    fn from(versions: [i32; N]) -> Self {
        VersionFilter::new(versions)
    }
}

/// Parses a comma-separated version list such as `"1,3"`.
///
/// Whitespace around elements is ignored and empty elements are skipped,
/// so `""` parses to a filter that accepts nothing.
impl FromStr for VersionFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|source| FilterError::InvalidVersion {
                        input: part.to_string(),
                        source,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_costing(cost: f32) -> Card {
        Card::new(0, "Card", cost, 1, 0)
    }

    fn card_version(version: i32) -> Card {
        Card::new(0, "Card", 10.0, version, 0)
    }

    #[test]
    fn empty_filter_accepts_anything() {
        assert!(EmptyFilter.accepts(&card_costing(-1.0)));
        assert!(EmptyFilter.accepts(&42u8));
        assert!(EmptyFilter.accepts("text"));
    }

    #[test]
    fn cost_bounds_are_exclusive() {
        let filter = CostFilter::new().with_min_cost(5.0).with_max_cost(50.0);

        assert!(filter.accepts(&card_costing(30.0)));
        assert!(filter.accepts(&card_costing(5.5)));
        assert!(filter.accepts(&card_costing(49.9)));
        assert!(!filter.accepts(&card_costing(5.0)));
        assert!(!filter.accepts(&card_costing(50.0)));
        assert!(!filter.accepts(&card_costing(100.0)));
        assert!(!filter.accepts(&card_costing(1.0)));
    }

    #[test]
    fn cost_default_rejects_free_cards() {
        let filter = CostFilter::new();
        assert_eq!(filter.min_cost(), 0.0);
        assert_eq!(filter.max_cost(), f32::INFINITY);
        assert!(!filter.accepts(&card_costing(0.0)));
        assert!(!filter.accepts(&card_costing(f32::NAN)));
        assert!(filter.accepts(&card_costing(1_000_000.0)));
        assert!(filter.accepts(&card_costing(f32::MAX)));
    }

    #[test]
    fn cost_setters_chain_in_place() {
        let mut filter = CostFilter::new();
        filter.set_max_cost(50.0).set_min_cost(5.0);

        assert_eq!(filter.min_cost(), 5.0);
        assert_eq!(filter.max_cost(), 50.0);
    }

    #[test]
    fn inverted_cost_bounds_accept_nothing() {
        let filter = CostFilter::new().with_min_cost(50.0).with_max_cost(5.0);
        for cost in [0.0, 5.0, 10.0, 50.0, 100.0] {
            assert!(!filter.accepts(&card_costing(cost)));
        }
    }

    #[test]
    fn try_between_accepts_sane_range() {
        let filter = CostFilter::try_between(0.0, 50.0).unwrap();
        assert!(filter.accepts(&card_costing(45.0)));
        assert!(!filter.accepts(&card_costing(100.0)));
    }

    #[test]
    fn try_between_rejects_bad_ranges() {
        assert!(matches!(
            CostFilter::try_between(50.0, 5.0),
            Err(FilterError::InvalidCostRange { .. })
        ));
        assert!(CostFilter::try_between(5.0, 5.0).is_err());
        assert!(CostFilter::try_between(f32::NAN, 5.0).is_err());
        assert!(CostFilter::try_between(0.0, f32::NAN).is_err());
    }

    #[test]
    fn version_membership() {
        let filter = VersionFilter::from([1, 3]);
        assert!(filter.accepts(&card_version(1)));
        assert!(filter.accepts(&card_version(3)));
        assert!(!filter.accepts(&card_version(2)));
    }

    #[test]
    fn empty_version_set_accepts_nothing() {
        let filter = VersionFilter::default();
        for version in [0, 1, 2, 3, i32::MAX] {
            assert!(!filter.accepts(&card_version(version)));
        }
    }

    #[test]
    fn version_builders_match_setters() {
        let built = VersionFilter::default().with_version(1).with_version(3);

        let mut set = VersionFilter::default();
        set.add_version(1).add_version(3);

        assert_eq!(built, set);
        assert_eq!(set.versions(), &[1, 3]);
    }

    #[test]
    fn version_equality_ignores_order_and_duplicates() {
        assert_eq!(VersionFilter::from([1, 3]), VersionFilter::from([3, 1]));
        assert_eq!(VersionFilter::from([1, 1, 3]), VersionFilter::from([3, 1]));
        assert_ne!(VersionFilter::from([1, 3]), VersionFilter::from([1, 2]));
        assert_ne!(VersionFilter::from([1]), VersionFilter::default());
    }

    #[test]
    fn version_from_iterator() {
        let filter: VersionFilter = (1..=3).collect();
        assert_eq!(filter.versions(), &[1, 2, 3]);
    }

    #[test]
    fn version_parse() {
        let filter: VersionFilter = " 1, 3 ,".parse().unwrap();
        assert_eq!(filter.versions(), &[1, 3]);

        let empty: VersionFilter = "".parse().unwrap();
        assert!(empty.versions().is_empty());
    }

    #[test]
    fn version_parse_rejects_garbage() {
        let err = "1,two".parse::<VersionFilter>().unwrap_err();
        match err {
            FilterError::InvalidVersion { input, .. } => assert_eq!(input, "two"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
