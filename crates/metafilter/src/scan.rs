//! Linear scanning of record slices.
//!
//! Every function here walks the input once, front to back, and asks the
//! filter about each record. Accepted records come back in their original
//! relative order; the input is only ever borrowed. There is no index and
//! no caching, so a scan costs `O(n)` filter evaluations.

use crate::filter::Filter;

/// Returns references to the accepted records, in input order.
///
/// # Example
///
/// ```
/// use metafilter::{scan, Card, CostFilter};
///
/// let cards = vec![
///     Card::new(0, "Card1", 30.0, 1, 0),
///     Card::new(1, "Card4", 100.0, 1, 1),
///     Card::new(2, "Card2", 10.0, 1, 0),
/// ];
///
/// let cheap = scan::filter(&cards, CostFilter::new().with_max_cost(50.0));
/// let ids: Vec<i32> = cheap.iter().map(|c| c.id).collect();
/// assert_eq!(ids, [0, 2]);
/// ```
pub fn filter<'a, T, F>(records: &'a [T], filter: F) -> Vec<&'a T>
where
    F: Filter<T>,
{
    records
        .iter()
        .filter(|record| filter.accepts(*record))
        .collect()
}

/// Replaces the contents of `out` with the accepted records and returns
/// how many there were.
///
/// `out` is cleared first and reserved for the worst case, so a buffer can
/// be reused across scans without reallocating.
pub fn filter_into<'a, T, F>(records: &'a [T], filter: F, out: &mut Vec<&'a T>) -> usize
where
    F: Filter<T>,
{
    out.clear();
    out.reserve(records.len());
    out.extend(records.iter().filter(|record| filter.accepts(*record)));
    out.len()
}

/// Returns clones of the accepted records, in input order.
pub fn filter_cloned<T, F>(records: &[T], filter: F) -> Vec<T>
where
    T: Clone,
    F: Filter<T>,
{
    records
        .iter()
        .filter(|record| filter.accepts(*record))
        .cloned()
        .collect()
}

/// Counts the accepted records.
pub fn count<T, F>(records: &[T], filter: F) -> usize
where
    F: Filter<T>,
{
    records.iter().filter(|record| filter.accepts(*record)).count()
}

/// Returns `true` if any record is accepted. Stops at the first one.
pub fn any<T, F>(records: &[T], filter: F) -> bool
where
    F: Filter<T>,
{
    records.iter().any(|record| filter.accepts(record))
}

/// Returns the first accepted record.
pub fn find<'a, T, F>(records: &'a [T], filter: F) -> Option<&'a T>
where
    F: Filter<T>,
{
    records.iter().find(|record| filter.accepts(*record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::filter::from_fn;
    use crate::filters::{CostFilter, EmptyFilter, VersionFilter};
    use crate::meta::MetaFilter;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::new(0, "Card1", 30.0, 1, 0),
            Card::new(1, "Card2", 10.0, 1, 0),
            Card::new(2, "Card3", 12.5, 1, 1),
            Card::new(3, "Card4", 100.0, 1, 1),
            Card::new(4, "Card5", 45.0, 2, 1),
        ]
    }

    fn ids(cards: &[&Card]) -> Vec<i32> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn preserves_input_order() {
        let cards = sample_cards();
        let even_ids = from_fn(|c: &Card| c.id % 2 == 0);

        let results = filter(&cards, even_ids);
        assert_eq!(ids(&results), [0, 2, 4]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let cards: Vec<Card> = Vec::new();

        assert!(filter(&cards, EmptyFilter).is_empty());
        assert!(filter(&cards, VersionFilter::default()).is_empty());
        assert_eq!(count(&cards, EmptyFilter), 0);
        assert!(!any(&cards, EmptyFilter));
        assert!(find(&cards, EmptyFilter).is_none());
    }

    #[test]
    fn input_is_left_alone() {
        let cards = sample_cards();
        let _ = filter(&cards, CostFilter::new().with_max_cost(50.0));
        assert_eq!(cards, sample_cards());
    }

    #[test]
    fn filter_by_reference_keeps_the_filter() {
        let cards = sample_cards();
        let versions = VersionFilter::from([2]);

        assert_eq!(ids(&filter(&cards, &versions)), [4]);
        assert_eq!(count(&cards, &versions), 1);
    }

    #[test]
    fn filter_into_replaces_buffer() {
        let cards = sample_cards();
        let mut out = Vec::new();

        let n = filter_into(&cards, EmptyFilter, &mut out);
        assert_eq!(n, 5);

        let n = filter_into(&cards, VersionFilter::from([2]), &mut out);
        assert_eq!(n, 1);
        assert_eq!(ids(&out), [4]);
    }

    #[test]
    fn filter_cloned_owns_results() {
        let cards = sample_cards();
        let owned = filter_cloned(&cards, CostFilter::new().with_min_cost(40.0));

        let names: Vec<&str> = owned.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Card4", "Card5"]);
    }

    #[test]
    fn count_matches_filter_len() {
        let cards = sample_cards();
        let composite = MetaFilter::new((
            CostFilter::new().with_max_cost(50.0),
            VersionFilter::from([1, 3]),
        ));

        assert_eq!(count(&cards, &composite), filter(&cards, &composite).len());
        assert_eq!(count(&cards, &composite), 3);
    }

    #[test]
    fn any_and_find() {
        let cards = sample_cards();

        assert!(any(&cards, VersionFilter::from([2])));
        assert!(!any(&cards, VersionFilter::from([3])));

        let found = find(&cards, CostFilter::new().with_min_cost(40.0));
        assert_eq!(found.map(|c| c.id), Some(3));
    }

    #[test]
    fn scans_plain_values() {
        let numbers = [5, 1, 4, 2, 3];
        let small = filter(&numbers, from_fn(|n: &i32| *n < 4));
        assert_eq!(small, [&1, &2, &3]);
    }
}
