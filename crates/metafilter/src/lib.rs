//! Metafilter - statically composed record filters.
//!
//! Metafilter combines small, single-purpose predicates into one filter
//! whose result is the logical AND of its members, then scans an
//! in-memory list of records with it. Composition is resolved at compile
//! time: a filter stack is an ordinary value type, every member is called
//! through static dispatch, and two different stacks are two different
//! types.
//!
//! - [`Filter`]: the predicate capability, `accepts(&record) -> bool`
//! - [`CostFilter`], [`VersionFilter`], [`EmptyFilter`]: single-field filters
//! - [`MetaFilter`] and tuples: fixed AND groups, short-circuiting in order
//! - [`FilterChain`]: the same semantics for filters chosen at run time
//! - [`scan`]: order-preserving linear scans
//!
//! # Quick Start
//!
//! ```rust
//! use metafilter::{scan, Card, CostFilter, MetaFilter, VersionFilter};
//!
//! let cards = vec![
//!     Card::new(0, "Card1", 30.0, 1, 0),
//!     Card::new(1, "Card2", 10.0, 1, 0),
//!     Card::new(2, "Card3", 12.5, 1, 1),
//!     Card::new(3, "Card4", 100.0, 1, 1),
//!     Card::new(4, "Card5", 45.0, 2, 1),
//! ];
//!
//! let mut filter: MetaFilter<(CostFilter, VersionFilter)> = MetaFilter::default();
//! filter.1.add_version(1).add_version(3);
//! filter.0.set_max_cost(50.0);
//!
//! let results = scan::filter(&cards, &filter);
//! let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Card1", "Card2", "Card3"]);
//! ```
//!
//! # Composition Semantics
//!
//! ```text
//! (F1, F2, ..., Fn).accepts(r) = F1.accepts(r) && F2.accepts(r) && ... && Fn.accepts(r)
//! ().accepts(r)                = true
//! ```
//!
//! Members run left to right and evaluation stops at the first rejection.
//! An empty group is not an error; it accepts every record, exactly like
//! [`EmptyFilter`].

mod card;
mod chain;
mod error;
mod filter;
mod filters;
mod meta;
pub mod scan;

// Re-export public API
pub use card::Card;
pub use chain::FilterChain;
pub use error::{FilterError, Result};
pub use filter::{from_fn, Filter, FnFilter};
pub use filters::{CostFilter, EmptyFilter, VersionFilter};
pub use meta::{And, MetaFilter};
