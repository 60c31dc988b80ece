//! The record type queried by the filters.

use std::fmt;

/// A single card: the read-only record every filter in this crate inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub cost: f32,
    pub version: i32,
    pub leader_id: i32,
}

impl Card {
    /// Creates a card from its field values.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        cost: f32,
        version: i32,
        leader_id: i32,
    ) -> Self {
        Card {
            id,
            name: name.into(),
            cost,
            version,
            leader_id,
        }
    }
}

/// Renders as `[id] name (cost) [version, leader_id]`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) [{}, {}]",
            self.id, self.name, self.cost, self.version, self.leader_id
        )
    }
}
