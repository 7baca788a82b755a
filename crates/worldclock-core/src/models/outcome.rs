//! Typed results of watch-list mutations.
//!
//! Every mutation on the store returns one of these values instead of raising
//! an error or popping UI notices itself. Callers decide what to show; see
//! [`super::Notice`] for the standard user-facing rendering.

use super::City;

/// Result of adding a city to the watch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The city was appended to the end of the list
    Added(City),

    /// A city with the same ID is already watched; nothing changed
    AlreadyPresent(City),

    /// The store is still hydrating; the add will be replayed afterwards
    Queued,
}

impl AddOutcome {
    /// Whether the watch list was changed.
    pub fn is_mutation(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// Result of removing a city from the watch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The city was removed
    Removed(City),

    /// No watched city has the given ID; nothing changed
    NotFound,

    /// The store is still hydrating; the removal will be replayed afterwards
    Queued,
}

impl RemoveOutcome {
    /// Whether the watch list was changed.
    pub fn is_mutation(&self) -> bool {
        matches!(self, RemoveOutcome::Removed(_))
    }
}

/// Result of moving a city to another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The city was moved
    Reordered,

    /// Empty list, identical indices, or an index out of range
    Rejected,

    /// The store is still hydrating; the move will be replayed afterwards
    Queued,
}

impl ReorderOutcome {
    /// Whether the watch list was changed.
    pub fn is_mutation(&self) -> bool {
        matches!(self, ReorderOutcome::Reordered)
    }
}

/// Outcome of a mutation replayed after hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Add(AddOutcome),
    Remove(RemoveOutcome),
    Reorder(ReorderOutcome),
}
