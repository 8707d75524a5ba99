// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;

/// Enum representing the result of a match query to a type implementing
/// `MorseMatching`.
///
/// Type `T` is the cell type and type `P` the priority type of the matching.
/// A `King` is the coface of a gradient pair, its `Queen` the face; an `Ace`
/// is a critical (unmatched) cell. The queen of a pair always has a lower
/// priority than its king.
///
/// The `Ord` implementation of this enum is intended to only be used between
/// two king cells, two queen cells or two ace cells, where it compares
/// priorities. The implementation does not panic if this is violated, and
/// instead uses the convention that `King > Ace > Queen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<T, P> {
    /// `cell` is a `King` if it is matched with `queen`, a face of `cell`.
    King {
        /// The king cell.
        cell: T,
        /// The queen cell matched to `cell`.
        queen: T,
        /// Priority of `cell`.
        priority: P,
    },
    /// `cell` is a `Queen` if it is matched with `king`, a coface of `cell`.
    Queen {
        /// The queen cell.
        cell: T,
        /// The king cell matched to `cell`.
        king: T,
        /// Priority of `cell`.
        priority: P,
    },
    /// `cell` is an `Ace` if it is matched with no other cell.
    Ace {
        /// The ace cell.
        cell: T,
        /// Priority of `cell`.
        priority: P,
    },
}

impl<T, P> MatchResult<T, P> {
    /// The queried cell.
    pub fn cell(&self) -> &T {
        match self {
            MatchResult::King { cell, .. }
            | MatchResult::Queen { cell, .. }
            | MatchResult::Ace { cell, .. } => cell,
        }
    }

    /// The priority of the queried cell.
    pub fn priority(&self) -> &P {
        match self {
            MatchResult::King { priority, .. }
            | MatchResult::Queen { priority, .. }
            | MatchResult::Ace { priority, .. } => priority,
        }
    }
}

impl<T: Eq, P: Ord> PartialOrd for MatchResult<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq, P: Ord> Ord for MatchResult<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MatchResult::King { priority, .. }, MatchResult::King { priority: other, .. })
            | (MatchResult::Queen { priority, .. }, MatchResult::Queen { priority: other, .. })
            | (MatchResult::Ace { priority, .. }, MatchResult::Ace { priority: other, .. }) => {
                priority.cmp(other)
            }
            (MatchResult::King { .. }, _) => Ordering::Greater,
            (_, MatchResult::King { .. }) => Ordering::Less,
            (MatchResult::Queen { .. }, _) => Ordering::Less,
            (_, MatchResult::Queen { .. }) => Ordering::Greater,
        }
    }
}
