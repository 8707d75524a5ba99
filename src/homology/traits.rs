// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::MatchResult;

/// The interface for a type implementing an acyclic matching used in discrete
/// Morse theoretic cell complex reductions.
///
/// An acyclic matching is a more computable surrogate for the discrete Morse
/// function used to reduce chain complexes. It pairs `Queen` cells with `King`
/// cells of one greater dimension having the queen in their boundary. Cells
/// that are neither kings nor queens, referred to as `Ace` cells or critical
/// cells, are left unmatched (they are their own mate). This trichotomy is
/// encapsulated in the [`MatchResult`] enum.
///
/// Every cell also carries a priority: a total order in which the cells can be
/// excised from the complex, with each queen directly before its king. A
/// downstream builder of the Morse complex on the critical cells consumes
/// cells in this order; the order certifies that the matching is acyclic.
///
/// For an involved treatment of this approach see Harker, Mischaikow, Mrozek,
/// and Nanda, *Discrete Morse Theoretic Algorithms for Computing Homology of
/// Complexes and Maps*.
pub trait MorseMatching {
    /// The number of cells of the matched complex.
    fn cell_count(&self) -> u32;

    /// The cell matched with `cell`, or `cell` itself if it is critical.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `cell` is not a cell of the complex.
    fn mate(&self, cell: u32) -> u32;

    /// The priority of `cell` in the reduction order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `cell` is not a cell of the complex.
    fn priority(&self, cell: u32) -> u64;

    /// Whether `cell` is critical.
    fn is_critical(&self, cell: u32) -> bool {
        self.mate(cell) == cell
    }

    /// The critical cells, sorted by increasing priority.
    fn critical_cells(&self) -> Vec<u32> {
        let mut critical_cells: Vec<u32> = (0..self.cell_count())
            .filter(|cell| self.is_critical(*cell))
            .collect();
        critical_cells.sort_by_key(|cell| self.priority(*cell));
        critical_cells
    }

    /// Classify `cell` as a king, queen or ace.
    fn match_cell(&self, cell: u32) -> MatchResult<u32, u64> {
        let mate = self.mate(cell);
        let priority = self.priority(cell);
        if mate == cell {
            MatchResult::Ace { cell, priority }
        } else if self.priority(mate) < priority {
            MatchResult::King {
                cell,
                queen: mate,
                priority,
            }
        } else {
            MatchResult::Queen {
                cell,
                king: mate,
                priority,
            }
        }
    }
}
