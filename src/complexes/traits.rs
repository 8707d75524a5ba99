// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;

/// Trait for types representing the incidence structure of a finite cell
/// complex whose cells are indexed by `0..size()`.
///
/// A cell complex is a mathematical structure composed of cells with defined
/// boundary and coboundary relationships. Only the immediate incidences are
/// exposed: the boundary of a cell lists its faces of one lesser dimension and
/// the coboundary lists its cofaces of one greater dimension. Implementors
/// must keep the two relations inverse to one another, that is, `x` is in the
/// boundary of `y` if and only if `y` is in the coboundary of `x`.
pub trait ComplexLike {
    /// Iterator type for traversing all cells in the complex.
    type CellIterator: Iterator<Item = u32>;

    /// The number of cells in the complex.
    fn size(&self) -> u32;

    /// Returns an iterator over all cells in the complex.
    fn cell_iter(&self) -> Self::CellIterator;

    /// Returns the dimension of the complex. This is typically the maximum
    /// cell dimension, but is only required to be at least the dimension of
    /// any cell in the complex.
    fn dimension(&self) -> u32;

    /// Returns the dimension of a specific cell.
    fn cell_dimension(&self, cell: u32) -> u32;

    /// Return the faces of `cell` for which `predicate` holds.
    fn cell_boundary_if(&self, cell: u32, predicate: impl Fn(u32) -> bool) -> Vec<u32>;

    /// Return the cofaces of `cell` for which `predicate` holds.
    fn cell_coboundary_if(&self, cell: u32, predicate: impl Fn(u32) -> bool) -> Vec<u32>;

    /// Return the faces of `cell`.
    fn cell_boundary(&self, cell: u32) -> Vec<u32> {
        self.cell_boundary_if(cell, |_| true)
    }

    /// Return the cofaces of `cell`.
    fn cell_coboundary(&self, cell: u32) -> Vec<u32> {
        self.cell_coboundary_if(cell, |_| true)
    }

    /// Return the union of the boundaries of `cells`, sorted and without
    /// repetition.
    fn boundary(&self, cells: &[u32]) -> Vec<u32> {
        cells
            .iter()
            .flat_map(|cell| self.cell_boundary(*cell))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return the union of the coboundaries of `cells`, sorted and without
    /// repetition.
    fn coboundary(&self, cells: &[u32]) -> Vec<u32> {
        cells
            .iter()
            .flat_map(|cell| self.cell_coboundary(*cell))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// A trait for types assigning a grade (or filtration level) to cells of type
/// `B`.
///
/// Grades drive the graded reduction: cells only match within a grade, so any
/// grading used for that purpose must be monotone along the boundary relation
/// (a face never has a greater grade than its coface).
pub trait Grader<B> {
    /// Returns the grade of the specified cell.
    fn grade(&self, cell: &B) -> u32;
}

impl<B, G> Grader<B> for &G
where
    G: Grader<B> + ?Sized,
{
    fn grade(&self, cell: &B) -> u32 {
        (**self).grade(cell)
    }
}
