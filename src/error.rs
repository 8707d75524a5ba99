// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error type for failures while computing a matching.
///
/// Every variant reports a violated input contract or an inconsistency
/// between the incidence structure and the reduction bookkeeping. None of them
/// occur for a well-formed complex (and, in the graded case, a grading that
/// is monotone along the boundary relation); they are surfaced at the moment
/// of detection so the caller can decide whether to abort or report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// A face has strictly greater grade than a cell in whose boundary it
    /// lies.
    #[error(
        "grading closure violated: face {face} has grade {face_grade}, greater than grade \
        {cell_grade} of its coface {cell}"
    )]
    GradingClosureViolation {
        /// The cell whose boundary was queried.
        cell: u32,
        /// The grade of `cell`.
        cell_grade: u32,
        /// The offending face.
        face: u32,
        /// The grade of `face`.
        face_grade: u32,
    },

    /// A coreduction attempted to pair two cells of different grades.
    #[error(
        "coreduction paired cell {king} of grade {king_grade} with face {queen} of grade \
        {queen_grade}"
    )]
    MatchingConsistencyViolation {
        /// The coreducible cell.
        king: u32,
        /// The grade of `king`.
        king_grade: u32,
        /// The face selected as the partner of `king`.
        queen: u32,
        /// The grade of `queen`.
        queen_grade: u32,
    },

    /// A coreducible cell has no unmatched face left in its boundary; the
    /// boundary and coboundary relations of the complex are not inverse.
    #[error("coreducible cell {king} has no unmatched face")]
    MissingQueen {
        /// The coreducible cell.
        king: u32,
    },

    /// No cell is available for reduction although some remain unprocessed;
    /// the boundary relation is cyclic or inconsistent with the coboundary.
    #[error("reduction stalled after processing {processed} of {cell_count} cells")]
    ReductionStalled {
        /// The number of cells processed before stalling.
        processed: u32,
        /// The number of cells in the complex.
        cell_count: u32,
    },
}

/// Error type for malformed explicit cell complex data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellComplexError {
    /// The dimension and boundary vectors have different lengths.
    #[error("cell count mismatch: {dimensions} cell dimensions but {boundaries} boundaries")]
    CellCountMismatch {
        /// Length of the dimension vector.
        dimensions: usize,
        /// Length of the boundary vector.
        boundaries: usize,
    },

    /// A boundary references a cell outside of the complex.
    #[error("boundary of cell {cell} references cell {face} outside of the complex")]
    FaceOutOfRange {
        /// The cell whose boundary is malformed.
        cell: u32,
        /// The out-of-range face.
        face: u32,
    },
}
