// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::ComplexLike;
use crate::error::CellComplexError;

/// A simple concrete implementation of a cell complex with vector-based
/// storage.
///
/// `CellComplex` represents a finite cell complex where cells are identified by
/// `u32` indices. Each cell has its dimension and its boundary (the set of its
/// faces) explicitly stored; the coboundaries are derived from the boundaries
/// at construction, which keeps the two relations inverse to one another.
/// There needs to be few enough cells that the memory overhead of storing
/// these vectors is acceptable.
///
/// Boundaries are sets: repeated faces are collapsed into one.
///
/// # Examples
///
/// ```rust
/// use morse_matching::{CellComplex, ComplexLike};
///
/// // Two vertices joined by an edge.
/// let complex = CellComplex::new(vec![0, 0, 1], vec![vec![], vec![], vec![0, 1]]);
/// assert_eq!(complex.size(), 3);
/// assert_eq!(complex.cell_coboundary(0), vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CellComplexData", into = "CellComplexData")]
pub struct CellComplex {
    complex_dimension: u32,
    cell_dimensions: Vec<u32>,
    boundaries: Vec<Vec<u32>>,
    coboundaries: Vec<Vec<u32>>,
}

/// Serialized form of [`CellComplex`]; coboundaries are not stored.
#[derive(Serialize, Deserialize)]
struct CellComplexData {
    cell_dimensions: Vec<u32>,
    boundaries: Vec<Vec<u32>>,
}

impl CellComplex {
    /// Creates a new cell complex from the dimension and the boundary of each
    /// cell. Both vectors must have the same length, which is the number of
    /// cells in the complex, and every face must be a cell of the complex.
    /// The dimension of the cell complex is the maximum dimension of its
    /// cells, or 0 if there are no cells.
    ///
    /// # Panics
    ///
    /// Panics if the data is malformed; see [`CellComplex::try_new`] for the
    /// fallible version.
    pub fn new(cell_dimensions: Vec<u32>, boundaries: Vec<Vec<u32>>) -> Self {
        match Self::try_new(cell_dimensions, boundaries) {
            Ok(complex) => complex,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible version of [`CellComplex::new`].
    pub fn try_new(
        cell_dimensions: Vec<u32>,
        mut boundaries: Vec<Vec<u32>>,
    ) -> Result<Self, CellComplexError> {
        let cell_count = cell_dimensions.len();
        if cell_count != boundaries.len() {
            return Err(CellComplexError::CellCountMismatch {
                dimensions: cell_count,
                boundaries: boundaries.len(),
            });
        }

        let mut coboundaries = vec![Vec::new(); cell_count];
        for (cell, boundary) in boundaries.iter_mut().enumerate() {
            boundary.sort_unstable();
            boundary.dedup();
            for &face in boundary.iter() {
                if face as usize >= cell_count {
                    return Err(CellComplexError::FaceOutOfRange {
                        cell: cell as u32,
                        face,
                    });
                }
                coboundaries[face as usize].push(cell as u32);
            }
        }

        Ok(Self {
            complex_dimension: cell_dimensions.iter().max().copied().unwrap_or_default(),
            cell_dimensions,
            boundaries,
            coboundaries,
        })
    }

    /// The number of cells in the complex.
    pub fn cell_count(&self) -> u32 {
        self.cell_dimensions.len() as u32
    }
}

impl TryFrom<CellComplexData> for CellComplex {
    type Error = CellComplexError;

    fn try_from(data: CellComplexData) -> Result<Self, Self::Error> {
        Self::try_new(data.cell_dimensions, data.boundaries)
    }
}

impl From<CellComplex> for CellComplexData {
    fn from(complex: CellComplex) -> Self {
        Self {
            cell_dimensions: complex.cell_dimensions,
            boundaries: complex.boundaries,
        }
    }
}

impl ComplexLike for CellComplex {
    type CellIterator = Range<u32>;

    fn size(&self) -> u32 {
        self.cell_count()
    }

    fn cell_iter(&self) -> Self::CellIterator {
        0..self.cell_count()
    }

    fn dimension(&self) -> u32 {
        self.complex_dimension
    }

    fn cell_dimension(&self, cell: u32) -> u32 {
        self.cell_dimensions[cell as usize]
    }

    fn cell_boundary_if(&self, cell: u32, predicate: impl Fn(u32) -> bool) -> Vec<u32> {
        self.boundaries[cell as usize]
            .iter()
            .copied()
            .filter(|face| predicate(*face))
            .collect()
    }

    fn cell_coboundary_if(&self, cell: u32, predicate: impl Fn(u32) -> bool) -> Vec<u32> {
        self.coboundaries[cell as usize]
            .iter()
            .copied()
            .filter(|coface| predicate(*coface))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_line_segment_complex() -> CellComplex {
        // Two vertices (cells 0, 1) and one edge (cell 2)
        CellComplex::new(vec![0, 0, 1], vec![vec![], vec![], vec![1, 0]])
    }

    fn create_triangle_complex() -> CellComplex {
        // 3 vertices (0,1,2), 3 edges (3,4,5), 1 triangle face (6)
        CellComplex::new(
            vec![0, 0, 0, 1, 1, 1, 2],
            vec![
                vec![],
                vec![],
                vec![],
                vec![0, 1],
                vec![1, 2],
                vec![0, 2],
                vec![3, 4, 5],
            ],
        )
    }

    #[test]
    #[should_panic(expected = "cell count mismatch")]
    fn test_constructor_panics_on_mismatched_lengths() {
        CellComplex::new(vec![0, 1, 2], vec![vec![], vec![]]);
    }

    #[test]
    fn test_try_new_rejects_out_of_range_face() {
        let result = CellComplex::try_new(vec![0, 1], vec![vec![], vec![0, 7]]);
        assert_eq!(
            result,
            Err(CellComplexError::FaceOutOfRange { cell: 1, face: 7 })
        );
    }

    #[test]
    fn test_line_segment_structure() {
        let complex = create_line_segment_complex();
        assert_eq!(complex.dimension(), 1);
        assert_eq!(complex.cell_count(), 3);
        assert_eq!(complex.size(), 3);

        assert_eq!(complex.cell_dimension(0), 0);
        assert_eq!(complex.cell_dimension(1), 0);
        assert_eq!(complex.cell_dimension(2), 1);

        // Boundaries are stored sorted
        assert_eq!(complex.cell_boundary(2), vec![0, 1]);
        assert_eq!(complex.cell_coboundary(0), vec![2]);
        assert_eq!(complex.cell_coboundary(1), vec![2]);
        assert!(complex.cell_coboundary(2).is_empty());

        let cells: Vec<_> = complex.cell_iter().collect();
        assert_eq!(cells, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_complex() {
        let complex = CellComplex::new(Vec::new(), Vec::new());
        assert_eq!(complex.size(), 0);
        assert_eq!(complex.dimension(), 0);
        assert_eq!(complex.cell_iter().count(), 0);
    }

    #[test]
    fn test_repeated_faces_are_collapsed() {
        let complex = CellComplex::new(vec![0, 1], vec![vec![], vec![0, 0]]);
        assert_eq!(complex.cell_boundary(1), vec![0]);
        assert_eq!(complex.cell_coboundary(0), vec![1]);
    }

    #[test]
    fn test_boundary_and_coboundary_are_inverse() {
        let complex = create_triangle_complex();
        for cell in complex.cell_iter() {
            for face in complex.cell_boundary(cell) {
                assert!(complex.cell_coboundary(face).contains(&cell));
            }
            for coface in complex.cell_coboundary(cell) {
                assert!(complex.cell_boundary(coface).contains(&cell));
            }
        }
    }

    #[test]
    fn test_triangle_structure() {
        let complex = create_triangle_complex();
        assert_eq!(complex.dimension(), 2);
        assert_eq!(complex.cell_count(), 7);

        for i in 0..3 {
            assert_eq!(complex.cell_dimension(i), 0);
        } // vertices
        for i in 3..6 {
            assert_eq!(complex.cell_dimension(i), 1);
        } // edges
        assert_eq!(complex.cell_dimension(6), 2); // face

        assert_eq!(complex.cell_coboundary(0), vec![3, 5]);
        assert_eq!(complex.cell_coboundary(4), vec![6]);
    }

    #[test]
    fn test_set_boundary_is_union() {
        let complex = create_triangle_complex();

        assert_eq!(complex.boundary(&[3, 4]), vec![0, 1, 2]);
        assert_eq!(complex.boundary(&[6]), vec![3, 4, 5]);
        assert!(complex.boundary(&[0, 1]).is_empty());
        assert_eq!(complex.coboundary(&[0, 2]), vec![3, 4, 5]);
    }

    #[test]
    fn test_cell_boundary_if_with_predicate() {
        let complex = create_triangle_complex();

        assert_eq!(complex.cell_boundary_if(3, |cell| cell == 1), vec![1]);
        assert_eq!(complex.cell_coboundary_if(0, |cell| cell == 3), vec![3]);
        assert!(complex.cell_coboundary_if(0, |cell| cell == 4).is_empty());
    }

    #[test]
    fn test_serde_rebuilds_coboundaries() {
        let complex = create_triangle_complex();
        let json = serde_json::to_string(&complex).expect("serialization failed");
        assert!(!json.contains("coboundaries"));

        let restored: CellComplex = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(restored, complex);
    }

    #[test]
    fn test_deserialize_rejects_malformed_data() {
        let json = r#"{"cell_dimensions":[0,1],"boundaries":[[],[0,2]]}"#;
        assert!(serde_json::from_str::<CellComplex>(json).is_err());
    }
}
