// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gradings of cell complexes.
//!
//! This module provides concrete implementations of the [`Grader`] trait and
//! the [`Fibration`] type, which pairs a grading with the complex it grades and
//! is the input of the graded reduction.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::MatchingError;
use crate::{ComplexLike, Grader};

/// A grader storing the grade of every cell `0..N` contiguously.
///
/// # Examples
///
/// ```rust
/// use morse_matching::{Grader, VecGrader};
///
/// let grader = VecGrader::new(vec![0, 0, 1]);
/// assert_eq!(grader.grade(&2), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VecGrader {
    grades: Vec<u32>,
}

impl VecGrader {
    /// Create a grader in which cell `i` has grade `grades[i]`.
    #[must_use]
    pub fn new(grades: Vec<u32>) -> Self {
        Self { grades }
    }

    /// Create a grader in which each of the first `cell_count` cells has
    /// grade `uniform_grade`.
    #[must_use]
    pub fn uniform(cell_count: u32, uniform_grade: u32) -> Self {
        Self {
            grades: vec![uniform_grade; cell_count as usize],
        }
    }

    /// Get an immutable reference to the stored grades.
    pub fn grades(&self) -> &[u32] {
        &self.grades
    }
}

impl Grader<u32> for VecGrader {
    /// # Panics
    ///
    /// Panics if `cell` is not less than the number of stored grades.
    fn grade(&self, cell: &u32) -> u32 {
        self.grades[*cell as usize]
    }
}

impl FromIterator<u32> for VecGrader {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = u32>,
    {
        Self::new(iter.into_iter().collect())
    }
}

/// A grader that stores cell grades in a `HashMap`. Cells (instances of the
/// type parameter `B`) present in the map return their stored grade, while
/// cells not present return a configurable default grade.
///
/// Suitable when only a few cells differ from a common grade.
///
/// # Examples
///
/// ```rust
/// use morse_matching::{Grader, HashMapGrader};
///
/// let grader = HashMapGrader::uniform([4u32, 5], 2, 0);
/// assert_eq!(grader.grade(&4), 2);
/// assert_eq!(grader.grade(&1), 0); // default grade
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Serialize + Hash + Eq",
    deserialize = "B: Deserialize<'de> + Hash + Eq"
))]
pub struct HashMapGrader<B> {
    grades: HashMap<B, u32>,
    default_grade: u32,
}

impl<B> HashMapGrader<B>
where
    B: Hash + Eq,
{
    /// Create a new empty grader with a specified default grade.
    #[must_use]
    pub fn new(default_grade: u32) -> Self {
        Self {
            grades: HashMap::new(),
            default_grade,
        }
    }

    /// Create a grader from an existing `HashMap` with a custom default grade.
    #[must_use]
    pub fn from_map(grades: HashMap<B, u32>, default_grade: u32) -> Self {
        Self {
            grades,
            default_grade,
        }
    }

    /// Create a grader in which all cells in the iterator `cells` have grade
    /// `uniform_grade`.
    ///
    /// All other cells have grade `default_grade`.
    #[must_use]
    pub fn uniform<I>(cells: I, uniform_grade: u32, default_grade: u32) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        Self {
            grades: cells
                .into_iter()
                .map(|cell| (cell, uniform_grade))
                .collect(),
            default_grade,
        }
    }

    /// Get an immutable reference to the underlying `HashMap`.
    pub fn grades(&self) -> &HashMap<B, u32> {
        &self.grades
    }

    /// Get the default grade returned for cells not in the map.
    #[must_use]
    pub fn default_grade(&self) -> u32 {
        self.default_grade
    }
}

impl<B> Grader<B> for HashMapGrader<B>
where
    B: Hash + Eq,
{
    fn grade(&self, cell: &B) -> u32 {
        self.grades.get(cell).copied().unwrap_or(self.default_grade)
    }
}

impl<B> FromIterator<(B, u32)> for HashMapGrader<B>
where
    B: Hash + Eq,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (B, u32)>,
    {
        Self::from_map(HashMap::from_iter(iter), 0)
    }
}

/// A grading of a cell complex, viewed together with the complex it grades.
///
/// The fibration borrows the complex; neither it nor any matching computed
/// from it outlives or mutates the complex. The grading must satisfy the
/// closure property: for every cell `y` and every face `x` of `y`,
/// `value(x) <= value(y)`. This is verified lazily during the graded
/// reduction, or eagerly by [`Fibration::check_closure`].
#[derive(Clone, Debug)]
pub struct Fibration<'a, C, G> {
    complex: &'a C,
    grader: G,
}

impl<'a, C, G> Fibration<'a, C, G>
where
    C: ComplexLike,
    G: Grader<u32>,
{
    /// Grade the cells of `complex` by `grader`.
    pub fn new(complex: &'a C, grader: G) -> Self {
        Self { complex, grader }
    }

    /// The graded complex.
    pub fn complex(&self) -> &'a C {
        self.complex
    }

    /// The underlying grader.
    pub fn grader(&self) -> &G {
        &self.grader
    }

    /// The grade of `cell`.
    pub fn value(&self, cell: u32) -> u32 {
        self.grader.grade(&cell)
    }

    /// Verify the closure property over the entire complex, returning the
    /// first violation found.
    pub fn check_closure(&self) -> Result<(), MatchingError> {
        for cell in self.complex.cell_iter() {
            let cell_grade = self.value(cell);
            for face in self.complex.cell_boundary(cell) {
                let face_grade = self.value(face);
                if face_grade > cell_grade {
                    error!(cell, cell_grade, face, face_grade, "grading closure violated");
                    return Err(MatchingError::GradingClosureViolation {
                        cell,
                        cell_grade,
                        face,
                        face_grade,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<C, G> Grader<u32> for Fibration<'_, C, G>
where
    C: ComplexLike,
    G: Grader<u32>,
{
    fn grade(&self, cell: &u32) -> u32 {
        self.value(*cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellComplex;

    fn line_segment() -> CellComplex {
        CellComplex::new(vec![0, 0, 1], vec![vec![], vec![], vec![0, 1]])
    }

    #[test]
    fn test_vec_grader() {
        let grader: VecGrader = [3, 1, 4].into_iter().collect();
        assert_eq!(grader.grade(&0), 3);
        assert_eq!(grader.grade(&1), 1);
        assert_eq!(grader.grade(&2), 4);
        assert_eq!(grader.grades(), &[3, 1, 4]);

        let uniform = VecGrader::uniform(2, 7);
        assert_eq!(uniform.grades(), &[7, 7]);
    }

    #[test]
    fn test_hash_map_grader_default() {
        let mut map = HashMap::new();
        map.insert(5u32, 10);

        let grader = HashMapGrader::from_map(map, 999);
        assert_eq!(grader.grade(&5), 10);
        assert_eq!(grader.grade(&0), 999);
        assert_eq!(grader.default_grade(), 999);

        let grader: HashMapGrader<u32> = vec![(1, 1), (2, 2)].into_iter().collect();
        assert_eq!(grader.grade(&2), 2);
        assert_eq!(grader.grade(&3), 0);
        assert_eq!(grader.grades().len(), 2);
    }

    #[test]
    fn test_hash_map_grader_serde() {
        let grader = HashMapGrader::uniform([1u32, 2], 4, 1);
        let json = serde_json::to_string(&grader).expect("serialization failed");
        let restored: HashMapGrader<u32> =
            serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(restored.grade(&1), 4);
        assert_eq!(restored.grade(&2), 4);
        assert_eq!(restored.grade(&3), 1);
    }

    #[test]
    fn test_fibration_accessors() {
        let complex = line_segment();
        let grader = VecGrader::new(vec![0, 1, 1]);
        let fibration = Fibration::new(&complex, &grader);

        assert_eq!(fibration.complex().size(), 3);
        assert_eq!(fibration.value(0), 0);
        assert_eq!(fibration.grade(&2), 1);
        assert_eq!(fibration.grader().grade(&1), 1);
    }

    #[test]
    fn test_check_closure() {
        let complex = line_segment();

        let monotone = Fibration::new(&complex, VecGrader::new(vec![0, 1, 1]));
        assert_eq!(monotone.check_closure(), Ok(()));

        let violating = Fibration::new(&complex, VecGrader::new(vec![0, 2, 1]));
        assert_eq!(
            violating.check_closure(),
            Err(MatchingError::GradingClosureViolation {
                cell: 2,
                cell_grade: 1,
                face: 1,
                face_grade: 2,
            })
        );
    }
}
