// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, error, trace};

use crate::homology::util::CellSet;
use crate::{ComplexLike, Fibration, Grader, MatchingError, MorseMatching};

/// A type implementing an acyclic matching (that is, satisfying
/// [`MorseMatching`]) based on alternately excising coreduction pairs and
/// leaf cells from the Hasse diagram of the complex.
///
/// A cell with exactly one remaining face is coreducible: it is matched with
/// that face and both are excised. When no coreducible cell remains, a leaf
/// (a cell with no remaining faces) is excised as a critical cell. Each
/// excision updates the face counts of the cofaces of the excised cells,
/// which produces further coreducible cells and leaves. Cells receive their
/// priorities in order of excision, so each queen directly precedes its king.
///
/// This matching can be applied to any complex satisfying [`ComplexLike`].
/// The mate and priority of every cell are explicitly stored after
/// computation; thus, the complex must be small enough that explicit storage
/// is possible. Which coreducible cell or leaf is excised next is not
/// specified, so repeated computations may produce different (but equally
/// valid) matchings.
///
/// The graded variant [`CoreductionMatching::from_fibration`] only matches
/// cells of equal grade and orders priorities first by grade.
///
/// The implementation is a reformulation of Algorithm 3.6 in Harker,
/// Mischaikow, Mrozek, Nanda, *Discrete Morse Theoretic Algorithms for
/// Computing Homology of Complexes and Maps.*
///
/// # Examples
///
/// ```rust
/// use morse_matching::{CellComplex, CoreductionMatching, MorseMatching};
///
/// // A line segment contracts to a single critical vertex.
/// let complex = CellComplex::new(vec![0, 0, 1], vec![vec![], vec![], vec![0, 1]]);
/// let matching = CoreductionMatching::new(&complex).unwrap();
///
/// assert_eq!(matching.critical_cells().len(), 1);
/// assert!(matching.priority(matching.mate(2)) < matching.priority(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreductionMatching {
    mate: Vec<u32>,
    priority: Vec<u64>,
}

impl CoreductionMatching {
    /// Compute a matching of `complex`.
    ///
    /// Priorities are a permutation of `0..complex.size()`. Fails only if the
    /// boundary and coboundary of `complex` are inconsistent.
    pub fn new<C>(complex: &C) -> Result<Self, MatchingError>
    where
        C: ComplexLike,
    {
        Reduction::new(Ungraded { complex }).run()
    }

    /// Compute a matching of the complex graded by `fibration` in which no
    /// pair crosses grades.
    ///
    /// The priority of a cell is its grade times the number of cells plus its
    /// position in the excision order, so cells of lower grade precede all
    /// cells of greater grade. Fails with
    /// [`MatchingError::GradingClosureViolation`] if some face has greater
    /// grade than its coface.
    pub fn from_fibration<C, G>(fibration: &Fibration<'_, C, G>) -> Result<Self, MatchingError>
    where
        C: ComplexLike,
        G: Grader<u32>,
    {
        Reduction::new(Graded { fibration }).run()
    }

    /// The mate of every cell, indexed by cell.
    pub fn mates(&self) -> &[u32] {
        &self.mate
    }

    /// The priority of every cell, indexed by cell.
    pub fn priorities(&self) -> &[u64] {
        &self.priority
    }
}

impl MorseMatching for CoreductionMatching {
    fn cell_count(&self) -> u32 {
        self.mate.len() as u32
    }

    fn mate(&self, cell: u32) -> u32 {
        self.mate[cell as usize]
    }

    fn priority(&self, cell: u32) -> u64 {
        self.priority[cell as usize]
    }
}

/// The parts of the reduction that differ between the plain and the graded
/// matching: which incidences are visible, which pairs are admissible and how
/// priorities are formed.
trait Localization {
    type Complex: ComplexLike;

    /// Name of the reduction, for logging.
    const MODE: &'static str;

    fn complex(&self) -> &Self::Complex;

    fn local_boundary(&self, cell: u32) -> Result<Vec<u32>, MatchingError>;

    fn local_coboundary(&self, cell: u32) -> Vec<u32>;

    fn check_pair(&self, king: u32, queen: u32) -> Result<(), MatchingError>;

    fn priority(&self, cell: u32, sequence: u32) -> u64;
}

struct Ungraded<'a, C> {
    complex: &'a C,
}

impl<C: ComplexLike> Localization for Ungraded<'_, C> {
    type Complex = C;

    const MODE: &'static str = "plain";

    fn complex(&self) -> &C {
        self.complex
    }

    fn local_boundary(&self, cell: u32) -> Result<Vec<u32>, MatchingError> {
        Ok(self.complex.cell_boundary(cell))
    }

    fn local_coboundary(&self, cell: u32) -> Vec<u32> {
        self.complex.cell_coboundary(cell)
    }

    fn check_pair(&self, _king: u32, _queen: u32) -> Result<(), MatchingError> {
        Ok(())
    }

    fn priority(&self, _cell: u32, sequence: u32) -> u64 {
        u64::from(sequence)
    }
}

struct Graded<'f, 'a, C, G> {
    fibration: &'f Fibration<'a, C, G>,
}

impl<C, G> Localization for Graded<'_, '_, C, G>
where
    C: ComplexLike,
    G: Grader<u32>,
{
    type Complex = C;

    const MODE: &'static str = "graded";

    fn complex(&self) -> &C {
        self.fibration.complex()
    }

    // Faces of equal grade. A face of greater grade violates the closure
    // property of the fibration.
    fn local_boundary(&self, cell: u32) -> Result<Vec<u32>, MatchingError> {
        let cell_grade = self.fibration.value(cell);
        let mut boundary = Vec::new();
        for face in self.complex().cell_boundary(cell) {
            let face_grade = self.fibration.value(face);
            if face_grade > cell_grade {
                error!(cell, cell_grade, face, face_grade, "grading closure violated");
                return Err(MatchingError::GradingClosureViolation {
                    cell,
                    cell_grade,
                    face,
                    face_grade,
                });
            }
            if face_grade == cell_grade {
                boundary.push(face);
            }
        }
        Ok(boundary)
    }

    fn local_coboundary(&self, cell: u32) -> Vec<u32> {
        let cell_grade = self.fibration.value(cell);
        self.complex()
            .cell_coboundary_if(cell, |coface| self.fibration.value(coface) == cell_grade)
    }

    fn check_pair(&self, king: u32, queen: u32) -> Result<(), MatchingError> {
        let king_grade = self.fibration.value(king);
        let queen_grade = self.fibration.value(queen);
        if king_grade != queen_grade {
            error!(king, king_grade, queen, queen_grade, "coreduction pair crosses grades");
            return Err(MatchingError::MatchingConsistencyViolation {
                king,
                king_grade,
                queen,
                queen_grade,
            });
        }
        Ok(())
    }

    fn priority(&self, cell: u32, sequence: u32) -> u64 {
        u64::from(self.fibration.value(cell)) * u64::from(self.complex().size())
            + u64::from(sequence)
    }
}

/// Working state of a single matching computation.
struct Reduction<L> {
    localization: L,
    cell_count: u32,
    processed: u32,
    mate: Vec<Option<u32>>,
    priority: Vec<u64>,
    boundary_count: Vec<usize>,
    coreducible: CellSet,
    ace_candidates: CellSet,
}

impl<L: Localization> Reduction<L> {
    fn new(localization: L) -> Self {
        let cell_count = localization.complex().size();
        Self {
            localization,
            cell_count,
            processed: 0,
            mate: vec![None; cell_count as usize],
            priority: vec![0; cell_count as usize],
            boundary_count: vec![0; cell_count as usize],
            coreducible: CellSet::new(cell_count),
            ace_candidates: CellSet::new(cell_count),
        }
    }

    fn run(mut self) -> Result<CoreductionMatching, MatchingError> {
        debug!(
            mode = L::MODE,
            cells = self.cell_count,
            "computing coreduction matching"
        );

        self.initialize()?;

        let mut critical_count = 0u32;
        while self.processed < self.cell_count {
            if let Some(king) = self.coreducible.pop() {
                self.excise_pair(king)?;
            } else if let Some(ace) = self.ace_candidates.pop() {
                trace!(ace, "critical cell");
                self.mate[ace as usize] = Some(ace);
                self.process(ace);
                critical_count += 1;
            } else {
                error!(
                    processed = self.processed,
                    cells = self.cell_count,
                    "no coreducible or leaf cell remains"
                );
                return Err(MatchingError::ReductionStalled {
                    processed: self.processed,
                    cell_count: self.cell_count,
                });
            }
        }

        debug_assert!(self.coreducible.is_empty() && self.ace_candidates.is_empty());
        debug!(
            mode = L::MODE,
            cells = self.cell_count,
            critical = critical_count,
            "coreduction matching complete"
        );

        let mate: Vec<u32> = self
            .mate
            .iter()
            .enumerate()
            .map(|(cell, mate)| {
                debug_assert!(mate.is_some(), "cell {cell} not matched");
                mate.unwrap_or(cell as u32)
            })
            .collect();

        // Check that the matching is an involution and that each queen is
        // excised before its king.
        #[cfg(debug_assertions)]
        {
            for (cell, &partner) in mate.iter().enumerate() {
                debug_assert_eq!(mate[partner as usize], cell as u32);
                if partner != cell as u32 && self.priority[cell] < self.priority[partner as usize] {
                    debug_assert!(
                        self.localization
                            .complex()
                            .cell_boundary(partner)
                            .contains(&(cell as u32)),
                        "queen is not a face of its king"
                    );
                }
            }
        }

        Ok(CoreductionMatching {
            mate,
            priority: self.priority,
        })
    }

    // Count the local faces of every cell and seed the candidate sets.
    fn initialize(&mut self) -> Result<(), MatchingError> {
        for cell in self.localization.complex().cell_iter() {
            let count = self.localization.local_boundary(cell)?.len();
            self.boundary_count[cell as usize] = count;
            match count {
                0 => {
                    self.ace_candidates.insert(cell);
                }
                1 => {
                    self.coreducible.insert(cell);
                }
                _ => {}
            }
        }

        trace!(
            leaves = self.ace_candidates.len(),
            coreducible = self.coreducible.len(),
            "initial candidates"
        );
        Ok(())
    }

    fn excise_pair(&mut self, king: u32) -> Result<(), MatchingError> {
        debug_assert_eq!(self.boundary_count[king as usize], 1);
        debug_assert!(
            !self.ace_candidates.contains(king),
            "coreducible cell among leaf candidates"
        );

        let queen = self
            .localization
            .local_boundary(king)?
            .into_iter()
            .find(|face| self.mate[*face as usize].is_none());
        let Some(queen) = queen else {
            error!(king, "coreducible cell has no unmatched face");
            return Err(MatchingError::MissingQueen { king });
        };
        self.localization.check_pair(king, queen)?;

        trace!(king, queen, "coreduction pair");
        self.mate[king as usize] = Some(queen);
        self.mate[queen as usize] = Some(king);
        self.process(queen);
        self.process(king);
        Ok(())
    }

    // Assign the next priority to `cell`, remove it from the candidates and
    // update the face counts of its cofaces.
    fn process(&mut self, cell: u32) {
        self.priority[cell as usize] = self.localization.priority(cell, self.processed);
        self.processed += 1;
        self.coreducible.remove(cell);
        self.ace_candidates.remove(cell);

        for coface in self.localization.local_coboundary(cell) {
            // Matched cofaces are excised already, or next (the king of a
            // pair whose queen is `cell`).
            if self.mate[coface as usize].is_some() {
                continue;
            }

            let count = &mut self.boundary_count[coface as usize];
            *count = count.saturating_sub(1);
            match *count {
                0 => {
                    self.coreducible.remove(coface);
                    self.ace_candidates.insert(coface);
                }
                1 => {
                    self.coreducible.insert(coface);
                }
                _ => {}
            }
        }
    }
}
