use std::collections::BTreeSet;

use morse_matching::{CellComplex, VecGrader};

/// A simplicial complex stored as a `CellComplex`, keeping the vertex set of
/// each cell.
pub struct SimplicialComplex {
    pub complex: CellComplex,
    pub simplices: Vec<Vec<u32>>,
}

impl SimplicialComplex {
    /// The closure of `facets`: every nonempty subset of a facet is a cell.
    /// Cells are ordered by dimension, then lexicographically by vertices.
    pub fn from_facets(facets: &[Vec<u32>]) -> Self {
        let mut closure = BTreeSet::new();
        for facet in facets {
            let mut facet = facet.clone();
            facet.sort();
            facet.dedup();
            for mask in 1u32..(1 << facet.len()) {
                let face: Vec<u32> = facet
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| mask & (1 << index) != 0)
                    .map(|(_, vertex)| *vertex)
                    .collect();
                closure.insert(face);
            }
        }

        let mut simplices: Vec<Vec<u32>> = closure.into_iter().collect();
        simplices.sort_by(|left, right| left.len().cmp(&right.len()).then(left.cmp(right)));

        let boundaries = simplices
            .iter()
            .map(|simplex| {
                if simplex.len() == 1 {
                    return Vec::new();
                }
                (0..simplex.len())
                    .map(|skip| {
                        let face: Vec<u32> = simplex
                            .iter()
                            .enumerate()
                            .filter(|(index, _)| *index != skip)
                            .map(|(_, vertex)| *vertex)
                            .collect();
                        simplices
                            .binary_search_by(|other| {
                                other.len().cmp(&face.len()).then(other.cmp(&face))
                            })
                            .expect("face missing from closure") as u32
                    })
                    .collect()
            })
            .collect();
        let cell_dimensions = simplices
            .iter()
            .map(|simplex| simplex.len() as u32 - 1)
            .collect();

        Self {
            complex: CellComplex::new(cell_dimensions, boundaries),
            simplices,
        }
    }
}

/// The boundary of the `(n + 1)`-simplex, a triangulation of the `n`-sphere.
pub fn sphere(n: u32) -> SimplicialComplex {
    let vertices: Vec<u32> = (0..n + 2).collect();
    simplex_boundary(&vertices)
}

/// The boundary of the simplex spanned by `vertices`.
pub fn simplex_boundary(vertices: &[u32]) -> SimplicialComplex {
    let facets: Vec<Vec<u32>> = (0..vertices.len())
        .map(|skip| {
            vertices
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != skip)
                .map(|(_, vertex)| *vertex)
                .collect()
        })
        .collect();
    SimplicialComplex::from_facets(&facets)
}

/// The seven vertex triangulation of the torus.
pub fn torus() -> SimplicialComplex {
    let facets: Vec<Vec<u32>> = (0..7)
        .flat_map(|i| [vec![i, (i + 1) % 7, (i + 3) % 7], vec![i, (i + 2) % 7, (i + 3) % 7]])
        .collect();
    SimplicialComplex::from_facets(&facets)
}

/// Grade each simplex by the maximum grade of its vertices, which satisfies
/// the closure property.
pub fn grade_by_vertices(complex: &SimplicialComplex, vertex_grades: &[u32]) -> VecGrader {
    complex
        .simplices
        .iter()
        .map(|simplex| {
            simplex
                .iter()
                .map(|vertex| vertex_grades[*vertex as usize])
                .max()
                .unwrap_or_default()
        })
        .collect()
}
