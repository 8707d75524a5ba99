use morse_matching::{ComplexLike, Grader, MorseMatching};

/// Assert the structural properties of a matching of `complex`: the mate map
/// is an involution, each queen is a face of its king with lower priority,
/// and critical cells are exactly the self-matched cells.
pub fn verify_matching<C, M>(complex: &C, matching: &M)
where
    C: ComplexLike,
    M: MorseMatching,
{
    assert_eq!(matching.cell_count(), complex.size());
    for cell in complex.cell_iter() {
        let mate = matching.mate(cell);
        assert_eq!(matching.mate(mate), cell, "mate of {cell} is not an involution");
        assert_eq!(matching.is_critical(cell), mate == cell);

        if mate != cell {
            let (queen, king) = if matching.priority(cell) < matching.priority(mate) {
                (cell, mate)
            } else {
                (mate, cell)
            };
            assert!(
                complex.cell_boundary(king).contains(&queen),
                "queen {queen} is not a face of king {king}"
            );
            assert_eq!(
                complex.cell_dimension(queen) + 1,
                complex.cell_dimension(king)
            );
        }
    }
}

/// Assert the grade properties of a graded matching: pairs stay within a
/// grade and lower grades have strictly lower priorities.
pub fn verify_graded_matching<C, G, M>(complex: &C, grader: &G, matching: &M)
where
    C: ComplexLike,
    G: Grader<u32>,
    M: MorseMatching,
{
    verify_matching(complex, matching);
    let mut by_priority: Vec<u32> = complex.cell_iter().collect();
    by_priority.sort_by_key(|cell| matching.priority(*cell));
    for pair in by_priority.windows(2) {
        assert!(grader.grade(&pair[0]) <= grader.grade(&pair[1]));
    }
    for cell in complex.cell_iter() {
        assert_eq!(grader.grade(&cell), grader.grade(&matching.mate(cell)));
    }
}

/// The number of critical cells of each dimension `0..=complex.dimension()`.
pub fn critical_cells_by_dimension<C, M>(complex: &C, matching: &M) -> Vec<usize>
where
    C: ComplexLike,
    M: MorseMatching,
{
    let mut counts = vec![0; complex.dimension() as usize + 1];
    for cell in matching.critical_cells() {
        counts[complex.cell_dimension(cell) as usize] += 1;
    }
    counts
}

/// The alternating sum of the number of cells of each dimension, restricted
/// to cells accepted by `predicate`.
pub fn euler_characteristic<C>(complex: &C, predicate: impl Fn(u32) -> bool) -> i64
where
    C: ComplexLike,
{
    complex
        .cell_iter()
        .filter(|cell| predicate(*cell))
        .map(|cell| if complex.cell_dimension(cell) % 2 == 0 { 1 } else { -1 })
        .sum()
}
