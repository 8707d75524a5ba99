use morse_matching::{
    ComplexLike, CoreductionMatching, Fibration, Grader, MatchingError, MorseMatching, VecGrader,
};
use test_utilities::{
    critical_cells_by_dimension, euler_characteristic, grade_by_vertices, sphere, torus,
    verify_graded_matching, verify_matching,
};

const DIMENSIONS: [u32; 4] = [1, 2, 3, 4];

#[test]
fn sphere_reduces_to_two_critical_cells() {
    for n in DIMENSIONS {
        let sphere = sphere(n);
        let matching = CoreductionMatching::new(&sphere.complex).unwrap();
        verify_matching(&sphere.complex, &matching);

        let mut correct_counts = vec![0; n as usize + 1];
        correct_counts[0] = 1;
        correct_counts[n as usize] = 1;
        assert_eq!(
            critical_cells_by_dimension(&sphere.complex, &matching),
            correct_counts
        );
    }
}

#[test]
fn sphere_priorities_are_a_permutation() {
    let sphere = sphere(3);
    let matching = CoreductionMatching::new(&sphere.complex).unwrap();

    let mut priorities = matching.priorities().to_vec();
    priorities.sort();
    let expected: Vec<u64> = (0..u64::from(sphere.complex.size())).collect();
    assert_eq!(priorities, expected);
}

#[test]
fn torus_reduces_to_minimal_critical_cells() {
    let torus = torus();
    assert_eq!(torus.complex.size(), 7 + 21 + 14);

    let matching = CoreductionMatching::new(&torus.complex).unwrap();
    verify_matching(&torus.complex, &matching);
    assert_eq!(
        critical_cells_by_dimension(&torus.complex, &matching),
        vec![1, 2, 1]
    );
}

#[test]
fn repeated_reductions_are_valid() {
    let torus = torus();
    let first = CoreductionMatching::new(&torus.complex).unwrap();
    let second = CoreductionMatching::new(&torus.complex).unwrap();
    for matching in [&first, &second] {
        verify_matching(&torus.complex, matching);
        assert_eq!(matching.critical_cells().len(), 4);
    }
}

#[test]
fn graded_torus_respects_levels() {
    let torus = torus();
    let grader = grade_by_vertices(&torus, &[0, 0, 0, 1, 1, 2, 2]);
    let fibration = Fibration::new(&torus.complex, &grader);
    assert_eq!(fibration.check_closure(), Ok(()));

    let matching = CoreductionMatching::from_fibration(&fibration).unwrap();
    verify_graded_matching(&torus.complex, &grader, &matching);

    let correct_counts = [[1, 1, 0], [0, 1, 0], [0, 0, 1]];
    for (level, correct) in correct_counts.iter().enumerate() {
        let mut counts = [0; 3];
        for cell in matching.critical_cells() {
            if grader.grade(&cell) == level as u32 {
                counts[torus.complex.cell_dimension(cell) as usize] += 1;
            }
        }
        assert_eq!(&counts, correct, "critical cells of grade {level}");

        // Matching within a level preserves its Euler characteristic
        let level_euler = euler_characteristic(&torus.complex, |cell| {
            grader.grade(&cell) == level as u32
        });
        assert_eq!(level_euler, counts[0] - counts[1] + counts[2]);
    }
}

#[test]
fn graded_priorities_are_offset_by_grade() {
    let sphere = sphere(2);
    let size = u64::from(sphere.complex.size());
    let grader = grade_by_vertices(&sphere, &[0, 1, 1, 3]);
    let fibration = Fibration::new(&sphere.complex, &grader);
    let matching = CoreductionMatching::from_fibration(&fibration).unwrap();
    verify_graded_matching(&sphere.complex, &grader, &matching);

    for cell in sphere.complex.cell_iter() {
        let grade = u64::from(grader.grade(&cell));
        let priority = matching.priority(cell);
        assert!(grade * size <= priority && priority < (grade + 1) * size);
    }
}

#[test]
fn graded_closure_violation_is_reported() {
    let sphere = sphere(1);
    // Grade every edge 0 and every vertex 1
    let grades: Vec<u32> = sphere
        .simplices
        .iter()
        .map(|simplex| if simplex.len() == 1 { 1 } else { 0 })
        .collect();
    let fibration = Fibration::new(&sphere.complex, VecGrader::new(grades));

    let result = CoreductionMatching::from_fibration(&fibration);
    assert!(matches!(
        result,
        Err(MatchingError::GradingClosureViolation {
            cell_grade: 0,
            face_grade: 1,
            ..
        })
    ));
    assert_eq!(fibration.check_closure(), result.map(|_| ()));
}
