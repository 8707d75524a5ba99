pub use simplicial::{SimplicialComplex, grade_by_vertices, simplex_boundary, sphere, torus};
pub use validation::{
    critical_cells_by_dimension, euler_characteristic, verify_graded_matching, verify_matching,
};

mod simplicial;
mod validation;
