// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Executable for generating test complexes for testing purposes.
//!
//! This program generates the fixture complexes read by the unit tests and
//! serializes them to JSON files in the testing/complexes directory.

use std::error::Error;
use std::fs;

use morse_matching::CellComplex;

fn serialize_complex(complex: &CellComplex, name: &str) -> Result<(), Box<dyn Error>> {
    let filename = format!("testing/complexes/{}_complex.json", name);
    let json = serde_json::to_string_pretty(complex)?;
    fs::write(&filename, json)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all("testing/complexes")?;

    println!("Generating test complexes...");

    serialize_complex(&triangle(), "triangle")?;
    serialize_complex(&figure_eight(), "figure_eight")?;

    Ok(())
}

/// A filled triangle (3 vertices, 3 edges, 1 face).
fn triangle() -> CellComplex {
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

/// Two hollow triangles sharing the vertex 0.
fn figure_eight() -> CellComplex {
    let mut boundaries = vec![Vec::new(); 5];
    for (start, end) in [(0, 1), (1, 2), (0, 2), (0, 3), (3, 4), (0, 4)] {
        boundaries.push(vec![start, end]);
    }
    let mut cell_dimensions = vec![0; 5];
    cell_dimensions.extend([1; 6]);
    CellComplex::new(cell_dimensions, boundaries)
}
