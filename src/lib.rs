// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `morse_matching` crate computes acyclic matchings on the cells of
//! combinatorial complexes, the central ingredient of discrete Morse theoretic
//! reductions of a complex to a smaller, homotopy equivalent one before
//! homology computation.
//!
//! A complex is supplied through the [`ComplexLike`] trait (or the explicit
//! [`CellComplex`]); [`CoreductionMatching::new`] pairs its cells and orders
//! them, and [`CoreductionMatching::from_fibration`] does the same without
//! ever pairing cells of different grades of a [`Fibration`].

#![warn(missing_docs)]

pub use crate::complexes::{
    CellComplex, ComplexLike, Fibration, Grader, HashMapGrader, VecGrader,
};
pub use crate::error::{CellComplexError, MatchingError};
pub use crate::homology::{CoreductionMatching, MatchResult, MorseMatching};

mod complexes;
mod error;
mod homology;
