#![deny(clippy::all)]

mod solver;

pub use atsp_core::{Cost, Matrix, SolveError, Tour, INF};
pub use solver::solve;
