//! Scientific crate contains logic to read graph problems from text formats and to write
//! solutions found by the solver.
//!
//!
//! # Supported formats
//!
//! - **edges**: a plain edge list: node count, metadata line, then `to from weight` per line
//! - **tsplib** subset of TSPLIB95 format: `TSP` problems with `EUC_2D` edge weights

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod common;
pub mod edges;
pub mod tsplib;
