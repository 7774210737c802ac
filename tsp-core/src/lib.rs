//! Core crate contains the main building blocks of a heuristic solver for the
//! ***Travelling Salesman Problem*** which works within a bounded time.
//!
//! The search is made of many independent restarts: each restart builds a tour with randomized
//! nearest neighbour heuristic and improves it with 2-opt local search. Restarts run on parallel
//! workers until a time limit is reached, the best tour found by any worker is returned.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let mut graph = Graph::default();
//! graph.add_edge(1, 2, 2.);
//! graph.add_edge(2, 3, 2.);
//! graph.add_edge(3, 1, 2.);
//!
//! let solution = solve(Arc::new(graph), 1, 0.1).expect("cannot solve");
//!
//! assert_eq!(solution.tour.len(), 3);
//! assert_eq!(solution.cost, 6.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod refinement;
pub mod solver;
pub mod utils;
