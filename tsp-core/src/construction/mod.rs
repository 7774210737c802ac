//! This module contains building blocks for constructive heuristics.
//!
//! # Randomized nearest neighbour
//!
//! Nearest neighbour heuristic quickly builds a tour by repeatedly moving to the closest
//! unvisited node. The randomized version picks the next node among a few closest ones, so
//! repeated runs from the same start node produce different tours, which diversifies a search
//! made of many independent restarts.

mod nearest_neighbour;
pub use self::nearest_neighbour::*;
