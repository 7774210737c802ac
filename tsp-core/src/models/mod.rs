//! A collection of models to represent a problem and its solution.

mod graph;
pub use self::graph::*;

mod tour;
pub use self::tour::*;
