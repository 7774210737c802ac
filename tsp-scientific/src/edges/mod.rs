//! Contains functionality to read a graph defined as a plain list of weighted edges.
//!
//! The format is line based:
//!
//! ```text
//! 4
//! any metadata, ignored
//! 2 1 1.0
//! 3 2 1.0
//! ...
//! ```
//!
//! The first line is the claimed amount of nodes, the second line is skipped. Every next line
//! defines an undirected edge as `to from weight`, lines which cannot be parsed are skipped.

mod reader;
pub use self::reader::*;
