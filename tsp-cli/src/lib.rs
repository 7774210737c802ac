//! A TSP solver library public API used by the command line interface.
//!
//! It combines graph readers from `tsp-scientific` with the search from `tsp-core` and adds
//! functionality which is only needed by an application: a json configuration file and a
//! user interruption handling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use tsp_core as core;
pub use tsp_scientific as scientific;

pub mod extensions;
