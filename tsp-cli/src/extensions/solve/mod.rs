//! Contains helpers to configure and control the solver.

pub mod config;
pub mod interruption;
