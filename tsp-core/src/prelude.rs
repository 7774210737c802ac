//! This module reimports commonly used types.

pub use crate::models::{Cost, Graph, NodeId, check_tour};

pub use crate::solver::{Builder, InfoLogger, Metrics, Solution, Solver, TelemetryMode, solve};

pub use crate::utils::{GenericError, GenericResult, Quota};
