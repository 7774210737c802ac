//! This module contains local search operators which improve an already constructed tour.

mod two_opt;
pub use self::two_opt::*;
