//! Contains functionality to read a subset of TSPLIB95 format: symmetric `TSP` problems with
//! `EUC_2D` edge weights. See <http://comopt.ifi.uni-heidelberg.de/software/TSPLIB95/>

mod reader;
pub use self::reader::*;
