
pub mod utils;
