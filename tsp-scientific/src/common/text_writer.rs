#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use std::io::{BufWriter, Error, Write};
use tsp_core::solver::Solution;

/// Writes solution in a simple text format:
///
/// ```text
/// Tour: 1 2 3 4
/// Cost 4.0000
/// Attempts 42
/// ```
///
/// An empty tour is written as `No solution found` followed by the amount of attempts.
pub fn write_text_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    let mut writer = writer;

    if solution.is_empty() {
        writer.write_all(b"No solution found\n")?;
    } else {
        let nodes = solution.tour.iter().map(|node| node.to_string()).collect::<Vec<_>>().join(" ");
        writer.write_all(format!("Tour: {nodes}\n").as_bytes())?;
        writer.write_all(format!("Cost {:.4}\n", solution.cost).as_bytes())?;
    }

    writer.write_all(format!("Attempts {}\n", solution.attempts).as_bytes())?;
    writer.flush()?;

    Ok(())
}
