#[cfg(test)]
#[path = "../../tests/unit/edges/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use tsp_core::models::{Cost, Graph, NodeId};
use tsp_core::utils::GenericError;

/// Limits preallocation driven by the claimed node count which is not trusted.
const MAX_PREALLOCATED_NODES: usize = 1 << 16;

/// A graph read from the edge list together with information about the source data.
#[derive(Clone, Debug)]
pub struct EdgeListData {
    /// A graph built from all parsed edges.
    pub graph: Graph,
    /// Amount of nodes claimed by the first line.
    pub declared_nodes: usize,
    /// Amount of non-empty edge lines which were skipped as not parseable.
    pub skipped_lines: usize,
}

impl EdgeListData {
    /// Returns true if the claimed amount of nodes differs from the actual one.
    pub fn has_node_count_mismatch(&self) -> bool {
        self.declared_nodes != self.graph.node_count()
    }
}

/// A trait to read a graph from the edge list format.
pub trait EdgeListProblem {
    /// Reads edge list problem.
    fn read_edges(self) -> Result<EdgeListData, GenericError>;
}

impl<R: Read> EdgeListProblem for BufReader<R> {
    fn read_edges(self) -> Result<EdgeListData, GenericError> {
        EdgeListReader::new(self).read_problem()
    }
}

impl EdgeListProblem for String {
    fn read_edges(self) -> Result<EdgeListData, GenericError> {
        EdgeListReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

struct EdgeListReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
}

impl<R: Read> EdgeListReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader }
    }

    fn read_problem(&mut self) -> Result<EdgeListData, GenericError> {
        let declared_nodes = self.read_node_count()?;
        skip_lines(1, &mut self.reader, &mut self.buffer)?;

        let mut graph = Graph::with_capacity(declared_nodes.min(MAX_PREALLOCATED_NODES));
        let mut skipped_lines = 0;
        // node count and metadata lines
        let mut line_number = 2;

        while read_line(&mut self.reader, &mut self.buffer)? > 0 {
            line_number += 1;

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            match parse_edge(line) {
                Some((to, from, weight)) if weight.is_finite() && weight >= 0. => graph.add_edge(from, to, weight),
                Some((_, _, weight)) => {
                    return Err(format!("invalid weight '{weight}' at line {line_number}: '{line}'").into());
                }
                None => skipped_lines += 1,
            }
        }

        Ok(EdgeListData { graph, declared_nodes, skipped_lines })
    }

    fn read_node_count(&mut self) -> Result<usize, GenericError> {
        if read_line(&mut self.reader, &mut self.buffer)? == 0 {
            return Err("cannot read node count: empty input".into());
        }

        let count = parse_int(&self.buffer, "cannot parse node count")?;

        usize::try_from(count).map_err(|_| format!("node count should not be negative, got: '{count}'").into())
    }
}

/// Parses `to from weight` triple, extra fields are ignored.
fn parse_edge(line: &str) -> Option<(NodeId, NodeId, Cost)> {
    let mut fields = line.split_whitespace();

    let to = fields.next()?.parse().ok()?;
    let from = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;

    Some((to, from, weight))
}
