#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use tsp_core::models::{Graph, NodeId};
use tsp_core::utils::GenericError;

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads tsplib95 problem as a complete graph. When `is_rounded` is set, distances are
    /// rounded to the nearest integer as the format prescribes for `EUC_2D`.
    fn read_tsplib(self, is_rounded: bool) -> Result<Graph, GenericError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self, is_rounded: bool) -> Result<Graph, GenericError> {
        TsplibReader::new(self).read_problem(is_rounded)
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self, is_rounded: bool) -> Result<Graph, GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem(is_rounded)
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
}

type Coordinates = Vec<(NodeId, (f64, f64))>;

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None }
    }

    fn read_problem(&mut self, is_rounded: bool) -> Result<Graph, GenericError> {
        self.read_meta()?;
        let coordinates = self.read_coordinates()?;
        self.read_end()?;

        Ok(create_graph(coordinates.as_slice(), is_rounded))
    }

    /// Reads specification part until `NODE_COORD_SECTION` is met.
    fn read_meta(&mut self) -> Result<(), GenericError> {
        let mut edge_type = None;

        loop {
            let line = self.read_line()?.trim().to_string();

            if line == "NODE_COORD_SECTION" {
                break;
            }

            if line.is_empty() {
                continue;
            }

            let (key, value) = read_key_value(line.as_str())?;
            match key.as_str() {
                "TYPE" if value != "TSP" => return Err(format!("expecting 'TSP' as TYPE, got '{value}'").into()),
                "DIMENSION" => {
                    let dimension = parse_int(&value, "cannot parse DIMENSION")?;
                    self.dimension = Some(
                        usize::try_from(dimension).map_err(|_| format!("invalid DIMENSION: '{dimension}'"))?,
                    );
                }
                "EDGE_WEIGHT_TYPE" => edge_type = Some(value),
                _ => {}
            }
        }

        match (self.dimension, edge_type.as_deref()) {
            (None, _) => Err("cannot find DIMENSION".into()),
            (_, Some("EUC_2D")) => Ok(()),
            (_, Some(edge_type)) => Err(format!("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{edge_type}'").into()),
            (_, None) => Err("cannot find EDGE_WEIGHT_TYPE".into()),
        }
    }

    fn read_coordinates(&mut self) -> Result<Coordinates, GenericError> {
        let dimension = self.dimension.unwrap_or_default();

        (0..dimension).try_fold(Vec::with_capacity(dimension), |mut coordinates, _| {
            let line = self.read_line()?.trim();
            let data = line.split_whitespace().collect::<Vec<_>>();

            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let id = parse_int(data[0], "cannot parse id")?;
            let coord = (parse_float(data[1], "cannot parse coord.0")?, parse_float(data[2], "cannot parse coord.1")?);
            coordinates.push((id, coord));

            Ok(coordinates)
        })
    }

    /// Accepts optional `EOF` marker, anything else after coordinates is an error.
    fn read_end(&mut self) -> Result<(), GenericError> {
        read_line(&mut self.reader, &mut self.buffer)?;
        let line = self.buffer.trim();

        if line.is_empty() || line == "EOF" { Ok(()) } else { Err(format!("expecting EOF, got: '{line}'").into()) }
    }

    fn read_line(&mut self) -> Result<&String, GenericError> {
        if read_line(&mut self.reader, &mut self.buffer)? == 0 {
            return Err("unexpected end of input".into());
        }

        Ok(&self.buffer)
    }
}

fn read_key_value(line: &str) -> Result<(String, String), GenericError> {
    let (key, value) =
        line.split_once(':').ok_or_else(|| format!("expected colon separated string, got: '{line}'"))?;

    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn create_graph(coordinates: &[(NodeId, (f64, f64))], is_rounded: bool) -> Graph {
    let mut graph = Graph::with_capacity(coordinates.len());

    coordinates.iter().enumerate().for_each(|(idx, &(from, (x1, y1)))| {
        graph.add_node(from);

        coordinates.iter().skip(idx + 1).for_each(|&(to, (x2, y2))| {
            let distance = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            graph.add_edge(from, to, if is_rounded { distance.round() } else { distance });
        });
    });

    graph
}
