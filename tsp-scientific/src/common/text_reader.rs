use std::io::prelude::*;
use std::io::{BufReader, Read};
use tsp_core::utils::GenericError;

/// Reads the next line into the buffer, returns amount of read bytes: zero means end of input.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

pub(crate) fn skip_lines<R: Read>(
    count: usize,
    reader: &mut BufReader<R>,
    buffer: &mut String,
) -> Result<(), GenericError> {
    for _ in 0..count {
        read_line(reader, buffer).map_err(|_| "cannot skip lines")?;
    }

    Ok(())
}

pub(crate) fn parse_int(data: &str, err_msg: &str) -> Result<i64, GenericError> {
    data.trim().parse::<i64>().map_err(|err| format!("{err_msg}: '{err}'").into())
}

pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<f64, GenericError> {
    data.trim().parse::<f64>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
