//! Document input reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CliError;

/// Read the whole document from `path`, or from standard input when `path`
/// is absent or `-`.
///
/// The buffer is pre-sized to `input_unit` bytes and file reads go through
/// a reader buffered in the same unit.
pub(crate) fn read_input(path: Option<&Path>, input_unit: usize) -> Result<Vec<u8>, CliError> {
    let mut input = Vec::new();
    input.try_reserve(input_unit)?;

    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)?;
            BufReader::with_capacity(input_unit, file).read_to_end(&mut input)?;
        }
        _ => {
            std::io::stdin().lock().read_to_end(&mut input)?;
        }
    }
    Ok(input)
}
