use super::reverser::reverse_stream;
use crate::{
    error::ConvertError,
    file::file_chunk::{ChunkedSource, ChunkedTarget},
};
use std::{fs, path::Path};

/// What a successful run went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub bytes: u64,
    pub chunks: u64,
    pub chunk_size: usize,
}

impl ConvertReport {
    fn new<const SIZE: usize>(chunks: u64) -> Self {
        Self {
            bytes: chunks * SIZE as u64,
            chunks,
            chunk_size: SIZE,
        }
    }
}

// Validate an input save without writing anything.
pub fn check_file<const SIZE: usize, P>(input: P) -> Result<ConvertReport, ConvertError>
where
    P: AsRef<Path>,
{
    let source = ChunkedSource::<SIZE>::open_existing(input)?;
    Ok(ConvertReport::new::<SIZE>(source.nb_chunks()?))
}

/// Convert `input` into a new `output` file with every `SIZE` chunk reversed.
///
/// Checks happen before the output is created, in this order: the input must
/// exist, the output must not, and the input length must be a multiple of
/// `SIZE`. An existing output is never opened. If anything fails once the
/// output has been created, it is removed again.
pub fn convert_file<const SIZE: usize, P, Q>(
    input: P,
    output: Q,
) -> Result<ConvertReport, ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();
    let mut source = ChunkedSource::<SIZE>::open_existing(input)?;

    // symlink_metadata so a dangling link counts as existing too.
    if fs::symlink_metadata(output).is_ok() {
        return Err(ConvertError::OutputExists(output.to_path_buf()));
    }
    source.nb_chunks()?;

    let mut target = ChunkedTarget::<SIZE>::create_new(output)?;
    let chunks = reverse_stream::<SIZE, _, _>(&mut source, &mut target)?;
    target.commit()?;

    Ok(ConvertReport::new::<SIZE>(chunks))
}

#[cfg(test)]
#[path = "converter_test.rs"]
mod converter_test;
