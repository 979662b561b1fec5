use crate::{
    error::ConvertError,
    file::{chunk::Chunk, file_chunk::fill_chunk},
    utils::exact_chunk_count,
};
use std::io::{Read, Write};

/// Chunk size of the save files this tool fixes.
pub const SAVE_CHUNK_SIZE: usize = 8;

// Number of chunks in `len` bytes, or the error explaining why the bytes can't
// be split into whole chunks.
pub fn checked_chunk_count(len: u64, chunk_size: usize) -> Result<u64, ConvertError> {
    if chunk_size == 0 {
        return Err(ConvertError::InvalidChunkSize(chunk_size));
    }
    exact_chunk_count(len, chunk_size).ok_or(ConvertError::LengthMismatch { len, chunk_size })
}

/// Reverse the byte order inside every `chunk_size` chunk of `input`.
///
/// Chunks keep their position, only their content is mirrored:
/// `output[c * chunk_size + i] == input[c * chunk_size + (chunk_size - 1 - i)]`.
/// Bytes are copied as-is, never interpreted.
///
/// Fails with `LengthMismatch` when `input` doesn't hold a whole number of
/// chunks, and with `InvalidChunkSize` when `chunk_size` is 0.
pub fn reverse(input: &[u8], chunk_size: usize) -> Result<Vec<u8>, ConvertError> {
    checked_chunk_count(input.len() as u64, chunk_size)?;

    let mut output = Vec::with_capacity(input.len());
    for chunk in input.chunks_exact(chunk_size) {
        output.extend(chunk.iter().rev());
    }
    Ok(output)
}

// Same as `reverse`, but mutates `data`. Nothing is touched on error.
pub fn reverse_in_place(data: &mut [u8], chunk_size: usize) -> Result<(), ConvertError> {
    checked_chunk_count(data.len() as u64, chunk_size)?;

    for chunk in data.chunks_exact_mut(chunk_size) {
        chunk.reverse();
    }
    Ok(())
}

/// Streaming version of `reverse`: copy `reader` into `writer`, one `SIZE`
/// chunk at a time, through two reused buffers. Memory use doesn't depend on
/// the input length.
///
/// Returns the number of chunks written. A trailing partial chunk is a
/// `LengthMismatch`; whatever was written before it is left to the caller to
/// discard.
pub fn reverse_stream<const SIZE: usize, R, W>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, ConvertError>
where
    R: Read,
    W: Write,
{
    if SIZE == 0 {
        return Err(ConvertError::InvalidChunkSize(SIZE));
    }

    let mut input = Chunk::<SIZE>::zeroed();
    let mut output = Chunk::<SIZE>::zeroed();
    let mut nb_chunks: u64 = 0;

    loop {
        let got = fill_chunk(reader, input.as_bytes_mut())?;
        if got == 0 {
            break;
        }
        if got < SIZE {
            return Err(ConvertError::LengthMismatch {
                len: nb_chunks * SIZE as u64 + got as u64,
                chunk_size: SIZE,
            });
        }

        input.reverse_into(&mut output);
        writer.write_all(output.as_bytes())?;
        nb_chunks += 1;
    }

    writer.flush()?;
    Ok(nb_chunks)
}

#[cfg(test)]
#[path = "reverser_test.rs"]
mod reverser_test;
