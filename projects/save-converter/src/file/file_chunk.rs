use super::chunk::Chunk;
use crate::{convert::checked_chunk_count, error::ConvertError};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

// CHUNKED SOURCE --------------------------------------------------------------

/// Read-only save file, consumed chunk by chunk.
pub struct ChunkedSource<const SIZE: usize> {
    file_size: u64,
    reader: BufReader<File>,
}

impl<const SIZE: usize> ChunkedSource<SIZE> {
    // Open an already existing file. A missing path, or a path which isn't a
    // regular file, is reported as InputNotFound.
    pub fn open_existing<P>(path: P) -> Result<Self, ConvertError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = match OpenOptions::new().read(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConvertError::InputNotFound(path.to_path_buf()))
            }
            Err(err) => return Err(err.into()),
        };

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(ConvertError::InputNotFound(path.to_path_buf()));
        }

        Ok(Self {
            file_size: metadata.len(),
            reader: BufReader::new(file),
        })
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    // Number of chunks in the file. Fails if the last one would be partial.
    pub fn nb_chunks(&self) -> Result<u64, ConvertError> {
        checked_chunk_count(self.file_size, SIZE)
    }

    // Read the next chunk. Returns false once the whole file has been read.
    pub fn read_chunk(&mut self, chunk: &mut Chunk<SIZE>) -> Result<bool, ConvertError> {
        match fill_chunk(&mut self.reader, chunk.as_bytes_mut())? {
            0 => Ok(false),
            got if got == SIZE => Ok(true),
            _ => Err(ConvertError::LengthMismatch {
                len: self.file_size,
                chunk_size: SIZE,
            }),
        }
    }
}

impl<const SIZE: usize> Read for ChunkedSource<SIZE> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

// CHUNKED TARGET --------------------------------------------------------------

/// Freshly created output file.
///
/// The file stays pending until `commit` is called: dropping a pending target
/// removes whatever was written, so a failed conversion never leaves a partial
/// save behind.
pub struct ChunkedTarget<const SIZE: usize> {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl<const SIZE: usize> ChunkedTarget<SIZE> {
    // Create a new file. Never overwrites: an existing path is OutputExists.
    pub fn create_new<P>(path: P) -> Result<Self, ConvertError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ConvertError::OutputExists(path.to_path_buf()))
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_chunk(&mut self, chunk: &Chunk<SIZE>) -> Result<(), ConvertError> {
        self.write_all(chunk.as_bytes())?;
        Ok(())
    }

    // Flush everything to the disk and keep the file.
    pub fn commit(mut self) -> Result<(), ConvertError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        self.committed = true;
        Ok(())
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "target already committed"))
    }
}

impl<const SIZE: usize> Write for ChunkedTarget<SIZE> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl<const SIZE: usize> Drop for ChunkedTarget<SIZE> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Close the handle before removing the file.
        drop(self.writer.take());
        _ = fs::remove_file(&self.path);
    }
}

// HELPER ----------------------------------------------------------------------

// Fill `buf` from the reader, stopping early only at EOF.
// Returns how many bytes were read.
pub(crate) fn fill_chunk<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: Read,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "file_chunk_test.rs"]
mod file_chunk_test;
