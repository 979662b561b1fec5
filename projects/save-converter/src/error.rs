use errors::ExitStatus;
use std::{io, path::PathBuf};
use thiserror::Error;

// Exit codes ------------------------------------------------------------------

// 2 is what clap already returns on a usage error.
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_INPUT_NOT_FOUND: u8 = 3;
pub const EXIT_OUTPUT_EXISTS: u8 = 4;
pub const EXIT_LENGTH_MISMATCH: u8 = 5;
pub const EXIT_INVALID_CHUNK_SIZE: u8 = 6;

// Errors ----------------------------------------------------------------------

/// Everything that can stop a save conversion. All of them are terminal for
/// the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file doesn't exist! ({})", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output file already exists! ({})", .0.display())]
    OutputExists(PathBuf),

    #[error("Input file's length needs to be a multiple of {chunk_size} bytes! (got {len} bytes)")]
    LengthMismatch { len: u64, chunk_size: usize },

    #[error("chunk size must be greater than 0 (got {0})")]
    InvalidChunkSize(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConvertError {
    // Whether the user should be reminded of the usage after this error.
    pub fn wants_usage(&self) -> bool {
        matches!(self, ConvertError::InputNotFound(_) | ConvertError::OutputExists(_))
    }
}

impl ExitStatus for ConvertError {
    fn exit_code(&self) -> u8 {
        match self {
            ConvertError::InputNotFound(_) => EXIT_INPUT_NOT_FOUND,
            ConvertError::OutputExists(_) => EXIT_OUTPUT_EXISTS,
            ConvertError::LengthMismatch { .. } => EXIT_LENGTH_MISMATCH,
            ConvertError::InvalidChunkSize(_) => EXIT_INVALID_CHUNK_SIZE,
            ConvertError::Io(_) => errors::GENERIC_FAILURE,
        }
    }
}
