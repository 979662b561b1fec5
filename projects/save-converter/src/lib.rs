//! Fix save files dumped with the byte order of every 8-byte chunk reversed,
//! as written by some flash cartridges, back into a linear layout.
//!
//! The whole transform lives in [`convert`]: [`convert::reverse`] for bytes in
//! memory, [`convert::convert_file`] for files, streamed chunk by chunk.

pub mod convert;
pub mod error;
pub mod file;
mod utils;
