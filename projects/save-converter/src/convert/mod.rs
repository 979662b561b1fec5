mod converter;
mod reverser;

pub use converter::{check_file, convert_file, ConvertReport};
pub use reverser::{
    checked_chunk_count, reverse, reverse_in_place, reverse_stream, SAVE_CHUNK_SIZE,
};
