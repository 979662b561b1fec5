pub mod chunk;
pub mod file_chunk;
