// Number of whole chunks of `chunk_size` bytes in `len` bytes.
// Returns None when a partial chunk would remain, or when chunk_size is 0.
pub const fn exact_chunk_count(len: u64, chunk_size: usize) -> Option<u64> {
    let chunk_size = chunk_size as u64;
    if chunk_size == 0 || len % chunk_size != 0 {
        return None;
    }
    Some(len / chunk_size)
}
