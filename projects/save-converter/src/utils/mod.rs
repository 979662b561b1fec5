mod math;
pub use math::exact_chunk_count;
