#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ChunkError {
    /// Redistribution was asked to produce chunks of size zero.
    #[error("invalid chunk size {0}: must be positive")]
    InvalidChunkSize(usize),
    #[error("index {index} out of bounds for chunk of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
