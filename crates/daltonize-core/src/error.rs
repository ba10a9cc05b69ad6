//! Error types for buffer conversion, model lookup, and the transform engine.

use thiserror::Error;

/// Failures the pipeline can report.
///
/// All variants are local, synchronous failures detected at the point of
/// use; none are retryable, since every operation is deterministic over its
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested deficiency type is not in the registry.
    #[error("unknown deficiency type: {0}")]
    UnknownDeficiency(String),

    /// A buffer had a channel count the adapter cannot handle.
    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    ChannelCount(u8),

    /// Buffer dimensions and data length disagree, or a dimension is zero.
    #[error("invalid buffer shape: {width}x{height} with {channels} channels and {len} samples")]
    BufferShape {
        width: u32,
        height: u32,
        channels: u8,
        len: usize,
    },

    /// A matrix supplied at runtime is not 3x3.
    #[error("color matrix must be 3x3, got {rows}x{cols}")]
    InvalidMatrix { rows: usize, cols: usize },
}
