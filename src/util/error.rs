//! Error types for yolopost.

use thiserror::Error;

/// Result alias for yolopost operations.
pub type YoloPostResult<T> = std::result::Result<T, YoloPostError>;

/// Errors that can occur when decoding or suppressing detections.
#[derive(Debug, Error, PartialEq)]
pub enum YoloPostError {
    /// The detection tensor does not have the fixed architecture length.
    #[error("tensor length mismatch: expected {expected}, got {got}")]
    TensorLengthMismatch {
        /// Length required by the detector architecture.
        expected: usize,
        /// Length of the tensor that was supplied.
        got: usize,
    },
    /// The confidence threshold is NaN or infinite.
    #[error("confidence threshold must be finite, got {got}")]
    NonFiniteThreshold {
        /// The offending threshold value.
        got: f32,
    },
    /// The suppression overlap threshold is NaN or outside `[0, 1]`.
    #[error("iou threshold must lie in [0, 1], got {got}")]
    IouThresholdOutOfRange {
        /// The offending threshold value.
        got: f32,
    },
}
