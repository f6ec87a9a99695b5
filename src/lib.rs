//! Post-processing for the Tiny YOLO v2 detection head.
//!
//! This crate turns the raw 13x13x125 output tensor of the detector into a
//! de-duplicated list of labeled pixel-space bounding boxes: per-anchor
//! decoding (sigmoid center offsets, exponential anchor scaling, softmax
//! class scores) followed by greedy non-maximum suppression. Both stages are
//! pure functions over their inputs; feeding the tensor and rendering the
//! boxes belong to the caller.

mod bbox;
mod decode;
pub mod grid;
mod suppress;
pub(crate) mod trace;
pub mod util;

pub use bbox::BoundingBox;
pub use decode::decode;
#[cfg(feature = "rayon")]
pub use decode::decode_par;
pub use suppress::non_max_suppress;
pub use util::{YoloPostError, YoloPostResult};
