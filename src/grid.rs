//! Fixed geometry of the Tiny YOLO v2 detection head.
//!
//! The detector runs on a 416x416 canvas divided into a 13x13 grid of 32 px
//! cells. Each cell proposes five anchor boxes; each anchor carries five
//! geometry/objectness values followed by twenty class logits, giving 125
//! channels per cell. The tensor is channel-major: all values for channel 0
//! across the grid, then channel 1, and so on.

/// Cells per grid side.
pub const GRID_SIZE: usize = 13;

/// Pixel extent of one grid cell.
pub const CELL_SIZE: f32 = 32.0;

/// Pixel extent of the canvas the tensor was computed for.
pub const CANVAS_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;

/// Anchor proposals per grid cell.
pub const BOXES_PER_CELL: usize = 5;

/// Geometry/objectness values per anchor: tx, ty, tw, th, tc.
pub const BOX_FEATURES: usize = 5;

/// Classes the detector distinguishes.
pub const CLASS_COUNT: usize = 20;

/// Channels per grid cell.
pub const CHANNEL_COUNT: usize = BOXES_PER_CELL * (BOX_FEATURES + CLASS_COUNT);

/// Total element count of a detection tensor.
pub const TENSOR_LEN: usize = GRID_SIZE * GRID_SIZE * CHANNEL_COUNT;

const CHANNEL_STRIDE: usize = GRID_SIZE * GRID_SIZE;

/// Anchor (width, height) priors in cell units.
pub const ANCHORS: [(f32, f32); BOXES_PER_CELL] = [
    (1.08, 1.19),
    (3.42, 4.41),
    (6.63, 11.38),
    (9.42, 5.11),
    (16.62, 10.52),
];

/// Class labels in declared channel order (Pascal VOC).
pub const CLASS_NAMES: [&str; CLASS_COUNT] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

/// Flat index of `(cx, cy, channel)` in the channel-major tensor layout.
#[inline]
pub fn tensor_offset(cx: usize, cy: usize, channel: usize) -> usize {
    channel * CHANNEL_STRIDE + cy * GRID_SIZE + cx
}
