//! Decoding of the raw detection tensor into candidate boxes.

use crate::bbox::BoundingBox;
use crate::grid::{
    tensor_offset, ANCHORS, BOX_FEATURES, CELL_SIZE, CLASS_COUNT, CLASS_NAMES, GRID_SIZE,
    TENSOR_LEN,
};
use crate::trace::{trace_event, trace_span};
use crate::util::math::{sigmoid, softmax_in_place};
use crate::util::{YoloPostError, YoloPostResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Decodes a flat detection tensor into candidate bounding boxes.
///
/// The tensor must hold exactly [`TENSOR_LEN`] values in the channel-major
/// layout described in [`crate::grid`]. Every returned box has a confidence
/// of at least `confidence_threshold`; a threshold of 1.0 or more suppresses
/// all output, a negative threshold accepts every anchor. Candidates are
/// emitted in grid traversal order (row, then column, then anchor), which
/// carries no ranking meaning.
pub fn decode(tensor: &[f32], confidence_threshold: f32) -> YoloPostResult<Vec<BoundingBox>> {
    validate(tensor, confidence_threshold)?;

    let _span = trace_span!("decode", threshold = confidence_threshold).entered();

    let mut boxes = Vec::new();
    for cy in 0..GRID_SIZE {
        decode_row(tensor, cy, confidence_threshold, &mut boxes);
    }

    trace_event!("decoded_candidates", count = boxes.len());
    Ok(boxes)
}

/// Row-parallel variant of [`decode`] with identical output.
///
/// Grid rows are decoded on the rayon thread pool and concatenated in row
/// order, so the emission order matches the serial path.
#[cfg(feature = "rayon")]
pub fn decode_par(tensor: &[f32], confidence_threshold: f32) -> YoloPostResult<Vec<BoundingBox>> {
    validate(tensor, confidence_threshold)?;

    let _span = trace_span!("decode_par", threshold = confidence_threshold).entered();

    let rows: Vec<Vec<BoundingBox>> = (0..GRID_SIZE)
        .into_par_iter()
        .map(|cy| {
            let mut row_boxes = Vec::new();
            decode_row(tensor, cy, confidence_threshold, &mut row_boxes);
            row_boxes
        })
        .collect();
    let boxes: Vec<BoundingBox> = rows.into_iter().flatten().collect();

    trace_event!("decoded_candidates", count = boxes.len());
    Ok(boxes)
}

fn validate(tensor: &[f32], confidence_threshold: f32) -> YoloPostResult<()> {
    if tensor.len() != TENSOR_LEN {
        return Err(YoloPostError::TensorLengthMismatch {
            expected: TENSOR_LEN,
            got: tensor.len(),
        });
    }
    if !confidence_threshold.is_finite() {
        return Err(YoloPostError::NonFiniteThreshold {
            got: confidence_threshold,
        });
    }
    Ok(())
}

fn decode_row(tensor: &[f32], cy: usize, confidence_threshold: f32, out: &mut Vec<BoundingBox>) {
    for cx in 0..GRID_SIZE {
        for (b, &(anchor_w, anchor_h)) in ANCHORS.iter().enumerate() {
            let channel = b * (BOX_FEATURES + CLASS_COUNT);

            let tx = tensor[tensor_offset(cx, cy, channel)];
            let ty = tensor[tensor_offset(cx, cy, channel + 1)];
            let tw = tensor[tensor_offset(cx, cy, channel + 2)];
            let th = tensor[tensor_offset(cx, cy, channel + 3)];
            let tc = tensor[tensor_offset(cx, cy, channel + 4)];

            // Objectness gate before the class pass; most anchors die here.
            let objectness = sigmoid(tc);
            if objectness < confidence_threshold {
                continue;
            }

            let center_x = (cx as f32 + sigmoid(tx)) * CELL_SIZE;
            let center_y = (cy as f32 + sigmoid(ty)) * CELL_SIZE;
            let width = tw.exp() * CELL_SIZE * anchor_w;
            let height = th.exp() * CELL_SIZE * anchor_h;

            let mut class_probs = [0.0f32; CLASS_COUNT];
            let class_base = channel + BOX_FEATURES;
            for (i, prob) in class_probs.iter_mut().enumerate() {
                *prob = tensor[tensor_offset(cx, cy, class_base + i)];
            }
            softmax_in_place(&mut class_probs);

            // Strict > keeps the lowest class index on exact ties.
            let mut top_class = 0;
            let mut top_prob = class_probs[0];
            for (i, &prob) in class_probs.iter().enumerate().skip(1) {
                if prob > top_prob {
                    top_class = i;
                    top_prob = prob;
                }
            }

            let confidence = objectness * top_prob;
            if confidence < confidence_threshold {
                continue;
            }

            out.push(BoundingBox {
                x: center_x - width / 2.0,
                y: center_y - height / 2.0,
                width,
                height,
                confidence,
                label: CLASS_NAMES[top_class],
            });
        }
    }
}
