//! Greedy non-maximum suppression over decoded candidates.

use crate::bbox::BoundingBox;
use crate::trace::{trace_event, trace_span};
use crate::util::{YoloPostError, YoloPostResult};

/// Removes geometrically redundant boxes, keeping at most `keep_limit`.
///
/// Candidates are ranked by confidence (descending, ties in input order) and
/// accepted greedily; every lower-ranked box whose IoU with an accepted box
/// exceeds `iou_threshold` is discarded as a duplicate. The returned list is
/// confidence-descending. A `keep_limit` of 0 yields an empty result.
///
/// Fails with [`YoloPostError::IouThresholdOutOfRange`] when `iou_threshold`
/// is NaN or outside `[0, 1]`; the threshold is never clamped.
pub fn non_max_suppress(
    boxes: &[BoundingBox],
    keep_limit: usize,
    iou_threshold: f32,
) -> YoloPostResult<Vec<BoundingBox>> {
    if !(0.0..=1.0).contains(&iou_threshold) {
        return Err(YoloPostError::IouThresholdOutOfRange { got: iou_threshold });
    }

    let _span = trace_span!(
        "non_max_suppress",
        candidates = boxes.len(),
        keep_limit = keep_limit
    )
    .entered();

    let mut sorted = boxes.to_vec();
    // Vec::sort_by is stable; equal confidences keep their insertion order.
    sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut active = vec![true; sorted.len()];
    let mut kept: Vec<BoundingBox> = Vec::with_capacity(keep_limit.min(sorted.len()));

    for i in 0..sorted.len() {
        if kept.len() == keep_limit {
            break;
        }
        if !active[i] {
            continue;
        }
        kept.push(sorted[i]);
        for j in (i + 1)..sorted.len() {
            if active[j] && sorted[i].iou(&sorted[j]) > iou_threshold {
                active[j] = false;
            }
        }
    }

    trace_event!("kept_boxes", count = kept.len());
    Ok(kept)
}
