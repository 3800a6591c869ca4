//! Classifier: decides which event, if any, a raw line describes.
//!
//! Markers are tested in a fixed order, so a line carrying both `<=` and `=>`
//! is an arrival.

use crate::types::LineKind;

pub const ARRIVAL_MARKER: &str = "<=";
pub const DELIVERY_MARKER: &str = "=>";
pub const COMPLETION_MARKER: &str = "Completed";

/// Classify a raw log line by marker substring.
pub fn classify(line: &str) -> LineKind {
    if line.contains(ARRIVAL_MARKER) {
        LineKind::Arrival
    } else if line.contains(DELIVERY_MARKER) {
        LineKind::Delivery
    } else if line.contains(COMPLETION_MARKER) {
        LineKind::Completion
    } else {
        LineKind::Unrecognized
    }
}
