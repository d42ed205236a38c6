#![forbid(unsafe_code)]

//! Pointer-to-line hit-testing.
//!
//! Resolution runs on a fixed line-height grid: the vertical coordinate
//! picks a line by floor division, and the horizontal coordinate must fall
//! strictly inside that line's rendered glyph run. Clicks on trailing
//! whitespace past the glyphs miss on purpose.
//!
//! Every failure mode fails closed: out-of-range coordinates and
//! unavailable measurements resolve to `None`, never an error. Click
//! qualification (click vs. move/hover) is the caller's precondition.

use panegrid_core::geometry::Point;

use crate::block::{ActionId, TextBlock};
use crate::measure::TextMeasurer;

/// Resolve a pane-local pointer position to the action of the line it hit.
///
/// Returns `Some(action)` only when the position lands on a line that
/// carries an action AND the horizontal offset is strictly less than the
/// line's measured width.
#[must_use]
pub fn hit_test(
    block: &TextBlock,
    point: Point,
    measurer: &impl TextMeasurer,
) -> Option<ActionId> {
    let local = point.offset_from(block.origin());
    if local.x < 0 || local.y < 0 {
        return None;
    }

    let index = (local.y / block.line_height() as i32) as usize;
    let line = block.line(index)?;
    let action = line.action()?;

    let width = measurer.measure_width(line.content())?;
    if local.x < width as i32 {
        Some(action)
    } else {
        None
    }
}
