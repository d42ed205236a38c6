#![forbid(unsafe_code)]

//! Constraint-grid layout.
//!
//! This crate resolves a declared grid of rows and columns into pixel
//! rectangles for a set of placed panes:
//!
//! - [`TrackSize`] - sizing mode of a single row or column
//! - [`GridSpec`] - ordered row and column track sizes
//! - [`CellSpan`] - a pane's placement (start tracks, spans, alignment)
//! - [`Grid`] - validated placements plus resolve configuration
//! - [`ResolvedLayout`] - immutable pane-to-rectangle mapping
//!
//! # Example
//!
//! ```
//! use panegrid_core::geometry::Size;
//! use panegrid_layout::{CellSpan, Grid, GridSpec, PaneId, TrackSize};
//! use std::collections::BTreeMap;
//!
//! let spec = GridSpec::new(
//!     [TrackSize::Fixed(20), TrackSize::Fill],
//!     [TrackSize::Fill],
//! ).unwrap();
//!
//! let header = PaneId::new(1);
//! let body = PaneId::new(2);
//!
//! let mut grid = Grid::new(spec);
//! grid.place(header, CellSpan::at(0, 0)).unwrap();
//! grid.place(body, CellSpan::at(1, 0)).unwrap();
//!
//! let layout = grid.resolve(Size::new(100, 80), &BTreeMap::new()).unwrap();
//! assert_eq!(layout.get(header).unwrap().height, 20);
//! assert_eq!(layout.get(body).unwrap().height, 60);
//! ```

use std::collections::BTreeMap;
use std::fmt;

pub use panegrid_core::geometry::{Point, Rect, Sides, Size};

/// Stable identifier for placed panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaneId(u32);

impl PaneId {
    /// Create a new pane ID.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Sizing mode of a single row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSize {
    /// An exact size in pixels.
    Fixed(u16),
    /// Size to the largest preferred extent of panes confined to this track.
    Preferred,
    /// Consume leftover space after Fixed and Preferred tracks resolve.
    ///
    /// Multiple Fill tracks on an axis divide the leftover equally, floored,
    /// with the rounding remainder assigned to the last Fill track so track
    /// sizes always sum to the exact container extent.
    Fill,
}

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rows (vertical extent).
    Row,
    /// Columns (horizontal extent).
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Col => "column",
        })
    }
}

/// Alignment of a pane within its spanned tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Align to the start (left/top).
    Leading,
    /// Align to the end (right/bottom).
    Trailing,
    /// Center within the span.
    Center,
    /// Stretch to the full span extent.
    #[default]
    Fill,
}

/// The declared grid: ordered row and column track sizes.
///
/// Validated at construction; a grid always has at least one row and one
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    rows: Vec<TrackSize>,
    cols: Vec<TrackSize>,
}

impl GridSpec {
    /// Create a grid spec from row and column track sizes.
    pub fn new(
        rows: impl IntoIterator<Item = TrackSize>,
        cols: impl IntoIterator<Item = TrackSize>,
    ) -> Result<Self, LayoutError> {
        let rows: Vec<TrackSize> = rows.into_iter().collect();
        let cols: Vec<TrackSize> = cols.into_iter().collect();
        if rows.is_empty() {
            return Err(LayoutError::EmptyGrid { axis: Axis::Row });
        }
        if cols.is_empty() {
            return Err(LayoutError::EmptyGrid { axis: Axis::Col });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    /// Row track sizes in declaration order.
    #[must_use]
    pub fn rows(&self) -> &[TrackSize] {
        &self.rows
    }

    /// Column track sizes in declaration order.
    #[must_use]
    pub fn cols(&self) -> &[TrackSize] {
        &self.cols
    }

    fn tracks(&self, axis: Axis) -> &[TrackSize] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }
}

/// A pane's placement within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    /// First row occupied.
    pub row: usize,
    /// First column occupied.
    pub col: usize,
    /// Number of rows occupied (at least 1).
    pub row_span: usize,
    /// Number of columns occupied (at least 1).
    pub col_span: usize,
    /// Horizontal alignment within the spanned columns.
    pub h_align: Align,
    /// Vertical alignment within the spanned rows.
    pub v_align: Align,
}

impl CellSpan {
    /// Place in a single cell, stretched to the cell extent.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            h_align: Align::Fill,
            v_align: Align::Fill,
        }
    }

    /// Extend the placement over multiple tracks.
    #[must_use]
    pub const fn spanning(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    /// Set the alignment within the span.
    #[must_use]
    pub const fn aligned(mut self, h_align: Align, v_align: Align) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }

    fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_span,
            Axis::Col => self.col_span,
        }
    }
}

/// Errors raised while configuring or resolving a grid.
///
/// All variants are programmer errors surfaced eagerly; resolution itself
/// never fails once placements validate (overflow degrades to clamped
/// tracks, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A grid axis was declared with no tracks.
    EmptyGrid {
        /// The offending axis.
        axis: Axis,
    },
    /// A span references tracks outside the grid bounds.
    InvalidSpan {
        /// The pane being placed.
        id: PaneId,
        /// The offending axis.
        axis: Axis,
        /// First track index of the span.
        start: usize,
        /// Number of tracks spanned.
        span: usize,
        /// Number of tracks on the axis.
        tracks: usize,
    },
    /// Strict mode requires at least one Fill track on the axis.
    NoFillTarget {
        /// The offending axis.
        axis: Axis,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { axis } => write!(f, "grid declares no {axis} tracks"),
            Self::InvalidSpan {
                id,
                axis,
                start,
                span,
                tracks,
            } => write!(
                f,
                "pane {} spans {axis} tracks {start}..{} but the grid has {tracks}",
                id.0,
                start + span,
            ),
            Self::NoFillTarget { axis } => {
                write!(f, "strict fill mode requires a Fill {axis} track")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A grid with validated pane placements.
///
/// Placements are validated eagerly in [`place`](Self::place); overlapping
/// spans are permitted, and declaration order is preserved so consumers can
/// resolve overlap disputes with last-declared-wins dispatch.
#[derive(Debug, Clone)]
pub struct Grid {
    spec: GridSpec,
    cells: Vec<(PaneId, CellSpan)>,
    margin: Sides,
    strict_fill: bool,
}

impl Grid {
    /// Create an empty grid over the given spec.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            cells: Vec::new(),
            margin: Sides::default(),
            strict_fill: false,
        }
    }

    /// Set the uniform margin applied once at the container edges.
    ///
    /// There is no spacing between tracks; callers declare Preferred gap
    /// tracks for visual spacing.
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Require at least one Fill track per axis at resolve time.
    #[must_use]
    pub fn strict_fill(mut self, strict: bool) -> Self {
        self.strict_fill = strict;
        self
    }

    /// The underlying spec.
    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Place a pane, validating its span against the grid bounds.
    pub fn place(&mut self, id: PaneId, span: CellSpan) -> Result<(), LayoutError> {
        for axis in [Axis::Row, Axis::Col] {
            let tracks = self.spec.tracks(axis).len();
            let start = span.start(axis);
            let len = span.len(axis);
            if len == 0 || start >= tracks || start + len > tracks {
                return Err(LayoutError::InvalidSpan {
                    id,
                    axis,
                    start,
                    span: len,
                    tracks,
                });
            }
        }
        self.cells.push((id, span));
        Ok(())
    }

    /// Resolve every placed pane to a pixel rectangle.
    ///
    /// Pure and deterministic: identical inputs yield identical layouts.
    /// Panes absent from `measured` are treated as preferring zero size.
    pub fn resolve(
        &self,
        container: Size,
        measured: &BTreeMap<PaneId, Size>,
    ) -> Result<ResolvedLayout, LayoutError> {
        if self.strict_fill {
            for axis in [Axis::Row, Axis::Col] {
                if !self.spec.tracks(axis).contains(&TrackSize::Fill) {
                    return Err(LayoutError::NoFillTarget { axis });
                }
            }
        }

        let inner = Rect::from_size(container).inner(self.margin);

        let col_sizes = self.solve_axis(Axis::Col, inner.width, measured);
        let row_sizes = self.solve_axis(Axis::Row, inner.height, measured);

        let col_offsets = offsets(inner.x, &col_sizes);
        let row_offsets = offsets(inner.y, &row_sizes);

        let mut rects = Vec::with_capacity(self.cells.len());
        for &(id, span) in &self.cells {
            let span_x = col_offsets[span.col];
            let span_w = sum_extent(&col_sizes[span.col..span.col + span.col_span]);
            let span_y = row_offsets[span.row];
            let span_h = sum_extent(&row_sizes[span.row..span.row + span.row_span]);

            let pref = measured.get(&id).copied().unwrap_or(Size::ZERO);
            let (dx, width) = align_extent(span_w, pref.width, span.h_align);
            let (dy, height) = align_extent(span_h, pref.height, span.v_align);

            rects.push((
                id,
                Rect::new(
                    span_x.saturating_add(dx),
                    span_y.saturating_add(dy),
                    width,
                    height,
                ),
            ));
        }

        Ok(ResolvedLayout { rects })
    }

    /// Resolve one axis: Fixed and Preferred first, leftover split among
    /// Fill tracks with the rounding remainder on the last one.
    fn solve_axis(&self, axis: Axis, extent: u16, measured: &BTreeMap<PaneId, Size>) -> Vec<u16> {
        let tracks = self.spec.tracks(axis);
        let mut sizes = vec![0u16; tracks.len()];
        let mut fill_indices = Vec::new();
        let mut used: u32 = 0;

        for (i, &track) in tracks.iter().enumerate() {
            match track {
                TrackSize::Fixed(px) => {
                    sizes[i] = px;
                    used = used.saturating_add(px as u32);
                }
                TrackSize::Preferred => {
                    let px = self.track_preferred(axis, i, measured);
                    sizes[i] = px;
                    used = used.saturating_add(px as u32);
                }
                TrackSize::Fill => fill_indices.push(i),
            }
        }

        if fill_indices.is_empty() {
            return sizes;
        }

        // Negative leftover clamps to zero; overflow is accepted, not
        // re-flowed.
        let leftover = (extent as u32).saturating_sub(used) as u16;
        let count = fill_indices.len() as u16;
        let base = leftover / count;
        let remainder = leftover - base * count;

        for (pos, &i) in fill_indices.iter().enumerate() {
            sizes[i] = if pos == fill_indices.len() - 1 {
                base + remainder
            } else {
                base
            };
        }

        sizes
    }

    /// Largest preferred extent among panes whose span starts and ends
    /// within this single track. Multi-track spans contribute nothing.
    fn track_preferred(
        &self,
        axis: Axis,
        index: usize,
        measured: &BTreeMap<PaneId, Size>,
    ) -> u16 {
        let mut best = 0u16;
        for &(id, span) in &self.cells {
            if span.start(axis) != index || span.len(axis) != 1 {
                continue;
            }
            let Some(&size) = measured.get(&id) else {
                continue;
            };
            let px = match axis {
                Axis::Row => size.height,
                Axis::Col => size.width,
            };
            best = best.max(px);
        }
        best
    }
}

/// Saturating sum of spanned track sizes.
fn sum_extent(sizes: &[u16]) -> u16 {
    sizes.iter().fold(0u16, |acc, &s| acc.saturating_add(s))
}

/// Running prefix sum of track sizes, starting at the margin edge.
fn offsets(origin: u16, sizes: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(sizes.len());
    let mut pos = origin;
    for &size in sizes {
        out.push(pos);
        pos = pos.saturating_add(size);
    }
    out
}

/// Place a measured extent within a span extent for one axis.
///
/// Returns `(offset_within_span, resolved_extent)`.
fn align_extent(span: u16, measured: u16, align: Align) -> (u16, u16) {
    if align == Align::Fill {
        return (0, span);
    }
    let extent = measured.min(span);
    let slack = span - extent;
    let offset = match align {
        Align::Leading => 0,
        Align::Trailing => slack,
        Align::Center => slack / 2,
        Align::Fill => unreachable!(),
    };
    (offset, extent)
}

/// Immutable result of a grid resolution.
///
/// Maps each placed pane to its rectangle in container-local pixels.
/// Preserves declaration order so overlap disputes resolve to the
/// last-declared pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    rects: Vec<(PaneId, Rect)>,
}

impl ResolvedLayout {
    /// The rectangle resolved for a pane.
    #[must_use]
    pub fn get(&self, id: PaneId) -> Option<Rect> {
        self.rects
            .iter()
            .find(|(pane, _)| *pane == id)
            .map(|&(_, rect)| rect)
    }

    /// Iterate panes and rectangles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PaneId, Rect)> + '_ {
        self.rects.iter().copied()
    }

    /// Number of resolved panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if no panes were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The topmost pane containing a point (last-declared wins).
    #[must_use]
    pub fn pane_at(&self, point: Point) -> Option<PaneId> {
        self.rects
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|&(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(entries: &[(PaneId, Size)]) -> BTreeMap<PaneId, Size> {
        entries.iter().copied().collect()
    }

    // --- GridSpec validation ---

    #[test]
    fn empty_axis_is_rejected() {
        let err = GridSpec::new([], [TrackSize::Fill]).unwrap_err();
        assert_eq!(err, LayoutError::EmptyGrid { axis: Axis::Row });
        let err = GridSpec::new([TrackSize::Fill], []).unwrap_err();
        assert_eq!(err, LayoutError::EmptyGrid { axis: Axis::Col });
    }

    #[test]
    fn span_outside_bounds_is_rejected() {
        let spec = GridSpec::new(
            [TrackSize::Fill, TrackSize::Fill],
            [TrackSize::Fill],
        )
        .unwrap();
        let mut grid = Grid::new(spec);
        let id = PaneId::new(7);

        let err = grid.place(id, CellSpan::at(2, 0)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidSpan {
                axis: Axis::Row,
                start: 2,
                ..
            }
        ));

        let err = grid.place(id, CellSpan::at(0, 0).spanning(1, 2)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSpan { axis: Axis::Col, .. }));

        let err = grid.place(id, CellSpan::at(0, 0).spanning(0, 1)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSpan { span: 0, .. }));
    }

    #[test]
    fn error_messages_name_the_axis() {
        let err = LayoutError::InvalidSpan {
            id: PaneId::new(3),
            axis: Axis::Col,
            start: 1,
            span: 2,
            tracks: 2,
        };
        assert_eq!(
            err.to_string(),
            "pane 3 spans column tracks 1..3 but the grid has 2"
        );
    }

    // --- Axis solving ---

    #[test]
    fn fixed_and_fill_split() {
        let spec = GridSpec::new(
            [TrackSize::Fixed(10), TrackSize::Fill],
            [TrackSize::Fill],
        )
        .unwrap();
        let a = PaneId::new(1);
        let b = PaneId::new(2);
        let mut grid = Grid::new(spec);
        grid.place(a, CellSpan::at(0, 0)).unwrap();
        grid.place(b, CellSpan::at(1, 0)).unwrap();

        let layout = grid.resolve(Size::new(50, 40), &BTreeMap::new()).unwrap();
        assert_eq!(layout.get(a), Some(Rect::new(0, 0, 50, 10)));
        assert_eq!(layout.get(b), Some(Rect::new(0, 10, 50, 30)));
    }

    #[test]
    fn multiple_fill_tracks_split_equally_with_remainder_on_last() {
        let spec = GridSpec::new(
            [TrackSize::Fill, TrackSize::Fill, TrackSize::Fill],
            [TrackSize::Fill],
        )
        .unwrap();
        let panes: Vec<PaneId> = (0..3).map(PaneId::new).collect();
        let mut grid = Grid::new(spec);
        for (i, &id) in panes.iter().enumerate() {
            grid.place(id, CellSpan::at(i, 0)).unwrap();
        }

        // 100 / 3 = 33 with remainder 1 on the last track.
        let layout = grid.resolve(Size::new(10, 100), &BTreeMap::new()).unwrap();
        assert_eq!(layout.get(panes[0]).unwrap().height, 33);
        assert_eq!(layout.get(panes[1]).unwrap().height, 33);
        assert_eq!(layout.get(panes[2]).unwrap().height, 34);

        let total: u16 = panes
            .iter()
            .map(|&id| layout.get(id).unwrap().height)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn preferred_track_takes_max_of_single_track_spans() {
        let spec = GridSpec::new(
            [TrackSize::Preferred, TrackSize::Fill],
            [TrackSize::Preferred, TrackSize::Fill],
        )
        .unwrap();
        let small = PaneId::new(1);
        let large = PaneId::new(2);
        let wide = PaneId::new(3);
        let mut grid = Grid::new(spec);
        grid.place(small, CellSpan::at(0, 0)).unwrap();
        grid.place(large, CellSpan::at(0, 0)).unwrap();
        // Spans both columns: must not contribute to column 0's size.
        grid.place(wide, CellSpan::at(0, 0).spanning(1, 2)).unwrap();

        let sizes = measured(&[
            (small, Size::new(10, 5)),
            (large, Size::new(30, 12)),
            (wide, Size::new(500, 500)),
        ]);
        let layout = grid.resolve(Size::new(100, 100), &sizes).unwrap();

        assert_eq!(layout.get(large), Some(Rect::new(0, 0, 30, 12)));
        // The wide pane stretches over col0 (30) + col1 fill (70).
        assert_eq!(layout.get(wide), Some(Rect::new(0, 0, 100, 12)));
    }

    #[test]
    fn undersized_container_clamps_fill_to_zero() {
        let spec = GridSpec::new(
            [TrackSize::Fixed(80), TrackSize::Fill, TrackSize::Fixed(40)],
            [TrackSize::Fill],
        )
        .unwrap();
        let a = PaneId::new(1);
        let b = PaneId::new(2);
        let c = PaneId::new(3);
        let mut grid = Grid::new(spec);
        grid.place(a, CellSpan::at(0, 0)).unwrap();
        grid.place(b, CellSpan::at(1, 0)).unwrap();
        grid.place(c, CellSpan::at(2, 0)).unwrap();

        // 80 + 40 > 100: the Fill track collapses, fixed tracks overflow.
        let layout = grid.resolve(Size::new(10, 100), &BTreeMap::new()).unwrap();
        assert_eq!(layout.get(b).unwrap().height, 0);
        assert_eq!(layout.get(a).unwrap().height, 80);
        assert_eq!(layout.get(c).unwrap().y, 80);
    }

    // --- Strict fill mode ---

    #[test]
    fn strict_fill_requires_a_fill_track_per_axis() {
        let spec = GridSpec::new(
            [TrackSize::Fixed(10)],
            [TrackSize::Fill],
        )
        .unwrap();
        let grid = Grid::new(spec).strict_fill(true);
        let err = grid.resolve(Size::new(10, 10), &BTreeMap::new()).unwrap_err();
        assert_eq!(err, LayoutError::NoFillTarget { axis: Axis::Row });
    }

    #[test]
    fn strict_fill_passes_when_both_axes_have_fill() {
        let spec = GridSpec::new([TrackSize::Fill], [TrackSize::Fill]).unwrap();
        let grid = Grid::new(spec).strict_fill(true);
        assert!(grid.resolve(Size::new(10, 10), &BTreeMap::new()).is_ok());
    }

    // --- Margin ---

    #[test]
    fn margin_applies_at_container_edges_only() {
        let spec = GridSpec::new(
            [TrackSize::Fill, TrackSize::Fill],
            [TrackSize::Fill],
        )
        .unwrap();
        let a = PaneId::new(1);
        let b = PaneId::new(2);
        let mut grid = Grid::new(spec).margin(8);
        grid.place(a, CellSpan::at(0, 0)).unwrap();
        grid.place(b, CellSpan::at(1, 0)).unwrap();

        let layout = grid.resolve(Size::new(100, 100), &BTreeMap::new()).unwrap();
        let ra = layout.get(a).unwrap();
        let rb = layout.get(b).unwrap();
        assert_eq!(ra, Rect::new(8, 8, 84, 42));
        // Tracks touch; only the container edges carry the margin.
        assert_eq!(rb.y, ra.bottom());
        assert_eq!(rb.bottom(), 92);
    }

    // --- Alignment ---

    #[test]
    fn alignment_places_measured_size_within_span() {
        let id = PaneId::new(1);
        let sizes = measured(&[(id, Size::new(20, 10))]);

        let cases = [
            (Align::Leading, Align::Leading, Rect::new(0, 0, 20, 10)),
            (Align::Trailing, Align::Trailing, Rect::new(80, 90, 20, 10)),
            (Align::Center, Align::Center, Rect::new(40, 45, 20, 10)),
            (Align::Fill, Align::Fill, Rect::new(0, 0, 100, 100)),
        ];
        for (h, v, expected) in cases {
            let mut grid = Grid::new(
                GridSpec::new([TrackSize::Fill], [TrackSize::Fill]).unwrap(),
            );
            grid.place(id, CellSpan::at(0, 0).aligned(h, v)).unwrap();
            let layout = grid.resolve(Size::new(100, 100), &sizes).unwrap();
            assert_eq!(layout.get(id), Some(expected), "{h:?}/{v:?}");
        }
    }

    #[test]
    fn oversized_measurement_clamps_to_span() {
        let spec = GridSpec::new([TrackSize::Fixed(10)], [TrackSize::Fixed(10)]).unwrap();
        let id = PaneId::new(1);
        let mut grid = Grid::new(spec);
        grid.place(
            id,
            CellSpan::at(0, 0).aligned(Align::Center, Align::Center),
        )
        .unwrap();
        let sizes = measured(&[(id, Size::new(50, 50))]);
        let layout = grid.resolve(Size::new(10, 10), &sizes).unwrap();
        assert_eq!(layout.get(id), Some(Rect::new(0, 0, 10, 10)));
    }

    // --- Dispatch order ---

    #[test]
    fn pane_at_prefers_last_declared() {
        let spec = GridSpec::new([TrackSize::Fill], [TrackSize::Fill]).unwrap();
        let below = PaneId::new(1);
        let above = PaneId::new(2);
        let mut grid = Grid::new(spec);
        grid.place(below, CellSpan::at(0, 0)).unwrap();
        grid.place(above, CellSpan::at(0, 0)).unwrap();

        let layout = grid.resolve(Size::new(10, 10), &BTreeMap::new()).unwrap();
        assert_eq!(layout.pane_at(Point::new(5, 5)), Some(above));
        assert_eq!(layout.pane_at(Point::new(20, 5)), None);
    }

    // --- Determinism ---

    #[test]
    fn resolve_is_idempotent() {
        let spec = GridSpec::new(
            [TrackSize::Preferred, TrackSize::Fill, TrackSize::Fixed(9)],
            [TrackSize::Fill, TrackSize::Fill],
        )
        .unwrap();
        let a = PaneId::new(1);
        let b = PaneId::new(2);
        let mut grid = Grid::new(spec).margin(3);
        grid.place(a, CellSpan::at(0, 0)).unwrap();
        grid.place(b, CellSpan::at(1, 0).spanning(1, 2)).unwrap();

        let sizes = measured(&[(a, Size::new(11, 7))]);
        let first = grid.resolve(Size::new(123, 77), &sizes).unwrap();
        let second = grid.resolve(Size::new(123, 77), &sizes).unwrap();
        assert_eq!(first, second);
    }
}
