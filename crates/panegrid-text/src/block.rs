#![forbid(unsafe_code)]

//! Immutable rendered-text model.
//!
//! A [`TextBlock`] is the value a text pane renders: an ordered sequence of
//! lines on a fixed line-height grid, each optionally carrying an action.
//! Blocks are immutable after construction; a pane that changes its text
//! rebuilds the block wholesale.

use std::fmt;

use panegrid_core::geometry::Point;

/// Opaque identifier attached to a text line.
///
/// Resolved by the dialog shell into a concrete effect (typically a URL to
/// open); never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u32);

impl ActionId {
    /// Create a new action ID.
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

/// One rendered line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    content: String,
    action: Option<ActionId>,
}

impl TextLine {
    /// A plain line with no action.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            action: None,
        }
    }

    /// A line carrying an action.
    #[must_use]
    pub fn actioned(content: impl Into<String>, action: ActionId) -> Self {
        Self {
            content: content.into(),
            action: Some(action),
        }
    }

    /// The line's text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The line's action, if any.
    #[must_use]
    pub fn action(&self) -> Option<ActionId> {
        self.action
    }
}

/// Errors raised while constructing a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// Line height must be positive for the line grid to resolve.
    ZeroLineHeight,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLineHeight => write!(f, "text block line height must be positive"),
        }
    }
}

impl std::error::Error for TextError {}

/// An ordered sequence of rendered lines on a fixed line-height grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<TextLine>,
    line_height: u16,
    origin: Point,
}

impl TextBlock {
    /// Create a block from lines and a line height.
    pub fn new(lines: Vec<TextLine>, line_height: u16) -> Result<Self, TextError> {
        if line_height == 0 {
            return Err(TextError::ZeroLineHeight);
        }
        Ok(Self {
            lines,
            line_height,
            origin: Point::ZERO,
        })
    }

    /// Create a block by splitting body text on newlines.
    ///
    /// `actions` attaches an action to each named line index; indexes past
    /// the last line are ignored.
    pub fn from_body(
        body: &str,
        line_height: u16,
        actions: &[(usize, ActionId)],
    ) -> Result<Self, TextError> {
        let mut lines: Vec<TextLine> = body.split('\n').map(TextLine::raw).collect();
        for &(index, action) in actions {
            if let Some(line) = lines.get_mut(index) {
                line.action = Some(action);
            }
        }
        Self::new(lines, line_height)
    }

    /// Offset of the first line's top-left corner within the pane.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// The block's origin offset.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Height of one line in pixels. Always positive.
    #[must_use]
    pub fn line_height(&self) -> u16 {
        self.line_height
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the block has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at an index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&TextLine> {
        self.lines.get(index)
    }

    /// Iterate all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.lines.iter()
    }

    /// Total rendered height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.lines.len() as u32 * self.line_height as u32
    }
}
