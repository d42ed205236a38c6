#![forbid(unsafe_code)]

//! The dialog shell.
//!
//! A [`Dialog`] owns one grid, one text block, one default button, and at
//! most one image pane. Showing it resolves the layout once for the current
//! container size; pointer clicks are dispatched to the topmost pane under
//! the pointer, and clicks inside the text pane run the line hit-tester.
//!
//! Nothing here retries or propagates use-time failures: a click that
//! resolves no action is inert, and a layout defect degrades to an inert
//! dialog rather than tearing down the modal session.

use std::collections::BTreeMap;
use std::fmt;

use panegrid_core::event::PointerEvent;
use panegrid_core::geometry::{Sides, Size};
use panegrid_layout::{
    Align, CellSpan, Grid, GridSpec, LayoutError, PaneId, ResolvedLayout, TrackSize,
};
use panegrid_text::{hit_test, ActionId, DisplayWidthMeasurer, TextBlock, TextError, TextMeasurer};
use tracing::{debug, trace, warn};

use crate::actions::ActionRegistry;
use crate::host::{ImageHandle, Launcher};

/// Pane id of the image pane.
pub const IMAGE_PANE: PaneId = PaneId::new(1);
/// Pane id of the text pane.
pub const TEXT_PANE: PaneId = PaneId::new(2);
/// Pane id of the default button.
pub const BUTTON_PANE: PaneId = PaneId::new(3);

/// Horizontal padding added around the button label.
const BUTTON_PAD_X: u16 = 16;
/// Vertical padding added around the button label.
const BUTTON_PAD_Y: u16 = 10;
/// Line height used when the measurer reports none.
pub const DEFAULT_LINE_HEIGHT: u16 = 14;

/// Errors raised while assembling a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    /// Grid configuration or placement failed.
    Layout(LayoutError),
    /// Text block construction failed.
    Text(TextError),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
            Self::Text(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DialogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Text(err) => Some(err),
        }
    }
}

impl From<LayoutError> for DialogError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<TextError> for DialogError {
    fn from(err: TextError) -> Self {
        Self::Text(err)
    }
}

/// Outcome of delivering an event to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// The event resolved to nothing; the dialog stays open.
    Ignored,
    /// A text action was resolved and handed to the launcher.
    Launched(ActionId),
    /// The modal session ended; control returns to the caller.
    Closed,
}

/// A modal dialog instance.
///
/// Owns its resolved layout and text block exclusively; instances share no
/// state. Modality itself is the host's concern.
pub struct Dialog {
    title: String,
    grid: Grid,
    measured: BTreeMap<PaneId, Size>,
    layout: Option<ResolvedLayout>,
    block: TextBlock,
    button_label: String,
    image: Option<ImageHandle>,
    actions: ActionRegistry,
    measurer: Box<dyn TextMeasurer>,
    open: bool,
}

impl fmt::Debug for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialog")
            .field("title", &self.title)
            .field("open", &self.open)
            .field("resolved", &self.layout.is_some())
            .finish_non_exhaustive()
    }
}

impl Dialog {
    /// Start building a dialog around a text block.
    #[must_use]
    pub fn builder(title: impl Into<String>, block: TextBlock) -> DialogBuilder {
        DialogBuilder::new(title, block)
    }

    /// The dialog title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the modal session is active.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The text block shown in the text pane.
    #[must_use]
    pub fn text_block(&self) -> &TextBlock {
        &self.block
    }

    /// The default button's label.
    #[must_use]
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    /// The logo image, if one was loaded.
    #[must_use]
    pub fn image(&self) -> Option<ImageHandle> {
        self.image
    }

    /// The registered actions.
    #[must_use]
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// The current resolved layout, if the dialog has been shown.
    #[must_use]
    pub fn layout(&self) -> Option<&ResolvedLayout> {
        self.layout.as_ref()
    }

    /// Show the dialog: resolve the layout for the container size and open
    /// the modal session.
    pub fn show(&mut self, container: Size) -> Result<(), LayoutError> {
        let layout = self.grid.resolve(container, &self.measured)?;
        debug!(
            title = %self.title,
            width = container.width,
            height = container.height,
            panes = layout.len(),
            "dialog shown"
        );
        self.layout = Some(layout);
        self.open = true;
        Ok(())
    }

    /// Re-resolve the layout after a container resize.
    pub fn resize(&mut self, container: Size) -> Result<(), LayoutError> {
        let layout = self.grid.resolve(container, &self.measured)?;
        trace!(width = container.width, height = container.height, "dialog resized");
        self.layout = Some(layout);
        Ok(())
    }

    /// Deliver a pointer event.
    ///
    /// Only click events inside the text pane reach the hit-tester; clicks
    /// on the default button close the dialog. Everything else is inert.
    pub fn pointer(&mut self, event: &PointerEvent, launcher: &impl Launcher) -> DialogResponse {
        if !self.open || !event.is_click() {
            return DialogResponse::Ignored;
        }
        let Some(layout) = &self.layout else {
            return DialogResponse::Ignored;
        };

        match layout.pane_at(event.point) {
            Some(TEXT_PANE) => {
                let Some(rect) = layout.get(TEXT_PANE) else {
                    return DialogResponse::Ignored;
                };
                let local = rect.to_local(event.point);
                let Some(action) = hit_test(&self.block, local, &self.measurer.as_ref()) else {
                    trace!(x = local.x, y = local.y, "text click resolved no action");
                    return DialogResponse::Ignored;
                };
                let Some(url) = self.actions.url(action) else {
                    warn!(action = action.get(), "action carries no registered url");
                    return DialogResponse::Ignored;
                };
                debug!(action = action.get(), url, "launching action");
                launcher.open_resource(url);
                DialogResponse::Launched(action)
            }
            Some(BUTTON_PANE) => self.close(),
            _ => DialogResponse::Ignored,
        }
    }

    /// Activate the default button (keyboard or host affordance).
    pub fn activate_default(&mut self) -> DialogResponse {
        self.close()
    }

    /// End the modal session.
    pub fn close(&mut self) -> DialogResponse {
        if self.open {
            debug!(title = %self.title, "dialog closed");
            self.open = false;
        }
        DialogResponse::Closed
    }
}

/// Builder for [`Dialog`].
///
/// Defaults mirror the classic About layout: a `[Preferred, Fill,
/// Preferred]` grid on both axes, the image leading in the top-left cell,
/// the text spanning the remaining columns of the top row, and the default
/// button trailing in the bottom-right cell.
pub struct DialogBuilder {
    title: String,
    block: TextBlock,
    rows: Vec<TrackSize>,
    cols: Vec<TrackSize>,
    margin: Sides,
    strict_fill: bool,
    text_span: CellSpan,
    button_label: String,
    button_span: CellSpan,
    image: Option<(ImageHandle, CellSpan)>,
    actions: ActionRegistry,
    measurer: Box<dyn TextMeasurer>,
}

impl DialogBuilder {
    /// Create a builder with the default About-style configuration.
    #[must_use]
    pub fn new(title: impl Into<String>, block: TextBlock) -> Self {
        Self {
            title: title.into(),
            block,
            rows: vec![TrackSize::Preferred, TrackSize::Fill, TrackSize::Preferred],
            cols: vec![TrackSize::Preferred, TrackSize::Fill, TrackSize::Preferred],
            margin: Sides::default(),
            strict_fill: false,
            text_span: CellSpan::at(0, 1)
                .spanning(1, 2)
                .aligned(Align::Fill, Align::Fill),
            button_label: "  OK  ".to_string(),
            button_span: CellSpan::at(2, 2).aligned(Align::Trailing, Align::Trailing),
            image: None,
            actions: ActionRegistry::new(),
            measurer: Box::new(DisplayWidthMeasurer::new(7)),
        }
    }

    /// Replace the grid's row tracks.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = TrackSize>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Replace the grid's column tracks.
    #[must_use]
    pub fn cols(mut self, cols: impl IntoIterator<Item = TrackSize>) -> Self {
        self.cols = cols.into_iter().collect();
        self
    }

    /// Set the container-edge margin.
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Require a Fill track per axis at resolve time.
    #[must_use]
    pub fn strict_fill(mut self, strict: bool) -> Self {
        self.strict_fill = strict;
        self
    }

    /// Set the text pane's placement.
    #[must_use]
    pub fn text_span(mut self, span: CellSpan) -> Self {
        self.text_span = span;
        self
    }

    /// Set the default button's label.
    #[must_use]
    pub fn button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    /// Set the default button's placement.
    #[must_use]
    pub fn button_span(mut self, span: CellSpan) -> Self {
        self.button_span = span;
        self
    }

    /// Add an image pane at the default top-left placement.
    #[must_use]
    pub fn image(self, handle: ImageHandle) -> Self {
        let span = CellSpan::at(0, 0).aligned(Align::Leading, Align::Leading);
        self.image_at(handle, span)
    }

    /// Add an image pane with an explicit placement.
    #[must_use]
    pub fn image_at(mut self, handle: ImageHandle, span: CellSpan) -> Self {
        self.image = Some((handle, span));
        self
    }

    /// Attach the action registry resolving the block's action ids.
    #[must_use]
    pub fn actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    /// Replace the text-measurement collaborator.
    #[must_use]
    pub fn measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Assemble the dialog, validating the grid and all placements.
    pub fn build(self) -> Result<Dialog, DialogError> {
        let spec = GridSpec::new(self.rows, self.cols)?;
        let mut grid = Grid::new(spec)
            .margin(self.margin)
            .strict_fill(self.strict_fill);

        let mut measured = BTreeMap::new();

        if let Some((handle, span)) = self.image {
            grid.place(IMAGE_PANE, span)?;
            measured.insert(IMAGE_PANE, handle.size());
        }

        grid.place(TEXT_PANE, self.text_span)?;
        measured.insert(
            TEXT_PANE,
            block_preferred(&self.block, self.measurer.as_ref()),
        );

        // Placed last so the default button stays clickable over overlaps.
        grid.place(BUTTON_PANE, self.button_span)?;
        measured.insert(
            BUTTON_PANE,
            button_preferred(&self.button_label, &self.block, self.measurer.as_ref()),
        );

        Ok(Dialog {
            title: self.title,
            grid,
            measured,
            layout: None,
            block: self.block,
            button_label: self.button_label,
            image: self.image.map(|(handle, _)| handle),
            actions: self.actions,
            measurer: self.measurer,
            open: false,
        })
    }
}

/// Preferred size of the text pane: widest measured line by total height.
fn block_preferred(block: &TextBlock, measurer: &dyn TextMeasurer) -> Size {
    let width = block
        .lines()
        .filter_map(|line| measurer.measure_width(line.content()))
        .max()
        .unwrap_or(0);
    let height = block.height().min(u16::MAX as u32) as u16;
    Size::new(width, height)
}

/// Preferred size of the default button: measured label plus padding.
fn button_preferred(label: &str, block: &TextBlock, measurer: &dyn TextMeasurer) -> Size {
    let width = measurer
        .measure_width(label)
        .unwrap_or(0)
        .saturating_add(BUTTON_PAD_X);
    let height = block.line_height().saturating_add(BUTTON_PAD_Y);
    Size::new(width, height)
}
