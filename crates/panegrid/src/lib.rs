#![forbid(unsafe_code)]

//! Panegrid public facade crate.
//!
//! Re-exports the stable surface of the workspace crates and offers a
//! lightweight prelude for composing pane grids, hit-testable text panes,
//! and modal dialogs.
//!
//! # Example
//!
//! ```
//! use panegrid::prelude::*;
//!
//! let block = TextBlock::new(
//!     vec![TextLine::raw("hello")],
//!     14,
//! )
//! .unwrap();
//! let mut dialog = Dialog::builder("About Hello", block).build().unwrap();
//! dialog.show(Size::new(300, 200)).unwrap();
//! assert!(dialog.is_open());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use panegrid_core::event::{Modifiers, PointerEvent, PointerKind};
pub use panegrid_core::geometry::{Point, Rect, Sides, Size};

// --- Layout re-exports -----------------------------------------------------

pub use panegrid_layout::{
    Align, Axis, CellSpan, Grid, GridSpec, LayoutError, PaneId, ResolvedLayout, TrackSize,
};

// --- Text re-exports -------------------------------------------------------

pub use panegrid_text::{
    hit_test, ActionId, DisplayWidthMeasurer, MeasureCacheStats, TextBlock, TextError, TextLine,
    TextMeasurer, WidthCache,
};

// --- Dialog re-exports -----------------------------------------------------

pub use panegrid_dialog::{
    about_dialog, AboutInfo, ActionRegistry, Dialog, DialogBuilder, DialogError, DialogResponse,
    HostInfo, ImageHandle, Launcher, ResourceLoader,
};

/// Commonly used types for day-to-day usage.
pub mod prelude {
    pub use crate::{
        about_dialog, hit_test, AboutInfo, ActionId, Align, CellSpan, Dialog, DialogResponse,
        DisplayWidthMeasurer, Grid, GridSpec, HostInfo, ImageHandle, Launcher, PaneId, Point,
        PointerEvent, PointerKind, Rect, ResourceLoader, Sides, Size, TextBlock, TextLine,
        TextMeasurer, TrackSize,
    };
}
