#![forbid(unsafe_code)]

//! Text blocks and pointer hit-testing.
//!
//! This crate models a pane of rendered text lines and resolves pointer
//! positions to the actions attached to those lines:
//!
//! - [`TextBlock`] / [`TextLine`] - immutable rendered-line model
//! - [`ActionId`] - opaque identifier attached to a line
//! - [`TextMeasurer`] - the host's text-measurement collaborator interface
//! - [`DisplayWidthMeasurer`] - Unicode display-width based measurer
//! - [`WidthCache`] - LRU memoization over any measurer
//! - [`hit_test`] - pure coordinate-to-action resolution
//!
//! # Example
//!
//! ```
//! use panegrid_core::geometry::Point;
//! use panegrid_text::{hit_test, ActionId, DisplayWidthMeasurer, TextBlock, TextLine};
//!
//! let block = TextBlock::new(
//!     vec![
//!         TextLine::raw("panegrid 1.0"),
//!         TextLine::actioned("https://example.com", ActionId::new(1)),
//!     ],
//!     14,
//! )
//! .unwrap();
//!
//! let measurer = DisplayWidthMeasurer::new(8);
//! assert_eq!(
//!     hit_test(&block, Point::new(10, 15), &measurer),
//!     Some(ActionId::new(1)),
//! );
//! assert_eq!(hit_test(&block, Point::new(10, 3), &measurer), None);
//! ```

pub mod block;
pub mod hit;
pub mod measure;

pub use block::{ActionId, TextBlock, TextError, TextLine};
pub use hit::hit_test;
pub use measure::{DisplayWidthMeasurer, MeasureCacheStats, TextMeasurer, WidthCache};
