#![forbid(unsafe_code)]

//! Core primitives for panegrid.
//!
//! This crate provides the foundation types shared by the layout engine,
//! the text hit-tester, and the dialog shell:
//!
//! - [`geometry`] - pixel rectangles, sizes, margins, and pointer points
//! - [`event`] - canonical pointer events delivered by the host toolkit

pub mod event;
pub mod geometry;

pub use event::{Modifiers, PointerEvent, PointerKind};
pub use geometry::{Point, Rect, Sides, Size};
