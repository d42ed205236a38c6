#![forbid(unsafe_code)]

//! Modal dialog shell.
//!
//! Composes the layout engine and the text hit-tester into a dialog that a
//! plugin host can show modally:
//!
//! - [`ActionRegistry`] - URL table behind opaque action IDs
//! - [`host`] - collaborator interfaces the host toolkit implements
//! - [`Dialog`] / [`DialogBuilder`] - the shell itself
//! - [`about`] - ready-made About dialog factory
//!
//! The shell owns one resolved layout and one text block per instance and
//! shares nothing across instances. Layout and hit-testing are synchronous;
//! a click either launches an action or does nothing.

pub mod about;
pub mod actions;
pub mod dialog;
pub mod host;

pub use about::{about_dialog, AboutInfo};
pub use actions::ActionRegistry;
pub use dialog::{
    Dialog, DialogBuilder, DialogError, DialogResponse, BUTTON_PANE, DEFAULT_LINE_HEIGHT,
    IMAGE_PANE, TEXT_PANE,
};
pub use host::{HostInfo, ImageHandle, Launcher, ResourceLoader};
