#![forbid(unsafe_code)]

//! Collaborator interfaces implemented by the plugin host.
//!
//! The dialog shell consumes these seams but never implements them: window
//! chrome, modality, image decoding, and process launch all live on the
//! host side. Every interface is synchronous and fire-and-forget from the
//! shell's point of view.

use panegrid_core::geometry::Size;

/// Opaque handle to a host-loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle {
    id: u64,
    size: Size,
}

impl ImageHandle {
    /// Create a handle from a host-side id and the image's pixel size.
    #[must_use]
    pub const fn new(id: u64, size: Size) -> Self {
        Self { id, size }
    }

    /// The host-side identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The image's pixel size, used as the pane's preferred size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

/// Launches external resources (URLs) on behalf of the dialog.
///
/// Fire-and-forget: the shell observes no result.
pub trait Launcher {
    /// Open an external resource, typically in the system browser.
    fn open_resource(&self, url: &str);
}

/// Loads named images from the host's resource bundle.
pub trait ResourceLoader {
    /// Load an image by name; `None` when the resource is missing.
    fn load_image(&self, name: &str) -> Option<ImageHandle>;
}

/// Display metadata about the host application and plugin.
///
/// All values are display text; the shell never parses them (zero-padding
/// the revision for display is string formatting, not parsing).
pub trait HostInfo {
    /// The plugin's version string, e.g. `"2.0"`.
    fn version(&self) -> String;

    /// The plugin's revision string, e.g. `"30"`.
    fn revision(&self) -> String;

    /// A display line describing the host application and its version.
    fn host_line(&self) -> String;

    /// A display line describing the runtime, if any.
    fn runtime_line(&self) -> Option<String> {
        None
    }
}
