#![forbid(unsafe_code)]

//! Ready-made About dialog.
//!
//! Assembles the standard plugin About dialog: logo top-left, body text
//! with clickable product and author URLs, copyright and host lines, and a
//! default OK button anchored bottom-right. The caller supplies the host
//! collaborators and gets back a [`Dialog`] to show modally.

use tracing::debug;

use panegrid_layout::Sides;
use panegrid_text::{ActionId, TextBlock, TextLine, TextMeasurer};

use crate::dialog::{Dialog, DialogError, DEFAULT_LINE_HEIGHT};
use crate::host::{HostInfo, ResourceLoader};
use crate::ActionRegistry;

/// Name of the logo resource in the host bundle.
const LOGO_RESOURCE: &str = "logo.png";

/// Margin around the dialog content, in pixels.
const ABOUT_MARGIN: u16 = 8;

/// Body line index of the product URL.
pub const PRODUCT_URL_LINE: usize = 1;

/// Body line index of the author URL.
pub const AUTHOR_URL_LINE: usize = 4;

/// Static display facts about the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    /// Product name, e.g. `"Scriptographer"`.
    pub product: String,
    /// Product homepage; clicking its line opens this URL.
    pub product_url: String,
    /// Author display name.
    pub author: String,
    /// Author homepage; clicking its line opens this URL.
    pub author_url: String,
    /// First year of the copyright range.
    pub copyright_from: u16,
    /// Last year of the copyright range.
    pub copyright_to: u16,
}

impl AboutInfo {
    fn copyright_line(&self) -> String {
        format!(
            "\u{a9} {}-{} {}",
            self.copyright_from, self.copyright_to, self.author
        )
    }
}

/// Zero-pad a revision string to at least three digits for display.
fn padded_revision(revision: &str) -> String {
    format!("{revision:0>3}")
}

/// Build the About dialog for a plugin.
///
/// The text pane's clickable lines are the product URL
/// ([`PRODUCT_URL_LINE`]) and the author URL ([`AUTHOR_URL_LINE`]); both
/// resolve through the returned dialog's action registry. The logo is
/// loaded from the host bundle and simply omitted when missing.
pub fn about_dialog(
    info: &AboutInfo,
    host: &impl HostInfo,
    loader: &impl ResourceLoader,
    measurer: impl TextMeasurer + 'static,
) -> Result<Dialog, DialogError> {
    let mut actions = ActionRegistry::new();
    let product_action = actions.register(&info.product_url);
    let author_action = actions.register(&info.author_url);

    let line_height = measurer.line_height().unwrap_or(DEFAULT_LINE_HEIGHT).max(1);
    let block = about_block(info, host, line_height, product_action, author_action)?;

    let title = format!("About {}", info.product);
    let mut builder = Dialog::builder(title, block)
        .margin(Sides::all(ABOUT_MARGIN))
        .actions(actions)
        .measurer(measurer);

    match loader.load_image(LOGO_RESOURCE) {
        Some(handle) => builder = builder.image(handle),
        None => debug!(resource = LOGO_RESOURCE, "logo missing, omitting image pane"),
    }

    builder.build()
}

fn about_block(
    info: &AboutInfo,
    host: &impl HostInfo,
    line_height: u16,
    product_action: ActionId,
    author_action: ActionId,
) -> Result<TextBlock, DialogError> {
    let mut lines = vec![
        TextLine::raw(format!(
            "{} {}.{}",
            info.product,
            host.version(),
            padded_revision(&host.revision())
        )),
        TextLine::actioned(&info.product_url, product_action),
        TextLine::raw(""),
        TextLine::raw(info.copyright_line()),
        TextLine::actioned(&info.author_url, author_action),
        TextLine::raw(""),
        TextLine::raw("All rights reserved."),
        TextLine::raw(""),
        TextLine::raw(host.host_line()),
    ];
    if let Some(runtime) = host.runtime_line() {
        lines.push(TextLine::raw(runtime));
    }
    Ok(TextBlock::new(lines, line_height)?)
}
