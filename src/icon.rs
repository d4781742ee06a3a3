// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The brand SVG is embedded at compile time and rasterized once at startup
//! for the window title bar. Any failure degrades to the platform's default
//! icon; an icon must never block the window from opening.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Side length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to an RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "embedded icon SVG failed to parse");
            return None;
        }
    };

    // Uniform scale keeps the artwork's aspect ratio inside the square.
    let size = tree.size();
    let scale = (ICON_SIZE as f32 / size.width()).min(ICON_SIZE as f32 / size.height());
    let transform = tiny_skia::Transform::from_scale(scale, scale);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
