// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between. The reader fully replaces the
/// page; the page's scroll and animation state stays put underneath and is
/// restored when the reader closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The single scrollable portfolio page.
    Page,
    /// Full-post blog reader for the post at this index.
    Reader(usize),
}
