//! Markup fragment extraction via regex scanning.
//!
//! Two independent operations over the loaded document:
//!
//! - **Bounded-region search**: isolate the `<template>` section, then narrow
//!   to the detail-panel span that ends at the modal comment anchor.
//! - **Substring locate**: find the `AISettingsModal` literal and capture a
//!   fixed window of characters immediately before it.
//!
//! A miss on either operation is a normal outcome, never an error. This is
//! deliberately regex scraping, not a Vue parser; the markers are exact
//! literals from the component under investigation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal the substring locate operation searches for.
pub const ANCHOR: &str = "AISettingsModal";

/// Number of characters reported before the anchor.
pub const ANCHOR_WINDOW: usize = 200;

/// Context around an anchor hit: where it sits and what precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorContext<'a> {
    /// Byte offset of the anchor within the searched region.
    pub offset: usize,
    /// Up to [`ANCHOR_WINDOW`] characters immediately preceding the anchor,
    /// clamped to the start of the region.
    pub preceding: &'a str,
}

/// Returns the contents of the first `<template>...</template>` section.
///
/// The match spans newlines and is greedy, so the capture runs to the last
/// closing tag in the document. Returns `None` if no section is present.
pub fn template_section(text: &str) -> Option<&str> {
    static TEMPLATE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)<template>(.*)</template>").unwrap());

    TEMPLATE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the first detail-panel span ending at the settings modal comment.
///
/// The span starts at the `detail-panel` div, runs non-greedily through two
/// closing divs, and must terminate at the `<!-- AI 设置 Modal -->` comment;
/// if the comment never appears the search yields `None`.
pub fn detail_panel(template: &str) -> Option<&str> {
    static DETAIL_PANEL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"(?s)<div class="detail-panel">.*?</div>\s*</div>\s*<!-- AI 设置 Modal -->"#)
            .unwrap()
    });

    DETAIL_PANEL.find(template).map(|m| m.as_str())
}

/// Locates [`ANCHOR`] and captures the window of text preceding it.
///
/// Returns `None` when the anchor does not occur; the miss is reported by
/// the caller, not raised.
pub fn anchor_context(region: &str) -> Option<AnchorContext<'_>> {
    let offset = region.find(ANCHOR)?;
    Some(AnchorContext {
        offset,
        preceding: preceding_window(region, offset, ANCHOR_WINDOW),
    })
}

/// Returns up to `window` characters of `text` ending at byte offset `end`.
///
/// The window is counted in characters, not bytes, and clamped to the start
/// of the text. `end` must lie on a char boundary.
pub fn preceding_window(text: &str, end: usize, window: usize) -> &str {
    let prefix = &text[..end];
    if window == 0 {
        return "";
    }
    let start = prefix
        .char_indices()
        .rev()
        .nth(window - 1)
        .map_or(0, |(i, _)| i);
    &prefix[start..]
}
