//! Scan orchestration and human-readable reporting.
//!
//! [`scan`] runs both extractor operations over a loaded document and
//! collects the outcome into a [`ScanReport`]; [`ScanReport::render`] turns
//! it into the text the binary writes to stdout. Rendering is separate from
//! scanning so it can be asserted on without capturing stdout.

use crate::document::Document;
use crate::extract::{self, ANCHOR, ANCHOR_WINDOW};
use std::fmt::Write as _;

/// Outcome of scanning one document.
///
/// Every field is optional: a miss on any step is a normal result, and the
/// report simply has less to say.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Matched detail-panel span, through the modal comment anchor.
    pub detail_panel: Option<String>,
    /// Outcome of the anchor lookup; `None` when the template section
    /// itself was missing and the step never ran.
    pub anchor: Option<AnchorOutcome>,
}

/// Result of the substring locate step, only meaningful when the template
/// section exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Anchor found at `offset` (bytes into the template section), with the
    /// preceding character window.
    Found { offset: usize, preceding: String },
    /// Anchor literal does not occur in the template section.
    NotFound,
}

/// Runs both extractor operations over the document.
///
/// The anchor lookup is scoped to the template section, matching the
/// fragment being hunted; when the document has no template section at all,
/// both steps are skipped.
pub fn scan(doc: &Document) -> ScanReport {
    let Some(section) = extract::template_section(doc.text()) else {
        tracing::debug!("No <template> section in {:?}", doc.path());
        return ScanReport::default();
    };

    let detail_panel = extract::detail_panel(section).map(str::to_owned);
    if detail_panel.is_none() {
        tracing::debug!("No detail-panel span in {:?}", doc.path());
    }

    let anchor = Some(match extract::anchor_context(section) {
        Some(ctx) => AnchorOutcome::Found {
            offset: ctx.offset,
            preceding: ctx.preceding.to_owned(),
        },
        None => AnchorOutcome::NotFound,
    });

    ScanReport {
        detail_panel,
        anchor,
    }
}

impl ScanReport {
    /// Renders the report as the human-readable text printed to stdout.
    ///
    /// A missing detail-panel span produces no output for that step; a
    /// missing anchor is reported as not found.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(span) = &self.detail_panel {
            writeln!(out, "Found detail-panel section ending:").unwrap();
            writeln!(out, "{}", span).unwrap();
        }

        match &self.anchor {
            Some(AnchorOutcome::Found { preceding, .. }) => {
                writeln!(out, "\n{} chars before {}:", ANCHOR_WINDOW, ANCHOR).unwrap();
                writeln!(out, "{}", preceding).unwrap();
            }
            Some(AnchorOutcome::NotFound) => {
                writeln!(out, "\n{} not found in template section", ANCHOR).unwrap();
            }
            None => {}
        }

        out
    }
}
