//! Diagnostic scanner for locating markup fragments in Vue SFC templates.
//!
//! One linear pass over a single component file: load it into memory,
//! isolate the `<template>` section, and report two excerpts — the
//! detail-panel span terminated by the settings modal comment, and the
//! text immediately preceding the `AISettingsModal` literal.
//!
//! # Architecture
//!
//! - [`document`]: loads the target file with a size limit and an explicit
//!   UTF-8 decode step
//! - [`extract`]: the two regex/substring operations, pure over `&str`
//! - [`report`]: runs both operations and renders the stdout text
//! - [`error`]: unified error type; only I/O and decoding failures are
//!   errors, extraction misses never are
//!
//! # Examples
//!
//! ```no_run
//! use template_scan::document::Document;
//! use template_scan::report;
//!
//! # fn example() -> template_scan::error::Result<()> {
//! let doc = Document::load("src/components/AnalysisPanel.vue")?;
//! print!("{}", report::scan(&doc).render());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod report;

// Re-export commonly used types
pub use document::Document;
pub use error::{Result, ScanError};
pub use report::{AnchorOutcome, ScanReport, scan};
