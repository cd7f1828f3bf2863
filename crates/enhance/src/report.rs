// ABOUTME: EnhanceReport counts what each pass changed; Enhanced pairs it with the output HTML.
// ABOUTME: The report serializes to JSON for the CLI's --json envelope.

use serde::{Deserialize, Serialize};

/// What the enhancement pipeline changed on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceReport {
    /// Tag-cloud elements that received style declarations.
    pub tags_styled: usize,
    /// Entries rendered into the table of contents.
    pub contents_entries: usize,
    /// Copy buttons inserted before code blocks.
    pub copy_buttons: usize,
    /// Plain console blocks restyled.
    pub consoles_restyled: usize,
    pub copyright_stamped: bool,
    pub clock_stamped: bool,
}

/// The outcome of enhancing one page.
#[derive(Debug, Clone)]
pub struct Enhanced {
    /// The serialized page with all rewrites applied. When no pass recorded
    /// a rewrite this is the input, byte for byte.
    pub html: String,
    pub report: EnhanceReport,
}
