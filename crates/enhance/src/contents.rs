// ABOUTME: Table-of-contents pass: enumerates h2/h3 headings and renders a numbered list.
// ABOUTME: h2 advances the major counter and resets the minor; h3 advances the minor.

use scraper::{Html, Selector};

use crate::dom::{escape_attr, escape_text, Rewrites};
use crate::error::EnhanceError;
use crate::options::ContentsOptions;
use crate::report::EnhanceReport;

/// A heading collected from the page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 or 3.
    pub level: u8,
    /// The heading's `id` attribute; empty when absent, producing a `#` link.
    pub id: String,
    pub text: String,
}

/// A numbered table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub id: String,
    /// `"1."` for level 2, `"1.2."` for level 3.
    pub prefix: String,
    pub text: String,
}

/// Assigns section numbers to headings.
///
/// Level-2 headings increment the major counter and reset the minor one;
/// level-3 headings increment the minor counter. A leading h3 before any h2
/// numbers from major 0, as the theme did.
pub fn number_headings(headings: &[Heading]) -> Vec<TocEntry> {
    let mut major = 0u32;
    let mut minor = 0u32;
    headings
        .iter()
        .map(|heading| {
            if heading.level == 2 {
                major += 1;
                minor = 0;
            } else {
                minor += 1;
            }
            let prefix = if minor > 0 {
                format!("{}.{}.", major, minor)
            } else {
                format!("{}.", major)
            };
            TocEntry {
                level: heading.level,
                id: heading.id.clone(),
                prefix,
                text: heading.text.clone(),
            }
        })
        .collect()
}

/// Renders the contents block: a title paragraph followed by the entry list.
pub fn render_contents(title: &str, entries: &[TocEntry]) -> String {
    let mut html = String::new();
    html.push_str("<p class=\"contents-title\">");
    html.push_str(&escape_text(title));
    html.push_str("</p><ul>");
    for entry in entries {
        html.push_str(&format!(
            "<li class=\"contents-level-{}\"><a href=\"#{}\">{}{}</a></li>",
            entry.level,
            escape_attr(&entry.id),
            entry.prefix,
            escape_text(&entry.text),
        ));
    }
    html.push_str("</ul>");
    html
}

/// Runs the table-of-contents pass over a parsed document.
///
/// The rendered block replaces the inner content of the first element
/// matching the target selector. Without a target the pass is a no-op; with
/// a target but no headings the block still renders with an empty list, as
/// the theme did.
pub(crate) fn apply(
    doc: &Html,
    opts: &ContentsOptions,
    rewrites: &mut Rewrites,
    report: &mut EnhanceReport,
) -> Result<(), EnhanceError> {
    let target_selector = Selector::parse(&opts.target_selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.target_selector))?;
    let heading_selector = Selector::parse(&opts.heading_selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.heading_selector))?;

    let target = match doc.select(&target_selector).next() {
        Some(element) => element,
        None => return Ok(()),
    };

    let mut headings = Vec::new();
    for element in doc.select(&heading_selector) {
        let level = match element.value().name() {
            "h2" => 2,
            "h3" => 3,
            _ => continue,
        };
        headings.push(Heading {
            level,
            id: element.value().attr("id").unwrap_or_default().to_string(),
            text: element.text().collect::<String>().trim().to_string(),
        });
    }

    let entries = number_headings(&headings);
    report.contents_entries = entries.len();
    rewrites.set_inner_html(target.id(), render_contents(&opts.title, &entries));
    Ok(())
}
