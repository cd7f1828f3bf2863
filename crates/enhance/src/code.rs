// ABOUTME: Code-block pass: injects a copy button into highlighted figures.
// ABOUTME: Plain-text console blocks get the dark inline restyle instead of a button.

use scraper::{Html, Selector};

use crate::dom::{escape_attr, escape_text, Rewrites};
use crate::error::EnhanceError;
use crate::options::CodeOptions;
use crate::report::EnhanceReport;

/// Inline declarations for plain console blocks.
const CONSOLE_STYLE: &str = "background-color: #000; border-color: #000; color: #aaa";

/// Builds the copy-button block inserted before a figure's `pre`.
fn copy_button_html(opts: &CodeOptions) -> String {
    format!(
        "<div class=\"copy-btn\"><a href=\"#/\"><img class=\"copy-img\" src=\"{}\">{}</a></div>",
        escape_attr(&opts.copy_icon),
        escape_text(&opts.copy_label),
    )
}

/// Runs the code-block pass over a parsed document.
///
/// For each figure matching the configured selector that contains a
/// `pre > code` descendant: a `data-lang` equal to the plain language tag
/// gets the console restyle on the figure; anything else (including a
/// missing `data-lang`) gets a copy button inserted before the figure's
/// first `pre`. Figures without `pre > code` are left alone.
pub(crate) fn apply(
    doc: &Html,
    opts: &CodeOptions,
    rewrites: &mut Rewrites,
    report: &mut EnhanceReport,
) -> Result<(), EnhanceError> {
    let figure_selector = Selector::parse(&opts.figure_selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.figure_selector))?;
    let code_selector = Selector::parse("pre > code")
        .map_err(|_| EnhanceError::invalid_selector("pre > code"))?;
    let pre_selector =
        Selector::parse("pre").map_err(|_| EnhanceError::invalid_selector("pre"))?;

    let button = copy_button_html(opts);

    for figure in doc.select(&figure_selector) {
        let code = match figure.select(&code_selector).next() {
            Some(code) => code,
            None => continue,
        };

        if code.value().attr("data-lang") == Some(opts.plain_lang.as_str()) {
            rewrites.merge_style(figure.id(), CONSOLE_STYLE);
            report.consoles_restyled += 1;
        } else if let Some(pre) = figure.select(&pre_selector).next() {
            rewrites.insert_before(pre.id(), button.clone());
            report.copy_buttons += 1;
        }
    }

    Ok(())
}
