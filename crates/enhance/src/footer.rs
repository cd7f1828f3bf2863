// ABOUTME: Footer pass: stamps the copyright year range and a build timestamp.
// ABOUTME: Formatting is pure over a supplied DateTime; the pipeline passes Local::now().

use chrono::{DateTime, Datelike, Local};
use scraper::{Html, Selector};

use crate::dom::{escape_text, Rewrites};
use crate::error::EnhanceError;
use crate::options::FooterOptions;
use crate::report::EnhanceReport;

/// The copyright range, e.g. `"2017 - 2026 "`.
///
/// The trailing space comes from the theme, which appended an icon after it.
pub fn copyright_line(since_year: i32, year: i32) -> String {
    format!("{} - {} ", since_year, year)
}

/// The footer clock, e.g. `"2026-08-27 14:03:05"`.
pub fn clock_line(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Runs the footer pass over a parsed document.
///
/// Replaces the inner content of the first copyright and clock targets.
/// Missing targets are skipped.
pub(crate) fn apply(
    doc: &Html,
    opts: &FooterOptions,
    now: DateTime<Local>,
    rewrites: &mut Rewrites,
    report: &mut EnhanceReport,
) -> Result<(), EnhanceError> {
    let copyright_selector = Selector::parse(&opts.copyright_selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.copyright_selector))?;
    let clock_selector = Selector::parse(&opts.clock_selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.clock_selector))?;

    if let Some(target) = doc.select(&copyright_selector).next() {
        let line = copyright_line(opts.since_year, now.year());
        rewrites.set_inner_html(target.id(), escape_text(&line));
        report.copyright_stamped = true;
    }

    if let Some(target) = doc.select(&clock_selector).next() {
        rewrites.set_inner_html(target.id(), escape_text(&clock_line(now)));
        report.clock_stamped = true;
    }

    Ok(())
}
