// ABOUTME: The tag-cloud weighting engine: weight-to-style interpolation plus the DOM pass.
// ABOUTME: compute_styles is the pure core; apply records inline-style rewrites for matching elements.

//! Tag-cloud weighting.
//!
//! Each tagged element carries a numeric weight attribute. The engine maps
//! every weight linearly from the observed weight range into the configured
//! font-size and color ranges, independently per dimension:
//!
//! - `font-size = size.start + (weight - lowest) * (size.end - size.start) / range`
//! - each color channel interpolates the same way, rounded and clamped to
//!   `[0, 255]`, then re-encoded as `#rrggbb`
//!
//! With all weights equal (or a single element) the range collapses: every
//! increment is zero and every element receives the `start` values. The
//! computation is a pure function of the weight sequence and configuration;
//! output order always matches input order.

pub mod color;

use scraper::{Html, Selector};

use crate::dom::Rewrites;
use crate::error::EnhanceError;
use crate::options::{ColorRange, SizeRange, TagCloudOptions};
use crate::report::EnhanceReport;
use color::{channel_increments, Rgb};

/// Computed style values for one tagged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStyle {
    /// Formatted font size, e.g. `"22.5px"`. The number keeps full float
    /// precision; only color channels are rounded.
    pub font_size: Option<String>,
    /// Interpolated color as `#rrggbb`.
    pub color: Option<String>,
}

/// Maps a weight sequence into per-element styles.
///
/// Returns one `TagStyle` per input weight, in input order. An empty weight
/// sequence is a no-op and yields an empty vector without validating the
/// color configuration. With at least one weight, the configured colors are
/// decoded before any style is produced, so a malformed color fails the
/// whole computation up-front.
pub fn compute_styles(
    weights: &[f64],
    size: Option<&SizeRange>,
    color: Option<&ColorRange>,
) -> Result<Vec<TagStyle>, EnhanceError> {
    if weights.is_empty() {
        return Ok(Vec::new());
    }

    let mut sorted = weights.to_vec();
    sorted.sort_by(f64::total_cmp);
    let lowest = sorted[0];
    let highest = sorted[sorted.len() - 1];
    let range = highest - lowest;

    let font_incr = size.map(|s| {
        if range > 0.0 {
            (s.end - s.start) / range
        } else {
            0.0
        }
    });

    let color_base = match color {
        Some(c) => {
            let start = Rgb::parse(&c.start)?;
            let end = Rgb::parse(&c.end)?;
            Some((start, channel_increments(start, end, range)))
        }
        None => None,
    };

    let styles = weights
        .iter()
        .map(|weight| {
            let weighting = weight - lowest;
            let font_size = size.zip(font_incr).map(|(s, incr)| {
                format!("{}{}", s.start + weighting * incr, s.unit)
            });
            let color = color_base
                .map(|(start, incr)| start.blend(incr, weighting).to_hex());
            TagStyle { font_size, color }
        })
        .collect();

    Ok(styles)
}

/// Runs the tag-cloud pass over a parsed document.
///
/// Elements matching the configured selector contribute their weight in
/// document order; elements with a missing or non-numeric weight attribute
/// are skipped. Computed declarations are merged into each element's inline
/// style at serialization time.
pub(crate) fn apply(
    doc: &Html,
    opts: &TagCloudOptions,
    rewrites: &mut Rewrites,
    report: &mut EnhanceReport,
) -> Result<(), EnhanceError> {
    let selector = Selector::parse(&opts.selector)
        .map_err(|_| EnhanceError::invalid_selector(&opts.selector))?;

    let mut ids = Vec::new();
    let mut weights = Vec::new();
    for element in doc.select(&selector) {
        if let Some(weight) = element
            .value()
            .attr(&opts.weight_attr)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        {
            ids.push(element.id());
            weights.push(weight);
        }
    }

    let styles = compute_styles(&weights, opts.size.as_ref(), opts.color.as_ref())?;

    for (id, style) in ids.iter().zip(&styles) {
        let mut decls = String::new();
        if let Some(ref font_size) = style.font_size {
            decls.push_str("font-size: ");
            decls.push_str(font_size);
        }
        if let Some(ref color) = style.color {
            if !decls.is_empty() {
                decls.push_str("; ");
            }
            decls.push_str("color: ");
            decls.push_str(color);
        }
        if !decls.is_empty() {
            rewrites.merge_style(*id, &decls);
            report.tags_styled += 1;
        }
    }

    Ok(())
}
