// ABOUTME: The Enhancer pipeline: parse once, run the enabled passes, serialize once.
// ABOUTME: Passes record rewrites against the immutable tree; errors surface before serialization.

use chrono::Local;
use scraper::Html;

use crate::dom::{self, Rewrites};
use crate::error::EnhanceError;
use crate::options::{EnhancerBuilder, Options};
use crate::report::{Enhanced, EnhanceReport};
use crate::{code, contents, footer, tagcloud};

/// Applies the configured enhancement passes to rendered HTML pages.
#[derive(Debug, Clone)]
pub struct Enhancer {
    opts: Options,
}

impl Enhancer {
    /// Create an Enhancer from options. Prefer [`Enhancer::builder`].
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Create an EnhancerBuilder for configuring a new Enhancer.
    pub fn builder() -> EnhancerBuilder {
        EnhancerBuilder::new()
    }

    /// The options this Enhancer runs with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Enhance one page.
    ///
    /// The whole run is a single synchronous step: the page is parsed once,
    /// every enabled pass computes its rewrites against the immutable tree,
    /// and one serialization emits the result. Configuration errors surface
    /// before anything is serialized. A page where no pass found anything to
    /// do passes through unchanged.
    pub fn enhance(&self, html: &str) -> Result<Enhanced, EnhanceError> {
        let doc = Html::parse_document(html);
        let mut rewrites = Rewrites::default();
        let mut report = EnhanceReport::default();

        if let Some(ref opts) = self.opts.tag_cloud {
            tagcloud::apply(&doc, opts, &mut rewrites, &mut report)?;
        }
        if let Some(ref opts) = self.opts.contents {
            contents::apply(&doc, opts, &mut rewrites, &mut report)?;
        }
        if let Some(ref opts) = self.opts.code {
            code::apply(&doc, opts, &mut rewrites, &mut report)?;
        }
        if let Some(ref opts) = self.opts.footer {
            footer::apply(&doc, opts, Local::now(), &mut rewrites, &mut report)?;
        }

        if rewrites.is_empty() {
            return Ok(Enhanced {
                html: html.to_string(),
                report,
            });
        }

        Ok(Enhanced {
            html: dom::serialize_document(&doc, &rewrites),
            report,
        })
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
