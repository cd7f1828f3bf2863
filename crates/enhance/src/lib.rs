// ABOUTME: Main library entry point for the burnish page enhancer.
// ABOUTME: Re-exports the public API: Enhancer, EnhancerBuilder, Options, EnhanceError, Enhanced, EnhanceReport.

//! burnish - build-time enhancement passes for static blog pages.
//!
//! This crate applies the transformations a blog theme's page scripts used
//! to run in the browser, as a single pass over the rendered HTML: weighting
//! tag-cloud entries by font size and color, rendering a numbered table of
//! contents, injecting copy buttons into highlighted code blocks, restyling
//! plain console blocks, and stamping the footer copyright and timestamp.
//!
//! # Example
//!
//! ```
//! use burnish_enhance::{Enhancer, EnhanceError};
//!
//! fn main() -> Result<(), EnhanceError> {
//!     let enhancer = Enhancer::builder().build();
//!     let page = r##"<html><body>
//!         <div id="tagcloud"><a rel="1">rust</a><a rel="9">html</a></div>
//!     </body></html>"##;
//!     let enhanced = enhancer.enhance(page)?;
//!     assert!(enhanced.html.contains("font-size: 20px"));
//!     Ok(())
//! }
//! ```

pub mod code;
pub mod contents;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod footer;
pub mod options;
pub mod report;
pub mod tagcloud;

pub use crate::enhancer::Enhancer;
pub use crate::error::EnhanceError;
pub use crate::options::{
    CodeOptions, ColorRange, ContentsOptions, EnhancerBuilder, FooterOptions, Options, SizeRange,
    TagCloudOptions,
};
pub use crate::report::{Enhanced, EnhanceReport};
pub use crate::tagcloud::color::Rgb;
pub use crate::tagcloud::{compute_styles, TagStyle};
