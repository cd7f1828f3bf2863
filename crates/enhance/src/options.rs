// ABOUTME: Configuration options for the enhancement pipeline and per-pass settings.
// ABOUTME: EnhancerBuilder provides a fluent API for constructing Enhancer instances.

use serde::{Deserialize, Serialize};

use crate::enhancer::Enhancer;

/// Font-size interpolation range for the tag cloud.
///
/// The unit string is concatenated verbatim onto the computed number;
/// no unit conversion is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub start: f64,
    pub end: f64,
    pub unit: String,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            start: 20.0,
            end: 30.0,
            unit: "px".to_string(),
        }
    }
}

/// Color interpolation range for the tag cloud, as hex strings.
///
/// Decoded once up-front when the pass runs; malformed values surface as
/// `EnhanceError::InvalidColor` before any element is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub start: String,
    pub end: String,
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            start: "#ffd8d8".to_string(),
            end: "#dd0000".to_string(),
        }
    }
}

/// Settings for the tag-cloud weighting pass.
///
/// `size` and `color` are independently optional; an absent dimension is
/// skipped for every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagCloudOptions {
    /// Selector yielding the tagged elements, in document order.
    pub selector: String,
    /// Attribute holding each tag's numeric weight.
    pub weight_attr: String,
    pub size: Option<SizeRange>,
    pub color: Option<ColorRange>,
}

impl Default for TagCloudOptions {
    fn default() -> Self {
        Self {
            selector: "#tagcloud a".to_string(),
            weight_attr: "rel".to_string(),
            size: Some(SizeRange::default()),
            color: Some(ColorRange::default()),
        }
    }
}

/// Settings for the table-of-contents pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentsOptions {
    /// Selector for the headings to enumerate, in document order.
    pub heading_selector: String,
    /// Selector for the element whose content the rendered list replaces.
    pub target_selector: String,
    /// Title rendered above the list.
    pub title: String,
}

impl Default for ContentsOptions {
    fn default() -> Self {
        Self {
            heading_selector: ".content h2, .content h3".to_string(),
            target_selector: "#contents".to_string(),
            title: "目录".to_string(),
        }
    }
}

/// Settings for the code-block pass (copy button and console restyle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeOptions {
    /// Selector for highlighted code figures.
    pub figure_selector: String,
    /// `data-lang` value that marks a plain console block.
    pub plain_lang: String,
    /// Image source for the copy-button icon.
    pub copy_icon: String,
    /// Text label on the copy button.
    pub copy_label: String,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            figure_selector: "figure.highlight".to_string(),
            plain_lang: "text".to_string(),
            copy_icon: "/assets/images/clippy.svg".to_string(),
            copy_label: "复制".to_string(),
        }
    }
}

/// Settings for the footer pass (copyright range and timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterOptions {
    pub copyright_selector: String,
    pub clock_selector: String,
    /// First year of the copyright range.
    pub since_year: i32,
}

impl Default for FooterOptions {
    fn default() -> Self {
        Self {
            copyright_selector: "#copyright".to_string(),
            clock_selector: "#timeSpan".to_string(),
            since_year: 2017,
        }
    }
}

/// Configuration for the enhancement pipeline.
///
/// Each pass is independently optional; `None` disables it. The default
/// enables every pass with the theme's stock settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub tag_cloud: Option<TagCloudOptions>,
    pub contents: Option<ContentsOptions>,
    pub code: Option<CodeOptions>,
    pub footer: Option<FooterOptions>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag_cloud: Some(TagCloudOptions::default()),
            contents: Some(ContentsOptions::default()),
            code: Some(CodeOptions::default()),
            footer: Some(FooterOptions::default()),
        }
    }
}

/// Builder for constructing Enhancer instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct EnhancerBuilder {
    opts: Options,
}

impl EnhancerBuilder {
    /// Create a new EnhancerBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole option set, e.g. one loaded from a config file.
    pub fn options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    /// Set the tag-cloud pass settings.
    pub fn tag_cloud(mut self, opts: TagCloudOptions) -> Self {
        self.opts.tag_cloud = Some(opts);
        self
    }

    /// Disable the tag-cloud pass.
    pub fn without_tag_cloud(mut self) -> Self {
        self.opts.tag_cloud = None;
        self
    }

    /// Set the table-of-contents pass settings.
    pub fn contents(mut self, opts: ContentsOptions) -> Self {
        self.opts.contents = Some(opts);
        self
    }

    /// Disable the table-of-contents pass.
    pub fn without_contents(mut self) -> Self {
        self.opts.contents = None;
        self
    }

    /// Set the code-block pass settings.
    pub fn code(mut self, opts: CodeOptions) -> Self {
        self.opts.code = Some(opts);
        self
    }

    /// Disable the code-block pass.
    pub fn without_code(mut self) -> Self {
        self.opts.code = None;
        self
    }

    /// Set the footer pass settings.
    pub fn footer(mut self, opts: FooterOptions) -> Self {
        self.opts.footer = Some(opts);
        self
    }

    /// Disable the footer pass.
    pub fn without_footer(mut self) -> Self {
        self.opts.footer = None;
        self
    }

    /// Build the Enhancer with the configured options.
    pub fn build(self) -> Enhancer {
        Enhancer::new(self.opts)
    }
}
