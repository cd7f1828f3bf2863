// ABOUTME: CLI for enhancing rendered blog pages with burnish-enhance.
// ABOUTME: Reads HTML from files or stdin, applies the pipeline, and writes pages or JSON reports.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use burnish_enhance::{Enhancer, Options};
use clap::Parser;
use serde_json::json;

/// Apply blog page enhancements to rendered HTML.
#[derive(Parser, Debug)]
#[command(name = "burnish")]
#[command(about = "Enhance rendered blog pages: tag cloud, contents, code blocks, footer", long_about = None)]
struct Args {
    /// HTML page(s) to enhance. Use "-" to read one page from stdin.
    #[arg(required = true)]
    pages: Vec<String>,

    /// Write the enhanced page to this file instead of stdout (single page only).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Rewrite each input file in place.
    #[arg(long = "in-place")]
    in_place: bool,

    /// JSON options file overriding the default pass configuration.
    #[arg(long = "options")]
    options: Option<PathBuf>,

    /// Disable the tag-cloud pass.
    #[arg(long = "no-tag-cloud")]
    no_tag_cloud: bool,

    /// Disable the table-of-contents pass.
    #[arg(long = "no-contents")]
    no_contents: bool,

    /// Disable the code-block pass.
    #[arg(long = "no-code")]
    no_code: bool,

    /// Disable the footer pass.
    #[arg(long = "no-footer")]
    no_footer: bool,

    /// Output a JSON envelope per page instead of the enhanced HTML.
    #[arg(long = "json")]
    json_output: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Print elapsed time in ms to stderr.
    #[arg(long = "timing")]
    timing: bool,
}

fn load_options(args: &Args) -> Result<Options> {
    let mut opts = match &args.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading options file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing options file {}", path.display()))?
        }
        None => Options::default(),
    };
    if args.no_tag_cloud {
        opts.tag_cloud = None;
    }
    if args.no_contents {
        opts.contents = None;
    }
    if args.no_code {
        opts.code = None;
    }
    if args.no_footer {
        opts.footer = None;
    }
    Ok(opts)
}

fn load_page(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading page from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(target).with_context(|| format!("reading page {}", target))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.in_place && args.output.is_some() {
        bail!("--output cannot be combined with --in-place");
    }
    if args.in_place && args.pages.iter().any(|p| p == "-") {
        bail!("--in-place cannot be used with stdin input");
    }
    if args.pages.len() > 1 && !args.in_place && !args.json_output {
        bail!("multiple pages require --in-place or --json");
    }
    if args.output.is_some() && args.pages.len() > 1 {
        bail!("--output is only valid when enhancing a single page");
    }

    let enhancer = Enhancer::new(load_options(&args)?);

    let start = Instant::now();
    let mut envelopes = Vec::new();
    for target in &args.pages {
        match load_page(target).and_then(|page| {
            enhancer
                .enhance(&page)
                .map_err(anyhow::Error::new)
        }) {
            Ok(enhanced) => {
                if args.in_place {
                    fs::write(target, &enhanced.html)
                        .with_context(|| format!("writing page {}", target))?;
                } else if let Some(path) = &args.output {
                    fs::write(path, &enhanced.html)
                        .with_context(|| format!("writing output {}", path.display()))?;
                } else if !args.json_output {
                    io::stdout().write_all(enhanced.html.as_bytes())?;
                }
                envelopes.push(json!({
                    "page": target,
                    "ok": true,
                    "report": enhanced.report,
                    "error": null
                }));
            }
            Err(err) => {
                if !args.json_output {
                    return Err(err);
                }
                envelopes.push(json!({
                    "page": target,
                    "ok": false,
                    "report": null,
                    "error": err.to_string()
                }));
            }
        }
    }

    if args.timing {
        eprintln!("elapsed: {}ms", start.elapsed().as_millis());
    }

    if args.json_output {
        let value = if envelopes.len() == 1 {
            envelopes.into_iter().next().unwrap_or_default()
        } else {
            serde_json::Value::Array(envelopes)
        };
        let rendered = if args.compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        println!("{}", rendered);
    }

    Ok(())
}
