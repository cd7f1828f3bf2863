// ABOUTME: Integration tests for the enhancement pipeline.
// ABOUTME: Exercises the tag cloud, contents, code-block, and footer passes end to end.

use burnish_enhance::{
    CodeOptions, ColorRange, ContentsOptions, EnhanceError, Enhancer, FooterOptions, SizeRange,
    TagCloudOptions,
};

mod tag_cloud_tests {
    use super::*;

    fn cloud_page() -> &'static str {
        r##"<html><body>
            <div id="tagcloud">
                <a href="/tags/rust" rel="10">rust</a>
                <a href="/tags/html" rel="20">html</a>
                <a href="/tags/css" rel="30">css</a>
            </div>
        </body></html>"##
    }

    #[test]
    fn fixed_size_gradient_matches_theme_configuration() {
        // The theme called tagcloud with a fixed 14px size and the default
        // red gradient.
        let enhancer = Enhancer::builder()
            .without_contents()
            .without_code()
            .without_footer()
            .tag_cloud(TagCloudOptions {
                size: Some(SizeRange {
                    start: 14.0,
                    end: 14.0,
                    unit: "px".to_string(),
                }),
                ..TagCloudOptions::default()
            })
            .build();

        let enhanced = enhancer.enhance(cloud_page()).unwrap();
        assert_eq!(enhanced.report.tags_styled, 3);
        assert_eq!(enhanced.html.matches("font-size: 14px").count(), 3);

        // Colors appear in document order: min, midpoint, max.
        let low = enhanced.html.find("#ffd8d8").unwrap();
        let mid = enhanced.html.find("#ee6c6c").unwrap();
        let high = enhanced.html.find("#dd0000").unwrap();
        assert!(low < mid && mid < high);
    }

    #[test]
    fn single_tag_gets_start_values() {
        let page = r##"<html><body>
            <div id="tagcloud"><a rel="5">only</a></div>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_contents()
            .without_code()
            .without_footer()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(enhanced
            .html
            .contains("style=\"font-size: 20px; color: #ffd8d8\""));
    }

    #[test]
    fn malformed_color_fails_without_output() {
        let enhancer = Enhancer::builder()
            .without_contents()
            .without_code()
            .without_footer()
            .tag_cloud(TagCloudOptions {
                color: Some(ColorRange {
                    start: "#xyz".to_string(),
                    end: "#dd0000".to_string(),
                }),
                ..TagCloudOptions::default()
            })
            .build();

        let result = enhancer.enhance(cloud_page());
        assert!(matches!(result, Err(EnhanceError::InvalidColor(_))));
    }

    #[test]
    fn elements_without_numeric_weight_are_skipped() {
        let page = r##"<html><body>
            <div id="tagcloud">
                <a rel="1">low</a>
                <a>unweighted</a>
                <a rel="lots">verbal</a>
                <a rel="3">high</a>
            </div>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_contents()
            .without_code()
            .without_footer()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert_eq!(enhanced.report.tags_styled, 2);
        assert!(enhanced.html.contains("<a>unweighted</a>"));
        assert!(enhanced.html.contains("<a rel=\"lots\">verbal</a>"));
        assert!(enhanced.html.contains("font-size: 20px"));
        assert!(enhanced.html.contains("font-size: 30px"));
    }

    #[test]
    fn existing_inline_style_is_preserved() {
        let page = r##"<html><body>
            <div id="tagcloud"><a rel="5" style="display: block;">only</a></div>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_contents()
            .without_code()
            .without_footer()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(enhanced
            .html
            .contains("style=\"display: block; font-size: 20px; color: #ffd8d8\""));
    }
}

mod contents_tests {
    use super::*;

    #[test]
    fn renders_numbered_entries_into_target() {
        let page = r##"<html><body>
            <nav id="contents"></nav>
            <div class="content">
                <h2 id="setup">Setup</h2>
                <h3 id="deps">Dependencies</h3>
                <h3 id="build">Build</h3>
                <h2 id="usage">Usage</h2>
            </div>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_code()
            .without_footer()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert_eq!(enhanced.report.contents_entries, 4);
        assert!(enhanced
            .html
            .contains("<p class=\"contents-title\">目录</p>"));
        assert!(enhanced.html.contains(
            "<li class=\"contents-level-2\"><a href=\"#setup\">1.Setup</a></li>"
        ));
        assert!(enhanced.html.contains(
            "<li class=\"contents-level-3\"><a href=\"#deps\">1.1.Dependencies</a></li>"
        ));
        assert!(enhanced.html.contains(
            "<li class=\"contents-level-3\"><a href=\"#build\">1.2.Build</a></li>"
        ));
        assert!(enhanced.html.contains(
            "<li class=\"contents-level-2\"><a href=\"#usage\">2.Usage</a></li>"
        ));
    }

    #[test]
    fn target_without_headings_gets_empty_list() {
        let page = r##"<html><body><nav id="contents"><span>old</span></nav></body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_code()
            .without_footer()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert_eq!(enhanced.report.contents_entries, 0);
        assert!(enhanced.html.contains("<ul></ul>"));
        assert!(!enhanced.html.contains("old"));
    }

    #[test]
    fn custom_title_and_selectors() {
        let page = r##"<html><body>
            <div id="toc"></div>
            <article><h2 id="a">Alpha</h2></article>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_code()
            .without_footer()
            .contents(ContentsOptions {
                heading_selector: "article h2, article h3".to_string(),
                target_selector: "#toc".to_string(),
                title: "Contents".to_string(),
            })
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(enhanced
            .html
            .contains("<p class=\"contents-title\">Contents</p>"));
        assert!(enhanced.html.contains("1.Alpha"));
    }
}

mod code_tests {
    use super::*;

    fn code_page() -> &'static str {
        r##"<html><body>
            <figure class="highlight">
                <pre><code data-lang="rust">fn main() {}</code></pre>
            </figure>
            <figure class="highlight">
                <pre><code data-lang="text">$ cargo build</code></pre>
            </figure>
        </body></html>"##
    }

    fn code_only_enhancer() -> Enhancer {
        Enhancer::builder()
            .without_tag_cloud()
            .without_contents()
            .without_footer()
            .build()
    }

    #[test]
    fn copy_button_lands_before_the_pre() {
        let enhanced = code_only_enhancer().enhance(code_page()).unwrap();
        assert_eq!(enhanced.report.copy_buttons, 1);
        assert!(enhanced.html.contains(
            "<div class=\"copy-btn\"><a href=\"#/\">\
             <img class=\"copy-img\" src=\"/assets/images/clippy.svg\">复制</a></div><pre>"
        ));
    }

    #[test]
    fn plain_console_is_restyled_not_buttoned() {
        let enhanced = code_only_enhancer().enhance(code_page()).unwrap();
        assert_eq!(enhanced.report.consoles_restyled, 1);
        assert!(enhanced.html.contains(
            "<figure class=\"highlight\" \
             style=\"background-color: #000; border-color: #000; color: #aaa\">"
        ));
        // Exactly one button overall: the plain figure got none.
        assert_eq!(enhanced.html.matches("copy-btn").count(), 1);
    }

    #[test]
    fn missing_data_lang_counts_as_highlighted() {
        let page = r##"<html><body>
            <figure class="highlight"><pre><code>plain?</code></pre></figure>
        </body></html>"##;
        let enhanced = code_only_enhancer().enhance(page).unwrap();
        assert_eq!(enhanced.report.copy_buttons, 1);
        assert_eq!(enhanced.report.consoles_restyled, 0);
    }

    #[test]
    fn figure_without_code_is_ignored() {
        let page = r##"<html><body>
            <figure class="highlight"><img src="chart.png"></figure>
        </body></html>"##;
        let enhanced = code_only_enhancer().enhance(page).unwrap();
        assert_eq!(enhanced.report.copy_buttons, 0);
        assert_eq!(enhanced.report.consoles_restyled, 0);
    }

    #[test]
    fn custom_label_and_icon() {
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_contents()
            .without_footer()
            .code(CodeOptions {
                copy_label: "copy".to_string(),
                copy_icon: "/clip.svg".to_string(),
                ..CodeOptions::default()
            })
            .build();
        let enhanced = enhancer.enhance(code_page()).unwrap();
        assert!(enhanced
            .html
            .contains("<img class=\"copy-img\" src=\"/clip.svg\">copy"));
    }
}

mod footer_tests {
    use super::*;
    use chrono::{Datelike, Local};

    #[test]
    fn copyright_and_clock_are_stamped() {
        let page = r##"<html><body>
            <span id="copyright"></span>
            <span id="timeSpan"></span>
        </body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_contents()
            .without_code()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(enhanced.report.copyright_stamped);
        assert!(enhanced.report.clock_stamped);
        let year = Local::now().year();
        assert!(enhanced
            .html
            .contains(&format!("<span id=\"copyright\">2017 - {} </span>", year)));
    }

    #[test]
    fn custom_since_year() {
        let page = r##"<html><body><span id="copyright"></span></body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_contents()
            .without_code()
            .footer(FooterOptions {
                since_year: 2020,
                ..FooterOptions::default()
            })
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(enhanced.html.contains("2020 - "));
    }

    #[test]
    fn missing_targets_are_skipped() {
        let page = r##"<html><body><p>no footer here</p></body></html>"##;
        let enhancer = Enhancer::builder()
            .without_tag_cloud()
            .without_contents()
            .without_code()
            .build();

        let enhanced = enhancer.enhance(page).unwrap();
        assert!(!enhanced.report.copyright_stamped);
        assert!(!enhanced.report.clock_stamped);
    }
}

mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_without_targets_passes_through_unchanged() {
        let page = "<!DOCTYPE html>\n<html>\n<head><title>t</title></head>\n<body>\n<p>hello</p>\n</body>\n</html>\n";
        let enhancer = Enhancer::builder().build();
        let enhanced = enhancer.enhance(page).unwrap();
        assert_eq!(enhanced.html, page);
        assert_eq!(enhanced.report, Default::default());
    }

    #[test]
    fn all_passes_compose_on_one_page() {
        let page = r##"<html><body>
            <nav id="contents"></nav>
            <div class="content">
                <h2 id="tags">Tags</h2>
                <div id="tagcloud"><a rel="1">a</a><a rel="2">b</a></div>
                <h2 id="code">Code</h2>
                <figure class="highlight"><pre><code data-lang="sh">ls</code></pre></figure>
            </div>
            <footer><span id="copyright"></span><span id="timeSpan"></span></footer>
        </body></html>"##;

        let enhanced = Enhancer::default().enhance(page).unwrap();
        assert_eq!(enhanced.report.tags_styled, 2);
        assert_eq!(enhanced.report.contents_entries, 2);
        assert_eq!(enhanced.report.copy_buttons, 1);
        assert_eq!(enhanced.report.consoles_restyled, 0);
        assert!(enhanced.report.copyright_stamped);
        assert!(enhanced.report.clock_stamped);

        assert!(enhanced.html.contains("font-size: 20px"));
        assert!(enhanced.html.contains("font-size: 30px"));
        assert!(enhanced.html.contains("1.Tags"));
        assert!(enhanced.html.contains("2.Code"));
        assert!(enhanced.html.contains("copy-btn"));
    }
}
