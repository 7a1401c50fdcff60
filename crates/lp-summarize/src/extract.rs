//! Paragraph extraction from HTML and the summary policy.
//!
//! Parsing goes through ast-grep's tree-sitter HTML grammar. Tree-sitter
//! trims whitespace off `text` nodes, so word breaks between adjacent text
//! runs are recovered from the source gap between them: a gap with
//! whitespace outside any tag becomes a single space, a gap made only of
//! tags (`foo<b>bar</b>`) joins the runs directly.

use std::ops::Range;

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};
use lp_config::SummarizerConfig;

pub const NO_CONTENT: &str = "No content found to summarize.";
pub const EMPTY_SUMMARY: &str = "Summary is empty.";
pub const ELLIPSIS: &str = "...";

/// Summarize an HTML document from its leading paragraphs.
///
/// Returns [`NO_CONTENT`] when the document has no `<p>` elements,
/// [`EMPTY_SUMMARY`] when they hold no text, and otherwise the joined text,
/// cut to `max_chars` characters plus [`ELLIPSIS`] when longer.
#[must_use]
pub fn summarize_html(html: &str, config: &SummarizerConfig) -> String {
    let paragraphs = paragraphs(html, config.max_paragraphs);
    if paragraphs.is_empty() {
        return NO_CONTENT.to_string();
    }

    let summary = collapse_whitespace(&paragraphs.join(" "));
    if summary.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    truncate_chars(&summary, config.max_chars)
}

/// Text of the first `limit` `<p>` elements in document order, each with
/// whitespace collapsed. Empty paragraphs are kept as empty strings.
#[must_use]
pub fn paragraphs(html: &str, limit: usize) -> Vec<String> {
    let root = SupportLang::Html.ast_grep(html);
    let mut found = Vec::new();
    collect_paragraphs(&root.root(), html, limit, &mut found);
    found
}

fn collect_paragraphs<D: ast_grep_core::Doc>(
    node: &Node<D>,
    source: &str,
    limit: usize,
    found: &mut Vec<String>,
) {
    if found.len() >= limit {
        return;
    }
    if node.kind().as_ref() == "element" && tag_name(node).is_some_and(|tag| tag.eq_ignore_ascii_case("p")) {
        found.push(element_text(node, source));
        return;
    }
    let children: Vec<_> = node.children().collect();
    for child in &children {
        collect_paragraphs(child, source, limit, found);
    }
}

fn tag_name<D: ast_grep_core::Doc>(element: &Node<D>) -> Option<String> {
    let start_tag = element
        .children()
        .find(|child| child.kind().as_ref() == "start_tag")?;
    let name = start_tag
        .children()
        .find(|child| child.kind().as_ref() == "tag_name")?;
    Some(name.text().to_string())
}

fn element_text<D: ast_grep_core::Doc>(element: &Node<D>, source: &str) -> String {
    let mut runs = Vec::new();
    collect_text_runs(element, &mut runs);

    let mut text = String::new();
    let mut previous_end: Option<usize> = None;
    for (range, run) in runs {
        if let Some(end) = previous_end {
            let gap = source.get(end..range.start).unwrap_or_default();
            if gap_has_whitespace(gap) {
                text.push(' ');
            }
        }
        text.push_str(&decode_entities(&run));
        previous_end = Some(range.end);
    }
    collapse_whitespace(&text)
}

fn collect_text_runs<D: ast_grep_core::Doc>(node: &Node<D>, runs: &mut Vec<(Range<usize>, String)>) {
    match node.kind().as_ref() {
        "text" | "entity" => runs.push((node.range(), node.text().to_string())),
        "start_tag" | "end_tag" | "self_closing_tag" | "script_element" | "style_element"
        | "comment" => {}
        _ => {
            let children: Vec<_> = node.children().collect();
            for child in &children {
                collect_text_runs(child, runs);
            }
        }
    }
}

/// Whitespace outside of `<...>` markup.
fn gap_has_whitespace(gap: &str) -> bool {
    let mut in_tag = false;
    for c in gap.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag && c.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}

/// Decode the character references that commonly appear in prose.
/// Unknown references are left as written.
fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|semi| *semi <= 10)
            .and_then(|semi| decode_reference(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        "rsquo" => Some('\u{2019}'),
        "lsquo" => Some('\u{2018}'),
        "rdquo" => Some('\u{201d}'),
        "ldquo" => Some('\u{201c}'),
        "copy" => Some('\u{a9}'),
        _ => None,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn config() -> SummarizerConfig {
        SummarizerConfig::default()
    }

    #[test]
    fn joins_first_paragraphs_in_order() {
        let html = "<html><body><h1>Title</h1><p>First one.</p><div><p>Second\n   one.</p></div></body></html>";
        assert_eq!(summarize_html(html, &config()), "First one. Second one.");
    }

    #[test]
    fn only_first_five_paragraphs_count() {
        let html: String = (1..=7).map(|n| format!("<p>p{n}</p>")).collect();
        assert_eq!(summarize_html(&html, &config()), "p1 p2 p3 p4 p5");
    }

    #[test]
    fn no_paragraphs() {
        let html = "<html><body><div>Only a div</div></body></html>";
        assert_eq!(summarize_html(html, &config()), NO_CONTENT);
    }

    #[test]
    fn blank_paragraphs() {
        let html = "<p>   </p><p></p>";
        assert_eq!(summarize_html(html, &config()), EMPTY_SUMMARY);
    }

    #[test]
    fn long_text_is_truncated_to_limit() {
        let body = "a".repeat(400);
        let summary = summarize_html(&format!("<p>{body}</p>"), &config());
        assert_eq!(summary, format!("{}...", "a".repeat(300)));
        assert_eq!(summary.chars().count(), 303);
    }

    #[test]
    fn text_at_limit_is_not_truncated() {
        let body = "b".repeat(300);
        assert_eq!(summarize_html(&format!("<p>{body}</p>"), &config()), body);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }

    #[rstest]
    #[case("<p>Hello <b>big</b> world</p>", "Hello big world")]
    #[case("<p>un<em>believ</em>able</p>", "unbelievable")]
    #[case("<p>Fish &amp; chips</p>", "Fish & chips")]
    #[case("<p>AT&amp;T</p>", "AT&T")]
    #[case("<p>a&nbsp;b</p>", "a b")]
    #[case("<p>caf&#233;</p>", "caf\u{e9}")]
    fn inline_markup_and_entities(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(paragraphs(html, 5), vec![expected.to_string()]);
    }

    #[test]
    fn limit_comes_from_config() {
        let config = SummarizerConfig {
            max_paragraphs: 1,
            max_chars: 4,
            ..SummarizerConfig::default()
        };
        assert_eq!(summarize_html("<p>abcdef</p><p>ghi</p>", &config), "abcd...");
    }

    #[rstest]
    #[case(" ", true)]
    #[case("</b>", false)]
    #[case("</b> <i>", true)]
    #[case("<span class=\"x y\">", false)]
    fn gap_whitespace(#[case] gap: &str, #[case] expected: bool) {
        assert_eq!(gap_has_whitespace(gap), expected);
    }

    #[test]
    fn unknown_entities_are_kept() {
        assert_eq!(decode_entities("a &bogus; b & c"), "a &bogus; b & c");
    }
}
