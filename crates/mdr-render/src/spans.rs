//! Inline text transforms the parser grammar does not cover.
//!
//! pulldown-cmark has no autolink-in-text, `==highlight==` or smart-quote
//! grammar, so these are applied to plain text runs while escaping.
//! Quote pairing carries across runs through the caller's `quote_open`
//! state, since emphasis and other inline markup split a sentence into
//! several text events.

use crate::state::{escape_html_char, escape_html_into};

/// Write one text run as HTML, applying the requested span transforms.
pub(crate) fn write_text_html(
    out: &mut String,
    text: &str,
    autolink: bool,
    highlight: bool,
    quote: bool,
    quote_open: &mut bool,
) {
    if !highlight {
        write_linked(out, text, autolink, quote, quote_open);
        return;
    }

    let mut rest = text;
    while let Some((before, inner, after)) = split_highlight(rest) {
        write_linked(out, before, autolink, quote, quote_open);
        out.push_str("<mark>");
        write_linked(out, inner, autolink, quote, quote_open);
        out.push_str("</mark>");
        rest = after;
    }
    write_linked(out, rest, autolink, quote, quote_open);
}

/// Split on the first complete `==...==` pair.
fn split_highlight(text: &str) -> Option<(&str, &str, &str)> {
    let open = text.find("==")?;
    let inner_start = open + 2;
    let close = text[inner_start..].find("==")?;
    let inner = &text[inner_start..inner_start + close];
    if inner.is_empty() {
        return None;
    }
    Some((&text[..open], inner, &text[inner_start + close + 2..]))
}

fn write_linked(out: &mut String, text: &str, autolink: bool, quote: bool, quote_open: &mut bool) {
    if !autolink {
        write_quoted(out, text, quote, quote_open);
        return;
    }

    let mut rest = text;
    while let Some(start) = find_url_start(rest) {
        let (before, tail) = rest.split_at(start);
        write_quoted(out, before, quote, quote_open);
        let (url, after) = tail.split_at(url_len(tail));
        out.push_str("<a href=\"");
        escape_html_into(out, url);
        out.push_str("\">");
        escape_html_into(out, url);
        out.push_str("</a>");
        rest = after;
    }
    write_quoted(out, rest, quote, quote_open);
}

/// Byte offset of the first bare URL, if any.
fn find_url_start(text: &str) -> Option<usize> {
    for (index, _) in text.char_indices() {
        let tail = &text[index..];
        if !(tail.starts_with("http://") || tail.starts_with("https://")) {
            continue;
        }
        let boundary = index == 0
            || text[..index]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_ascii_alphanumeric());
        if boundary {
            return Some(index);
        }
    }
    None
}

/// Length of the URL starting at the beginning of `text`.
///
/// Stops at whitespace and markup, then drops trailing punctuation. A
/// closing parenthesis is kept only when the URL contains an opening one.
fn url_len(text: &str) -> usize {
    let mut end = text
        .find(|c: char| c.is_whitespace() || c == '<' || c == '"')
        .unwrap_or(text.len());
    loop {
        let url = &text[..end];
        let Some(last) = url.chars().next_back() else {
            break;
        };
        let trim = matches!(last, '.' | ',' | ';' | ':' | '!' | '?')
            || (last == ')' && !url.contains('('));
        if trim {
            end -= last.len_utf8();
        } else {
            break;
        }
    }
    end
}

fn write_quoted(out: &mut String, text: &str, quote: bool, quote_open: &mut bool) {
    if !quote {
        escape_html_into(out, text);
        return;
    }
    for c in text.chars() {
        if c == '"' {
            out.push_str(if *quote_open { "</q>" } else { "<q>" });
            *quote_open = !*quote_open;
        } else {
            escape_html_char(out, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, autolink: bool, highlight: bool, quote: bool) -> String {
        let mut out = String::new();
        let mut quote_open = false;
        write_text_html(&mut out, text, autolink, highlight, quote, &mut quote_open);
        out
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(render("a < b", false, false, false), "a &lt; b");
    }

    #[test]
    fn test_highlight_pair() {
        assert_eq!(
            render("an ==important== word", false, true, false),
            "an <mark>important</mark> word"
        );
    }

    #[test]
    fn test_highlight_unmatched_stays_literal() {
        assert_eq!(render("a == b", false, true, false), "a == b");
    }

    #[test]
    fn test_highlight_disabled() {
        assert_eq!(render("==x==", false, false, false), "==x==");
    }

    #[test]
    fn test_autolink_simple() {
        assert_eq!(
            render("see https://example.com for more", true, false, false),
            r#"see <a href="https://example.com">https://example.com</a> for more"#
        );
    }

    #[test]
    fn test_autolink_trailing_punctuation() {
        assert_eq!(
            render("go to http://example.com.", true, false, false),
            r#"go to <a href="http://example.com">http://example.com</a>."#
        );
    }

    #[test]
    fn test_autolink_keeps_balanced_parenthesis() {
        assert_eq!(
            render("https://en.example.org/wiki/A_(b)", true, false, false),
            r#"<a href="https://en.example.org/wiki/A_(b)">https://en.example.org/wiki/A_(b)</a>"#
        );
    }

    #[test]
    fn test_autolink_requires_word_boundary() {
        assert_eq!(render("xhttps://example.com", true, false, false), "xhttps://example.com");
    }

    #[test]
    fn test_autolink_disabled() {
        assert_eq!(
            render("https://example.com", false, false, false),
            "https://example.com"
        );
    }

    #[test]
    fn test_quotes_pair_within_run() {
        assert_eq!(
            render(r#"say "hello" now"#, false, false, true),
            "say <q>hello</q> now"
        );
    }

    #[test]
    fn test_quotes_pair_across_runs() {
        let mut out = String::new();
        let mut quote_open = false;
        write_text_html(&mut out, "say \"hel", false, false, true, &mut quote_open);
        write_text_html(&mut out, "lo\" now", false, false, true, &mut quote_open);
        assert_eq!(out, "say <q>hello</q> now");
        assert!(!quote_open);
    }

    #[test]
    fn test_quotes_disabled_are_escaped() {
        assert_eq!(render(r#""x""#, false, false, false), "&quot;x&quot;");
    }

    #[test]
    fn test_highlight_with_link_inside() {
        assert_eq!(
            render("==see https://example.com==", true, true, false),
            r#"<mark>see <a href="https://example.com">https://example.com</a></mark>"#
        );
    }
}
