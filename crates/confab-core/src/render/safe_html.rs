//! Escape-then-substitute rendering of untrusted reply text.
//!
//! Reply content comes from a remote service and must never be interpreted
//! as markup. The transform recognizes exactly two constructs -- newlines
//! become `<br>`, bare http/https URLs become anchors -- and escapes
//! everything else. URL spans are located on the raw text, then each span
//! is escaped independently, so every byte of the output comes from an
//! escaper or from the fixed allow-list markup below.

use std::fmt;

use linkify::{LinkFinder, LinkKind};

/// Reply text rendered into a form safe to embed in an HTML context.
///
/// Only produced by [`render_message`]; there is no public constructor, so
/// holding a `SafeHtml` means the escape pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// The rendered markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the rendered markup.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render raw reply text for HTML display.
///
/// Newlines become `<br>`, bare http/https URLs become links that open in
/// a new browsing context, and no other markup survives escaping.
pub fn render_message(text: &str) -> SafeHtml {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);

    let mut out = String::with_capacity(text.len());
    for span in finder.spans(text) {
        let raw = span.as_str();
        let is_http_url = matches!(span.kind(), Some(LinkKind::Url))
            && (raw.starts_with("http://") || raw.starts_with("https://"));

        if is_http_url {
            out.push_str("<a href=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(raw));
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            out.push_str(&html_escape::encode_text(raw));
            out.push_str("</a>");
        } else {
            out.push_str(&html_escape::encode_text(raw).replace('\n', "<br>"));
        }
    }

    SafeHtml(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render_message("hello world").as_str(), "hello world");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render_message("a\nb\nc").as_str(), "a<br>b<br>c");
    }

    #[test]
    fn test_link_and_break_placement() {
        let rendered = render_message("see http://x.test now\nok");
        assert_eq!(
            rendered.as_str(),
            "see <a href=\"http://x.test\" target=\"_blank\" \
             rel=\"noopener noreferrer\">http://x.test</a> now<br>ok"
        );
    }

    #[test]
    fn test_https_url_is_linked() {
        let rendered = render_message("https://example.test/docs");
        assert!(rendered.as_str().starts_with("<a href=\"https://example.test/docs\""));
    }

    #[test]
    fn test_markup_is_escaped_inert() {
        let rendered = render_message("<script>alert(1)</script>");
        assert_eq!(
            rendered.as_str(),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_url_query_ampersand_is_attribute_escaped() {
        let rendered = render_message("http://x.test/?a=1&b=2");
        assert!(rendered.as_str().contains("href=\"http://x.test/?a=1&amp;b=2\""));
        // The visible link text is escaped the same way.
        assert!(rendered.as_str().contains(">http://x.test/?a=1&amp;b=2</a>"));
    }

    #[test]
    fn test_non_http_scheme_stays_plain() {
        let rendered = render_message("fetch it from ftp://x.test/file");
        assert!(!rendered.as_str().contains("<a "));
    }

    #[test]
    fn test_ampersand_outside_url_is_escaped() {
        assert_eq!(render_message("you & me").as_str(), "you &amp; me");
    }
}
