//! Link extraction from service hook message bodies

use std::sync::LazyLock;

use regex::Regex;

/// Link placeholder meaning "no link found"
pub const NO_LINK: &str = "#";

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((.*?)\)").expect("valid regex"));

static HTML_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a href="(.*?)">"#).expect("valid regex"));

/// First URL of a `[text](url)` link
pub fn markdown_link(markdown: &str) -> Option<String> {
    MARKDOWN_LINK
        .captures(markdown)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|url| !url.is_empty())
}

/// First `href` of an `<a href="...">` anchor, with `&amp;` unescaped
pub fn html_link(html: &str) -> Option<String> {
    HTML_ANCHOR
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().replace("&amp;", "&"))
        .filter(|url| !url.is_empty())
}

pub fn is_real_link(link: &str) -> bool {
    link != NO_LINK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            markdown_link("Ada commented on [Bug 12](https://dev.azure.com/org/p/_workitems/edit/12) now"),
            Some("https://dev.azure.com/org/p/_workitems/edit/12".to_string())
        );
        assert_eq!(
            markdown_link("[first](https://a) and [second](https://b)"),
            Some("https://a".to_string())
        );
        assert_eq!(markdown_link("no link here"), None);
        assert_eq!(markdown_link("[empty]()"), None);
    }

    #[test]
    fn test_html_link_unescapes_ampersand() {
        assert_eq!(
            html_link(r#"<a href="https://x/y?a=1&amp;b=2">Bug 12</a>"#),
            Some("https://x/y?a=1&b=2".to_string())
        );
        assert_eq!(html_link("<p>plain</p>"), None);
    }
}
