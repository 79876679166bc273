//! Single-pass substitution of unsafe characters with XML entity references.

use std::borrow::Cow;

/// Characters that may not appear raw in XML content or attribute values,
/// paired with their entity references.
pub const XML_ESCAPES: [(&str, &str); 5] = [
    ("<", "&lt;"),
    (">", "&gt;"),
    ("&", "&amp;"),
    ("'", "&#39;"),
    ("\"", "&quot;"),
];

/// Escapes `text` for use as XML element content or a quoted attribute value.
///
/// Returns the input unchanged (borrowed) when it contains nothing to escape.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    replace_all(text, &XML_ESCAPES)
}

/// Replaces every occurrence of each pattern in `pairs` with its replacement.
///
/// Patterns are matched against the original text only, in one forward scan:
/// inserted replacements are never scanned again, so `&` → `&amp;` cannot
/// corrupt the output of an earlier pair. When several patterns match at the
/// same position the first pair in `pairs` wins. Empty patterns are ignored.
pub fn replace_all<'a>(text: &'a str, pairs: &[(&str, &str)]) -> Cow<'a, str> {
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = pairs
            .iter()
            .find(|&&(pattern, _)| !pattern.is_empty() && rest.starts_with(pattern));

        match hit {
            Some(&(pattern, replacement)) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                buf.push_str(&text[copied..pos]);
                buf.push_str(replacement);
                pos += pattern.len();
                copied = pos;
            }
            None => {
                // Advance one whole character to stay on a UTF-8 boundary.
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn safe_input_is_borrowed() {
        let text = "nothing to see here\n  at all";
        assert!(matches!(escape_xml(text), Cow::Borrowed(s) if s == text));
    }

    #[test]
    fn each_unsafe_character() {
        assert_eq!(escape_xml("<"), "&lt;");
        assert_eq!(escape_xml(">"), "&gt;");
        assert_eq!(escape_xml("&"), "&amp;");
        assert_eq!(escape_xml("'"), "&#39;");
        assert_eq!(escape_xml("\""), "&quot;");
    }

    #[test]
    fn ampersand_is_not_escaped_twice() {
        assert_eq!(escape_xml("a & < b"), "a &amp; &lt; b");
        assert_eq!(escape_xml("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn existing_entities_are_escaped_literally() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn counts_are_preserved() {
        let out = escape_xml("x && y || 'a' != \"b\"");
        assert_eq!(out.matches("&amp;").count(), 2);
        assert_eq!(out.matches("&#39;").count(), 2);
        assert_eq!(out.matches("&quot;").count(), 2);
        assert_eq!(out, "x &amp;&amp; y || &#39;a&#39; != &quot;b&quot;");
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert_eq!(escape_xml("тип <Строка> ≠ 'Int'"), "тип &lt;Строка&gt; ≠ &#39;Int&#39;");
    }

    #[test]
    fn replace_all_matches_original_text_only() {
        let pairs = [("a", "b"), ("b", "c")];
        assert_eq!(replace_all("ab", &pairs), "bc");
    }

    #[test]
    fn replace_all_first_pair_wins_at_same_position() {
        let pairs = [("ab", "1"), ("a", "2")];
        assert_eq!(replace_all("aab", &pairs), "21");
        let pairs = [("a", "2"), ("ab", "1")];
        assert_eq!(replace_all("aab", &pairs), "22b");
    }

    #[test]
    fn replace_all_ignores_empty_patterns() {
        let pairs = [("", "x"), ("-", "+")];
        assert_eq!(replace_all("a-b", &pairs), "a+b");
    }
}
