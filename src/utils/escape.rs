/// Escapes a string for embedding inside a double-quoted source literal.
///
/// Backslash is substituted first so the backslashes introduced by the later
/// substitutions are never escaped a second time.
pub fn escape_string(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escapes backticks for embedding inside a template-style literal.
///
/// `${` sequences pass through untouched; the generated files only ever hold
/// plain text in template position, so interpolation is not a concern here.
pub fn escape_backtick(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.replace('`', "\\`")
}

/// Escapes text for insertion as HTML text content. Not attribute-safe on
/// its own, though quotes are covered as well.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string_order() {
        // A literal backslash followed by a quote must come out as \\ then \"
        assert_eq!(escape_string(r#"a\"b"#), r#"a\\\"b"#);
        assert_eq!(escape_string("line1\nline2\tend\r"), "line1\\nline2\\tend\\r");
        assert_eq!(escape_string(""), "");
    }

    #[test]
    fn test_escape_backtick_leaves_interpolation() {
        assert_eq!(escape_backtick("a`b"), "a\\`b");
        assert_eq!(escape_backtick("${name}"), "${name}");
        assert_eq!(escape_backtick(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'hi'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;hi&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
