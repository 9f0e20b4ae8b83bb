//! String literal escaping and flyql wildcard translation.

use flyql_syntax::Literal;

/// flyql's "match anything" marker.
pub const LIKE_PATTERN_CHAR: char = '*';

/// `LIKE` wildcard understood by SQL backends.
pub const SQL_LIKE_PATTERN_CHAR: char = '%';

const ESCAPE_CHAR: char = '\\';

/// Quotes `value` as a single-quoted literal, backslash-escaping quotes,
/// backslashes and control characters.
pub fn escape_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{07}' => out.push_str("\\a"),
            '\u{0B}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Renders a literal: strings quoted, numbers and booleans bare, null as `NULL`.
pub fn escape_literal(value: &Literal) -> String {
    match value {
        Literal::String(s) => escape_str(s),
        Literal::Null => "NULL".to_string(),
        other => other.to_string(),
    }
}

/// Translates flyql wildcards in `value` into a `LIKE` pattern using
/// `wildcard` as the backend's wildcard.
///
/// An unescaped `*` becomes `wildcard`; `\*` becomes a literal `*`; a literal
/// `wildcard` in the input is backslash-escaped. Returns whether the value
/// has to be compared with `LIKE`, which is also the case when only a
/// literal `wildcard` was escaped.
pub fn prepare_like_pattern(value: &str, wildcard: char) -> (bool, String) {
    let mut pattern_found = false;
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHAR && chars.peek() == Some(&LIKE_PATTERN_CHAR) {
            chars.next();
            out.push(LIKE_PATTERN_CHAR);
        } else if c == LIKE_PATTERN_CHAR {
            out.push(wildcard);
            pattern_found = true;
        } else if c == wildcard {
            out.push(ESCAPE_CHAR);
            out.push(wildcard);
            pattern_found = true;
        } else {
            out.push(c);
        }
    }

    (pattern_found, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_str("hello"), "'hello'");
        assert_eq!(escape_str("test'quote"), "'test\\'quote'");
        assert_eq!(escape_str("test\\backslash"), "'test\\\\backslash'");
        assert_eq!(escape_str("test\nNewline"), "'test\\nNewline'");
        assert_eq!(escape_str(""), "''");
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(
            escape_str("\u{08}\u{0C}\r\n\t\0\u{07}\u{0B}"),
            "'\\b\\f\\r\\n\\t\\0\\a\\v'"
        );
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(&Literal::Null), "NULL");
        assert_eq!(escape_literal(&Literal::from("it's")), "'it\\'s'");
        assert_eq!(escape_literal(&Literal::Int(123)), "123");
        assert_eq!(escape_literal(&Literal::Float(12.34)), "12.34");
        assert_eq!(escape_literal(&Literal::Float(10.0)), "10.0");
        assert_eq!(escape_literal(&Literal::Bool(true)), "true");
        assert_eq!(escape_literal(&Literal::Bool(false)), "false");
    }

    /// Reverses [`escape_str`] the way the backend's string parser does.
    fn unescape(quoted: &str) -> String {
        let inner = &quoted[1..quoted.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('b') => out.push('\u{08}'),
                Some('f') => out.push('\u{0C}'),
                Some('r') => out.push('\r'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('0') => out.push('\0'),
                Some('a') => out.push('\u{07}'),
                Some('v') => out.push('\u{0B}'),
                Some(other) => out.push(other),
                None => panic!("dangling escape in {quoted}"),
            }
        }
        out
    }

    #[test]
    fn test_escape_round_trip() {
        let original = "a'b\\c\u{08}d\u{0C}e\rf\ng\th\0i\u{07}j\u{0B}k ünï";
        assert_eq!(unescape(&escape_str(original)), original);
    }

    #[test]
    fn test_no_pattern() {
        assert_eq!(prepare_like_pattern("hello", '%'), (false, "hello".to_string()));
        assert_eq!(
            prepare_like_pattern("back\\slash", '%'),
            (false, "back\\slash".to_string())
        );
    }

    #[test]
    fn test_star_pattern() {
        assert_eq!(prepare_like_pattern("hello*", '%'), (true, "hello%".to_string()));
    }

    #[test]
    fn test_multiple_stars() {
        assert_eq!(
            prepare_like_pattern("*hello*world*", '%'),
            (true, "%hello%world%".to_string())
        );
    }

    #[test]
    fn test_escaped_star() {
        assert_eq!(
            prepare_like_pattern("hello\\*world", '%'),
            (false, "hello*world".to_string())
        );
        assert_eq!(
            prepare_like_pattern("\\*lit*", '%'),
            (true, "*lit%".to_string())
        );
    }

    #[test]
    fn test_percent_escaping() {
        assert_eq!(
            prepare_like_pattern("hello%world", '%'),
            (true, "hello\\%world".to_string())
        );
    }
}
