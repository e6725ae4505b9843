//! Minimal highlighter for the about-section source listing.

/// Highlight class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    /// Identifier directly followed by a colon.
    Property,
    Bracket,
    Comment,
    Plain,
}

impl TokenKind {
    /// Stylesheet class of the span.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("tok-keyword"),
            Self::String => Some("tok-string"),
            Self::Property => Some("tok-property"),
            Self::Bracket => Some("tok-bracket"),
            Self::Comment => Some("tok-comment"),
            Self::Plain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const KEYWORDS: &[&str] =
    &["const", "let", "var", "function", "return", "if", "else", "for", "while"];

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits one line into highlighted tokens.
///
/// Concatenating the token texts yields the line unchanged, including a
/// partially typed line with an unterminated string.
#[must_use]
pub fn highlight(line: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut plain_from: Option<usize> = None;
    let mut pos = 0;

    while let Some(c) = line[pos..].chars().next() {
        let rest = &line[pos..];
        let token = if rest.starts_with("//") {
            Some((TokenKind::Comment, rest.len()))
        } else if c == '"' {
            Some((TokenKind::String, rest[1..].find('"').map_or(rest.len(), |i| i + 2)))
        } else if matches!(c, '{' | '}' | '[' | ']') {
            Some((TokenKind::Bracket, 1))
        } else if is_word(c) {
            let len = rest.find(|c: char| !is_word(c)).unwrap_or(rest.len());
            if KEYWORDS.contains(&&rest[..len]) {
                Some((TokenKind::Keyword, len))
            } else if rest[len..].starts_with(':') {
                Some((TokenKind::Property, len))
            } else {
                plain_from.get_or_insert(pos);
                pos += len;
                None
            }
        } else {
            plain_from.get_or_insert(pos);
            pos += c.len_utf8();
            None
        };

        if let Some((kind, len)) = token {
            if let Some(from) = plain_from.take() {
                tokens.push(Token { kind: TokenKind::Plain, text: &line[from..pos] });
            }
            tokens.push(Token { kind, text: &line[pos..pos + len] });
            pos += len;
        }
    }

    if let Some(from) = plain_from {
        tokens.push(Token { kind: TokenKind::Plain, text: &line[from..] });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        highlight(line).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn declaration_line() {
        assert_eq!(
            kinds("const farooq = {"),
            vec![
                (TokenKind::Keyword, "const"),
                (TokenKind::Plain, " farooq = "),
                (TokenKind::Bracket, "{"),
            ]
        );
    }

    #[test]
    fn property_with_string_value() {
        assert_eq!(
            kinds(r#"  name: "Farooq Omar","#),
            vec![
                (TokenKind::Plain, "  "),
                (TokenKind::Property, "name"),
                (TokenKind::Plain, ": "),
                (TokenKind::String, "\"Farooq Omar\""),
                (TokenKind::Plain, ","),
            ]
        );
    }

    #[test]
    fn partial_string_and_comment() {
        assert_eq!(kinds(r#"  "Flutt"#), vec![(TokenKind::Plain, "  "), (TokenKind::String, "\"Flutt")]);
        assert_eq!(kinds("x // note"), vec![(TokenKind::Plain, "x "), (TokenKind::Comment, "// note")]);
    }

    #[test]
    fn tokens_cover_the_line() {
        for line in neonfolio_data::ABOUT_SOURCE.lines() {
            let joined: String = highlight(line).iter().map(|t| t.text).collect();
            assert_eq!(joined, line);
        }
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert_eq!(kinds("constant"), vec![(TokenKind::Plain, "constant")]);
        assert_eq!(kinds("graduation: 2027")[0], (TokenKind::Property, "graduation"));
    }
}
