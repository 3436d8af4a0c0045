use logos::Logos;

/// Lexes one sentence of a normalized description (plain text plus the
/// canonical `<em>` and `<a href="...">` spans `description` emits) into
/// parts the return-type inference can search.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[regex(r"<em>[^<]*</em>")]
    Italic,
    #[regex(r#"<a href="[^"]*">[^<]*</a>"#)]
    Anchor,
    #[regex(r"[^<\s]+")]
    Word,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub inner: String,
    pub kind: PartKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartKind {
    Word,
    Italic,
    /// `href` of the link the part came from.
    Anchor(String),
}

impl Part {
    fn word(lexeme: &str) -> Option<Self> {
        let inner = lexeme.trim_matches(|c: char| c.is_ascii_punctuation());
        if inner.is_empty() {
            return None;
        }
        Some(Self {
            inner: inner.to_string(),
            kind: PartKind::Word,
        })
    }

    fn italic(lexeme: &str) -> Option<Self> {
        let inner = lexeme
            .strip_prefix("<em>")?
            .strip_suffix("</em>")?
            .trim()
            .to_string();
        Some(Self {
            inner,
            kind: PartKind::Italic,
        })
    }

    fn anchor(lexeme: &str) -> Option<Self> {
        let href = lexeme.strip_prefix("<a href=\"")?;
        let quote = href.find('"')?;
        let rest = &href[quote + 1..];
        let inner = rest.strip_prefix('>')?.strip_suffix("</a>")?;
        Some(Self {
            inner: inner.trim().to_string(),
            kind: PartKind::Anchor(href[..quote].to_string()),
        })
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == PartKind::Word && self.inner.eq_ignore_ascii_case(word)
    }
}

#[derive(Debug)]
pub struct Sentence {
    pub parts: Vec<Part>,
}

impl Sentence {
    pub fn parse(text: &str) -> Self {
        let mut parts = Vec::new();

        for (token, span) in Token::lexer(text).spanned() {
            let lexeme = &text[span];
            let part = match token {
                Ok(Token::Word) => Part::word(lexeme),
                Ok(Token::Italic) => Part::italic(lexeme),
                Ok(Token::Anchor) => Part::anchor(lexeme),
                // Stray markup the description extractor never produces.
                Err(()) => None,
            };
            parts.extend(part);
        }

        Self { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_trimmed_of_punctuation() {
        let sentence = Sentence::parse("Returns True on success.");
        assert_eq!(sentence.parts.len(), 4);
        assert_eq!(sentence.parts[3].inner, "success");
        assert!(sentence.parts[1].is_word("true"));
    }

    #[test]
    fn italic_span() {
        let sentence = Sentence::parse("Returns <em>True</em> on success");
        assert_eq!(
            sentence.parts[1],
            Part {
                inner: "True".to_string(),
                kind: PartKind::Italic,
            }
        );
    }

    #[test]
    fn anchor_span_keeps_href() {
        let sentence = Sentence::parse(r##"the sent <a href="#message">Message</a> is returned"##);
        assert_eq!(
            sentence.parts[2],
            Part {
                inner: "Message".to_string(),
                kind: PartKind::Anchor("#message".to_string()),
            }
        );
    }

    #[test]
    fn multi_word_emphasis_kept_whole() {
        let sentence = Sentence::parse("Returns an <em>Array of Update</em> objects");
        assert_eq!(sentence.parts[2].inner, "Array of Update");
        assert_eq!(sentence.parts[2].kind, PartKind::Italic);
    }
}
