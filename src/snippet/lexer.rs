//! Tokenizer for annotated snippet sources.
//!
//! Tokenization is handled entirely by logos. The token set is deliberately
//! coarse: the splitter and the field extractor only need to see block
//! delimiters, tag markers, line structure and "everything else". Text is
//! never copied here; callers slice the source with the returned spans.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("/**")]
    BlockOpen,

    #[token("*/")]
    BlockClose,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Tag,

    #[token("*")]
    Star,

    #[token("\n")]
    Newline,

    #[regex(r"[ \t\r\x0C]+")]
    Space,

    #[regex(r"[^@*/ \t\r\n\x0C]+")]
    Word,

    #[token("/")]
    Slash,

    #[token("@")]
    At,
}

impl Token {
    /// Tokens that may precede a tag marker without gluing onto it.
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            Token::Space | Token::Newline | Token::Star | Token::BlockOpen
        )
    }
}

/// Tokenize `source` into tokens paired with their byte spans.
///
/// Every byte of the input is covered by exactly one span. Input logos cannot
/// match degrades to `Token::Word`.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Word);
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Name of a tag token without the leading `@`.
pub fn tag_name<'a>(source: &'a str, span: &Range<usize>) -> &'a str {
    &source[span.start + 1..span.end]
}
