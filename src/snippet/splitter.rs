use crate::snippet::lexer::{Token, tag_name, tokenize};
use crate::snippet::types::PREFIX_TAG;
use std::ops::Range;

/// A slice of source text believed to hold one template definition.
///
/// `text` is the content between the opening `/**` and the block end (the
/// first `*/`, the next `/**`, or end of input), delimiters excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> RawBlock<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }
}

/// Split `source` into the blocks whose first significant content is the
/// `@prefix` tag. Everything else (prose, unrelated doc comments) is dropped.
pub fn split_blocks(source: &str) -> Vec<RawBlock<'_>> {
    let tokens = tokenize(source);
    let mut blocks = Vec::new();

    let opens: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, (token, _))| *token == Token::BlockOpen)
        .map(|(index, _)| index)
        .collect();

    for (nth, &open) in opens.iter().enumerate() {
        let next_open = opens.get(nth + 1).copied().unwrap_or(tokens.len());
        let segment = &tokens[open + 1..next_open];

        let start = tokens[open].1.end;
        let end = segment
            .iter()
            .find(|(token, _)| *token == Token::BlockClose)
            .map(|(_, span)| span.start)
            .unwrap_or_else(|| segment_end(source, &tokens, next_open));

        if starts_with_prefix_tag(source, segment) {
            blocks.push(RawBlock::new(&source[start..end], start));
        }
    }

    blocks
}

fn segment_end(source: &str, tokens: &[(Token, Range<usize>)], next_open: usize) -> usize {
    tokens
        .get(next_open)
        .map(|(_, span)| span.start)
        .unwrap_or(source.len())
}

fn starts_with_prefix_tag(source: &str, segment: &[(Token, Range<usize>)]) -> bool {
    segment
        .iter()
        .find(|(token, _)| !matches!(token, Token::Space | Token::Newline | Token::Star))
        .is_some_and(|(token, span)| *token == Token::Tag && tag_name(source, span) == PREFIX_TAG)
}
