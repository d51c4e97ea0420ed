//! Field extraction for a single annotation block.
//!
//! The block is tokenized and fed through a small state machine. Each
//! captured span belongs to the tag that is currently open until the next
//! recognized tag or the end of the block. Missing tags leave their field
//! empty; extraction itself never fails.

use crate::snippet::lexer::{Token, tag_name, tokenize};
use crate::snippet::splitter::RawBlock;
use crate::snippet::types::{Diagnostic, DiagnosticKind, SnippetField, SnippetRecord};
use std::ops::Range;

/// Extract the record of `block` with its fields exactly as captured.
pub fn extract_fields(block: &RawBlock<'_>) -> SnippetRecord {
    extract_with_diagnostics(block, 0).0
}

/// Like [`extract_fields`], also reporting what a strict parse would reject.
pub fn extract_with_diagnostics(
    block: &RawBlock<'_>,
    block_index: usize,
) -> (SnippetRecord, Vec<Diagnostic>) {
    let mut machine = FieldMachine::new(block.text);
    for (token, span) in tokenize(block.text) {
        if !machine.feed(token, span) {
            break;
        }
    }
    machine.finish(block, block_index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePhase {
    /// Leading whitespace of a line. It is gutter only if a `*` follows.
    Indent,
    /// Just consumed the gutter `*`; one following space belongs to it.
    Gutter,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Closed,
    Field(SnippetField),
    Discard,
}

struct FieldMachine<'a> {
    text: &'a str,
    phase: LinePhase,
    indent: &'a str,
    previous: Option<Token>,
    slot: Slot,
    prefix: Option<String>,
    description: Option<String>,
    body: Option<String>,
    duplicates: Vec<(SnippetField, usize)>,
}

impl<'a> FieldMachine<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            phase: LinePhase::Indent,
            indent: "",
            previous: None,
            slot: Slot::Closed,
            prefix: None,
            description: None,
            body: None,
            duplicates: Vec::new(),
        }
    }

    /// Returns `false` once the block is closed.
    fn feed(&mut self, token: Token, span: Range<usize>) -> bool {
        let text = self.text;
        let slice = &text[span.clone()];

        match (self.phase, token) {
            (_, Token::Newline) => {
                self.push("\n");
                self.phase = LinePhase::Indent;
                self.indent = "";
                self.previous = Some(token);
                return true;
            }
            (LinePhase::Indent, Token::Space) => {
                self.indent = slice;
                return true;
            }
            (LinePhase::Indent, Token::Star) => {
                self.indent = "";
                self.phase = LinePhase::Gutter;
                self.previous = Some(token);
                return true;
            }
            (LinePhase::Gutter, Token::Space) => {
                self.push(strip_one_blank(slice));
                self.phase = LinePhase::Content;
                self.previous = Some(token);
                return true;
            }
            (LinePhase::Indent, _) => {
                let indent = std::mem::take(&mut self.indent);
                self.push(indent);
                self.phase = LinePhase::Content;
            }
            _ => self.phase = LinePhase::Content,
        }

        match token {
            Token::BlockClose => return false,
            Token::Tag if self.at_boundary() => {
                match SnippetField::from_tag(tag_name(text, &span)) {
                    Some(field) => self.open(field, span.start),
                    None => self.push(slice),
                }
            }
            _ => self.push(slice),
        }

        self.previous = Some(token);
        true
    }

    fn at_boundary(&self) -> bool {
        self.previous.is_none_or(Token::is_boundary)
    }

    fn open(&mut self, field: SnippetField, offset: usize) {
        let target = self.target(field);
        if target.is_some() {
            self.duplicates.push((field, offset));
            self.slot = Slot::Discard;
        } else {
            *target = Some(String::new());
            self.slot = Slot::Field(field);
        }
    }

    fn target(&mut self, field: SnippetField) -> &mut Option<String> {
        match field {
            SnippetField::InvocationKeyword => &mut self.prefix,
            SnippetField::Description => &mut self.description,
            SnippetField::TemplateBody => &mut self.body,
        }
    }

    fn push(&mut self, text: &str) {
        if let Slot::Field(field) = self.slot
            && let Some(buffer) = self.target(field)
        {
            buffer.push_str(text);
        }
    }

    fn finish(self, block: &RawBlock<'_>, block_index: usize) -> (SnippetRecord, Vec<Diagnostic>) {
        let mut kinds = Vec::new();

        let captured_prefix = self.prefix.as_deref().map(normalize).unwrap_or_default();
        let prefix = leading_identifier(&captured_prefix).to_string();
        if prefix.is_empty() && captured_prefix.is_empty() {
            kinds.push((block.offset, DiagnosticKind::MissingPrefix));
        } else if prefix != captured_prefix {
            kinds.push((
                block.offset,
                DiagnosticKind::InvalidPrefix {
                    captured: captured_prefix,
                },
            ));
        }

        let description = self.description.as_deref().map(normalize).unwrap_or_default();
        if description.is_empty() {
            kinds.push((block.offset, DiagnosticKind::MissingDescription));
        }

        let body = self.body.as_deref().map(normalize).unwrap_or_default();
        if body.is_empty() {
            kinds.push((block.offset, DiagnosticKind::MissingBody));
        }

        for (field, offset) in self.duplicates {
            kinds.push((block.offset + offset, DiagnosticKind::DuplicateTag(field)));
        }

        let diagnostics = kinds
            .into_iter()
            .map(|(offset, kind)| Diagnostic {
                block_index,
                offset,
                kind,
            })
            .collect();

        (SnippetRecord::new(prefix, description, body), diagnostics)
    }
}

fn strip_one_blank(space: &str) -> &str {
    space
        .strip_prefix(' ')
        .or_else(|| space.strip_prefix('\t'))
        .unwrap_or(space)
}

/// Right-trim every line, then trim the value as a whole.
fn normalize(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn leading_identifier(value: &str) -> &str {
    let end = value
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(index, _)| index)
        .unwrap_or(value.len());
    &value[..end]
}
