//! Rewrites authoring placeholders into VS Code tab stops.
//!
//! - `{cursor}` becomes the final tab stop `$0`.
//! - `{var}` becomes `${N:<default>}`; every occurrence in one body shares N.
//! - `{var:label}` becomes `${M:label}`; one index per distinct label.
//!
//! Indices are handed out in order of first appearance, starting at 1, and
//! are scoped to a single body.

use crate::snippet::types::SnippetRecord;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const CURSOR_MARKER: &str = "{cursor}";
pub const FIELD_MARKER: &str = "{var}";
pub const FINAL_TAB_STOP: &str = "$0";
pub const DEFAULT_FIELD_TEXT: &str = "custom";
pub const FIRST_FIELD_INDEX: usize = 1;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(?:(cursor)|var(?::([A-Za-z_][A-Za-z0-9_]*))?)\}")
        .expect("placeholder marker regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderStyle {
    /// Default text of the unlabelled `{var}` field.
    pub default_text: String,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            default_text: DEFAULT_FIELD_TEXT.to_string(),
        }
    }
}

impl PlaceholderStyle {
    pub fn new(default_text: impl Into<String>) -> Self {
        Self {
            default_text: default_text.into(),
        }
    }

    pub fn transform_body(&self, body: &str) -> String {
        let mut fields = FieldIndices::default();
        MARKER_RE
            .replace_all(body, |caps: &Captures<'_>| {
                if caps.get(1).is_some() {
                    return FINAL_TAB_STOP.to_string();
                }
                let label = caps.get(2).map(|m| m.as_str());
                let index = fields.index_of(label);
                let text = label.unwrap_or(&self.default_text);
                format!("${{{index}:{text}}}")
            })
            .into_owned()
    }

    pub fn transform_record(&self, record: SnippetRecord) -> SnippetRecord {
        SnippetRecord {
            body: record
                .body
                .iter()
                .map(|line| self.transform_body(line))
                .collect(),
            ..record
        }
    }
}

/// Per-body allocation of linked tab-stop indices. `None` is the unlabelled
/// `{var}` marker.
#[derive(Debug, Default)]
struct FieldIndices {
    seen: Vec<Option<String>>,
}

impl FieldIndices {
    fn index_of(&mut self, label: Option<&str>) -> usize {
        let position = self
            .seen
            .iter()
            .position(|seen| seen.as_deref() == label)
            .unwrap_or_else(|| {
                self.seen.push(label.map(str::to_string));
                self.seen.len() - 1
            });
        FIRST_FIELD_INDEX + position
    }
}

/// Transform with the default style.
pub fn transform_body(body: &str) -> String {
    PlaceholderStyle::default().transform_body(body)
}
