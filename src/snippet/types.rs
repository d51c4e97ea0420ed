use serde::{Deserialize, Serialize};
use std::fmt;

pub const PREFIX_TAG: &str = "prefix";
pub const DESCRIPTION_TAG: &str = "description";
pub const BODY_TAG: &str = "body";
pub const CODE_TAG: &str = "code";

/// The three fields a snippet block can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetField {
    InvocationKeyword,
    Description,
    TemplateBody,
}

impl SnippetField {
    /// Maps a tag name (without `@`) to its field. `body` and `code` are
    /// two spellings of the same field.
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            PREFIX_TAG => Some(Self::InvocationKeyword),
            DESCRIPTION_TAG => Some(Self::Description),
            BODY_TAG | CODE_TAG => Some(Self::TemplateBody),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::InvocationKeyword => PREFIX_TAG,
            Self::Description => DESCRIPTION_TAG,
            Self::TemplateBody => BODY_TAG,
        }
    }
}

impl fmt::Display for SnippetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.tag())
    }
}

/// One entry of a `.code-snippets` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub prefix: String,
    pub description: String,
    pub body: Vec<String>,
}

impl SnippetRecord {
    pub fn new(
        prefix: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            description: description.into(),
            body: vec![body.into()],
        }
    }

    /// The template text. Bodies are always a single string; multi-line
    /// templates keep their newlines inside it.
    pub fn template_body(&self) -> &str {
        self.body.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingPrefix,
    MissingDescription,
    MissingBody,
    InvalidPrefix { captured: String },
    DuplicateTag(SnippetField),
    KeyCollision { key: String },
}

/// Something a lenient parse tolerated and a strict parse rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub block_index: usize,
    pub offset: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block #{} (byte {}): ", self.block_index + 1, self.offset)?;
        match &self.kind {
            DiagnosticKind::MissingPrefix => write!(f, "missing @prefix"),
            DiagnosticKind::MissingDescription => write!(f, "missing @description"),
            DiagnosticKind::MissingBody => write!(f, "missing @body/@code"),
            DiagnosticKind::InvalidPrefix { captured } => {
                write!(f, "@prefix is not an identifier: {captured:?}")
            }
            DiagnosticKind::DuplicateTag(field) => write!(f, "{field} given more than once"),
            DiagnosticKind::KeyCollision { key } => {
                write!(f, "key {key:?} overwrites an earlier snippet")
            }
        }
    }
}
