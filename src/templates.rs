use crate::error::SnipgenError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// The two snippet sets `gen` can compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateSet {
    /// Built-in React hook snippets
    Default,
    /// The project's own snippet file
    Custom,
}

impl TemplateSet {
    pub const ALL: [TemplateSet; 2] = [TemplateSet::Default, TemplateSet::Custom];

    pub fn name(self) -> &'static str {
        match self {
            TemplateSet::Default => "default",
            TemplateSet::Custom => "custom",
        }
    }

    /// Embedded source of the set. For `Custom` this is the starter file
    /// written when the project has none yet.
    pub fn builtin_source(self) -> &'static str {
        match self {
            TemplateSet::Default => default_snippets(),
            TemplateSet::Custom => custom_starter(),
        }
    }
}

impl fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateSet {
    type Err = SnipgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateSet::ALL
            .into_iter()
            .find(|set| set.name() == s.trim())
            .ok_or_else(|| SnipgenError::InvalidTemplateSet {
                name: s.to_string(),
            })
    }
}

pub fn default_snippets() -> &'static str {
    include_str!("../templates/snippets/default.snippets.ts")
}

pub fn custom_starter() -> &'static str {
    include_str!("../templates/snippets/custom.snippets.ts")
}
