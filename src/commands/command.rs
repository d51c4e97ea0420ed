use crate::snippet::KeyPolicy;
use crate::templates::TemplateSet;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Template set to compile (prompted for when omitted)
    #[arg(long, short = 's', value_enum)]
    pub set: Option<TemplateSet>,

    /// Compile this file instead of the set's usual source
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Field used as the catalog key (default from config: prefix)
    #[arg(long, short = 'k', value_enum)]
    pub key: Option<KeyPolicy>,

    /// Reject incomplete blocks and duplicate keys instead of warning
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (default: <output-dir>/<set>.code-snippets)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the catalog to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Where to write the starter file (default from config: customSnippets.ts)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the compiled catalog as JSON after the summary
    #[arg(long)]
    pub json: bool,
}
