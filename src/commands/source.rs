use crate::commands::command::SourceArgs;
use crate::config::SnippetsConfig;
use crate::error::{Result, SnipgenError};
use crate::interactive::{is_interactive, select_template_set};
use crate::path_utils::write_creating_parents;
use crate::snippet::{CompileOptions, ParseMode};
use crate::templates::TemplateSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the text being compiled came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    Builtin(TemplateSet),
    File(PathBuf),
    /// The custom file was missing and has just been created from the
    /// starter set.
    Seeded(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SnippetSource {
    pub set: TemplateSet,
    pub text: String,
    pub origin: SourceOrigin,
}

/// Resolve the set: the flag, else `custom` for an explicit source file,
/// else an interactive prompt.
pub fn resolve_set(args: &SourceArgs) -> Result<TemplateSet> {
    match (args.set, &args.source) {
        (Some(set), _) => Ok(set),
        (None, Some(_)) => Ok(TemplateSet::Custom),
        (None, None) => select_template_set(is_interactive()),
    }
}

/// Read the source for `set`. A missing custom file is seeded from the
/// starter set when `seed_missing` is true; otherwise the starter text is
/// compiled without touching the disk.
pub fn load_source(
    set: TemplateSet,
    explicit: Option<&Path>,
    config: &SnippetsConfig,
    seed_missing: bool,
) -> Result<SnippetSource> {
    if let Some(path) = explicit {
        return Ok(SnippetSource {
            set,
            text: read_source(path)?,
            origin: SourceOrigin::File(path.to_path_buf()),
        });
    }

    match set {
        TemplateSet::Default => Ok(SnippetSource {
            set,
            text: set.builtin_source().to_string(),
            origin: SourceOrigin::Builtin(set),
        }),
        TemplateSet::Custom => {
            let path = &config.custom_source;
            if path.is_file() {
                return Ok(SnippetSource {
                    set,
                    text: read_source(path)?,
                    origin: SourceOrigin::File(path.clone()),
                });
            }

            let text = set.builtin_source().to_string();
            if !seed_missing {
                return Ok(SnippetSource {
                    set,
                    text,
                    origin: SourceOrigin::Builtin(set),
                });
            }

            write_creating_parents(path, &text)?;
            tracing::info!(path = %path.display(), "seeded custom snippet source");
            Ok(SnippetSource {
                set,
                text,
                origin: SourceOrigin::Seeded(path.clone()),
            })
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(SnipgenError::SourceNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Config defaults with the command-line overrides applied.
pub fn compile_options(args: &SourceArgs, config: &SnippetsConfig) -> CompileOptions {
    let mut options = config.compile_options();
    if let Some(key) = args.key {
        options.key_policy = key;
    }
    if args.strict {
        options.mode = ParseMode::Strict;
    }
    options
}
