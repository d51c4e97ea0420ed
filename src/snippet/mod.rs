//! Annotation-block parsing and catalog assembly.
//!
//! `compile` runs the whole pipeline: split the source into blocks, extract
//! each block's fields, rewrite placeholders, then fold the records into a
//! catalog keyed by the chosen policy.

pub mod catalog;
pub mod extract;
pub mod lexer;
pub mod placeholder;
pub mod splitter;
pub mod types;

pub use catalog::{KeyCollision, KeyPolicy, SnippetCatalog};
pub use placeholder::PlaceholderStyle;
pub use splitter::RawBlock;
pub use types::{Diagnostic, DiagnosticKind, SnippetField, SnippetRecord};

use crate::error::{Result, SnipgenError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Incomplete blocks become incomplete entries.
    #[default]
    Lenient,
    /// Any diagnostic, key collisions included, fails the compile.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub key_policy: KeyPolicy,
    pub placeholders: PlaceholderStyle,
    pub mode: ParseMode,
}

#[derive(Debug, Clone)]
pub struct Compilation {
    pub catalog: SnippetCatalog,
    pub diagnostics: Vec<Diagnostic>,
    pub blocks: usize,
}

pub fn compile(source: &str, options: &CompileOptions) -> Result<Compilation> {
    let blocks = splitter::split_blocks(source);
    tracing::debug!(blocks = blocks.len(), "split snippet source");

    let mut diagnostics = Vec::new();
    let mut records = Vec::with_capacity(blocks.len());
    let mut offsets = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        let (record, found) = extract::extract_with_diagnostics(block, index);
        tracing::debug!(index, prefix = %record.prefix, "extracted snippet block");
        diagnostics.extend(found);
        offsets.push(block.offset);
        records.push(options.placeholders.transform_record(record));
    }

    let catalog = SnippetCatalog::assemble(records, options.key_policy);
    diagnostics.extend(catalog.collisions().iter().map(|collision| Diagnostic {
        block_index: collision.by,
        offset: offsets[collision.by],
        kind: DiagnosticKind::KeyCollision {
            key: collision.key.clone(),
        },
    }));
    diagnostics.sort_by_key(|diagnostic| (diagnostic.block_index, diagnostic.offset));

    if options.mode == ParseMode::Strict && !diagnostics.is_empty() {
        return Err(SnipgenError::StrictViolations {
            count: diagnostics.len(),
            details: diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        });
    }

    Ok(Compilation {
        catalog,
        diagnostics,
        blocks: blocks.len(),
    })
}
