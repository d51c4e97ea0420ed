use crate::commands::command::GenArgs;
use crate::commands::source::{SourceOrigin, compile_options, load_source, resolve_set};
use crate::config::SnippetsConfig;
use crate::path_utils::write_creating_parents;
use crate::snippet::{Compilation, Diagnostic, compile};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(args: &GenArgs, config: &SnippetsConfig) -> Result<()> {
    let set = resolve_set(&args.source)?;
    let source = load_source(set, args.source.source.as_deref(), config, true)?;

    if let SourceOrigin::Seeded(path) = &source.origin {
        let notice = t!("gen.seeded_custom", path = path.display());
        // stdout carries only the catalog under --stdout
        if args.stdout {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }

    let options = compile_options(&args.source, config);
    let compilation = compile(&source.text, &options)?;
    warn_diagnostics(&compilation.diagnostics);

    let json = compilation.catalog.to_json_pretty()?;
    if args.stdout {
        print!("{json}");
        return Ok(());
    }

    let output = output_path(args, config, set.name());
    write_creating_parents(&output, &json)?;
    tracing::info!(
        path = %output.display(),
        entries = compilation.catalog.len(),
        "wrote snippet catalog"
    );
    print_summary(&compilation, &output);
    Ok(())
}

fn output_path(args: &GenArgs, config: &SnippetsConfig, set_name: &str) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| config.output_path(set_name))
}

fn print_summary(compilation: &Compilation, output: &Path) {
    println!(
        "{}",
        t!(
            "gen.saved",
            count = compilation.catalog.len(),
            path = output.display()
        )
    );
}

pub fn warn_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        tracing::warn!(
            block = diagnostic.block_index,
            offset = diagnostic.offset,
            "{diagnostic}"
        );
    }
}
