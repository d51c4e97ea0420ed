use crate::commands::command::CheckArgs;
use crate::commands::generate::warn_diagnostics;
use crate::commands::source::{compile_options, load_source, resolve_set};
use crate::config::SnippetsConfig;
use crate::snippet::{Compilation, compile};
use anyhow::Result;

pub fn run(args: &CheckArgs, config: &SnippetsConfig) -> Result<()> {
    let set = resolve_set(&args.source)?;
    let source = load_source(set, args.source.source.as_deref(), config, false)?;
    let compilation = compile(&source.text, &compile_options(&args.source, config))?;

    print_report(set.name(), &compilation);
    warn_diagnostics(&compilation.diagnostics);

    if args.json {
        print!("{}", compilation.catalog.to_json_pretty()?);
    }
    Ok(())
}

fn print_report(set_name: &str, compilation: &Compilation) {
    println!("\n=== {} ===", t!("check.title", set = set_name));
    println!("{}", t!("check.blocks", count = compilation.blocks));
    println!("{}", t!("check.entries", count = compilation.catalog.len()));
    println!(
        "{}",
        t!("check.collisions", count = compilation.catalog.collisions().len())
    );
    println!(
        "{}",
        t!("check.diagnostics", count = compilation.diagnostics.len())
    );

    if !compilation.catalog.is_empty() {
        println!();
        for (key, record) in compilation.catalog.iter() {
            println!("  - {key}: {}", record.description);
        }
    }
}
