mod common;

use common::test_content;
use snipgen::snippet::extract::extract_fields;
use snipgen::snippet::splitter::split_blocks;
use snipgen::snippet::{
    CompileOptions, DiagnosticKind, KeyPolicy, ParseMode, RawBlock, SnippetCatalog,
    SnippetRecord, compile,
};

fn compile_default(source: &str) -> snipgen::snippet::Compilation {
    compile(source, &CompileOptions::default()).expect("lenient compile never fails")
}

/// A placeholder-free block comes out exactly as written
#[test]
fn test_well_formed_block_yields_exact_record() {
    let out = compile_default("/** @prefix K @description D @body doThing(); */");
    assert_eq!(out.catalog.len(), 1);
    assert_eq!(
        out.catalog.get("K"),
        Some(&SnippetRecord::new("K", "D", "doThing();"))
    );
}

/// The extractor never drops a block for lacking @prefix
#[test]
fn test_block_without_prefix_still_yields_record() {
    let record = extract_fields(&RawBlock::new(" @description lonely @body x(); ", 0));
    assert_eq!(record, SnippetRecord::new("", "lonely", "x();"));
}

/// Cursor scenario, keyed by the canonical prefix
#[test]
fn test_inline_cursor_scenario() {
    let out = compile_default(test_content::INLINE_LOG);
    let json = out.catalog.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tok_log": {
                "prefix": "tok_log",
                "description": "console log",
                "body": ["console.log($0);"]
            }
        })
    );
}

/// Same scenario under the legacy description key
#[test]
fn test_inline_cursor_scenario_keyed_by_description() {
    let options = CompileOptions {
        key_policy: KeyPolicy::Description,
        ..CompileOptions::default()
    };
    let out = compile(test_content::INLINE_LOG, &options).unwrap();
    assert_eq!(out.catalog.keys().collect::<Vec<_>>(), vec!["console log"]);
    assert_eq!(
        out.catalog.get("console log").unwrap().body,
        vec!["console.log($0);".to_string()]
    );
}

#[test]
fn test_inline_named_field_scenario() {
    let out = compile_default(test_content::INLINE_CALLBACK);
    let body = out.catalog.get("tok_cb").unwrap().template_body().to_string();
    assert_eq!(body, "const handler${1:custom} = useCallback(()=>{},[]);");
    assert_eq!(body.matches("${1:custom}").count(), 1);
}

#[test]
fn test_two_cursor_markers_share_final_stop() {
    let out = compile_default("/** @prefix two @description d @body f({cursor}); g({cursor}); */");
    assert_eq!(
        out.catalog.get("two").unwrap().template_body(),
        "f($0); g($0);"
    );
}

/// Three markers in one block share an index; the next block starts over
#[test]
fn test_named_field_numbering_is_per_block() {
    let source = "/** @prefix a @description d @body {var}.x = {var}.y + {var}; */\n\
                  /** @prefix b @description e @body let {var}; */";
    let out = compile_default(source);
    let first = out.catalog.get("a").unwrap().template_body();
    assert_eq!(first, "${1:custom}.x = ${1:custom}.y + ${1:custom};");
    assert_eq!(out.catalog.get("b").unwrap().template_body(), "let ${1:custom};");
}

#[test]
fn test_same_key_later_block_wins() {
    let out = compile_default(test_content::DUPLICATE_PREFIX);
    assert_eq!(out.catalog.len(), 1);
    assert_eq!(out.catalog.get("dup").unwrap().description, "second");
    assert_eq!(out.catalog.collisions().len(), 1);
    assert!(out.diagnostics.iter().any(|d| matches!(
        &d.kind,
        DiagnosticKind::KeyCollision { key } if key == "dup"
    )));
}

#[test]
fn test_strict_mode_rejects_collisions() {
    let options = CompileOptions {
        mode: ParseMode::Strict,
        ..CompileOptions::default()
    };
    assert!(compile(test_content::DUPLICATE_PREFIX, &options).is_err());
    assert!(compile(test_content::INLINE_LOG, &options).is_ok());
}

#[test]
fn test_catalog_json_round_trip() {
    let out = compile_default(test_content::MIXED_FILE);
    let json = out.catalog.to_json_pretty().unwrap();
    let parsed = SnippetCatalog::from_json(&json).unwrap();
    assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["loglog", "useStateSnippet"]);
    for (key, record) in out.catalog.iter() {
        assert_eq!(parsed.get(key), Some(record));
    }
}

#[test]
fn test_mixed_file_skips_non_snippet_comments() {
    assert_eq!(split_blocks(test_content::MIXED_FILE).len(), 2);
    let out = compile_default(test_content::MIXED_FILE);
    assert_eq!(
        out.catalog.get("useStateSnippet").unwrap().template_body(),
        "const [state,setState] = useState();"
    );
}

#[test]
fn test_multi_line_body_stays_one_element() {
    let source = "/**\n * @prefix comp\n * @description component\n * @body export function {var:Name}() {\n *   return <div>{cursor}</div>;\n * }\n */";
    let out = compile_default(source);
    let record = out.catalog.get("comp").unwrap();
    assert_eq!(record.body.len(), 1);
    assert_eq!(
        record.body[0],
        "export function ${1:Name}() {\n  return <div>$0</div>;\n}"
    );
}

#[test]
fn test_empty_source() {
    let out = compile_default("");
    assert_eq!(out.blocks, 0);
    assert!(out.catalog.is_empty());
    assert!(out.diagnostics.is_empty());
}
