#![allow(dead_code)]

use snipgen::config::SnippetsConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Snippet sources shared by the integration tests
pub mod test_content {
    /// The single-line scenario with a cursor marker
    pub const INLINE_LOG: &str =
        "/** @prefix tok_log @description console log @body console.log({cursor}); */";

    /// The single-line scenario with a named field marker
    pub const INLINE_CALLBACK: &str =
        "/** @prefix tok_cb @description callback @body const handler{var} = useCallback(()=>{},[]); */";

    /// A gutter-style file mixing prose, an unrelated doc comment and two snippets
    pub const MIXED_FILE: &str = r#"// helper snippets for the team

/**
 * Not a snippet, just documentation.
 */
export const x = 1;

/**
 * @prefix loglog
 * @description console log snippet
 * @code console.log();
 */

/**
 * @prefix useStateSnippet
 * @description state hook
 * @code const [state,setState] = useState();
 */
"#;

    /// Two blocks that share a prefix
    pub const DUPLICATE_PREFIX: &str = r#"
/**
 * @prefix dup
 * @description first
 * @body one();
 */
/**
 * @prefix dup
 * @description second
 * @body two();
 */
"#;
}

pub struct TestEnvironment {
    // TempDir is kept to ensure cleanup happens when TestEnvironment is dropped
    pub(crate) temp_dir: TempDir,
    pub work_dir: PathBuf,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        Self { temp_dir, work_dir }
    }

    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    pub fn create_file(&self, filename: &str, content: &str) -> PathBuf {
        let file_path = self.work_dir.join(filename);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn read(&self, filename: &str) -> String {
        fs::read_to_string(self.work_dir.join(filename)).expect("Failed to read test file")
    }

    /// Snippet settings rooted in this environment instead of the cwd
    pub fn snippets_config(&self) -> SnippetsConfig {
        SnippetsConfig {
            custom_source: self.work_dir.join("customSnippets.ts"),
            output_dir: self.work_dir.join(".vscode"),
            ..SnippetsConfig::default()
        }
    }
}
