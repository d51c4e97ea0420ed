use crate::error::{Result, SnipgenError};
use crate::path_utils::validate_path_str;
use crate::snippet::{CompileOptions, KeyPolicy, ParseMode, PlaceholderStyle};
use crate::snippet::placeholder::DEFAULT_FIELD_TEXT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "SNIPGEN_CONFIG";
pub const ENV_LANG: &str = "SNIPGEN_LANG";
pub const APP_NAME: &str = "snipgen";
pub const LOCAL_CONFIG_FILE: &str = "snipgen.toml";
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_CUSTOM_SOURCE: &str = "customSnippets.ts";
pub const DEFAULT_OUTPUT_DIR: &str = ".vscode";
pub const SNIPPETS_EXTENSION: &str = "code-snippets";
/// Characters that would end or nest a `${N:...}` tab stop.
const RESERVED_FIELD_CHARS: [char; 3] = ['$', '}', '\\'];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub snippets: SnippetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SnippetsConfig {
    /// User-maintained snippet source, relative to the working directory.
    pub custom_source: PathBuf,
    /// Directory that receives `<set>.code-snippets`.
    pub output_dir: PathBuf,
    pub key: KeyPolicy,
    pub strict: bool,
    /// Default text of the `{var}` field.
    pub placeholder_default: String,
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            custom_source: PathBuf::from(DEFAULT_CUSTOM_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            key: KeyPolicy::default(),
            strict: false,
            placeholder_default: DEFAULT_FIELD_TEXT.to_string(),
        }
    }
}

impl SnippetsConfig {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            key_policy: self.key,
            placeholders: PlaceholderStyle::new(self.placeholder_default.clone()),
            mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self
            .placeholder_default
            .chars()
            .find(|c| RESERVED_FIELD_CHARS.contains(c))
        {
            return Err(SnipgenError::Config {
                message: format!(
                    "placeholder-default {:?} must not contain '{c}'",
                    self.placeholder_default
                ),
            });
        }
        Ok(())
    }

    pub fn output_path(&self, set_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{set_name}.{SNIPPETS_EXTENSION}"))
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.snippets.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SnipgenError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load with priority: explicit path, `SNIPGEN_CONFIG`, `./snipgen.toml`,
    /// then the global config file. Falls back to defaults.
    pub fn load_with_priority(cli_override: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let env_override = env::var(ENV_CONFIG).ok();
        let cwd = env::current_dir()?;
        let global = global_config_path();
        Self::load_with(cli_override, env_override.as_deref(), &cwd, global.as_deref())
    }

    pub fn load_with(
        cli_override: Option<&Path>,
        env_override: Option<&str>,
        cwd: &Path,
        global: Option<&Path>,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = cli_override {
            validate_path_str(&path.to_string_lossy()).map_err(|e| SnipgenError::Config {
                message: e,
            })?;
            return Ok((Self::load_file(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        if let Some(value) = env_override {
            validate_path_str(value).map_err(|e| SnipgenError::Config {
                message: format!("{ENV_CONFIG}: {e}"),
            })?;
            let path = PathBuf::from(value);
            return Ok((Self::load_file(&path)?, ConfigSource::Env(path)));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load_file(&local)?, ConfigSource::Local(local)));
        }

        if let Some(global) = global.filter(|path| path.is_file()) {
            return Ok((
                Self::load_file(global)?,
                ConfigSource::Global(global.to_path_buf()),
            ));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILE))
}
