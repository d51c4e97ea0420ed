use crate::commands::command::InitArgs;
use crate::config::SnippetsConfig;
use crate::error::SnipgenError;
use crate::path_utils::write_creating_parents;
use crate::templates::custom_starter;
use anyhow::Result;

pub fn run(args: &InitArgs, config: &SnippetsConfig) -> Result<()> {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| config.custom_source.clone());

    if path.exists() && !args.force {
        return Err(SnipgenError::OutputExists {
            path: path.display().to_string(),
        }
        .into());
    }

    write_creating_parents(&path, custom_starter())?;
    tracing::info!(path = %path.display(), "wrote custom snippet starter");
    println!("{}", t!("init.created", path = path.display()));
    Ok(())
}
