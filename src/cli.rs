use crate::commands::command::{CheckArgs, GenArgs, InitArgs};
use crate::config::{Config, ConfigSource};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file (default: ./snipgen.toml, then the global config)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the resolved configuration source and exit
    #[arg(long)]
    pub print_config_path: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a snippet set into a .code-snippets file
    #[command(alias = "gen:snippet")]
    Gen(GenArgs),
    /// Write the starter custom snippet file
    Init(InitArgs),
    /// Compile without writing and report problems
    Check(CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    dispatch(&cli)
}

pub fn dispatch(cli: &Cli) -> Result<()> {
    let (config, source) = Config::load_with_priority(cli.config.as_deref())?;
    tracing::debug!(?source, "loaded configuration");

    if cli.print_config_path {
        match source {
            ConfigSource::Explicit(path)
            | ConfigSource::Env(path)
            | ConfigSource::Local(path)
            | ConfigSource::Global(path) => println!("{}", path.display()),
            ConfigSource::Defaults => println!("{}", t!("messages.config_defaults")),
        }
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Gen(args) => crate::commands::generate::run(args, &config.snippets),
        Commands::Init(args) => crate::commands::init::run(args, &config.snippets),
        Commands::Check(args) => crate::commands::check::run(args, &config.snippets),
    }
}
