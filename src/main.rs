//! ai-explorer CLI entrypoint
//! Parses command-line arguments and dispatches to the prompt renderer.
#![deny(unsafe_code)]
mod application;
mod generation;
mod infrastructure;
mod resources;

// Internal imports (std, crate)
use application::{PromptCommand, PromptOptions, PromptRenderer};
use resources::layout::HELP_EXAMPLES_PATH;
use resources::paths::PathOverrides;
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ai-explorer")]
#[command(author, version, about = "Prompt generation CLI", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate prompt from a category (folder), topic, and config YAML
    Prompt(PromptArgs),
}

#[derive(clap::Args, Debug)]
pub struct PromptArgs {
    /// Base folder for prompt templates (default: topics)
    #[arg(long)]
    category: Option<String>,
    /// Topic name, used to infer default paths (default: git)
    #[arg(long)]
    topic: Option<String>,
    /// Path to template YAML
    #[arg(short = 't', long)]
    template: Option<PathBuf>,
    /// Path to config YAML
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Path to output file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Print output to stdout instead of writing to file
    #[arg(long)]
    preview: bool,
    /// User query to inject into template context
    #[arg(short = 'q', long = "query")]
    query: Option<String>,
}

impl From<PromptArgs> for PromptOptions {
    fn from(args: PromptArgs) -> Self {
        Self {
            category: args.category,
            topic: args.topic,
            overrides: PathOverrides {
                template: args.template,
                config: args.config,
                output: args.output,
            },
            preview: args.preview,
            user_query: args.query,
        }
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments, appending usage examples to `prompt --help` when the
/// examples file is present in the working directory.
fn parse_cli() -> Cli {
    let mut command = Cli::command();
    if let Ok(examples) = std::fs::read_to_string(HELP_EXAMPLES_PATH) {
        command = command.mut_subcommand("prompt", |prompt| prompt.after_help(examples));
    }

    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Log to stderr so previews on stdout stay clean
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prompt(args) => run_prompt(args.into()),
    }
}

/// Runtime handler for the prompt command
fn run_prompt(options: PromptOptions) -> anyhow::Result<()> {
    let renderer = PromptRenderer::with_filesystem();
    let stdout = std::io::stdout();
    let mut command = PromptCommand::new(stdout.lock(), &renderer);

    let request = command
        .run(&options)
        .context("Failed to generate prompt")?;

    debug!(
        template = %request.template_path.display(),
        config = %request.config_path.display(),
        preview = request.output_path.is_none(),
        "Prompt command finished"
    );
    Ok(())
}
