//! CLI Adapter.

mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::commands::generate;
use crate::app::{AppContext, api, logging};
use crate::domain::{AppError, ComponentSpec, ConfigOverrides, TemplateKind};
use crate::services::{EmbeddedPromptTemplates, FilesystemArtifactStore, read_component_spec};
use session::{DialoguerInput, SessionInput, run_session};

#[derive(Parser)]
#[command(name = "tsxgen")]
#[command(version)]
#[command(
    about = "Generate React/TypeScript components from a short brief using a chat-completion model",
    long_about = None
)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a component (interactive unless --spec is given)
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Print the composed prompt without calling the model
    #[clap(visible_alias = "p")]
    Prompt(PromptArgs),
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Read the component brief from a TOML, YAML or JSON file
    #[arg(short, long)]
    spec: Option<PathBuf>,
    /// Use a canned completion instead of calling the API
    #[arg(long)]
    mock: bool,
    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Default)]
struct PromptArgs {
    /// Read the component brief from a TOML, YAML or JSON file
    #[arg(short, long)]
    spec: Option<PathBuf>,
    /// Config file (defaults to ./tsxgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Prompt template: basic or robust
    #[arg(short, long)]
    template: Option<TemplateKind>,
}

#[derive(Args, Default)]
struct SettingsArgs {
    /// Config file (defaults to ./tsxgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Prompt template: basic or robust
    #[arg(short, long)]
    template: Option<TemplateKind>,
    /// Model identifier
    #[arg(short, long)]
    model: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    temperature: Option<f32>,
    /// Directory the component file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl SettingsArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            temperature: self.temperature,
            template: self.template,
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    {
        Commands::Generate(args) => run_generate(args),
        Commands::Prompt(args) => run_prompt(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = api::load_settings(args.settings.config.as_deref(), args.settings.overrides())?;
    let client = api::connect(&config.generation, args.mock)?;
    let ctx = AppContext::new(
        client,
        FilesystemArtifactStore::current()?,
        EmbeddedPromptTemplates::new(),
    );

    if let Some(path) = args.spec {
        let spec = read_component_spec(&path)?;
        let outcome = generate::execute(&ctx, &spec, &config)?;
        println!("✅ Component saved to {} ({} bytes)", outcome.path.display(), outcome.bytes);
        return Ok(());
    }

    let summary = run_session(&ctx, &config, &DialoguerInput)?;
    if summary.generated.len() > 1 || summary.failed_attempts > 0 {
        println!(
            "Generated {} component(s), {} failed attempt(s)",
            summary.generated.len(),
            summary.failed_attempts
        );
    }
    Ok(())
}

fn run_prompt(args: PromptArgs) -> Result<(), AppError> {
    let overrides = ConfigOverrides { template: args.template, ..Default::default() };
    let config = api::load_settings(args.config.as_deref(), overrides)?;

    let spec: ComponentSpec = match args.spec {
        Some(path) => read_component_spec(&path)?,
        None => match DialoguerInput.component_spec()? {
            Some(spec) => spec,
            None => return Ok(()),
        },
    };

    let prompt = api::compose(&spec, config.generation.template)?;
    println!("{}", prompt.content);
    Ok(())
}
