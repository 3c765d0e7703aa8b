use agentforge::config::Config;
use agentforge::framework::{profile, Framework};
use agentforge::llm::ProviderKind;
use agentforge::pipeline::{GenerationRequest, Pipeline};
use agentforge::syntax::SyntaxCheck;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Agentforge - LLM-backed agent-framework boilerplate generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate agent boilerplate for a task description
    Generate {
        /// What the agent system should do
        task: String,

        /// Target framework: langgraph, crewai or autogen
        #[arg(long, short = 'f')]
        framework: String,

        /// LLM provider: gemini, openai or anthropic
        #[arg(long, short = 'p')]
        provider: Option<String>,

        /// Model name (defaults to the provider's default model)
        #[arg(long, short = 'm')]
        model: Option<String>,

        /// Sampling temperature in [0, 1]
        #[arg(long, short = 't')]
        temperature: Option<f32>,

        /// Provider API key (falls back to config, then the provider's
        /// environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Directory the code and requirements files are written to
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Config directory (contains agentforge.toml)
        #[arg(long, short = 'c', default_value = ".")]
        config_dir: PathBuf,

        /// Skip the compile-only syntax verification
        #[arg(long)]
        no_syntax_check: bool,

        /// Skip the pip install line
        #[arg(long)]
        no_deps: bool,
    },

    /// List the supported frameworks, their templates and dependencies
    Frameworks,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging with RUST_LOG environment variable
    // Default to "warn" if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Generate {
            task,
            framework,
            provider,
            model,
            temperature,
            api_key,
            out,
            config_dir,
            no_syntax_check,
            no_deps,
        } => {
            generate_command(GenerateOptions {
                task,
                framework,
                provider,
                model,
                temperature,
                api_key,
                out,
                config_dir,
                no_syntax_check,
                no_deps,
            })
            .await
        }
        Commands::Frameworks => {
            frameworks_command();
            Ok(())
        }
    }
}

struct GenerateOptions {
    task: String,
    framework: String,
    provider: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    api_key: Option<String>,
    out: Option<PathBuf>,
    config_dir: PathBuf,
    no_syntax_check: bool,
    no_deps: bool,
}

async fn generate_command(options: GenerateOptions) -> Result<()> {
    info!("Loading configuration from: {}", options.config_dir.display());
    let config = Config::load_or_default(&options.config_dir)?;

    let framework: Framework = options.framework.parse().map_err(anyhow::Error::msg)?;

    let provider: ProviderKind = options
        .provider
        .or_else(|| config.provider.clone())
        .unwrap_or_else(|| "gemini".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let model = options
        .model
        .or_else(|| config.model.clone())
        .unwrap_or_else(|| provider.default_model().to_string());
    if !provider.supported_models().contains(&model.as_str()) {
        bail!(
            "Model '{}' is not supported by {} (expected one of: {})",
            model,
            provider,
            provider.supported_models().join(", ")
        );
    }

    let request = GenerationRequest {
        task_description: options.task,
        framework,
        provider,
        model,
        temperature: options.temperature.or(config.temperature).unwrap_or(0.5),
        api_key: options
            .api_key
            .or_else(|| config.get_api_key(provider))
            .unwrap_or_default(),
    };

    // Surface missing inputs before the provider is contacted
    request.validate()?;

    let pipeline = Pipeline::new()?.with_syntax_check(!options.no_syntax_check);
    let artifact = pipeline.run(&request).await?;

    if !artifact.validation_passed {
        eprintln!(
            "The generated code doesn't match the expected structure for {}.",
            framework
        );
        eprintln!("Here's the generated code for reference:\n");
        eprintln!("{}\n", artifact.sanitized_text);
        eprintln!(
            "For {framework}, the code should include:\n\
             - Proper imports for the {framework} framework\n\
             - Correct class usage as specified in the instructions\n\n\
             You may want to try:\n\
             1. Adjusting your prompt to be more specific\n\
             2. Lowering the temperature value\n\
             3. Trying a different model"
        );
        bail!("structural validation failed for {}", framework);
    }

    println!("{}", artifact.sanitized_text);

    match &artifact.syntax {
        Some(SyntaxCheck::Valid) => eprintln!("\nSyntax check passed"),
        Some(SyntaxCheck::SyntaxError(diagnostic)) => {
            eprintln!("\nSyntax Error: {}", diagnostic)
        }
        Some(SyntaxCheck::ToolError(message)) => {
            eprintln!("\nSyntax check could not run: {}", message)
        }
        None => {}
    }

    let dependencies = profile(framework).requirements();
    if !options.no_deps {
        eprint!("\npip install {}", dependencies);
    }

    let out_dir = options
        .out
        .or_else(|| config.out_dir.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)?;

    let code_path = out_dir.join(framework.artifact_file_name());
    fs::write(&code_path, &artifact.sanitized_text)?;
    fs::write(out_dir.join("requirements.txt"), dependencies)?;

    info!("Artifacts written to: {}", out_dir.display());

    Ok(())
}

fn frameworks_command() {
    for framework in Framework::ALL {
        let profile = profile(framework);
        println!("{}: {}", framework, profile.info);
        println!("  Quick start templates:");
        for template in profile.templates {
            println!("    {} - {}", template.name, template.description);
        }
        println!("  Dependencies: {}", profile.dependencies().join(" "));
        println!();
    }
}
