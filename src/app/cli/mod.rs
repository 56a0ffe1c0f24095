//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;
use crate::{GenerateOptions, GlobalOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "copydeck")]
#[command(version)]
#[command(
    about = "Generate product marketing pages from LLM output and slot templates",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./copydeck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// YAML or JSON file of extra templates (name -> structure)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate product, FAQ and comparison pages for a product record
    #[clap(visible_alias = "g")]
    Generate {
        /// Structured product record (JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Directory for the generated page files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Number of user questions to request
        #[arg(long)]
        questions: Option<usize>,
        /// Number of questions to answer into FAQ entries
        #[arg(long)]
        faqs: Option<usize>,
    },
    /// Render a single template and print it as JSON
    #[clap(visible_alias = "r")]
    Render {
        /// Registered template name
        template: String,
        /// JSON object supplying the render context
        #[arg(short, long)]
        context: Option<PathBuf>,
    },
    /// List registered templates
    #[clap(visible_alias = "t")]
    Templates {
        /// Print one template with the context keys and blocks it reads
        #[arg(long)]
        show: Option<String>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let global = GlobalOptions { config: cli.config, templates: cli.templates };
    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { input, output_dir, questions, faqs } => run_generate(
            &global,
            GenerateOptions { input, output_dir, question_count: questions, faq_count: faqs },
        ),
        Commands::Render { template, context } => {
            run_render(&global, RenderOptions { template, context })
        }
        Commands::Templates { show } => run_templates(&global, show),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_generate(global: &GlobalOptions, options: GenerateOptions) -> Result<(), AppError> {
    let result = crate::generate(global, options)?;
    for path in &result.written {
        println!("✅ Wrote {}", path.display());
    }
    println!(
        "Generated {} FAQ entries from {} questions; compared against {}",
        result.faqs, result.questions, result.competitor
    );
    Ok(())
}

fn run_render(global: &GlobalOptions, options: RenderOptions) -> Result<(), AppError> {
    let rendered = crate::render(global, options)?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

fn run_templates(global: &GlobalOptions, show: Option<String>) -> Result<(), AppError> {
    match show {
        Some(name) => {
            let detail = crate::templates_show(global, &name)?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        None => {
            for name in crate::templates_list(global)? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
