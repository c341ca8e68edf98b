use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "markscan")]
#[command(about = "Trademark pattern checker against the EUIPO sandbox registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch match counts for every pattern derived from a brand name
    Analyze(analyze::AnalyzeArgs),
    /// Print the pattern family for a brand without querying the registry
    Patterns {
        /// Brand name to derive patterns from
        brand: String,

        /// Emit patterns as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run(args).await,
        Commands::Patterns { brand, json } => run_patterns(&brand, json),
    }
}

/// `RUST_LOG` wins; otherwise `MARKSCAN_LOG_LEVEL`, defaulting to `info`.
fn init_tracing() {
    let default_level = std::env::var("MARKSCAN_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_patterns(brand: &str, json: bool) -> anyhow::Result<()> {
    let brand = brand.trim();
    anyhow::ensure!(!brand.is_empty(), "brand must not be empty");

    let patterns = markscan_core::generate_patterns(brand);
    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
    } else {
        for pattern in &patterns {
            println!("{}", pattern.query);
        }
    }
    Ok(())
}
