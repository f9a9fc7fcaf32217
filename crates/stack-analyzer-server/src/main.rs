//! Stack Analyzer — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use stack_analyzer::{AcquirerConfig, Catalog, StackAnalyzer};
use stack_analyzer_server::config::resolve_listen_addr;
use stack_analyzer_server::transport::HttpTransport;

#[derive(Parser)]
#[command(
    name = "stack-analyzer",
    about = "Stack Analyzer — detect which hackathon components a project uses",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API (default).
    Serve {
        /// Listen address (host:port).
        /// Also reads from STACK_ANALYZER_ADDR env var.
        #[arg(long)]
        addr: Option<String>,
    },

    /// Analyze a single URL and print the result as JSON.
    Analyze {
        /// Repository, submission page, or any other project URL.
        url: String,
    },

    /// Validate the bundled component catalog.
    Catalog,

    /// Print service information as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   stack-analyzer completions bash > ~/.local/share/bash-completion/completions/stack-analyzer
    ///   stack-analyzer completions zsh > ~/.zfunc/_stack-analyzer
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve { addr: None }) {
        Commands::Serve { addr } => {
            let addr = resolve_listen_addr(addr.as_deref());
            tracing::info!("Stack Analyzer HTTP API");
            tracing::info!("Catalog: {} components", Catalog::bundled().len());
            let transport = HttpTransport::new(StackAnalyzer::default());
            transport.run(&addr).await?;
        }

        Commands::Analyze { url } => {
            let analyzer = StackAnalyzer::default();
            match analyzer.analyze(&url).await {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    tracing::debug!(error = ?e, "analysis failed");
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Catalog => {
            let catalog = Catalog::bundled();
            let issues = catalog.validate();
            println!("Components: {}", catalog.len());
            println!("Alias entries: {}", catalog.aliases().len());
            if issues.is_empty() {
                println!("Catalog is consistent");
            } else {
                for issue in &issues {
                    println!("  - {issue}");
                }
                eprintln!("{} catalog issue(s) found", issues.len());
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let config = AcquirerConfig::default();
            let catalog = Catalog::bundled();
            let info = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "endpoints": ["POST /api/analyze", "GET /health"],
                "components": catalog.len(),
                "alias_entries": catalog.aliases().len(),
                "branches": config.branches,
                "repository_files": config.repository_files,
                "repository_timeout_secs": config.repository_timeout.as_secs(),
                "page_timeout_secs": config.page_timeout.as_secs(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "stack-analyzer", &mut std::io::stdout());
        }
    }

    Ok(())
}
