use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nd_api::{GNewsClient, HeadlinesProvider};
use nd_core::{ApiConfig, Category, CategorySelection, Result};
use nd_tui::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal browser for top news headlines", long_about = None)]
struct Cli {
    /// Two-letter country filter for the headline feed
    #[arg(long)]
    country: Option<String>,
    /// API key; read from GNEWS_API_KEY when not given
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the current headlines for a category and exit
    List {
        /// Category to list (e.g. technology); the default feed when omitted
        category: Option<Category>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the terminal frame and the listing own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.api_key {
        Some(key) => ApiConfig::new(key),
        None => ApiConfig::from_env()?,
    };
    if let Some(country) = cli.country {
        config = config.with_country(country);
    }

    let provider: Arc<dyn HeadlinesProvider> = Arc::new(GNewsClient::new(config));
    info!("📰 headlines provider initialized ({})", provider.source_name());

    match cli.command {
        Some(Commands::List { category }) => {
            let selection = category
                .map(CategorySelection::Chosen)
                .unwrap_or_default();
            info!("🗞️ fetching {} headlines", selection.label());
            let articles = provider.top_headlines(selection).await?;

            println!("Found {} articles", articles.len());
            for article in articles {
                println!("- {}", article.title);
            }
        }
        None => {
            info!("🗞️ starting interactive shell");
            Shell::new(provider).run().await?;
        }
    }

    Ok(())
}
