//! CLI entry point for blogfront

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogfront::config::SiteConfig;
use blogfront::Blog;

#[derive(Parser)]
#[command(name = "blogfront")]
#[command(version)]
#[command(about = "Browse a blog's posts: list, filter by tag, search, and render", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Configuration file (defaults to _config.yml in the base directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site location: a directory or an http(s) base URL
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts
    #[command(alias = "ls")]
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print the rendered list page
        #[arg(long)]
        html: bool,
    },

    /// List tags with post counts
    Tags,

    /// Search posts by title, description, excerpt, tag or category
    Search {
        query: String,

        /// Print the rendered list page
        #[arg(long)]
        html: bool,
    },

    /// Search as you type: each stdin line is the search box content
    #[command(alias = "i")]
    Interactive {
        /// Print the rendered list page
        #[arg(long)]
        html: bool,
    },

    /// Show a post by file name or detail page URL (post.html?file=...)
    Show {
        target: String,

        /// Print the rendered article
        #[arg(long)]
        html: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogfront=debug,info"
    } else {
        "blogfront=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Version = cli.command {
        println!("blogfront version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let config_path = cli.config.unwrap_or_else(|| base_dir.join("_config.yml"));
    let config = if config_path.exists() {
        SiteConfig::load(&config_path)
            .with_context(|| format!("Failed to load {:?}", config_path))?
    } else {
        tracing::debug!("No configuration at {:?}, using defaults", config_path);
        SiteConfig::default()
    };

    let blog = Blog::open(config, &base_dir, cli.source.as_deref())?;

    match cli.command {
        Commands::List { tag, html } => {
            blogfront::commands::list::run(&blog, tag.as_deref(), html).await?;
        }

        Commands::Tags => {
            blogfront::commands::list::tags(&blog).await?;
        }

        Commands::Search { query, html } => {
            blogfront::commands::search::run(&blog, &query, html).await?;
        }

        Commands::Interactive { html } => {
            tracing::info!(
                "Reading queries from stdin ({}ms debounce)",
                blog.config.search.debounce_ms
            );
            blogfront::commands::search::interactive(&blog, html).await?;
        }

        Commands::Show { target, html } => {
            blogfront::commands::show::run(&blog, &target, html).await?;
        }

        Commands::Version => {}
    }

    Ok(())
}
