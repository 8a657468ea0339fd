//! CLI entry point for marklog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marklog")]
#[command(version)]
#[command(about = "A markdown blog content pipeline", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or keywords
    List {
        /// Type of content to list (post, keyword)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Render a post to a standalone HTML page
    Render {
        /// Slug of the post to render
        slug: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "marklog=debug,info"
    } else {
        "marklog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = marklog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            marklog::commands::list::run(&blog, &r#type).await?;
        }

        Commands::Render { slug, output } => {
            marklog::commands::render::run(&blog, &slug, output.as_deref()).await?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            marklog::commands::new::run(&blog, &title)?;
        }
    }

    Ok(())
}
