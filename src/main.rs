//! CLI entry point for coisas

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coisas")]
#[command(version)]
#[command(about = "Resolve blog content from Markdown front-matter documents", long_about = None)]
struct Cli {
    /// Set the project root (defaults to current directory)
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
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Tag identifiers, comma separated
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Short description shown on post cards
        #[arg(long)]
        description: Option<String>,

        /// Slug for the new post (defaults to the slugified title)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List site content
    List {
        /// Type of content to list (post, slug, tag, site)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only list posts with this tag (display value or identifier)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Print a resolved post as JSON
    Show {
        /// Post slug
        slug: String,
    },

    /// Print the static route of every post
    Paths,

    /// Resolve all content and report problems
    Check,

    /// Export page data as JSON
    #[command(alias = "e")]
    Export,

    /// Remove exported page data
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "coisas=debug,info"
    } else {
        "coisas=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine project root
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            coisas::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            tags,
            description,
            path,
        } => {
            let blog = coisas::Blog::new(&base_dir)?;
            let file = coisas::commands::new::create_post(
                &blog,
                &title,
                &tags,
                description.as_deref(),
                path.as_deref(),
            )?;
            println!("Created: {:?}", file);
        }

        Commands::List { r#type, tag } => {
            let blog = coisas::Blog::new(&base_dir)?;
            coisas::commands::list::run(&blog, &r#type, tag.as_deref())?;
        }

        Commands::Show { slug } => {
            let blog = coisas::Blog::new(&base_dir)?;
            coisas::commands::show::run(&blog, &slug)?;
        }

        Commands::Paths => {
            let blog = coisas::Blog::new(&base_dir)?;
            coisas::commands::paths::run(&blog)?;
        }

        Commands::Check => {
            let blog = coisas::Blog::new(&base_dir)?;
            blog.check()?;
        }

        Commands::Export => {
            let blog = coisas::Blog::new(&base_dir)?;
            tracing::info!("Exporting page data...");
            blog.export()?;
        }

        Commands::Clean => {
            let blog = coisas::Blog::new(&base_dir)?;
            tracing::info!("Cleaning export folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("coisas version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
