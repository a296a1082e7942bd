use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fyrre::api;
use fyrre::config::Settings;
use fyrre::content::queries::POPULAR_POSTS_LIMIT;
use fyrre::pages::{PageError, Pages};
use fyrre::widgets::{tree_render, NavEntry, NavigationMachine, PointerEvent};

const DEFAULT_PORT: u16 = 4000;

#[derive(Parser)]
#[command(name = "fyrre")]
#[command(about = "Content pipeline and preview server for the Fyrre magazine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the preview API server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print the home page content
    Home,
    /// Print a category and its posts
    Category { id: String },
    /// Print a single post
    Post { id: String },
    /// Print an author and their posts
    Author { id: String },
    /// Print all authors
    Authors,
    /// Print the most commented posts
    Popular {
        #[arg(short, long, default_value_t = POPULAR_POSTS_LIMIT)]
        limit: u32,
    },
    /// Show the header navigation as a tree
    Nav {
        /// Entry to show as open
        #[arg(long)]
        open: Option<String>,
    },
}

/// Initialize tracing with output to stderr (for printing commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "fyrre=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Printing commands: keep stdout clean for the JSON output
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(pages: Pages, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Fyrre preview server on port {}", port);

    let app = api::create_router(pages);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Fyrre preview server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Print a page as JSON, or its public error message and exit non-zero.
fn print_page<T: Serialize>(result: Result<T, PageError>) -> anyhow::Result<()> {
    match result {
        Ok(page) => {
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(())
        }
        Err(e) => {
            if let PageError::Failed(source) = &e {
                tracing::error!("Failed to load content: {}", source);
            }
            eprintln!("{}", e.public_message());
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let settings = Settings::from_env()?;
    let pages = Pages::new(settings.content_service(), settings.allow_list());

    match cli.command {
        Some(Commands::Serve { port }) => serve(pages, port).await?,
        Some(Commands::Home) => print_page(pages.home().await)?,
        Some(Commands::Category { id }) => print_page(pages.category(&id).await)?,
        Some(Commands::Post { id }) => print_page(pages.post(&id).await)?,
        Some(Commands::Author { id }) => print_page(pages.author(&id).await)?,
        Some(Commands::Authors) => print_page(pages.authors().await)?,
        Some(Commands::Popular { limit }) => print_page(pages.popular(limit).await)?,
        Some(Commands::Nav { open }) => {
            let layout = match pages.content().site_layout().await {
                Ok(layout) => layout,
                Err(e) => return print_page::<()>(Err(e.into())),
            };
            let entries: Vec<NavEntry> = layout.categories.iter().map(NavEntry::from).collect();
            let mut machine = NavigationMachine::new(entries);
            if let Some(id) = open {
                machine.handle(PointerEvent::EnterEntry(id));
            }
            print!("{}", tree_render::render_navigation(&machine));
        }
        None => serve(pages, DEFAULT_PORT).await?,
    }

    Ok(())
}
