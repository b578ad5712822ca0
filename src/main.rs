use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paddock::models::BODY_PARTS;
use paddock::planner::tree_render;
use paddock::store::Store;
use paddock::{api, planner};

#[derive(Parser)]
#[command(name = "paddock")]
#[command(about = "Breeding planner with match scoring and color ancestry tracing")]
struct Cli {
    /// Data directory override (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the planner API server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "4710")]
        port: u16,
    },
    /// Print the roster with match percentages
    Scores,
    /// Print target traits not covered by any roster entry
    Coverage,
    /// Print the ancestry tree for a color
    Trace { color: String },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "paddock=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(store: Store, port: u16) -> anyhow::Result<()> {
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Paddock listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = match cli.data_dir {
        Some(dir) => Store::open(dir)?,
        None => Store::open_default()?,
    };

    match cli.command {
        Some(Commands::Serve { port }) => {
            serve(store, port).await?;
        }
        Some(Commands::Scores) => {
            let doc = store.load_profile()?;
            for candidate in &doc.breeding {
                let percent = planner::match_percentage(candidate, &doc.target, &BODY_PARTS);
                println!(
                    "{:>7.2}%  {:<24} {:<6} {}",
                    percent,
                    candidate.name,
                    candidate.size.as_str(),
                    candidate.gender.as_str()
                );
            }
        }
        Some(Commands::Coverage) => {
            let doc = store.load_profile()?;
            let missing = planner::missing_traits(&doc.target, &doc.breeding);
            if missing.is_empty() {
                println!("All target traits are covered by at least one roster entry.");
            } else {
                for name in missing {
                    println!("{}", name);
                }
            }
        }
        Some(Commands::Trace { color }) => {
            let registry = store.load_registry()?;
            let catalog = store.load_catalog()?;
            let tree = planner::build_ancestry_tree(&color, &registry);
            print!("{}", tree_render::render_tree(&tree, &catalog));
        }
        None => {
            // Default: start the server for the UI
            serve(store, 4710).await?;
        }
    }

    Ok(())
}
