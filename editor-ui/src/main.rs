//! Editor UI server - local backend for the card-collection editor.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use editor::config::EditorConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "editor-ui")]
#[command(about = "Local web backend for the card-collection editor")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Project directory (editor UI, static assets, dataset file)
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Directory containing card images (defaults to <project-dir>/card_images)
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Dataset filename relative to the project directory
    #[arg(long, default_value = EditorConfig::DEFAULT_CARDS_FILE)]
    cards_file: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("editor_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let project_dir = args.project_dir.canonicalize().unwrap_or(args.project_dir);
    let mut config = EditorConfig::new(project_dir);
    if let Some(image_dir) = args.image_dir {
        config.image_root = image_dir;
    }
    config.cards_file = args.cards_file;

    info!(project_root = %config.project_root.display(), "serving files");
    info!(image_root = %config.image_root.display(), "serving card images");

    report_dataset_status(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app_router(AppState::new(config)).layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Log whether the dataset file exists and is writable before serving.
fn report_dataset_status(config: &EditorConfig) {
    let cards_path = config.cards_path();
    match std::fs::metadata(&cards_path) {
        Err(_) => warn!(
            cards = %cards_path.display(),
            "dataset file does not exist; it will be created on first save"
        ),
        Ok(meta) if meta.permissions().readonly() => warn!(
            cards = %cards_path.display(),
            "dataset file is not writable; saves will fail"
        ),
        Ok(_) => info!(cards = %cards_path.display(), "dataset file"),
    }
}
