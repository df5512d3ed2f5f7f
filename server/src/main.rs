use std::path::PathBuf;

use leptos::config::get_configuration;
use server::{ServerError, create_router};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    // Reads [[workspace.metadata.leptos]] or the LEPTOS_* variables set by cargo-leptos.
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let options = conf.leptos_options;
    let addr = options.site_addr;
    let site_root = PathBuf::from(&*options.site_root);

    let app = create_router(&site_root);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("serving {} on http://{addr}", site_root.display());
    axum::serve(listener, app).await?;

    Ok(())
}
