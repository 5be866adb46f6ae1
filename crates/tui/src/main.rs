mod app;
mod config;
mod error;
mod ui;

use std::sync::Mutex;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;
    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

/// Logs go to a file: the terminal belongs to the UI while the app runs.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "cascade_tui={level},identity={level},domain={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
