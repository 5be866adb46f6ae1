use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/cascade.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity service project API key.
    pub api_key: String,
    /// Override for the identity service base URL (emulator support).
    pub auth_url: Option<String>,
    /// Email prefilled on the login screen.
    pub email: String,
    /// Log level for the file log (`error`..`trace`).
    pub log_level: String,
    /// Where the file log is written.
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_url: None,
            email: String::new(),
            log_level: "info".to_string(),
            log_file: "config/cascade.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cascade_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the identity API key (password is never read from CLI).
    #[arg(long)]
    api_key: Option<String>,
    /// Override the identity service base URL.
    #[arg(long)]
    auth_url: Option<String>,
    /// Override the prefilled email.
    #[arg(long)]
    email: Option<String>,
    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CASCADE_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }
    if let Some(auth_url) = args.auth_url {
        settings.auth_url = Some(auth_url);
    }
    if let Some(email) = args.email {
        settings.email = email;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
