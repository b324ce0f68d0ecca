use clap::Parser;
use std::path::PathBuf;

use crate::config::{parse_http_url, Config, ConfigError};

/// Browse amphibians from a remote JSON endpoint.
#[derive(Debug, Parser)]
#[command(name = "amphibians", version, about)]
pub struct Cli {
    /// Full endpoint URL, overriding the configured base URL and path.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Fetch once, print the records to stdout and exit.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Load the config file named by `--config` (or the default) and apply
    /// command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(endpoint) = &self.endpoint {
            // Split into origin root and relative path so the join is exact.
            let url = parse_http_url(endpoint)?;
            let mut base = url.clone();
            base.set_path("/");
            base.set_query(None);
            base.set_fragment(None);
            let mut path = url.path().trim_start_matches('/').to_string();
            if let Some(query) = url.query() {
                path.push('?');
                path.push_str(query);
            }
            config.endpoint.base_url = base.to_string();
            config.endpoint.path = path;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
