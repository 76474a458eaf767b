use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

/// Runtime settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    /// Site url shown in the profile header.
    pub site_url: String,
    /// `TESTING=true` swaps SQLite for the in-memory store.
    pub testing: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORTFOLIO_PORT").unwrap_or_else(|| "5000".into());
        let port: u16 = port
            .parse()
            .with_context(|| format!("PORTFOLIO_PORT is not a valid port: {port}"))?;

        Ok(Self {
            host: var("PORTFOLIO_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            db_path: var("PORTFOLIO_DB_PATH")
                .unwrap_or_else(|| "portfolio.db".into())
                .into(),
            static_dir: var("PORTFOLIO_STATIC_DIR")
                .unwrap_or_else(|| "./static".into())
                .into(),
            site_url: var("URL").unwrap_or_default(),
            testing: var("TESTING").as_deref() == Some("true"),
        })
    }

    /// Binds the listener. The host may be a name such as `localhost` or a
    /// bare IPv6 address.
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to bind {}:{}", self.host, self.port))
    }
}
