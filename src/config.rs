//! Server configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
    }
}

impl SiteConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(std::env::var("HOST").ok().as_deref()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
        })
    }

    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(host) if !host.is_empty() => host.to_owned(),
        _ => DEFAULT_HOST.to_owned(),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
