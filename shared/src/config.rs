use anyhow::{Context, Result};
use std::{env, str::FromStr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            host: required("DATABASE_HOST")?,
            port: required("DATABASE_PORT")?
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: required("DATABASE_USERNAME")?,
            password: required("DATABASE_PASSWORD")?,
            database: required("DATABASE_NAME")?,
            max_connections: optional("DATABASE_MAX_CONNECTIONS", 10)?,
        };
        let auth = AuthConfig {
            tokens: parse_list(&required("API_TOKENS")?),
        };
        let server = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: optional("SERVER_PORT", 8080)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        };

        Ok(Self {
            database,
            auth,
            server,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

/// Bearer tokens accepted by the authentication gate.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} is not set"))
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(v) => v.parse().with_context(|| format!("{key} has an invalid value")),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_list;

    #[test]
    fn tokens_are_split_and_trimmed() {
        let tokens = parse_list(" alpha, beta ,,gamma ");
        assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn empty_token_list_yields_nothing() {
        assert!(parse_list(" , ").is_empty());
    }
}
