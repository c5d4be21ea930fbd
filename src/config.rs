//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::secret_hash::HashParams;
use crate::db::config::DbConfig;
use crate::prelude::*;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Service configuration, loaded once at startup.
pub struct AppConfig {
    /// PostgreSQL connection. `None` selects the in-memory store.
    pub db: Option<DbConfig>,
    /// HS256 signing secret.
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
    pub hash_params: HashParams,
    /// Upper bound for draining in-flight requests on shutdown.
    pub shutdown_timeout: Duration,
}

impl AppConfig {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {err}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use todo_api::config::AppConfig;
    ///
    /// let vars = HashMap::from([("JWT_SECRET", "MySuperSecret")]);
    /// let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    /// assert!(config.db.is_none());
    /// assert_eq!(config.listen_addr.port(), 8080);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret =
            get("JWT_SECRET").ok_or_else(|| Error::Config(String::from("JWT_SECRET missing")))?;
        let defaults = HashParams::default();

        Ok(Self {
            db: get("DATABASE_URL").map(DbConfig::new),
            jwt_secret,
            listen_addr: parse_or(&get, "LISTEN_ADDR", || {
                SocketAddr::from_str(DEFAULT_LISTEN_ADDR)
                    .map_err(|err| Error::Config(err.to_string()))
            })?,
            hash_params: HashParams {
                m_cost: parse_or(&get, "ARGON2_M_COST", || Ok(defaults.m_cost))?,
                t_cost: parse_or(&get, "ARGON2_T_COST", || Ok(defaults.t_cost))?,
                p_cost: parse_or(&get, "ARGON2_P_COST", || Ok(defaults.p_cost))?,
            },
            shutdown_timeout: Duration::from_secs(parse_or(&get, "SHUTDOWN_TIMEOUT_SECS", || {
                Ok(DEFAULT_SHUTDOWN_TIMEOUT_SECS)
            })?),
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("db", &self.db)
            .field("jwt_secret", &"REDACTED")
            .field("listen_addr", &self.listen_addr)
            .field("hash_params", &self.hash_params)
            .field("shutdown_timeout", &self.shutdown_timeout)
            .finish()
    }
}

fn parse_or<T, G, D>(get: &G, key: &str, default: D) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
    D: FnOnce() -> Result<T>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| Error::Config(format!("{key}: {err}"))),
        None => default(),
    }
}
