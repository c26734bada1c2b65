//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL database connection URL
    pub database_url: String,

    /// Server port to bind to
    pub port: u16,

    /// Database connection pool settings
    pub pool: PoolConfig,

    /// Pagination settings
    pub pagination: PaginationConfig,
}

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// Connection acquisition timeout
    pub connection_timeout: Duration,
}

/// Pagination configuration.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Default number of items per page
    pub default_per_page: i64,

    /// Maximum allowed items per page
    pub max_per_page: i64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            port: 8080,
            pool: PoolConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DATABASE_URL`: PostgreSQL connection string
    ///
    /// Optional environment variables:
    /// - `PORT`: Server port (default: 8080)
    /// - `POOL_MAX_SIZE`: Max pool connections (default: 10)
    /// - `POOL_TIMEOUT_SECS`: Connection acquire timeout (default: 30)
    /// - `PAGINATION_DEFAULT`: Default items per page (default: 10)
    /// - `PAGINATION_MAX`: Max items per page (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError {
            field: "DATABASE_URL".to_string(),
            message: "Required environment variable not set".to_string(),
        })?;

        let port = parse_env_or("PORT", 8080)?;

        let pool = PoolConfig {
            max_size: parse_env_or("POOL_MAX_SIZE", 10)?,
            connection_timeout: Duration::from_secs(parse_env_or("POOL_TIMEOUT_SECS", 30)?),
        };

        let pagination = PaginationConfig {
            default_per_page: parse_env_or("PAGINATION_DEFAULT", 10)?,
            max_per_page: parse_env_or("PAGINATION_MAX", 100)?,
        };

        let config = Self {
            database_url,
            port,
            pool,
            pagination,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError {
                field: "DATABASE_URL".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }

        if self.pool.max_size == 0 {
            return Err(ConfigError {
                field: "POOL_MAX_SIZE".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.pagination.max_per_page <= 0 {
            return Err(ConfigError {
                field: "PAGINATION_MAX".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.pagination.default_per_page <= 0 {
            return Err(ConfigError {
                field: "PAGINATION_DEFAULT".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.pagination.default_per_page > self.pagination.max_per_page {
            return Err(ConfigError {
                field: "PAGINATION_DEFAULT".to_string(),
                message: "Cannot be greater than PAGINATION_MAX".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse an environment variable or return a default value.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val.parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_default_pagination_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_per_page, 10);
        assert_eq!(config.max_per_page, 100);
    }
}
