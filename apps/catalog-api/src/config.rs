//! Configuration for Catalog API

use core_config::{app_info, cors::CorsConfig, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use domain_products::images::DEFAULT_UPLOAD_DIR;
use std::path::PathBuf;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Where uploaded images are written; also served at `/static`
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            environment: Environment::from_env(),
            upload_dir: PathBuf::from(env_or_default("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB_VARS: [(&str, Option<&str>); 5] = [
        ("DB_HOST", Some("db.internal")),
        ("DB_PORT", Some("5432")),
        ("DB_USER", Some("catalog")),
        ("DB_PASSWORD", Some("p@ss")),
        ("DB_NAME", Some("products")),
    ];

    #[test]
    fn test_from_env_defaults() {
        let mut vars = DB_VARS.to_vec();
        vars.extend([
            ("UPLOAD_DIR", None),
            ("ALLOWED_ORIGINS", None),
            ("PORT", None),
            ("APP_ENV", None),
        ]);

        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "catalog_api");
            assert_eq!(config.upload_dir, PathBuf::from("/static"));
            assert_eq!(config.server.port, 9000);
            assert!(config.cors.allowed_origins.is_empty());
            assert_eq!(config.environment, Environment::Development);
            assert!(config.database.url().contains("catalog:p%40ss@db.internal:5432/products"));
        });
    }

    #[test]
    fn test_from_env_overrides() {
        let mut vars = DB_VARS.to_vec();
        vars.extend([
            ("UPLOAD_DIR", Some("/var/lib/catalog/images")),
            ("ALLOWED_ORIGINS", Some("http://localhost:3000, https://shop.example.com")),
            ("PORT", Some("8080")),
            ("APP_ENV", Some("production")),
        ]);

        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.upload_dir, PathBuf::from("/var/lib/catalog/images"));
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.cors.allowed_origins.len(), 2);
            assert!(config.environment.is_production());
        });
    }

    #[test]
    fn test_missing_database_host_fails() {
        let mut vars = DB_VARS.to_vec();
        vars[0] = ("DB_HOST", None);

        temp_env::with_vars(vars, || {
            assert!(Config::from_env().is_err());
        });
    }
}
