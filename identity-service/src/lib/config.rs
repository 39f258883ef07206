use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default = "default_users")]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Shared signing secret. A random per-process key is used when absent.
    pub secret: Option<String>,
    pub expiration_minutes: i64,
}

/// Seed entry for the credential store.
///
/// Exactly one of `password_hash` (PHC string) or `password` (hashed at
/// startup) is expected; `password_hash` wins when both are present.
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub username: String,
    pub password: Option<String>,
    pub password_hash: Option<String>,
}

fn default_users() -> Vec<UserConfig> {
    vec![
        UserConfig {
            username: "john".to_string(),
            password: Some("password123".to_string()),
            password_hash: None,
        },
        UserConfig {
            username: "jane".to_string(),
            password: Some("qwerty456".to_string()),
            password_hash: None,
        },
    ]
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8000)?
            .set_default("jwt.expiration_minutes", 60)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seed_demo_users() {
        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8000)
            .unwrap()
            .set_default("jwt.expiration_minutes", 60)
            .unwrap()
            .build()
            .unwrap();

        let config: Config = configuration.try_deserialize().unwrap();

        assert_eq!(config.server.http_port, 8000);
        assert_eq!(config.jwt.expiration_minutes, 60);
        assert!(config.jwt.secret.is_none());

        let usernames: Vec<&str> = config.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["john", "jane"]);
    }

    #[test]
    fn test_users_from_toml() {
        let toml = r#"
            [server]
            http_port = 9000

            [jwt]
            secret = "a-very-long-shared-secret-for-both-services"
            expiration_minutes = 15

            [[users]]
            username = "alice"
            password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g"
        "#;

        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.http_port, 9000);
        assert_eq!(
            config.jwt.secret.as_deref(),
            Some("a-very-long-shared-secret-for-both-services")
        );
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].username, "alice");
        assert!(config.users[0].password.is_none());
    }

    #[test]
    fn test_load_reads_double_underscore_env() {
        env::set_var("JWT__SECRET", "secret-shared-with-cart-service");
        env::set_var("JWT__EXPIRATION_MINUTES", "15");

        let config = Config::load();

        env::remove_var("JWT__SECRET");
        env::remove_var("JWT__EXPIRATION_MINUTES");

        let config = config.unwrap();
        assert_eq!(
            config.jwt.secret.as_deref(),
            Some("secret-shared-with-cart-service")
        );
        assert_eq!(config.jwt.expiration_minutes, 15);
        assert_eq!(config.users.len(), 2);
    }
}
