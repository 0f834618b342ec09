use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub password: PasswordConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Password hashing policy inputs. Both values are required; the hasher
/// constructor rejects an empty pepper or a zero cost at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub pepper: String,
    pub cost: u32,
}

/// Token signing inputs. The secret is required and must be non-empty;
/// every issued token expires `lifetime_hours` after issuance.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub lifetime_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, PASSWORD__PEPPER, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Missing required values (pepper, secret, database url) fail the
    /// deserialization here, so a misconfigured service never starts.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: PASSWORD__PEPPER=... overrides password.pepper
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.token.lifetime_hours < 1 {
            return Err(ConfigError::Message(
                "token.lifetime_hours must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Environment variables are process-wide; serialize the tests that
    // touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_complete_env() {
        env::set_var("DATABASE__URL", "postgres://localhost/identity_test");
        env::set_var("SERVER__HTTP_PORT", "8181");
        env::set_var("PASSWORD__PEPPER", "env_pepper");
        env::set_var("PASSWORD__COST", "3");
        env::set_var("TOKEN__SECRET", "env_secret");
        env::set_var("TOKEN__LIFETIME_HOURS", "24");
    }

    #[test]
    fn test_env_vars_supply_the_required_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_complete_env();

        let config = Config::load().expect("Failed to load config from env vars");

        assert_eq!(config.database.url, "postgres://localhost/identity_test");
        assert_eq!(config.server.http_port, 8181);
        assert_eq!(config.password.pepper, "env_pepper");
        assert_eq!(config.password.cost, 3);
        assert_eq!(config.token.secret, "env_secret");
        assert_eq!(config.token.lifetime_hours, 24);
    }

    #[test]
    fn test_non_positive_token_lifetime_is_a_startup_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_complete_env();
        env::set_var("TOKEN__LIFETIME_HOURS", "0");

        let result = Config::load();

        assert!(result.is_err());
    }
}
