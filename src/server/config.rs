use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5500;

/// Credentials for an admin account provisioned at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

/// Process configuration, loaded once at startup and passed to the components that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration with defaults applied
    /// - `Err(AppError::ConfigErr(_))` - Missing `DATABASE_URL`, unparseable `PORT`, or
    ///   only half of the admin seed credentials
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let admin_seed = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminSeed { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteAdminSeed.into()),
        };

        Ok(Self {
            database_url,
            port,
            admin_seed,
        })
    }
}
