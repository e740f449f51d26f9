//! Development/production detection.

use core::str::FromStr;

/// Environment variable overriding the build profile.
pub const ENVIRONMENT_ENV: &str = "ACCTRULES_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment: {0:?} (expected development or production)")]
pub struct UnknownEnvironment(pub String);

impl Environment {
    /// [`ENVIRONMENT_ENV`] if set and recognized, otherwise the build profile.
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENVIRONMENT_ENV).map(|v| v.parse::<Environment>()) {
            Some(Ok(env)) => env,
            Some(Err(e)) => {
                tracing::warn!("{e}; falling back to build profile");
                Self::from_build()
            }
            None => Self::from_build(),
        }
    }

    /// Debug builds count as development.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(UnknownEnvironment(other.to_string())),
        }
    }
}
