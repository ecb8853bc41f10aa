use crate::{env_or_default, ConfigError, FromEnv};

/// Cross-origin allow-list.
///
/// An empty list means no origin is ever echoed back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated origin list, dropping blanks.
    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty()),
        )
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

impl FromEnv for CorsConfig {
    /// Reads `ALLOWED_ORIGINS` (comma separated, optional).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::parse(&env_or_default("ALLOWED_ORIGINS", "")))
    }
}
