use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    /// Reads `.env` (if any) and the process environment.
    /// Panics when `DATABASE_URL` is missing.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| panic!("Environment variable DATABASE_URL not set"));

        EnvConfig {
            host: lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            db_url,
        }
    }
}
