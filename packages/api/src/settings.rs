use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://notes.db?mode=rwc".into(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub cookie_name: String,
    pub secure: bool,
    pub inactivity_days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            cookie_name: "sessionid".into(),
            secure: false,
            inactivity_days: 14,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub session: Session,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `NOTES_*` environment variables
    /// (`NOTES_DATABASE__URL`, `NOTES_SESSION__SECURE`, ...).
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(Some("config.toml"), Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("NOTES")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources(file: Option<&str>, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port)?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections)?
            .set_default("session.cookie_name", defaults.session.cookie_name)?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("session.inactivity_days", defaults.session.inactivity_days)?;
        if let Some(file) = file {
            builder = builder.add_source(
                File::with_name(file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder.add_source(environment).build()?.try_deserialize()
    }
}
