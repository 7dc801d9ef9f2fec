use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory of UI assets served at `/`, if any.
    pub static_dir: Option<PathBuf>,
    /// JSON catalog file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
    pub log_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.*` in the working directory, then `SHOEFINDER_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3001_i64)?
            .set_default("logging.filter", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(Environment::with_prefix("SHOEFINDER").separator("__"))
            .build()?;

        let port = settings.get_int("server.port")?;
        let port = u16::try_from(port)
            .map_err(|_| ConfigError::Message(format!("server.port out of range: {port}")))?;

        Ok(Settings {
            host: settings.get_string("server.host")?,
            port,
            static_dir: optional_path(&settings, "server.static_dir"),
            catalog_path: optional_path(&settings, "catalog.path"),
            log_filter: settings.get_string("logging.filter")?,
            log_json: settings.get_bool("logging.json")?,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn optional_path(settings: &Config, key: &str) -> Option<PathBuf> {
    settings
        .get_string(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
