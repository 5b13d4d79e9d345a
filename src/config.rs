use crate::core::get_config_dir;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub daemon: DaemonConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DaemonConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DaemonConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load_config(config_path: Option<&PathBuf>) -> Result<Config, config::ConfigError> {
    let mut config_vec = vec![];

    // User-provided config file
    if let Some(config_path) = config_path {
        if config_path.exists() {
            config_vec.push(config_path.clone());
        } else {
            tracing::warn!("Config file {config_path:?} not found.");
        }
    }

    // Default config file
    if let Ok(default_config_path) = get_config_dir().map(|d| d.join("alvya.toml")) {
        if default_config_path.exists() {
            config_vec.push(default_config_path);
        }
    }

    let settings = config::Config::builder();
    let settings = config_vec.iter().fold(settings, |s, path| {
        s.add_source(config::File::from(path.as_path()))
    });

    settings
        .add_source(
            config::Environment::with_prefix("ALVYA")
                .separator("_")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        temp_file
            .write_all(b"[daemon]\nhost = '0.0.0.0'\nport = 8080\n")
            .unwrap();
        let config = load_config(Some(&temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.daemon.host, "0.0.0.0");
        assert_eq!(config.daemon.port, 8080);
        assert_eq!(config.daemon.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        temp_file.write_all(b"[daemon]\nport = 9001\n").unwrap();
        let config = load_config(Some(&temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.daemon.port, 9001);
        assert_eq!(config.daemon.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_file_is_not_fatal() {
        let path = PathBuf::from("/tmp/alvya-does-not-exist.toml");
        assert!(load_config(Some(&path)).is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.daemon.address(), "127.0.0.1:5000");
    }
}
