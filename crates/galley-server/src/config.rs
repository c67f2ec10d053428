use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use galley_store::{InMemoryStore, Seed};
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;

/// Server settings, read from a TOML file. Missing keys take defaults.
///
/// ```toml
/// bind_addr = "0.0.0.0:5000"
/// seed_path = "fixtures/seed.json"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON fixture loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            seed_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Build the store this configuration describes.
    pub fn open_store(&self) -> ServerResult<InMemoryStore> {
        let store = match &self.seed_path {
            Some(path) => InMemoryStore::from_seed(Seed::load(path)?)?,
            None => InMemoryStore::new(),
        };
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(c.seed_path.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(r#"seed_path = "seed.json""#).unwrap();
        assert_eq!(c.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(c.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn bad_address_is_config_error() {
        let err = ServerConfig::from_toml_str(r#"bind_addr = "nowhere""#).unwrap_err();
        assert!(matches!(err, ServerError::ConfigParse(_)));
    }

    #[test]
    fn load_and_open_seeded_store() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("seed.json");
        std::fs::write(
            &seed_path,
            r#"{ "dishes": [{ "id": "3", "name": "n", "description": "d", "price": 2, "image_url": "u" }] }"#,
        )
        .unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:8080\"").unwrap();
        writeln!(file, "seed_path = {:?}", seed_path.display().to_string()).unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        let store = config.open_store().unwrap();
        assert_eq!(store.dishes().unwrap().len(), 1);
        assert!(store.orders().unwrap().is_empty());
    }
}
