use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    Memory,
    Sqlite,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_storage")]
    pub storage: StorageKind,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_true")]
    pub seed_notes: bool,
    pub static_dir: Option<String>,
    #[serde(default)]
    pub log_json: bool,

    // build
    #[serde(default = "default_local")]
    pub source: String,
    #[serde(default = "default_local")]
    pub git_commit: String,
    #[serde(default = "default_local")]
    pub pipeline_id: String,
    #[serde(default = "default_local")]
    pub version: String,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3001
}

fn default_storage() -> StorageKind {
    StorageKind::Memory
}

fn default_database_url() -> String {
    "notes.db".into()
}

fn default_true() -> bool {
    true
}

fn default_local() -> String {
    "local".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            storage: default_storage(),
            database_url: default_database_url(),
            seed_notes: default_true(),
            static_dir: None,
            log_json: false,
            source: default_local(),
            git_commit: default_local(),
            pipeline_id: default_local(),
            version: default_local(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_overrides_from_pairs() {
        let config = envy::from_iter::<_, Config>([
            ("PORT".to_string(), "8080".to_string()),
            ("STORAGE".to_string(), "sqlite".to_string()),
            ("SEED_NOTES".to_string(), "false".to_string()),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert!(!config.seed_notes);
        assert_eq!(config.database_url, "notes.db");
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_unknown_storage() {
        let config = envy::from_iter::<_, Config>([("STORAGE".to_string(), "mongo".to_string())]);
        assert!(config.is_err());
    }

    #[test]
    fn defaults_match_empty_environment() {
        let config = envy::from_iter::<_, Config>(Vec::<(String, String)>::new()).unwrap();
        let default = Config::default();

        assert_eq!(config.port, default.port);
        assert_eq!(config.storage, default.storage);
        assert_eq!(config.seed_notes, default.seed_notes);
        assert_eq!(config.static_dir, None);
        assert_eq!(config.version, "local");
    }
}
