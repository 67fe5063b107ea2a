use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the collaborative-filtering source table
    #[serde(default = "default_collaborative_table_path")]
    pub collaborative_table_path: String,

    /// Path to the content-filtering source table
    #[serde(default = "default_content_table_path")]
    pub content_table_path: String,

    /// Display name of the external scoring source, used in placeholder items
    #[serde(default = "default_external_source_name")]
    pub external_source_name: String,

    /// Scoring endpoint of the external source; placeholder provider when unset
    #[serde(default)]
    pub external_scoring_url: Option<String>,

    /// API key sent to the external scoring endpoint
    #[serde(default)]
    pub external_api_key: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_collaborative_table_path() -> String {
    "data/collaborative.csv".to_string()
}

fn default_content_table_path() -> String {
    "data/content.csv".to_string()
}

fn default_external_source_name() -> String {
    "Azure ML".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
