use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. An empty list means a permissive CORS layer.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

/// Settings for the external image-generation endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Endpoint accepting the multipart generation request.
    #[serde(default = "default_generation_endpoint")]
    pub endpoint: String,
    /// Response body fields checked, in order, for the result image
    /// reference. The upstream contract is assumed rather than documented,
    /// so the list is configuration instead of code.
    #[serde(default = "default_result_fields")]
    pub result_fields: Vec<String>,
}

fn default_generation_endpoint() -> String {
    "http://127.0.0.1:9700/api/generate".into()
}

fn default_result_fields() -> Vec<String> {
    ["result", "image", "url", "generated_image", "output", "result_url"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generation_endpoint(),
            result_fields: default_result_fields(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("VITRINE_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., VITRINE__GENERATION__ENDPOINT)
            .add_source(Environment::with_prefix("VITRINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
