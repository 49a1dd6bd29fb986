use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub models: ModelsConfig,
    pub recommend: RecommendConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    pub models_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// Results returned by the recommend and career-prediction operations.
    pub top_k: usize,
    /// Courses suggested per missing skill in a learning path.
    pub courses_per_skill: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            // Set defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.http_port", 5000)?
            .set_default("models.models_dir", "./models")?
            .set_default("recommend.top_k", 5)?
            .set_default("recommend.courses_per_skill", 3)?
            // Load from environment
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .prefix("ML"),
            )
            .build()?;

        config.try_deserialize()
    }
}
