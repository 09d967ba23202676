use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub artifacts: ArtifactsConfig,
    pub cors: CorsConfig,
    pub recommendation: RecommendationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory holding the exported model files (ratings.json, catalog.json).
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*".
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    pub max_recommendations: usize,
    pub default_recommendations: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Minimum 0-100 partial-match score a title must exceed to be returned.
    pub score_cutoff: f64,
    pub match_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid u16"),
            },
            artifacts: ArtifactsConfig {
                dir: env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_string()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000,http://localhost".to_string()),
            },
            recommendation: RecommendationConfig {
                max_recommendations: env::var("MAX_RECOMMENDATIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("MAX_RECOMMENDATIONS must be a valid usize"),
                default_recommendations: env::var("DEFAULT_RECOMMENDATIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("DEFAULT_RECOMMENDATIONS must be a valid usize"),
            },
            search: SearchConfig {
                score_cutoff: env::var("FUZZY_SCORE_CUTOFF")
                    .unwrap_or_else(|_| "70".to_string())
                    .parse()
                    .expect("FUZZY_SCORE_CUTOFF must be a valid f64"),
                match_limit: env::var("FUZZY_MATCH_LIMIT")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("FUZZY_MATCH_LIMIT must be a valid usize"),
            },
        }
    }
}
