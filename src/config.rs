use dotenv::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize)]
pub struct Config {
    pub service_port: String,
    pub uploads_dir: String,
    pub static_dir: String,
    pub cors_domains: Vec<String>,
    pub is_development: bool,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();

        Config {
            service_port: Self::get_env("SERVICE_PORT", "3000"),
            uploads_dir: Self::get_env("UPLOADS_DIR", "./uploads"),
            static_dir: Self::get_env("STATIC_DIR", "./static"),
            cors_domains: Self::get_env_list("CORS_DOMAINS", ""),
            is_development: Self::get_env_bool("IS_DEVELOPMENT", false),
        }
    }

    fn get_env(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn get_env_list(key: &str, default: &str) -> Vec<String> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn get_env_bool(key: &str, default: bool) -> bool {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse()
            .expect(&format!("Failed to parse {}", key))
    }
}
