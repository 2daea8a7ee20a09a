//! Backend endpoint configuration, loaded from environment variables.
//!
//! A `.env` file in the working directory is loaded first, so local
//! setups can keep their endpoint there instead of exporting variables.
//!
//! # Environment Variables
//!
//! - `VESTRY_API_URL`: origin all endpoint paths are relative to
//!   (default: `http://localhost:8080/api`)
//! - `VESTRY_API_TIMEOUT_SECS`: per-request timeout (default: 30)

use std::env;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("VESTRY_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            timeout_secs: env::var("VESTRY_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
