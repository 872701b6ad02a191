use std::env;

/// Runtime configuration, read from the environment. `PORT` selects
/// the backend port (documented default 5050); `COMPASS_BASE_URL`
/// overrides the composed base URL entirely.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: String,
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "5050".to_string());
        let base_url =
            env::var("COMPASS_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));
        Self { port, base_url }
    }
}
