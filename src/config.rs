use std::env;

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_DATA_FILE: &str = "assets.json";
const DEFAULT_STATIC_DIR: &str = "./static";

/// Server configuration, read from the environment (a `.env` file is loaded
/// first if present).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_file: String,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            data_file: env::var("ASSET_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because env vars are process-global and cargo runs tests
    // in parallel.
    #[test]
    fn env_defaults_and_port_fallback() {
        env::remove_var("PORT");
        env::remove_var("ASSET_DATA_FILE");
        env::remove_var("STATIC_DIR");

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 10000);
        assert_eq!(config.data_file, "assets.json");
        assert_eq!(config.static_dir, "./static");

        env::set_var("PORT", "not-a-port");
        assert_eq!(ServerConfig::from_env().port, 10000);

        env::set_var("PORT", "8081");
        assert_eq!(ServerConfig::from_env().port, 8081);
        env::remove_var("PORT");
    }
}
