use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub store: Option<StoreConfig>,
}

/// Credentials for the managed data store. Optional at startup so the
/// server can come up without them; submissions fail per-request until
/// both values are present.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub service_role_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let store = match (
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
        ) {
            (Some(base_url), Some(service_role_key)) => Some(StoreConfig {
                base_url,
                service_role_key,
            }),
            _ => None,
        };

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            store,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
