use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the hosted data platform.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "divvy".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                http: HttpConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                remote: RemoteConfig {
                    base_url: "http://localhost:54321".to_string(),
                    api_key: String::new(),
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
