use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub solver: SolverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Defaults mirrored by `domain::solver::SolverParams::default` — this is what a
/// request gets when it omits `time_limit_sec`/`workers`, and the ceiling on the
/// admission-control semaphore that bounds concurrent `/solve` calls.
#[derive(Debug, Deserialize, Clone)]
pub struct SolverSettings {
    pub default_time_limit_sec: f64,
    pub default_workers: u32,
    pub max_concurrent_solves: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            default_time_limit_sec: 10.0,
            default_workers: 8,
            max_concurrent_solves: 4,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8081)?
            .set_default("solver.default_time_limit_sec", 10.0)?
            .set_default("solver.default_workers", 8)?
            .set_default("solver.max_concurrent_solves", 4)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
