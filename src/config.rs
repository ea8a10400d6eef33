// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use config::{Environment, File};
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const DEFAULT_SENDERS: [&str; 4] = ["Noah", "Johanna", "Zied", "Chris"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// JSON seed file; the built-in demo data is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Sender names offered by the compose form
    pub senders: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub log: LogConfig,
    pub rest: RestConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub compose: ComposeConfig,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, SettingsError> {
        let mut config_builder = config::Config::builder()
            .set_default("log.level", "info")?
            .set_default("rest.host", "127.0.0.1")?
            .set_default("rest.port", 8080)?
            .set_default("compose.senders", DEFAULT_SENDERS.to_vec())?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = config_path {
            config_builder = config_builder.add_source(File::with_name(path));
        }

        // e.g. `MAILROOM_REST_HOST=...` overrides `rest.host`
        config_builder = config_builder.add_source(
            Environment::with_prefix("MAILROOM")
                .separator("_")
                .ignore_empty(true)
                .try_parsing(true)
                // `MAILROOM_COMPOSE_SENDERS=Noah,Chris`
                .list_separator(",")
                .with_list_parse_key("compose.senders"),
        );

        let env_vars = [
            ("REST_HOST", "rest.host"),
            ("REST_PORT", "rest.port"),
            ("SEED_PATH", "seed.path"),
        ];

        for (env_var, config_path) in &env_vars {
            if let Ok(value) = env::var(env_var) {
                if *env_var == "REST_PORT" {
                    match value.parse::<u16>() {
                        Ok(port) => config_builder = config_builder.set_override(config_path, port)?,
                        Err(_) => warn!("Invalid port value in {}: {}", env_var, value),
                    }
                } else {
                    config_builder = config_builder.set_override(config_path, value)?;
                }
            }
        }

        Ok(config_builder.build()?.try_deserialize()?)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.rest.host.clone(), self.rest.port)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            senders: DEFAULT_SENDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            rest: RestConfig::default(),
            seed: SeedConfig::default(),
            compose: ComposeConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load or parse configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}
