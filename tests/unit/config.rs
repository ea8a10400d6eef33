// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[cfg(test)]
mod tests {
    use mailroom::config::{Settings, DEFAULT_SENDERS};
    use serial_test::serial;
    use std::env;
    use std::io::Write;
    use tempfile::Builder;

    const OVERRIDE_VARS: [&str; 6] = [
        "REST_HOST",
        "REST_PORT",
        "SEED_PATH",
        "MAILROOM_LOG_LEVEL",
        "MAILROOM_REST_HOST",
        "MAILROOM_COMPOSE_SENDERS",
    ];

    fn clear_env() {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }

    // Helper to create a config file that `config` can pick up by extension
    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let settings = Settings::new(None).expect("Failed to load default settings");

        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.rest.host, "127.0.0.1");
        assert_eq!(settings.rest.port, 8080);
        assert_eq!(settings.seed.path, None);
        assert_eq!(settings.compose.senders, DEFAULT_SENDERS.to_vec());
    }

    #[test]
    #[serial]
    fn test_load_custom_config_file() {
        clear_env();
        let file = write_config(
            r#"
[log]
level = "debug"

[rest]
host = "0.0.0.0"
port = 9090

[seed]
path = "data/seed.json"

[compose]
senders = ["Noah", "Chris"]
"#,
        );

        let settings = Settings::new(file.path().to_str()).expect("Failed to load custom settings");

        assert_eq!(settings.log.level, "debug");
        assert_eq!(settings.rest.host, "0.0.0.0");
        assert_eq!(settings.rest.port, 9090);
        assert_eq!(settings.seed.path.as_deref(), Some("data/seed.json"));
        assert_eq!(settings.compose.senders, vec!["Noah".to_string(), "Chris".to_string()]);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let file = write_config(
            r#"
[rest]
host = "0.0.0.0"
port = 9090
"#,
        );

        env::set_var("REST_PORT", "7000");
        env::set_var("SEED_PATH", "/tmp/other-seed.json");
        env::set_var("MAILROOM_LOG_LEVEL", "warn");

        let settings = Settings::new(file.path().to_str()).expect("Failed to load settings");

        assert_eq!(settings.rest.port, 7000);
        assert_eq!(settings.rest.host, "0.0.0.0");
        assert_eq!(settings.seed.path.as_deref(), Some("/tmp/other-seed.json"));
        assert_eq!(settings.log.level, "warn");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_sender_list_from_env() {
        clear_env();
        env::set_var("MAILROOM_COMPOSE_SENDERS", "Zied,Johanna");

        let settings = Settings::new(None).expect("Failed to load settings");
        assert_eq!(settings.compose.senders, vec!["Zied".to_string(), "Johanna".to_string()]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_env_is_ignored() {
        clear_env();
        env::set_var("REST_PORT", "not-a-port");

        let settings = Settings::new(None).expect("Failed to load settings");
        assert_eq!(settings.rest.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        clear_env();
        assert!(Settings::new(Some("/definitely/not/here.toml")).is_err());
    }
}
