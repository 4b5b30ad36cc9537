//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8090
}

/// Get config directory (NIGHTSWITCH_CONFIG_DIR or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("NIGHTSWITCH_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/nightswitch");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("nightswitch");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/nightswitch");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("nightswitch");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", 8090)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (NIGHTSWITCH_PORT, ...)
        .add_source(::config::Environment::with_prefix("NIGHTSWITCH").try_parsing(true));

    // Port precedence: NIGHTSWITCH_PORT > PORT > config file > default.
    // Handled manually so the legacy PORT fallback (Docker, PaaS) stays
    // consistent across environments.
    if let Ok(port) = std::env::var("NIGHTSWITCH_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_default_port() {
        env::remove_var("NIGHTSWITCH_PORT");
        env::remove_var("PORT");
        env::set_var("NIGHTSWITCH_CONFIG_DIR", "/tmp/nightswitch-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("NIGHTSWITCH_CONFIG_DIR");

        assert_eq!(config.port, 8090);
    }

    #[test]
    #[serial]
    fn test_nightswitch_port_env_wins() {
        env::set_var("NIGHTSWITCH_PORT", "9321");
        env::set_var("PORT", "3000");
        env::set_var("NIGHTSWITCH_CONFIG_DIR", "/tmp/nightswitch-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("NIGHTSWITCH_PORT");
        env::remove_var("PORT");
        env::remove_var("NIGHTSWITCH_CONFIG_DIR");

        assert_eq!(config.port, 9321);
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        env::remove_var("NIGHTSWITCH_PORT");
        env::set_var("PORT", "3000");
        env::set_var("NIGHTSWITCH_CONFIG_DIR", "/tmp/nightswitch-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("NIGHTSWITCH_CONFIG_DIR");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_config_file_port() {
        env::remove_var("NIGHTSWITCH_PORT");
        env::remove_var("PORT");

        let dir = tempfile::tempdir().expect("temp config dir");
        let file = dir.path().join("config.json");
        std::fs::write(&file, serde_json::json!({ "port": 8123 }).to_string())
            .expect("write config file");
        env::set_var("NIGHTSWITCH_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("NIGHTSWITCH_CONFIG_DIR");

        assert_eq!(config.port, 8123);
    }
}
