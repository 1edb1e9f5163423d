//! Plugin daemon configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to configuration file
    pub config_path: PathBuf,
    /// Unix socket the plugin API listens on
    pub socket_path: PathBuf,
    /// PID file path
    pub pid_file: PathBuf,
    /// Log filter directive applied on top of RUST_LOG
    pub log_filter: String,
}

/// Optional overrides read from config.toml
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    socket_path: Option<PathBuf>,
    log_filter: Option<String>,
}

impl Config {
    /// Load configuration from file or defaults
    ///
    /// Standard directory structure:
    /// ```text
    /// ~/.pipehook/
    /// ├── config.toml           # Optional overrides
    /// ├── run/
    /// │   └── plugin.sock       # Plugin API socket
    /// └── server/
    ///     └── plugin.pid        # PID file
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        // Use PIPEHOOK_DIR env var if set, otherwise ~/.pipehook
        let base_dir = std::env::var("PIPEHOOK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".pipehook"));

        let run_dir = base_dir.join("run");
        let server_dir = base_dir.join("server");

        // Create directories if they don't exist
        std::fs::create_dir_all(&run_dir)?;
        std::fs::create_dir_all(&server_dir)?;

        let config_path = base_dir.join("config.toml");
        let file: ConfigFile = if config_path.exists() {
            toml::from_str(&std::fs::read_to_string(&config_path)?)?
        } else {
            ConfigFile::default()
        };

        Ok(Self {
            socket_path: file
                .socket_path
                .unwrap_or_else(|| run_dir.join("plugin.sock")),
            pid_file: server_dir.join("plugin.pid"),
            log_filter: file
                .log_filter
                .unwrap_or_else(|| "pipehook_server=info".to_string()),
            config_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Serializes tests that touch PIPEHOOK_DIR
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_load_with_custom_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let custom_path = temp_dir.path().to_path_buf();

        // Save current value to restore later
        let old_val = env::var("PIPEHOOK_DIR").ok();
        // SAFETY: This test runs in isolation and we restore the env var afterward
        unsafe { env::set_var("PIPEHOOK_DIR", &custom_path) };

        let config = Config::load().unwrap();

        assert!(config.config_path.starts_with(&custom_path));
        assert!(config.socket_path.ends_with("run/plugin.sock"));
        assert!(config.pid_file.ends_with("server/plugin.pid"));
        assert_eq!(config.log_filter, "pipehook_server=info");

        // Should have created run/ and server/ directories
        assert!(custom_path.join("run").exists());
        assert!(custom_path.join("server").exists());

        // Cleanup
        // SAFETY: Restoring environment to previous state
        unsafe {
            if let Some(val) = old_val {
                env::set_var("PIPEHOOK_DIR", val);
            } else {
                env::remove_var("PIPEHOOK_DIR");
            }
        }
    }

    #[test]
    fn test_config_file_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let custom_path = temp_dir.path().to_path_buf();
        std::fs::write(
            custom_path.join("config.toml"),
            "socket_path = \"/tmp/custom.sock\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();

        // Save current value to restore later
        let old_val = env::var("PIPEHOOK_DIR").ok();
        // SAFETY: This test runs in isolation and we restore the env var afterward
        unsafe { env::set_var("PIPEHOOK_DIR", &custom_path) };

        let config = Config::load().unwrap();

        assert_eq!(config.socket_path, PathBuf::from("/tmp/custom.sock"));
        assert_eq!(config.log_filter, "debug");

        // Cleanup
        // SAFETY: Restoring environment to previous state
        unsafe {
            if let Some(val) = old_val {
                env::set_var("PIPEHOOK_DIR", val);
            } else {
                env::remove_var("PIPEHOOK_DIR");
            }
        }
    }
}
