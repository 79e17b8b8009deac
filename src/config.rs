use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub ui: UiConfig,
    pub alerts: AlertDeliveryConfig,
    pub plan: PlanConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
    pub start_maximized: bool,
    pub show_live_clock: bool,
}

/// Prefill for the Telegram notification stub on the Settings tab.
/// Nothing is ever delivered; the fields only seed the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDeliveryConfig {
    pub telegram_enabled: bool,
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub tier: String,
    pub camera_limit: usize,
    pub rtsp_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub logs_dir: String,
}

impl AppConfig {
    pub fn load(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config_path = if let Some(p) = path {
            p.clone()
        } else {
            std::env::var("SENTINEL_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/default.yaml"))
        };

        info!("Loading configuration from: {:?}", config_path);

        let config = Config::builder()
            .add_source(File::from(config_path))
            // Environment variables with prefix SENTINEL_
            .add_source(Environment::with_prefix("SENTINEL").separator("_"))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        debug!("Configuration loaded successfully");
        debug!("Environment: {}", app_config.app.environment);
        debug!("Log level: {}", app_config.app.log_level);

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !matches!(self.ui.theme.as_str(), "dark" | "light") {
            errors.push(format!("Unknown theme '{}'", self.ui.theme));
        }

        if self.ui.window_width < 640.0 || self.ui.window_height < 480.0 {
            errors.push("Window size must be at least 640x480".to_string());
        }

        if self.plan.camera_limit == 0 {
            errors.push("Camera limit must be greater than 0".to_string());
        }

        if !matches!(
            self.app.log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level '{}'", self.app.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Directory for rolling log files. Falls back to the platform data
    /// dir when the configured path is empty.
    pub fn log_dir(&self) -> PathBuf {
        if self.storage.logs_dir.is_empty() {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("clean-air-sentinel")
                .join("logs")
        } else {
            PathBuf::from(&self.storage.logs_dir)
        }
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Clean-Air Sentinel".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            ui: UiConfig {
                theme: "light".to_string(),
                window_width: 1280.0,
                window_height: 820.0,
                start_maximized: false,
                show_live_clock: true,
            },
            alerts: AlertDeliveryConfig {
                telegram_enabled: true,
                bot_token: String::new(),
                chat_id: "@cleanair_alerts".to_string(),
            },
            plan: PlanConfig {
                tier: "basic".to_string(),
                camera_limit: 50,
                rtsp_base: "rtsp://192.168.1.10".to_string(),
            },
            storage: StorageConfig {
                logs_dir: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_temp_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.yaml");
        let mut file = fs::File::create(&file_path).unwrap();
        writeln!(file, "{}", content).unwrap();
        (dir, file_path)
    }

    #[test]
    fn defaults_describe_the_demo_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "Clean-Air Sentinel");
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.plan.camera_limit, 50);
        assert!(config.alerts.telegram_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let content = r#"
app:
  name: "TestConsole"
  environment: "testing"
  log_level: "debug"
ui:
  theme: "dark"
  window_width: 1024.0
  window_height: 768.0
  start_maximized: true
  show_live_clock: false
alerts:
  telegram_enabled: false
  bot_token: ""
  chat_id: "@test_channel"
plan:
  tier: "pro"
  camera_limit: 200
  rtsp_base: "rtsp://10.0.0.1"
storage:
  logs_dir: "/tmp/sentinel-logs"
"#;
        let (_dir, path) = write_temp_config(content);
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.app.name, "TestConsole");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.plan.camera_limit, 200);
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/sentinel-logs"));
    }

    #[test]
    fn load_rejects_invalid_file() {
        let (_dir, path) = write_temp_config("invalid yaml content: -");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn validate_rejects_unknown_theme() {
        let mut config = AppConfig::default();
        config.ui.theme = "solarized".to_string();
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("theme")));
    }

    #[test]
    fn validate_rejects_tiny_window() {
        let mut config = AppConfig::default();
        config.ui.window_width = 320.0;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&"Window size must be at least 640x480".to_string()));
    }

    #[test]
    fn validate_rejects_zero_camera_limit() {
        let mut config = AppConfig::default();
        config.plan.camera_limit = 0;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&"Camera limit must be greater than 0".to_string()));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.app.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_logs_dir_falls_back_to_platform_dir() {
        let config = AppConfig::default();
        let dir = config.log_dir();
        assert!(dir.ends_with("clean-air-sentinel/logs"));
    }

    #[test]
    fn development_flag() {
        let mut config = AppConfig::default();
        assert!(config.is_development());
        config.app.environment = "production".to_string();
        assert!(!config.is_development());
    }
}
