//! 服务配置
//!
//! 加载顺序：内置默认值 → `USER_API_CONFIG` 指定的 TOML 文件（可选）→ 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "USER_API_CONFIG";

/// 服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub host: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)，`RUST_LOG` 优先
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// 从进程环境加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Config::load_from_file(path)?,
            _ => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用环境变量覆盖配置项：`HOST`、`PORT`、`REQUEST_TIMEOUT_SECS`、`LOG_LEVEL`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.http.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("PORT", port))?;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECS") {
            self.http.request_timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("REQUEST_TIMEOUT_SECS", timeout))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("环境变量 {0} 的值无效: {1}")]
    InvalidEnv(&'static str, String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[("PORT", "8081"), ("LOG_LEVEL", "DEBUG")]))
            .unwrap();
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.http.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_env() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv("PORT", _)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[http]\nport = 4000\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }
}
