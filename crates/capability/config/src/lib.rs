//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 存储后端选择。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 内存后端（默认；本地演示与测试）
    Memory,
    /// Redis 后端（生产环境）
    Redis,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub storage_backend: StorageBackend,
    pub redis_url: String,
    /// 集合键前缀；空串表示使用裸键（motos/patios/...）
    pub key_prefix: String,
}

impl AppConfig {
    /// 从环境变量读取配置。所有变量都有默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr =
            env::var("PATIO_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let storage_backend = read_backend("PATIO_STORAGE")?;
        let redis_url =
            env::var("PATIO_REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let key_prefix = env::var("PATIO_KEY_PREFIX").unwrap_or_default();

        Ok(Self {
            http_addr,
            storage_backend,
            redis_url,
            key_prefix,
        })
    }
}

/// 读取存储后端选择；缺省为内存后端。
fn read_backend(key: &str) -> Result<StorageBackend, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(StorageBackend::Memory),
    };
    match value.to_ascii_lowercase().as_str() {
        "" | "memory" => Ok(StorageBackend::Memory),
        "redis" => Ok(StorageBackend::Redis),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // 串行执行下未设置变量时全部走默认值
        if env::var("PATIO_STORAGE").is_err() && env::var("PATIO_HTTP_ADDR").is_err() {
            let config = AppConfig::from_env().expect("config");
            assert_eq!(config.http_addr, "127.0.0.1:8080");
            assert_eq!(config.storage_backend, StorageBackend::Memory);
            assert!(config.key_prefix.is_empty());
        }
    }
}
