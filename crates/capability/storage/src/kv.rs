//! 键值存储端口
//!
//! 定义持久化后端的最小接口：按键读取、按键整体写入。
//! 所有集合操作都经由该端口完成，端口实例通过 `Arc<dyn KeyValueStore>`
//! 注入到各存储实现，禁止进程级单例。
//!
//! 实现：
//! - [`InMemoryKeyValueStore`]：内存实现（测试与本地演示）
//! - `RedisKeyValueStore`（见 `redis.rs`）：生产环境实现

use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::RwLock;

/// 键值存储接口。
///
/// `get` 区分"键缺失"（Ok(None)）与后端故障（Err）；
/// `set` 对单个键整体替换，假定后端对单键写入是原子的。
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的负载；键不存在时返回 None。
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 整体写入键对应的负载。
    async fn set(&self, key: &str, payload: String) -> Result<(), StorageError>;
}

/// 内存键值存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
/// 仅用于测试和本地演示，无持久化。
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Backend("lock failed".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, payload: String) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Backend("lock failed".to_string()))?;
        entries.insert(key.to_string(), payload);
        Ok(())
    }
}
