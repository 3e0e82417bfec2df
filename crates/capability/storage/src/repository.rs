//! 通用集合仓库
//!
//! 对单个集合键提供 load/save/upsert/delete 操作：
//! - 负载是整集合的 JSON 数组，每次写入整体替换
//! - 键缺失视为空集合（正常情况）；负载损坏是致命错误
//! - 集合保持追加插入顺序，任何操作都不重排
//!
//! 并发模型：每次变更都是"读-改-整体写"，无内部加锁。
//! 同一集合的两个并发写入以整集合为粒度后写覆盖。

use crate::error::StorageError;
use crate::kv::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

/// 记录 ID 提取接口（upsert/delete 按 ID 定位记录）。
pub trait Identified {
    fn record_id(&self) -> i64;
}

/// 单个集合的仓库。
pub struct Repository<T> {
    kv: Arc<dyn KeyValueStore>,
    collection_key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Identified + Clone + Send + Sync,
{
    pub fn new(kv: Arc<dyn KeyValueStore>, collection_key: impl Into<String>) -> Self {
        Self {
            kv,
            collection_key: collection_key.into(),
            _marker: PhantomData,
        }
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    /// 读取整个集合。
    ///
    /// 键缺失返回空集合；负载存在但无法反序列化返回
    /// [`StorageError::Corrupt`]，绝不悄悄回退为空。
    pub async fn load_all(&self) -> Result<Vec<T>, StorageError> {
        let payload = self.kv.get(&self.collection_key).await?;
        let Some(payload) = payload else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&payload).map_err(|err| StorageError::Corrupt {
            collection: self.collection_key.clone(),
            detail: err.to_string(),
        })
    }

    /// 将整个集合序列化为单一负载并写入。
    pub async fn save_all(&self, items: &[T]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(items).map_err(|err| StorageError::Corrupt {
            collection: self.collection_key.clone(),
            detail: err.to_string(),
        })?;
        self.kv.set(&self.collection_key, payload).await
    }

    /// 插入或替换：存在相同 ID 的记录则整体替换第一个匹配项，
    /// 否则追加到集合末尾。返回写入后的集合。
    ///
    /// 同一 ID 永远不会出现两条记录（后写覆盖）。
    pub async fn upsert(&self, item: T) -> Result<Vec<T>, StorageError> {
        let mut items = self.load_all().await?;
        let id = item.record_id();
        match items.iter_mut().find(|existing| existing.record_id() == id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        self.save_all(&items).await?;
        Ok(items)
    }

    /// 按 ID 删除记录并重写整个集合。
    ///
    /// 返回写入后的集合以及是否确有记录被移除。
    pub async fn delete_by_id(&self, id: i64) -> Result<(Vec<T>, bool), StorageError> {
        let items = self.load_all().await?;
        let before = items.len();
        let remaining: Vec<T> = items
            .into_iter()
            .filter(|item| item.record_id() != id)
            .collect();
        let removed = remaining.len() != before;
        if removed {
            self.save_all(&remaining).await?;
        }
        Ok((remaining, removed))
    }
}
