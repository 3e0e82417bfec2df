//! Redis 键值端口实现

use crate::error::StorageError;
use crate::kv::KeyValueStore;
use redis::AsyncCommands;

/// Redis 键值存储
///
/// 每个集合键（motos/patios/setores/localizacoes）对应一个 Redis 字符串，
/// 负载为整集合的 JSON 数组。可配置键前缀以隔离多套部署。
pub struct RedisKeyValueStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisKeyValueStore {
    pub fn new(client: redis::Client, key_prefix: String) -> Self {
        Self { client, key_prefix }
    }

    pub fn connect(redis_url: &str, key_prefix: String) -> Result<Self, StorageError> {
        let client =
            redis::Client::open(redis_url).map_err(|err| StorageError::Backend(err.to_string()))?;
        Ok(Self::new(client, key_prefix))
    }

    fn full_key(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut connection = self
            .client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        let payload: Option<String> = connection
            .get(self.full_key(key))
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        Ok(payload)
    }

    async fn set(&self, key: &str, payload: String) -> Result<(), StorageError> {
        let mut connection = self
            .client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        connection
            .set::<_, _, ()>(self.full_key(key), payload)
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        Ok(())
    }
}
