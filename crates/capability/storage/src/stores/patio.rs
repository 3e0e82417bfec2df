//! 停车场集合存储实现

use super::{PATIOS_KEY, SETORES_KEY};
use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::models::{PatioRecord, SetorRecord};
use crate::repository::Repository;
use crate::traits::PatioStore;
use crate::validation::{ensure_patio_deletable, ensure_required};
use std::sync::Arc;

/// 停车场存储。
///
/// 删除需要读取区位集合做依赖检查，因此同时持有两个仓库
/// （共享同一个键值端口）。
pub struct KvPatioStore {
    patios: Repository<PatioRecord>,
    setores: Repository<SetorRecord>,
}

impl KvPatioStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            patios: Repository::new(kv.clone(), PATIOS_KEY),
            setores: Repository::new(kv, SETORES_KEY),
        }
    }
}

#[async_trait::async_trait]
impl PatioStore for KvPatioStore {
    async fn list_patios(&self) -> Result<Vec<PatioRecord>, StorageError> {
        self.patios.load_all().await
    }

    async fn find_patio(&self, id: i64) -> Result<Option<PatioRecord>, StorageError> {
        let patios = self.patios.load_all().await?;
        Ok(patios.into_iter().find(|patio| patio.id == id))
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<PatioRecord>, StorageError> {
        let procurado = nome.to_lowercase();
        let patios = self.patios.load_all().await?;
        Ok(patios
            .into_iter()
            .find(|patio| patio.nome.to_lowercase() == procurado))
    }

    async fn save_patio(&self, record: PatioRecord) -> Result<PatioRecord, StorageError> {
        ensure_required("nome", &record.nome)?;
        ensure_required("localizacao", &record.localizacao)?;
        self.patios.upsert(record.clone()).await?;
        Ok(record)
    }

    async fn delete_patio(&self, id: i64) -> Result<bool, StorageError> {
        // 依赖检查在任何写入之前；被拒绝时停车场集合保持原样
        let setores = self.setores.load_all().await?;
        ensure_patio_deletable(&setores, id)?;
        let (_, removed) = self.patios.delete_by_id(id).await?;
        Ok(removed)
    }
}
