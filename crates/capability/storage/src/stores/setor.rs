//! 区位集合存储实现

use super::{PATIOS_KEY, SETORES_KEY};
use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::models::{PatioRecord, SetorInput, SetorRecord};
use crate::repository::Repository;
use crate::traits::SetorStore;
use crate::validation::{ensure_required, resolve_patio};
use std::sync::Arc;

/// 区位存储。
pub struct KvSetorStore {
    setores: Repository<SetorRecord>,
    patios: Repository<PatioRecord>,
}

impl KvSetorStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            setores: Repository::new(kv.clone(), SETORES_KEY),
            patios: Repository::new(kv, PATIOS_KEY),
        }
    }
}

#[async_trait::async_trait]
impl SetorStore for KvSetorStore {
    async fn list_setores(&self) -> Result<Vec<SetorRecord>, StorageError> {
        self.setores.load_all().await
    }

    async fn find_setor(&self, id: i64) -> Result<Option<SetorRecord>, StorageError> {
        let setores = self.setores.load_all().await?;
        Ok(setores.into_iter().find(|setor| setor.id == id))
    }

    async fn find_by_patio_nome(&self, nome: &str) -> Result<Vec<SetorRecord>, StorageError> {
        let procurado = nome.to_lowercase();
        let setores = self.setores.load_all().await?;
        Ok(setores
            .into_iter()
            .filter(|setor| setor.patio.nome.to_lowercase() == procurado)
            .collect())
    }

    async fn save_setor(&self, input: SetorInput) -> Result<SetorRecord, StorageError> {
        ensure_required("nome", &input.nome)?;
        // 解析在写入之前：patio_id 悬空则整个保存被拒绝
        let patios = self.patios.load_all().await?;
        let patio = resolve_patio(&patios, input.patio_id)?;
        let record = SetorRecord {
            id: input.id,
            nome: input.nome,
            fileira: input.fileira,
            vaga: input.vaga,
            // 内嵌的是保存时刻的快照；此后停车场的编辑不会传播过来
            patio,
        };
        self.setores.upsert(record.clone()).await?;
        Ok(record)
    }

    async fn delete_setor(&self, id: i64) -> Result<bool, StorageError> {
        let (_, removed) = self.setores.delete_by_id(id).await?;
        Ok(removed)
    }
}
