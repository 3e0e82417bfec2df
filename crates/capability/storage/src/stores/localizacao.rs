//! 定位记录集合存储实现

use super::{LOCALIZACOES_KEY, MOTOS_KEY, SETORES_KEY};
use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::models::{LocalizacaoInput, LocalizacaoRecord, MotoRecord, SetorRecord};
use crate::repository::Repository;
use crate::traits::LocalizacaoStore;
use crate::validation::{resolve_moto, resolve_setor};
use chrono::Utc;
use std::sync::Arc;

/// 定位记录存储。
///
/// 保存时需要解析 moto 与 setor 两侧，因此持有三个仓库。
/// 记录一旦写入即为独立的历史快照：源 moto/setor 之后被编辑或
/// 删除都不影响已有记录（也不级联）。
pub struct KvLocalizacaoStore {
    localizacoes: Repository<LocalizacaoRecord>,
    motos: Repository<MotoRecord>,
    setores: Repository<SetorRecord>,
}

impl KvLocalizacaoStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            localizacoes: Repository::new(kv.clone(), LOCALIZACOES_KEY),
            motos: Repository::new(kv.clone(), MOTOS_KEY),
            setores: Repository::new(kv, SETORES_KEY),
        }
    }
}

#[async_trait::async_trait]
impl LocalizacaoStore for KvLocalizacaoStore {
    async fn list_localizacoes(&self) -> Result<Vec<LocalizacaoRecord>, StorageError> {
        self.localizacoes.load_all().await
    }

    async fn find_localizacao(&self, id: i64) -> Result<Option<LocalizacaoRecord>, StorageError> {
        let localizacoes = self.localizacoes.load_all().await?;
        Ok(localizacoes.into_iter().find(|loc| loc.id == id))
    }

    async fn find_by_placa(
        &self,
        placa: &str,
    ) -> Result<Option<LocalizacaoRecord>, StorageError> {
        let procurada = placa.to_lowercase();
        let localizacoes = self.localizacoes.load_all().await?;
        Ok(localizacoes
            .into_iter()
            .find(|loc| loc.moto.placa.to_lowercase() == procurada))
    }

    async fn save_localizacao(
        &self,
        input: LocalizacaoInput,
    ) -> Result<LocalizacaoRecord, StorageError> {
        // 两侧都必须能解析，任何写入之前完成
        let motos = self.motos.load_all().await?;
        let moto = resolve_moto(&motos, input.moto_id)?;
        let setores = self.setores.load_all().await?;
        let setor = resolve_setor(&setores, input.setor_id)?;
        let record = LocalizacaoRecord {
            id: input.id,
            data_atualizada: Utc::now().to_rfc3339(),
            moto,
            setor,
        };
        self.localizacoes.upsert(record.clone()).await?;
        Ok(record)
    }

    async fn delete_localizacao(&self, id: i64) -> Result<bool, StorageError> {
        let (_, removed) = self.localizacoes.delete_by_id(id).await?;
        Ok(removed)
    }
}
