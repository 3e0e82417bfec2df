//! 摩托车集合存储实现

use super::MOTOS_KEY;
use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::models::MotoRecord;
use crate::repository::Repository;
use crate::traits::MotoStore;
use crate::validation::ensure_required;
use domain::MotoStatus;
use std::sync::Arc;

/// 摩托车存储。
pub struct KvMotoStore {
    motos: Repository<MotoRecord>,
}

impl KvMotoStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            motos: Repository::new(kv, MOTOS_KEY),
        }
    }
}

#[async_trait::async_trait]
impl MotoStore for KvMotoStore {
    async fn list_motos(&self) -> Result<Vec<MotoRecord>, StorageError> {
        self.motos.load_all().await
    }

    async fn find_moto(&self, id: i64) -> Result<Option<MotoRecord>, StorageError> {
        let motos = self.motos.load_all().await?;
        Ok(motos.into_iter().find(|moto| moto.id == id))
    }

    async fn find_by_placa(&self, placa: &str) -> Result<Option<MotoRecord>, StorageError> {
        let procurada = placa.to_lowercase();
        let motos = self.motos.load_all().await?;
        Ok(motos
            .into_iter()
            .find(|moto| moto.placa.to_lowercase() == procurada))
    }

    async fn save_moto(&self, record: MotoRecord) -> Result<MotoRecord, StorageError> {
        ensure_required("nome", &record.nome)?;
        ensure_required("fabricante", &record.fabricante)?;
        ensure_required("placa", &record.placa)?;
        ensure_required("qrCode", &record.qr_code)?;
        self.motos.upsert(record.clone()).await?;
        Ok(record)
    }

    async fn set_status(
        &self,
        id: i64,
        status: MotoStatus,
    ) -> Result<Option<MotoRecord>, StorageError> {
        let mut motos = self.motos.load_all().await?;
        let Some(moto) = motos.iter_mut().find(|moto| moto.id == id) else {
            return Ok(None);
        };
        moto.status = status;
        let updated = moto.clone();
        self.motos.save_all(&motos).await?;
        Ok(Some(updated))
    }

    async fn delete_moto(&self, id: i64) -> Result<bool, StorageError> {
        let (_, removed) = self.motos.delete_by_id(id).await?;
        Ok(removed)
    }
}
