//! 存储接口 Trait 定义
//!
//! 定义四个集合的异步接口：
//! - MotoStore：摩托车存储
//! - PatioStore：停车场存储
//! - SetorStore：区位存储
//! - LocalizacaoStore：定位记录存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 查找未命中返回 Ok(None)/空集合，不算错误
//! - 使用 async_trait 支持动态分发
//! - 引用完整性策略在实现内部、任何写入之前执行

use crate::error::StorageError;
use crate::models::{
    LocalizacaoInput, LocalizacaoRecord, MotoRecord, PatioRecord, SetorInput, SetorRecord,
};
use async_trait::async_trait;
use domain::MotoStatus;

/// 摩托车存储接口。
///
/// 删除不做依赖检查：已存在的定位记录是独立快照，源记录删除后
/// 原样保留（继承的非对称策略，见 PatioStore::delete_patio）。
#[async_trait]
pub trait MotoStore: Send + Sync {
    /// 按插入顺序列出所有摩托车。
    async fn list_motos(&self) -> Result<Vec<MotoRecord>, StorageError>;

    /// 按 ID 查找。
    async fn find_moto(&self, id: i64) -> Result<Option<MotoRecord>, StorageError>;

    /// 按车牌查找：大小写不敏感的精确匹配，返回插入顺序中的
    /// 第一个命中。
    async fn find_by_placa(&self, placa: &str) -> Result<Option<MotoRecord>, StorageError>;

    /// 保存：相同 ID 整体替换，否则追加。
    async fn save_moto(&self, record: MotoRecord) -> Result<MotoRecord, StorageError>;

    /// 定向更新单个状态字段（出入场登记使用）。
    /// 记录不存在返回 Ok(None)。
    async fn set_status(
        &self,
        id: i64,
        status: MotoStatus,
    ) -> Result<Option<MotoRecord>, StorageError>;

    /// 按 ID 删除；返回是否确有记录被移除。
    async fn delete_moto(&self, id: i64) -> Result<bool, StorageError>;
}

/// 停车场存储接口。
#[async_trait]
pub trait PatioStore: Send + Sync {
    async fn list_patios(&self) -> Result<Vec<PatioRecord>, StorageError>;

    async fn find_patio(&self, id: i64) -> Result<Option<PatioRecord>, StorageError>;

    /// 按名称查找：大小写不敏感的精确匹配。
    async fn find_by_nome(&self, nome: &str) -> Result<Option<PatioRecord>, StorageError>;

    async fn save_patio(&self, record: PatioRecord) -> Result<PatioRecord, StorageError>;

    /// 删除前检查依赖区位：存在内嵌 `patio.id` 等于目标的区位时
    /// 返回 ReferentialConstraintViolation（携带数量），不删除、
    /// 不级联、不改动集合。
    async fn delete_patio(&self, id: i64) -> Result<bool, StorageError>;
}

/// 区位存储接口。
#[async_trait]
pub trait SetorStore: Send + Sync {
    async fn list_setores(&self) -> Result<Vec<SetorRecord>, StorageError>;

    async fn find_setor(&self, id: i64) -> Result<Option<SetorRecord>, StorageError>;

    /// 按所属停车场名称查找：大小写不敏感地匹配内嵌
    /// `patio.nome`，按插入顺序返回全部命中。
    async fn find_by_patio_nome(&self, nome: &str) -> Result<Vec<SetorRecord>, StorageError>;

    /// 保存：先把 `patio_id` 解析为当前停车场集合中的记录，
    /// 不存在则拒绝（DanglingReference）；存在则内嵌深拷贝快照。
    async fn save_setor(&self, input: SetorInput) -> Result<SetorRecord, StorageError>;

    /// 删除不做依赖检查（继承的非对称策略）。
    async fn delete_setor(&self, id: i64) -> Result<bool, StorageError>;
}

/// 定位记录存储接口。
#[async_trait]
pub trait LocalizacaoStore: Send + Sync {
    async fn list_localizacoes(&self) -> Result<Vec<LocalizacaoRecord>, StorageError>;

    async fn find_localizacao(&self, id: i64) -> Result<Option<LocalizacaoRecord>, StorageError>;

    /// 按内嵌 `moto.placa` 查找：大小写不敏感的精确匹配，
    /// 返回当前顺序线性扫描的第一个命中。
    async fn find_by_placa(&self, placa: &str)
        -> Result<Option<LocalizacaoRecord>, StorageError>;

    /// 保存：moto 与 setor 两侧都必须能按 ID 解析，否则拒绝
    /// （MissingSelection）；成功时内嵌两侧深拷贝并生成
    /// dataAtualizada 时间戳。
    async fn save_localizacao(
        &self,
        input: LocalizacaoInput,
    ) -> Result<LocalizacaoRecord, StorageError>;

    async fn delete_localizacao(&self, id: i64) -> Result<bool, StorageError>;
}
