//! 验证与引用完整性辅助函数
//!
//! 提供统一的校验逻辑，全部为纯函数，不依赖任何展示层：
//! - ensure_required：必填字段非空
//! - resolve_patio：区位保存前解析所属停车场（悬空引用则拒绝）
//! - ensure_patio_deletable：停车场删除前检查依赖区位（不级联）
//! - resolve_moto / resolve_setor：定位记录保存前解析两侧选择
//!
//! 所有检查在任何写入之前执行；拒绝时集合保持原样。

use crate::error::StorageError;
use crate::models::{MotoRecord, PatioRecord, SetorRecord};

/// 必填字段去除首尾空格后必须非空。
pub fn ensure_required(field: &'static str, value: &str) -> Result<(), StorageError> {
    if value.trim().is_empty() {
        return Err(StorageError::Validation { field });
    }
    Ok(())
}

/// 解析区位引用的停车场。
///
/// 不存在则返回 [`StorageError::DanglingReference`]；存在则返回
/// 用于内嵌的深拷贝（快照，而非引用）。
pub fn resolve_patio(patios: &[PatioRecord], patio_id: i64) -> Result<PatioRecord, StorageError> {
    patios
        .iter()
        .find(|patio| patio.id == patio_id)
        .cloned()
        .ok_or(StorageError::DanglingReference {
            entity: "patio",
            id: patio_id,
        })
}

/// 停车场删除前的依赖检查。
///
/// 统计内嵌 `patio.id` 等于目标的区位数量；非零则返回
/// [`StorageError::ReferentialConstraintViolation`] 并携带数量。
/// 删除从不级联。
pub fn ensure_patio_deletable(
    setores: &[SetorRecord],
    patio_id: i64,
) -> Result<(), StorageError> {
    let dependentes = setores
        .iter()
        .filter(|setor| setor.patio.id == patio_id)
        .count();
    if dependentes > 0 {
        return Err(StorageError::ReferentialConstraintViolation {
            id: patio_id,
            dependentes,
        });
    }
    Ok(())
}

/// 解析定位记录选择的摩托车。
pub fn resolve_moto(motos: &[MotoRecord], moto_id: i64) -> Result<MotoRecord, StorageError> {
    motos
        .iter()
        .find(|moto| moto.id == moto_id)
        .cloned()
        .ok_or(StorageError::MissingSelection {
            entity: "moto",
            id: moto_id,
        })
}

/// 解析定位记录选择的区位。
pub fn resolve_setor(setores: &[SetorRecord], setor_id: i64) -> Result<SetorRecord, StorageError> {
    setores
        .iter()
        .find(|setor| setor.id == setor_id)
        .cloned()
        .ok_or(StorageError::MissingSelection {
            entity: "setor",
            id: setor_id,
        })
}
