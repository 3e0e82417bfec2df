//! 数据模型
//!
//! 定义四个集合的记录结构以及带引用解析的保存输入：
//! - 摩托车：MotoRecord
//! - 停车场：PatioRecord
//! - 区位：SetorRecord（整体内嵌所属停车场快照）
//! - 定位记录：LocalizacaoRecord（整体内嵌 moto 与 setor 快照）
//!
//! 内嵌语义：保存时把被引用记录的当前字段值复制进来，而不是存
//! 引用。此后对源记录的编辑不会传播到已保存的快照。这是有意的
//! 历史快照语义，不要"修复"为按 ID 关联。
//!
//! 线上字段名与存量数据一致（camelCase：qrCode、dataAtualizada）。

use crate::repository::Identified;
use domain::MotoStatus;
use serde::{Deserialize, Serialize};

/// 摩托车记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoRecord {
    pub id: i64,
    pub nome: String,
    pub fabricante: String,
    pub cilindrada: u32,
    /// 车牌。查找时大小写不敏感，存储保留原始写法。
    pub placa: String,
    /// 旧负载可能缺失该字段，按默认值 "Disponível" 读取。
    #[serde(default)]
    pub status: MotoStatus,
    pub qr_code: String,
}

/// 停车场记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatioRecord {
    pub id: i64,
    pub nome: String,
    pub localizacao: String,
}

/// 区位记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetorRecord {
    pub id: i64,
    pub nome: String,
    pub fileira: u32,
    pub vaga: u32,
    /// 保存时解析 patio_id 后整体内嵌的停车场快照。
    pub patio: PatioRecord,
}

/// 定位记录。创建后不可变（仅可删除）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoRecord {
    pub id: i64,
    /// 保存时生成的 RFC 3339 时间戳。
    pub data_atualizada: String,
    pub moto: MotoRecord,
    pub setor: SetorRecord,
}

/// 区位保存输入：patio_id 在保存时解析为停车场快照。
#[derive(Debug, Clone)]
pub struct SetorInput {
    pub id: i64,
    pub nome: String,
    pub fileira: u32,
    pub vaga: u32,
    pub patio_id: i64,
}

/// 定位记录保存输入：两个 ID 在保存时解析为快照。
#[derive(Debug, Clone)]
pub struct LocalizacaoInput {
    pub id: i64,
    pub moto_id: i64,
    pub setor_id: i64,
}

impl Identified for MotoRecord {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Identified for PatioRecord {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Identified for SetorRecord {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Identified for LocalizacaoRecord {
    fn record_id(&self) -> i64 {
        self.id
    }
}
