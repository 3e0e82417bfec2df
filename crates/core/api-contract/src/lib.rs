//! 稳定的 DTO 与 API 响应契约。
//!
//! 错误码约定：
//! - `INVALID.REQUEST`：请求体字段缺失/非法
//! - `RESOURCE.NOT_FOUND`：资源或查询结果不存在（提示性，不算失败操作）
//! - `REFERENCE.MISSING`：保存引用了不存在的父记录
//! - `REFERENCE.CONSTRAINT`：删除被依赖记录阻止
//! - `INTERNAL.ERROR`：存储后端故障或数据损坏

use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 摩托车创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMotoRequest {
    pub nome: String,
    pub fabricante: String,
    pub cilindrada: u32,
    pub placa: String,
    pub qr_code: String,
    /// 省略时默认 "Disponível"
    pub status: Option<String>,
}

/// 摩托车更新请求体（整体覆盖，按 ID 定位）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMotoRequest {
    pub nome: String,
    pub fabricante: String,
    pub cilindrada: u32,
    pub placa: String,
    pub qr_code: String,
    pub status: String,
}

/// 出入场登记请求体。
///
/// `tipo` 只接受 "entrada"（入场 → Em uso）或 "saida"（出场 → Disponível）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimentoRequest {
    pub tipo: String,
}

/// 摩托车返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoDto {
    pub id: i64,
    pub nome: String,
    pub fabricante: String,
    pub cilindrada: u32,
    pub placa: String,
    pub status: String,
    pub qr_code: String,
}

/// 停车场创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatioRequest {
    pub nome: String,
    pub localizacao: String,
}

/// 停车场更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatioRequest {
    pub nome: String,
    pub localizacao: String,
}

/// 停车场返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatioDto {
    pub id: i64,
    pub nome: String,
    pub localizacao: String,
}

/// 区位创建请求体（patioId 在保存时解析并整体内嵌）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetorRequest {
    pub nome: String,
    pub fileira: u32,
    pub vaga: u32,
    pub patio_id: i64,
}

/// 区位更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSetorRequest {
    pub nome: String,
    pub fileira: u32,
    pub vaga: u32,
    pub patio_id: i64,
}

/// 区位返回结构（含保存时内嵌的停车场快照）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetorDto {
    pub id: i64,
    pub nome: String,
    pub fileira: u32,
    pub vaga: u32,
    pub patio: PatioDto,
}

/// 定位记录创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocalizacaoRequest {
    pub moto_id: i64,
    pub setor_id: i64,
}

/// 定位记录返回结构（moto 与 setor 均为保存时的快照）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoDto {
    pub id: i64,
    pub data_atualizada: String,
    pub moto: MotoDto,
    pub setor: SetorDto,
}
