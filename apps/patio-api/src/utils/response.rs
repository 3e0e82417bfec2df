//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, not_found_error, storage_error
//! - DTO 转换：moto_to_dto, patio_to_dto, setor_to_dto, localizacao_to_dto
//!
//! 存储错误到 HTTP 状态码的映射：
//! - Validation / DanglingReference / MissingSelection → 400
//! - ReferentialConstraintViolation → 409（消息携带依赖数量）
//! - Backend / Corrupt → 500

use api_contract::{ApiResponse, LocalizacaoDto, MotoDto, PatioDto, SetorDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patio_storage::{
    LocalizacaoRecord, MotoRecord, PatioRecord, SetorRecord, StorageError,
};

/// 错误请求响应。
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到响应（提示性：查询未命中不算失败的操作）。
pub fn not_found_error(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(
            "RESOURCE.NOT_FOUND",
            message.into(),
        )),
    )
        .into_response()
}

/// 存储错误响应。
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    match err {
        StorageError::Validation { .. } => bad_request_error(message),
        StorageError::DanglingReference { .. } | StorageError::MissingSelection { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("REFERENCE.MISSING", message)),
        )
            .into_response(),
        StorageError::ReferentialConstraintViolation { .. } => {
            patio_telemetry::record_constraint_rejection();
            (
                StatusCode::CONFLICT,
                Json(ApiResponse::<()>::error("REFERENCE.CONSTRAINT", message)),
            )
                .into_response()
        }
        StorageError::Backend(_) | StorageError::Corrupt { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
        )
            .into_response(),
    }
}

/// MotoRecord 转 MotoDto。
pub fn moto_to_dto(record: MotoRecord) -> MotoDto {
    MotoDto {
        id: record.id,
        nome: record.nome,
        fabricante: record.fabricante,
        cilindrada: record.cilindrada,
        placa: record.placa,
        status: record.status.as_str().to_string(),
        qr_code: record.qr_code,
    }
}

/// PatioRecord 转 PatioDto。
pub fn patio_to_dto(record: PatioRecord) -> PatioDto {
    PatioDto {
        id: record.id,
        nome: record.nome,
        localizacao: record.localizacao,
    }
}

/// SetorRecord 转 SetorDto。
pub fn setor_to_dto(record: SetorRecord) -> SetorDto {
    SetorDto {
        id: record.id,
        nome: record.nome,
        fileira: record.fileira,
        vaga: record.vaga,
        patio: patio_to_dto(record.patio),
    }
}

/// LocalizacaoRecord 转 LocalizacaoDto。
pub fn localizacao_to_dto(record: LocalizacaoRecord) -> LocalizacaoDto {
    LocalizacaoDto {
        id: record.id,
        data_atualizada: record.data_atualizada,
        moto: moto_to_dto(record.moto),
        setor: setor_to_dto(record.setor),
    }
}
