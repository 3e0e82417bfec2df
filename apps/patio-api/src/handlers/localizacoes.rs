//! 定位记录 CRUD handlers
//!
//! - GET /localizacoes - 列出定位记录
//! - POST /localizacoes - 创建（motoId 与 setorId 都必须可解析）
//! - GET /localizacoes/busca?placa= - 按内嵌车牌查找
//! - GET /localizacoes/{id} - 获取详情
//! - DELETE /localizacoes/{id} - 删除
//!
//! 记录创建后不可变（无 PUT）：moto/setor 快照与时间戳构成
//! 历史记录，修正只能删除后重新登记。

use crate::AppState;
use crate::utils::response::{localizacao_to_dto, not_found_error, storage_error};
use api_contract::{ApiResponse, CreateLocalizacaoRequest, LocalizacaoDto};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patio_storage::LocalizacaoInput;

#[derive(serde::Deserialize)]
pub struct LocalizacaoPath {
    localizacao_id: i64,
}

#[derive(serde::Deserialize)]
pub struct LocalizacaoPlacaQuery {
    placa: String,
}

/// 列出定位记录。
pub async fn list_localizacoes(State(state): State<AppState>) -> Response {
    patio_telemetry::record_collection_read();
    match state.localizacao_store.list_localizacoes().await {
        Ok(items) => {
            let data: Vec<LocalizacaoDto> = items.into_iter().map(localizacao_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建定位记录。
///
/// moto 与 setor 两侧都必须能按 ID 解析，否则返回 400 提示先
/// 完成选择；成功时内嵌两侧快照并生成 dataAtualizada。
pub async fn create_localizacao(
    State(state): State<AppState>,
    Json(req): Json<CreateLocalizacaoRequest>,
) -> Response {
    let input = LocalizacaoInput {
        id: state.ids.next_id(),
        moto_id: req.moto_id,
        setor_id: req.setor_id,
    };
    match state.localizacao_store.save_localizacao(input).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(localizacao_to_dto(saved))),
            )
                .into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 获取定位记录详情。
pub async fn get_localizacao(
    State(state): State<AppState>,
    Path(path): Path<LocalizacaoPath>,
) -> Response {
    match state
        .localizacao_store
        .find_localizacao(path.localizacao_id)
        .await
    {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(localizacao_to_dto(record))),
        )
            .into_response(),
        Ok(None) => not_found_error("localizacao not found"),
        Err(err) => storage_error(err),
    }
}

/// 删除定位记录。
pub async fn delete_localizacao(
    State(state): State<AppState>,
    Path(path): Path<LocalizacaoPath>,
) -> Response {
    match state
        .localizacao_store
        .delete_localizacao(path.localizacao_id)
        .await
    {
        Ok(true) => {
            patio_telemetry::record_delete_success();
            (StatusCode::OK, Json(ApiResponse::success(true))).into_response()
        }
        Ok(false) => not_found_error("localizacao not found"),
        Err(err) => storage_error(err),
    }
}

/// 按内嵌车牌查找定位记录（第一个命中）。
pub async fn busca_localizacao(
    State(state): State<AppState>,
    Query(query): Query<LocalizacaoPlacaQuery>,
) -> Response {
    patio_telemetry::record_search();
    match state.localizacao_store.find_by_placa(&query.placa).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(localizacao_to_dto(record))),
        )
            .into_response(),
        Ok(None) => not_found_error("no localizacao with that placa"),
        Err(err) => storage_error(err),
    }
}
