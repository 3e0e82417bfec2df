//! 停车场 CRUD handlers
//!
//! - GET /patios - 列出停车场
//! - POST /patios - 创建停车场
//! - GET /patios/busca?nome= - 按名称查找（大小写不敏感）
//! - GET /patios/{id} - 获取详情
//! - PUT /patios/{id} - 更新（已保存区位的内嵌快照不受影响）
//! - DELETE /patios/{id} - 删除（存在依赖区位时返回 409，不级联）

use crate::AppState;
use crate::utils::normalize_required;
use crate::utils::response::{not_found_error, patio_to_dto, storage_error};
use api_contract::{ApiResponse, CreatePatioRequest, PatioDto, UpdatePatioRequest};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patio_storage::PatioRecord;

#[derive(serde::Deserialize)]
pub struct PatioPath {
    patio_id: i64,
}

#[derive(serde::Deserialize)]
pub struct NomeQuery {
    nome: String,
}

/// 列出停车场。
pub async fn list_patios(State(state): State<AppState>) -> Response {
    patio_telemetry::record_collection_read();
    match state.patio_store.list_patios().await {
        Ok(items) => {
            let data: Vec<PatioDto> = items.into_iter().map(patio_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建停车场。
pub async fn create_patio(
    State(state): State<AppState>,
    Json(req): Json<CreatePatioRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let localizacao = match normalize_required(req.localizacao, "localizacao") {
        Ok(value) => value,
        Err(response) => return response,
    };

    let record = PatioRecord {
        id: state.ids.next_id(),
        nome,
        localizacao,
    };
    match state.patio_store.save_patio(record).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(patio_to_dto(saved))),
            )
                .into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 获取停车场详情。
pub async fn get_patio(State(state): State<AppState>, Path(path): Path<PatioPath>) -> Response {
    match state.patio_store.find_patio(path.patio_id).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(patio_to_dto(record))),
        )
            .into_response(),
        Ok(None) => not_found_error("patio not found"),
        Err(err) => storage_error(err),
    }
}

/// 更新停车场。
///
/// 已保存区位内嵌的是保存时刻的快照，这里的编辑不会传播过去。
pub async fn update_patio(
    State(state): State<AppState>,
    Path(path): Path<PatioPath>,
    Json(req): Json<UpdatePatioRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let localizacao = match normalize_required(req.localizacao, "localizacao") {
        Ok(value) => value,
        Err(response) => return response,
    };

    match state.patio_store.find_patio(path.patio_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found_error("patio not found"),
        Err(err) => return storage_error(err),
    }

    let record = PatioRecord {
        id: path.patio_id,
        nome,
        localizacao,
    };
    match state.patio_store.save_patio(record).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(patio_to_dto(saved))),
            )
                .into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 删除停车场。
///
/// 存在内嵌 `patio.id` 等于目标的区位时被拒绝（409，消息携带
/// 依赖数量），集合不发生任何变化。
pub async fn delete_patio(State(state): State<AppState>, Path(path): Path<PatioPath>) -> Response {
    match state.patio_store.delete_patio(path.patio_id).await {
        Ok(true) => {
            patio_telemetry::record_delete_success();
            (StatusCode::OK, Json(ApiResponse::success(true))).into_response()
        }
        Ok(false) => not_found_error("patio not found"),
        Err(err) => storage_error(err),
    }
}

/// 按名称查找停车场。
pub async fn busca_patio(
    State(state): State<AppState>,
    Query(query): Query<NomeQuery>,
) -> Response {
    patio_telemetry::record_search();
    match state.patio_store.find_by_nome(&query.nome).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(patio_to_dto(record))),
        )
            .into_response(),
        Ok(None) => not_found_error("no patio with that nome"),
        Err(err) => storage_error(err),
    }
}
