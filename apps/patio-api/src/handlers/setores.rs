//! 区位 CRUD handlers
//!
//! - GET /setores - 列出区位
//! - POST /setores - 创建区位（patioId 解析失败返回 400）
//! - GET /setores/busca?patio= - 按所属停车场名称查找
//! - GET /setores/{id} - 获取详情
//! - PUT /setores/{id} - 更新（重新解析 patioId 并刷新快照）
//! - DELETE /setores/{id} - 删除（无依赖检查）

use crate::AppState;
use crate::utils::normalize_required;
use crate::utils::response::{not_found_error, setor_to_dto, storage_error};
use api_contract::{ApiResponse, CreateSetorRequest, SetorDto, UpdateSetorRequest};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patio_storage::SetorInput;

#[derive(serde::Deserialize)]
pub struct SetorPath {
    setor_id: i64,
}

#[derive(serde::Deserialize)]
pub struct PatioNomeQuery {
    patio: String,
}

/// 列出区位。
pub async fn list_setores(State(state): State<AppState>) -> Response {
    patio_telemetry::record_collection_read();
    match state.setor_store.list_setores().await {
        Ok(items) => {
            let data: Vec<SetorDto> = items.into_iter().map(setor_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建区位。
///
/// patioId 在保存时解析为当前停车场集合中的记录并整体内嵌；
/// 不存在则拒绝，提示先创建停车场。
pub async fn create_setor(
    State(state): State<AppState>,
    Json(req): Json<CreateSetorRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };

    let input = SetorInput {
        id: state.ids.next_id(),
        nome,
        fileira: req.fileira,
        vaga: req.vaga,
        patio_id: req.patio_id,
    };
    match state.setor_store.save_setor(input).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(setor_to_dto(saved))),
            )
                .into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 获取区位详情。
pub async fn get_setor(State(state): State<AppState>, Path(path): Path<SetorPath>) -> Response {
    match state.setor_store.find_setor(path.setor_id).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(setor_to_dto(record))),
        )
            .into_response(),
        Ok(None) => not_found_error("setor not found"),
        Err(err) => storage_error(err),
    }
}

/// 更新区位（重新解析 patioId，内嵌新的停车场快照）。
pub async fn update_setor(
    State(state): State<AppState>,
    Path(path): Path<SetorPath>,
    Json(req): Json<UpdateSetorRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };

    match state.setor_store.find_setor(path.setor_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found_error("setor not found"),
        Err(err) => return storage_error(err),
    }

    let input = SetorInput {
        id: path.setor_id,
        nome,
        fileira: req.fileira,
        vaga: req.vaga,
        patio_id: req.patio_id,
    };
    match state.setor_store.save_setor(input).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(setor_to_dto(saved))),
            )
                .into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 删除区位。
///
/// 无依赖检查：已有定位记录的内嵌快照不受影响（继承的非对称
/// 删除策略）。
pub async fn delete_setor(State(state): State<AppState>, Path(path): Path<SetorPath>) -> Response {
    match state.setor_store.delete_setor(path.setor_id).await {
        Ok(true) => {
            patio_telemetry::record_delete_success();
            (StatusCode::OK, Json(ApiResponse::success(true))).into_response()
        }
        Ok(false) => not_found_error("setor not found"),
        Err(err) => storage_error(err),
    }
}

/// 按所属停车场名称查找区位（返回全部命中，插入顺序）。
pub async fn busca_setores(
    State(state): State<AppState>,
    Query(query): Query<PatioNomeQuery>,
) -> Response {
    patio_telemetry::record_search();
    match state.setor_store.find_by_patio_nome(&query.patio).await {
        Ok(items) => {
            let data: Vec<SetorDto> = items.into_iter().map(setor_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}
