//! 摩托车 CRUD handlers
//!
//! 提供摩托车资源的增删改查接口：
//! - GET /motos - 列出摩托车
//! - POST /motos - 创建摩托车（状态省略时默认 Disponível）
//! - GET /motos/busca?placa= - 按车牌查找（大小写不敏感）
//! - GET /motos/{id} - 获取详情
//! - PUT /motos/{id} - 更新（整体覆盖）
//! - DELETE /motos/{id} - 删除（无依赖检查，已有定位记录保留）
//! - POST /motos/{id}/movimentos - 出入场登记（entrada/saida）

use crate::AppState;
use crate::utils::response::{bad_request_error, moto_to_dto, not_found_error, storage_error};
use crate::utils::{normalize_required, parse_status};
use api_contract::{ApiResponse, CreateMotoRequest, MotoDto, MovimentoRequest, UpdateMotoRequest};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::MotoStatus;
use patio_storage::MotoRecord;

#[derive(serde::Deserialize)]
pub struct MotoPath {
    moto_id: i64,
}

#[derive(serde::Deserialize)]
pub struct PlacaQuery {
    placa: String,
}

/// 列出摩托车。
pub async fn list_motos(State(state): State<AppState>) -> Response {
    patio_telemetry::record_collection_read();
    match state.moto_store.list_motos().await {
        Ok(items) => {
            let data: Vec<MotoDto> = items.into_iter().map(moto_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建摩托车。
pub async fn create_moto(
    State(state): State<AppState>,
    Json(req): Json<CreateMotoRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let fabricante = match normalize_required(req.fabricante, "fabricante") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let placa = match normalize_required(req.placa, "placa") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let qr_code = match normalize_required(req.qr_code, "qrCode") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match req.status.as_deref() {
        Some(value) => match parse_status(value) {
            Ok(status) => status,
            Err(response) => return response,
        },
        None => MotoStatus::default(),
    };

    let record = MotoRecord {
        id: state.ids.next_id(),
        nome,
        fabricante,
        cilindrada: req.cilindrada,
        placa,
        status,
        qr_code,
    };
    match state.moto_store.save_moto(record).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (StatusCode::OK, Json(ApiResponse::success(moto_to_dto(saved)))).into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 获取摩托车详情。
pub async fn get_moto(State(state): State<AppState>, Path(path): Path<MotoPath>) -> Response {
    match state.moto_store.find_moto(path.moto_id).await {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(ApiResponse::success(moto_to_dto(record)))).into_response()
        }
        Ok(None) => not_found_error("moto not found"),
        Err(err) => storage_error(err),
    }
}

/// 更新摩托车（整体覆盖，按 ID 定位）。
pub async fn update_moto(
    State(state): State<AppState>,
    Path(path): Path<MotoPath>,
    Json(req): Json<UpdateMotoRequest>,
) -> Response {
    let nome = match normalize_required(req.nome, "nome") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let fabricante = match normalize_required(req.fabricante, "fabricante") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let placa = match normalize_required(req.placa, "placa") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let qr_code = match normalize_required(req.qr_code, "qrCode") {
        Ok(value) => value,
        Err(response) => return response,
    };
    // 整体编辑可以写入任意状态（数据层不强制迁移表）
    let status = match parse_status(&req.status) {
        Ok(status) => status,
        Err(response) => return response,
    };

    match state.moto_store.find_moto(path.moto_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found_error("moto not found"),
        Err(err) => return storage_error(err),
    }

    let record = MotoRecord {
        id: path.moto_id,
        nome,
        fabricante,
        cilindrada: req.cilindrada,
        placa,
        status,
        qr_code,
    };
    match state.moto_store.save_moto(record).await {
        Ok(saved) => {
            patio_telemetry::record_write_success();
            (StatusCode::OK, Json(ApiResponse::success(moto_to_dto(saved)))).into_response()
        }
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}

/// 删除摩托车。
///
/// 无依赖检查：已有定位记录是独立快照，原样保留。
pub async fn delete_moto(State(state): State<AppState>, Path(path): Path<MotoPath>) -> Response {
    match state.moto_store.delete_moto(path.moto_id).await {
        Ok(true) => {
            patio_telemetry::record_delete_success();
            (StatusCode::OK, Json(ApiResponse::success(true))).into_response()
        }
        Ok(false) => not_found_error("moto not found"),
        Err(err) => storage_error(err),
    }
}

/// 按车牌查找摩托车。
pub async fn busca_moto(
    State(state): State<AppState>,
    Query(query): Query<PlacaQuery>,
) -> Response {
    patio_telemetry::record_search();
    match state.moto_store.find_by_placa(&query.placa).await {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(ApiResponse::success(moto_to_dto(record)))).into_response()
        }
        Ok(None) => not_found_error("no moto with that placa"),
        Err(err) => storage_error(err),
    }
}

/// 出入场登记。
///
/// 只接受 entrada（→ Em uso）与 saida（→ Disponível）两种动作；
/// 其他状态变更走整体编辑。
pub async fn registrar_movimento(
    State(state): State<AppState>,
    Path(path): Path<MotoPath>,
    Json(req): Json<MovimentoRequest>,
) -> Response {
    let status = match req.tipo.as_str() {
        "entrada" => MotoStatus::EmUso,
        "saida" => MotoStatus::Disponivel,
        other => return bad_request_error(format!("unknown movimento '{other}'")),
    };
    match state.moto_store.set_status(path.moto_id, status).await {
        Ok(Some(record)) => {
            patio_telemetry::record_write_success();
            (StatusCode::OK, Json(ApiResponse::success(moto_to_dto(record)))).into_response()
        }
        Ok(None) => not_found_error("moto not found"),
        Err(err) => {
            patio_telemetry::record_write_failure();
            storage_error(err)
        }
    }
}
