//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 指标：/metrics
//! - 摩托车管理：/motos/*（含出入场登记与车牌查找）
//! - 停车场管理：/patios/*
//! - 区位管理：/setores/*
//! - 定位记录管理：/localizacoes/*
//!
//! 查找路由（/busca）与 /:id 路由可以共存：axum 按字面段优先
//! 匹配，"busca" 是字面段，不会被 :id 吞掉。

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由。
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_snapshot))
        .route("/motos", get(list_motos).post(create_moto))
        .route("/motos/busca", get(busca_moto))
        .route(
            "/motos/:moto_id",
            get(get_moto).put(update_moto).delete(delete_moto),
        )
        .route("/motos/:moto_id/movimentos", post(registrar_movimento))
        .route("/patios", get(list_patios).post(create_patio))
        .route("/patios/busca", get(busca_patio))
        .route(
            "/patios/:patio_id",
            get(get_patio).put(update_patio).delete(delete_patio),
        )
        .route("/setores", get(list_setores).post(create_setor))
        .route("/setores/busca", get(busca_setores))
        .route(
            "/setores/:setor_id",
            get(get_setor).put(update_setor).delete(delete_setor),
        )
        .route(
            "/localizacoes",
            get(list_localizacoes).post(create_localizacao),
        )
        .route("/localizacoes/busca", get(busca_localizacao))
        .route(
            "/localizacoes/:localizacao_id",
            get(get_localizacao).delete(delete_localizacao),
        )
}
