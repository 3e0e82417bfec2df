//! 健康检查与指标 handlers。

use axum::{Json, response::IntoResponse};
use patio_telemetry::metrics;

/// 健康检查。
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 指标快照。
pub async fn metrics_snapshot() -> impl IntoResponse {
    let snapshot = metrics().snapshot();
    Json(serde_json::json!({
        "collectionReads": snapshot.collection_reads,
        "writeSuccess": snapshot.write_success,
        "writeFailure": snapshot.write_failure,
        "deleteSuccess": snapshot.delete_success,
        "constraintRejections": snapshot.constraint_rejections,
        "searches": snapshot.searches,
    }))
}
