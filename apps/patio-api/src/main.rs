//! 车队停车管理 HTTP API：四个集合的增删改查、查找与出入场登记。

mod handlers;
mod routes;
mod utils;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use domain::{IdProvider, SequentialIdProvider};
use patio_config::{AppConfig, StorageBackend};
use patio_storage::{
    InMemoryKeyValueStore, KeyValueStore, KvLocalizacaoStore, KvMotoStore, KvPatioStore,
    KvSetorStore, LocalizacaoStore, MotoStore, PatioStore, RedisKeyValueStore, SetorStore,
};
use patio_telemetry::{init_tracing, new_request_ids};
use std::sync::Arc;
use tracing::Instrument;

/// 应用状态：四个集合存储 + 实体 ID 生成器。
#[derive(Clone)]
pub struct AppState {
    pub moto_store: Arc<dyn MotoStore>,
    pub patio_store: Arc<dyn PatioStore>,
    pub setor_store: Arc<dyn SetorStore>,
    pub localizacao_store: Arc<dyn LocalizacaoStore>,
    pub ids: Arc<dyn IdProvider>,
}

impl AppState {
    /// 在给定键值端口之上装配全部集合存储。
    pub fn with_kv(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            moto_store: Arc::new(KvMotoStore::new(kv.clone())),
            patio_store: Arc::new(KvPatioStore::new(kv.clone())),
            setor_store: Arc::new(KvSetorStore::new(kv.clone())),
            localizacao_store: Arc::new(KvLocalizacaoStore::new(kv)),
            ids: Arc::new(SequentialIdProvider::new()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 键值后端：默认内存，生产环境配置 PATIO_STORAGE=redis
    let kv: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::Redis => Arc::new(RedisKeyValueStore::connect(
            &config.redis_url,
            config.key_prefix.clone(),
        )?),
    };
    let state = AppState::with_kv(kv);

    let app = routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context));

    tracing::info!(addr = %config.http_addr, backend = ?config.storage_backend, "listening");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::{AppState, routes};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use patio_storage::InMemoryKeyValueStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::with_kv(Arc::new(InMemoryKeyValueStore::new()));
        routes::create_api_router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let app = test_app();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_and_list_patios() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/patios",
                serde_json::json!({"nome": "Pátio Norte", "localizacao": "Rua 1"}),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["success"], true);
        let id = created["data"]["id"].as_i64().expect("id");
        assert!(id > 0);

        let response = app
            .oneshot(Request::get("/patios").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let listed = body_json(response).await;
        assert_eq!(listed["data"].as_array().expect("array").len(), 1);
        assert_eq!(listed["data"][0]["nome"], "Pátio Norte");
    }

    #[tokio::test]
    async fn setor_with_unknown_patio_is_rejected() {
        let app = test_app();
        let response = app
            .oneshot(post_json(
                "/setores",
                serde_json::json!({"nome": "A1", "fileira": 1, "vaga": 5, "patioId": 999}),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "REFERENCE.MISSING");
    }

    #[tokio::test]
    async fn patio_delete_with_dependents_conflicts() {
        let app = test_app();
        let created = body_json(
            app.clone()
                .oneshot(post_json(
                    "/patios",
                    serde_json::json!({"nome": "Pátio Norte", "localizacao": "Rua 1"}),
                ))
                .await
                .expect("response"),
        )
        .await;
        let patio_id = created["data"]["id"].as_i64().expect("id");

        let response = app
            .clone()
            .oneshot(post_json(
                "/setores",
                serde_json::json!({"nome": "A1", "fileira": 1, "vaga": 5, "patioId": patio_id}),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/patios/{patio_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "REFERENCE.CONSTRAINT");
    }

    #[tokio::test]
    async fn movimento_toggles_status() {
        let app = test_app();
        let created = body_json(
            app.clone()
                .oneshot(post_json(
                    "/motos",
                    serde_json::json!({
                        "nome": "CG 160",
                        "fabricante": "Honda",
                        "cilindrada": 160,
                        "placa": "ABC1D23",
                        "qrCode": "QR-0001"
                    }),
                ))
                .await
                .expect("response"),
        )
        .await;
        assert_eq!(created["data"]["status"], "Disponível");
        let moto_id = created["data"]["id"].as_i64().expect("id");

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/motos/{moto_id}/movimentos"),
                serde_json::json!({"tipo": "entrada"}),
            ))
            .await
            .expect("response");
        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "Em uso");

        // 大小写不敏感的车牌查找
        let response = app
            .oneshot(
                Request::get("/motos/busca?placa=abc1d23")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["id"].as_i64().expect("id"), moto_id);
    }
}
