//! # 死活監視ハンドラ
//!
//! レスポンス型は [`api2_shared::PingResponse`] と [`api2_shared::HealthzResponse`] を参照。

use api2_shared::{HealthzResponse, PingResponse};
use axum::Json;

/// `GET /ping`
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

/// `GET /healthz`
pub async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse::ok())
}
