//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! ## レイヤー構成（外側から）
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → PropagateRequestIdLayer → CanonicalLogLineLayer → handler
//! ```

use std::sync::Arc;

use api2_domain::jamo::JamoDecomposer;
use api2_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::RootFormat,
    handler::{
        JamoState,
        RootState,
        decompose_batch,
        decompose_json,
        decompose_query,
        factorize,
        healthz,
        not_found,
        ping,
        root,
    },
};

/// ルーターを構築する
///
/// `decomposer` は字母分解ハンドラで共有される。
/// テストではスタブ実装を差し込める。
pub fn build_app(root_format: RootFormat, decomposer: Arc<dyn JamoDecomposer>) -> Router {
    let root_state = Arc::new(RootState {
        format: root_format,
    });
    let jamo_state = Arc::new(JamoState { decomposer });

    Router::new()
        .route("/ping", get(ping))
        .route("/healthz", get(healthz))
        .route("/factorize/{number}", get(factorize))
        .merge(
            Router::new()
                .route("/", get(root))
                .with_state(root_state),
        )
        .merge(
            Router::new()
                .route(
                    "/jamo/decompose",
                    get(decompose_query).post(decompose_json),
                )
                .route("/jamo/decompose/batch", post(decompose_batch))
                .with_state(jamo_state),
        )
        .fallback(not_found)
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
