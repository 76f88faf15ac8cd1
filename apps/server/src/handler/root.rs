//! # ルートハンドラ
//!
//! `GET /` の応答と、未定義ルートへのフォールバック。
//!
//! `GET /` の形式は起動時の `ROOT_FORMAT` で決まる。
//!
//! - `json`: `{"message": "hello api2"}`
//! - `html`: エンドポイント一覧のページ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use crate::{config::RootFormat, error::ApiError};

const ROOT_MESSAGE: &str = "hello api2";

const ROOT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>api2</title>
</head>
<body>
  <h1>hello api2</h1>
  <ul>
    <li><code>GET /ping</code></li>
    <li><code>GET /healthz</code></li>
    <li><code>GET /factorize/{number}</code></li>
    <li><code>GET /jamo/decompose?text=...&amp;compat=false</code></li>
    <li><code>POST /jamo/decompose</code></li>
    <li><code>POST /jamo/decompose/batch</code></li>
  </ul>
</body>
</html>
"#;

/// ルートハンドラの State
#[derive(Debug, Clone, Copy)]
pub struct RootState {
    pub format: RootFormat,
}

/// `GET /` の JSON レスポンス
#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

/// `GET /`
pub async fn root(State(state): State<Arc<RootState>>) -> Response {
    match state.format {
        RootFormat::Json => Json(RootMessage {
            message: ROOT_MESSAGE,
        })
        .into_response(),
        RootFormat::Html => Html(ROOT_HTML).into_response(),
    }
}

/// 未定義ルートのフォールバック
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("{} は存在しません", uri.path()))
}
