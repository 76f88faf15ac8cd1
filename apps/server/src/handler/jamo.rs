//! # 字母分解ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /jamo/decompose?text=...&compat=...` - クエリ文字列で 1 件分解
//! - `POST /jamo/decompose` - JSON ボディで 1 件分解
//! - `POST /jamo/decompose/batch` - JSON ボディで複数件を一括分解
//!
//! `compat` は省略時 `false`。`true` / `false` のほか、大文字小文字を問わず
//! `1` / `0`、`yes` / `no`、`on` / `off`、`t` / `f`、`y` / `n` を受け付ける。
//! 分解に失敗した場合は 400 を返す。
//! 一括分解は 1 件でも失敗すると全体を 400 とし、部分的な結果は返さない。

use std::sync::Arc;

use api2_domain::jamo::{self, JamoDecomposer, JamoDecomposition};
use axum::{
    Json,
    extract::{
        Query,
        State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 字母分解ハンドラの State
pub struct JamoState {
    pub decomposer: Arc<dyn JamoDecomposer>,
}

/// 1 件分解のリクエスト
///
/// `GET` ではクエリ文字列、`POST` では JSON ボディとして受け取る。
#[derive(Debug, Deserialize)]
pub struct DecomposeRequest {
    pub text:   String,
    #[serde(default, deserialize_with = "flag_from_value")]
    pub compat: bool,
}

/// 一括分解のリクエスト
#[derive(Debug, Deserialize)]
pub struct DecomposeBatchRequest {
    pub texts:  Vec<String>,
    #[serde(default, deserialize_with = "flag_from_value")]
    pub compat: bool,
}

/// クエリ文字列と JSON の両方から受け取る真偽値
#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn flag_from_value<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => Ok(b),
        FlagValue::Int(1) => Ok(true),
        FlagValue::Int(0) => Ok(false),
        FlagValue::Int(n) => Err(serde::de::Error::custom(format!(
            "compat は真偽値である必要があります: {n}"
        ))),
        FlagValue::Text(text) => parse_flag(text.trim()).ok_or_else(|| {
            serde::de::Error::custom(format!("compat は真偽値である必要があります: {text:?}"))
        }),
    }
}

/// 1 件分の分解結果
#[derive(Debug, Serialize)]
pub struct DecomposeResponse {
    pub original:  String,
    pub jamo:      String,
    pub jamo_list: Vec<String>,
}

impl From<JamoDecomposition> for DecomposeResponse {
    fn from(decomposition: JamoDecomposition) -> Self {
        let (original, jamo, jamo_list) = decomposition.into_parts();
        Self {
            original,
            jamo,
            jamo_list,
        }
    }
}

/// 一括分解のレスポンス（入力と同じ順序）
#[derive(Debug, Serialize)]
pub struct DecomposeBatchResponse {
    pub results: Vec<DecomposeResponse>,
}

/// `GET /jamo/decompose`
pub async fn decompose_query(
    State(state): State<Arc<JamoState>>,
    query: Result<Query<DecomposeRequest>, QueryRejection>,
) -> Result<Json<DecomposeResponse>, ApiError> {
    let Query(req) = query?;
    decompose_one(&state, &req)
}

/// `POST /jamo/decompose`
pub async fn decompose_json(
    State(state): State<Arc<JamoState>>,
    body: Result<Json<DecomposeRequest>, JsonRejection>,
) -> Result<Json<DecomposeResponse>, ApiError> {
    let Json(req) = body?;
    decompose_one(&state, &req)
}

/// `POST /jamo/decompose/batch`
pub async fn decompose_batch(
    State(state): State<Arc<JamoState>>,
    body: Result<Json<DecomposeBatchRequest>, JsonRejection>,
) -> Result<Json<DecomposeBatchResponse>, ApiError> {
    let Json(req) = body?;

    let results = jamo::decompose_batch(state.decomposer.as_ref(), &req.texts, req.compat)
        .inspect_err(|e| {
            tracing::debug!(count = req.texts.len(), error = %e, "一括分解を中断しました");
        })?;

    Ok(Json(DecomposeBatchResponse {
        results: results.into_iter().map(DecomposeResponse::from).collect(),
    }))
}

fn decompose_one(
    state: &JamoState,
    req: &DecomposeRequest,
) -> Result<Json<DecomposeResponse>, ApiError> {
    let result = jamo::decompose(state.decomposer.as_ref(), &req.text, req.compat)?;
    Ok(Json(result.into()))
}
