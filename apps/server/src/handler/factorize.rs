//! # 素因数分解ハンドラ
//!
//! `GET /factorize/{number}` で試し割りによる素因数分解の結果を返す。
//!
//! 試し割りは CPU を占有するため、`spawn_blocking` でブロッキングスレッドに逃がす。

use api2_domain::factorization::{self, FactorizationTarget};
use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
};
use serde::Serialize;

use crate::error::ApiError;

/// `GET /factorize/{number}` のレスポンス
#[derive(Debug, Serialize)]
pub struct FactorizeResponse {
    pub number:  u64,
    pub factors: Vec<u64>,
}

/// `GET /factorize/{number}`
///
/// 整数として解釈できないパスや 0 以下の値は 400 を返す。
pub async fn factorize(
    number: Result<Path<i64>, PathRejection>,
) -> Result<Json<FactorizeResponse>, ApiError> {
    let Path(number) = number?;
    let target = FactorizationTarget::new(number)?;

    let result = tokio::task::spawn_blocking(move || factorization::factorize(target))
        .await
        .map_err(|e| ApiError::Internal(format!("素因数分解タスクが失敗しました: {e}")))?;

    tracing::debug!(
        number = result.number(),
        factor_count = result.factors().len(),
        "素因数分解が完了しました"
    );

    Ok(Json(FactorizeResponse {
        number:  result.number(),
        factors: result.into_factors(),
    }))
}
