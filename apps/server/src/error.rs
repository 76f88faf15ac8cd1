//! # API エラー定義
//!
//! ハンドラが返すエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | `type` |
//! |------------|-----------|--------|
//! | `BadRequest` | 400 | `bad-request` |
//! | `Validation` | 400 | `validation-error` |
//! | `NotFound` | 404 | `not-found` |
//! | `Internal` | 500 | `internal-error` |

use api2_domain::DomainError;
use api2_shared::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// api2 サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 処理できない入力（字母分解の失敗など）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 入力値の形式エラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 存在しないリソース
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            err @ DomainError::InvalidDecomposition(_) => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            ApiError::Validation(detail) => ErrorResponse::validation_error(detail),
            ApiError::NotFound(detail) => ErrorResponse::not_found(detail),
            ApiError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use api2_domain::jamo::DecompositionError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn into_parts(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "bad-request")]
    #[case(ApiError::Validation("x".into()), StatusCode::BAD_REQUEST, "validation-error")]
    #[case(ApiError::NotFound("x".into()), StatusCode::NOT_FOUND, "not-found")]
    #[case(
        ApiError::Internal("x".into()),
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal-error"
    )]
    #[tokio::test]
    async fn test_各バリアントのステータスとtype(
        #[case] err: ApiError,
        #[case] expected_status: StatusCode,
        #[case] expected_kind: &str,
    ) {
        let (status, body) = into_parts(err).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.status, expected_status.as_u16());
        assert_eq!(
            body.error_type,
            format!("https://api2.example.com/errors/{expected_kind}")
        );
    }

    #[tokio::test]
    async fn test_内部エラーの詳細はレスポンスに含めない() {
        let (_, body) = into_parts(ApiError::Internal("join error: panic".into())).await;

        assert_eq!(body.detail, "内部エラーが発生しました");
    }

    #[test]
    fn test_ドメインのバリデーションエラーはvalidationになる() {
        let err = ApiError::from(DomainError::Validation("0 は不可".into()));

        assert!(matches!(err, ApiError::Validation(msg) if msg == "0 は不可"));
    }

    #[test]
    fn test_字母分解の失敗はbad_requestになりメッセージを保つ() {
        let err = ApiError::from(DomainError::InvalidDecomposition(
            DecompositionError::Failed("分解できません".into()),
        ));

        let ApiError::BadRequest(detail) = err else {
            panic!("BadRequest を期待");
        };
        assert!(detail.contains("分解できません"));
    }
}
