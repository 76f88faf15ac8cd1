//! # api2 共有ユーティリティ
//!
//! サーバー全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサーバー側の責務）
//! - トレーシング関連は `observability` feature でのみ有効にする

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{HealthzResponse, PingResponse};
