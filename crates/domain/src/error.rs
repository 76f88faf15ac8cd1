//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗や、外部の分解ルーチンの失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 素因数分解できない数値（0 以下） |
//! | `InvalidDecomposition` | 400 Bad Request | 字母分解の失敗 |
//!
//! どちらもクライアント起因のエラーであり、プロセスを停止させることはない。
//!
//! ## 使用例
//!
//! ```rust
//! use api2_domain::DomainError;
//!
//! fn validate_positive(value: i64) -> Result<(), DomainError> {
//!     if value <= 0 {
//!         return Err(DomainError::Validation("1 以上の整数を指定してください".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_positive(0).is_err());
//! ```

use thiserror::Error;

use crate::jamo::DecompositionError;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がドメインの前提を満たさない場合に使用する。
    ///
    /// # 例
    ///
    /// - 0 や負数の素因数分解
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 字母分解エラー
    ///
    /// 分解ルーチンが失敗した場合に使用する。
    /// メッセージには原因となった [`DecompositionError`] の内容を含める。
    #[error("字母分解に失敗しました: {0}")]
    InvalidDecomposition(#[from] DecompositionError),
}
