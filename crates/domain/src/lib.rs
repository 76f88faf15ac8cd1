//! # api2 ドメイン層
//!
//! HTTP に依存しない純粋な計算ロジックを定義する。
//!
//! ## 設計方針
//!
//! - **純粋関数**: すべての操作は状態を持たず、同じ入力に同じ出力を返す
//! - **明示的なエラー**: 失敗は [`DomainError`] として `Result` で返し、
//!   HTTP ステータスへの変換は API 層の責務とする
//! - **外部依存の境界**: 字母分解のような外部ルーチンはトレイト越しに呼び出し、
//!   テストではスタブに差し替えられるようにする
//!
//! ## 依存関係の方向
//!
//! ```text
//! server → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`factorization`] - 試し割りによる素因数分解
//! - [`jamo`] - ハングル音節の字母分解
//!
//! ## 使用例
//!
//! ```rust
//! use api2_domain::{
//!     factorization::{FactorizationTarget, factorize},
//!     jamo::{UnicodeJamoDecomposer, decompose},
//! };
//!
//! let target = FactorizationTarget::new(360).unwrap();
//! assert_eq!(factorize(target).factors(), &[2, 2, 2, 3, 3, 5]);
//!
//! let result = decompose(&UnicodeJamoDecomposer, "한", false).unwrap();
//! assert_eq!(result.jamo_list().len(), 3);
//! ```

pub mod error;
pub mod factorization;
pub mod jamo;

pub use error::DomainError;
