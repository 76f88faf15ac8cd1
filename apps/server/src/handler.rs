//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## ハンドラ一覧
//!
//! - `root`: `GET /`
//! - `health`: `GET /ping`, `GET /healthz`
//! - `factorize`: `GET /factorize/{number}`
//! - `jamo`: `GET|POST /jamo/decompose`, `POST /jamo/decompose/batch`
//!
//! 各ハンドラはドメイン層の関数を呼び、結果を DTO に詰め替えるだけに留める。

pub mod factorize;
pub mod health;
pub mod jamo;
pub mod root;

pub use factorize::{FactorizeResponse, factorize};
pub use health::{healthz, ping};
pub use jamo::{
    DecomposeBatchRequest,
    DecomposeBatchResponse,
    DecomposeRequest,
    DecomposeResponse,
    JamoState,
    decompose_batch,
    decompose_json,
    decompose_query,
};
pub use root::{RootState, not_found, root};
