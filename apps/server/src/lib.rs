//! # api2 サーバー
//!
//! 素因数分解とハングル字母分解を提供する HTTP API。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラのエラーと HTTP レスポンスへの変換
//! - `handler`: 各エンドポイントのハンドラ

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
