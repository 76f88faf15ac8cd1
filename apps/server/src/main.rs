//! # api2 サーバー
//!
//! 素因数分解とハングル字母分解を提供する HTTP API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/` | 挨拶（JSON または HTML） |
//! | GET | `/ping` | `{"pong": true}` |
//! | GET | `/healthz` | `{"ok": true}` |
//! | GET | `/factorize/{number}` | 素因数分解 |
//! | GET / POST | `/jamo/decompose` | 字母分解（1 件） |
//! | POST | `/jamo/decompose/batch` | 字母分解（一括） |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API2_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API2_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `ROOT_FORMAT` | No | `GET /` の応答形式（`json` / `html`） |
//! | `LOG_FORMAT` | No | ログ形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,api2=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p api2-server
//!
//! API2_PORT=18000 LOG_FORMAT=json cargo run -p api2-server --release
//! ```

use std::sync::Arc;

use api2_domain::jamo::UnicodeJamoDecomposer;
use api2_server::{app_builder::build_app, config::ServerConfig};
use api2_shared::observability::TracingConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api2");
    api2_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api2").entered();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        "api2 サーバーを起動します: {}:{} (root_format = {})",
        config.host,
        config.port,
        config.root_format
    );

    let app = build_app(config.root_format, Arc::new(UnicodeJamoDecomposer));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("api2 サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
