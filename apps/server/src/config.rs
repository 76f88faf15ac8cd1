//! # サーバー設定
//!
//! 環境変数から api2 サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API2_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API2_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `ROOT_FORMAT` | No | `GET /` の応答形式。`json` または `html`（デフォルト: `json`） |

use std::{env, str::FromStr};

use strum::{Display, EnumString};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// `GET /` の応答形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RootFormat {
    /// `{"message": "hello api2"}`
    #[default]
    Json,
    /// エンドポイント一覧の HTML ページ
    Html,
}

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("API2_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),

    /// 未知の応答形式
    #[error("ROOT_FORMAT は json または html である必要があります: {0:?}")]
    InvalidRootFormat(String),
}

/// api2 サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// `GET /` の応答形式
    pub root_format: RootFormat,
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// `lookup` が `None` を返した変数はデフォルト値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("API2_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("API2_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let root_format = match lookup("ROOT_FORMAT") {
            Some(raw) => RootFormat::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidRootFormat(raw))?,
            None => RootFormat::default(),
        };

        Ok(Self {
            host,
            port,
            root_format,
        })
    }
}
