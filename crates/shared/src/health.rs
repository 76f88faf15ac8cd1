//! # 死活監視レスポンス型
//!
//! `/ping` と `/healthz` が返すレスポンス型。
//! どちらも依存サービスを確認せず、固定値を返す。

use serde::{Deserialize, Serialize};

/// `GET /ping` のレスポンス（`{"pong": true}`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub pong: bool,
}

impl PingResponse {
    /// 常に `pong: true`
    pub fn pong() -> Self {
        Self { pong: true }
    }
}

/// `GET /healthz` のレスポンス（`{"ok": true}`）
///
/// ## 使用例
///
/// ```
/// use api2_shared::HealthzResponse;
///
/// assert!(HealthzResponse::ok().ok);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthzResponse {
    pub ok: bool,
}

impl HealthzResponse {
    /// 常に `ok: true`
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ping_responseのserializeで正しいjson形状にする() {
        let json = serde_json::to_value(PingResponse::pong()).unwrap();
        assert_eq!(json, serde_json::json!({ "pong": true }));
    }

    #[test]
    fn test_healthz_responseのserializeで正しいjson形状にする() {
        let json = serde_json::to_value(HealthzResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }
}
