//! # API レスポンスエンベロープ
//!
//! 問い合わせ API の統一レスポンス形式 `{ "ok": bool, "message"?: string, "error"?: string }`
//! を提供する。

use serde::{Deserialize, Serialize};

/// 問い合わせ API の統一レスポンス型
///
/// 成功時は `message`、失敗時は `error` のどちらか一方だけを持つ。
/// `None` のフィールドは JSON に出力されない。
///
/// ## 使用例
///
/// ```
/// use contact_relay_shared::ApiResponse;
///
/// let response = ApiResponse::success("Message sent.");
/// assert!(response.ok);
/// assert_eq!(response.message.as_deref(), Some("Message sent."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok:      bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl ApiResponse {
    /// 成功レスポンス `{ "ok": true, "message": ... }`
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok:      true,
            message: Some(message.into()),
            error:   None,
        }
    }

    /// 失敗レスポンス `{ "ok": false, "error": ... }`
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok:      false,
            message: None,
            error:   Some(error.into()),
        }
    }
}
