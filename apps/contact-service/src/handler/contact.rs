//! # 問い合わせハンドラ
//!
//! 問い合わせフォームの送信を受け付けるエンドポイント。
//! パスを問わず、すべてのリクエストをこのハンドラで処理する。
//!
//! ## メソッドごとの動作
//!
//! - `OPTIONS` - CORS プリフライト。本文なしの `204 No Content`
//! - `POST` - 問い合わせを検証して配信
//! - その他 - `405 Method Not Allowed`
//!
//! ## レスポンス
//!
//! ```json
//! { "ok": true, "message": "Message sent." }
//! { "ok": false, "error": "Please provide a valid name." }
//! ```

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use contact_relay_shared::ApiResponse;
use serde_json::Value;

use crate::{error::ContactError, usecase::ContactUseCase};

/// 問い合わせ API の共有状態
pub struct ContactState {
    pub usecase: ContactUseCase,
}

/// `*` 問い合わせエンドポイント
#[tracing::instrument(skip_all, fields(method = %method))]
pub async fn contact(
    State(state): State<Arc<ContactState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ContactError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    if method != Method::POST {
        return Err(ContactError::MethodNotAllowed);
    }

    // 上限超過などで本文を読み切れなかった場合も JSON の 500 で返す
    let body = body.map_err(|e| ContactError::MalformedBody(e.body_text()))?;
    let body = parse_body(&body)?;
    let outcome = state.usecase.submit(&body).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(outcome.message()))).into_response())
}

/// リクエスト本文を JSON として読む
///
/// 本文が空（空白のみを含む）なら `null` として扱う。
fn parse_body(bytes: &[u8]) -> Result<Value, ContactError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ContactError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_空の本文はnullになる() {
        assert_eq!(parse_body(b"").unwrap(), Value::Null);
        assert_eq!(parse_body(b"  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_json本文をパースする() {
        assert_eq!(
            parse_body(br#"{"name":"Jo"}"#).unwrap(),
            json!({ "name": "Jo" })
        );
    }

    #[test]
    fn test_不正なjsonはmalformed_bodyになる() {
        assert!(matches!(
            parse_body(b"name=Jo"),
            Err(ContactError::MalformedBody(_))
        ));
    }
}
