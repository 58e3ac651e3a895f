//! # Contact Service エラー定義
//!
//! 問い合わせ処理で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーと HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | レスポンス `error` |
//! |-----------|----------------|-------------------|
//! | `Validation` | 400 Bad Request | 項目ごとのメッセージ |
//! | `MethodNotAllowed` | 405 Method Not Allowed | `Only POST allowed` |
//! | `MalformedBody` / `Delivery` / `Internal` | 500 Internal Server Error | `Server error` |
//!
//! 500 系の詳細はサーバーログにのみ出力し、呼び出し元には返さない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_relay_domain::{contact::ContactValidationError, notification::NotificationError};
use contact_relay_shared::{ApiResponse, event_log::error as log_error};
use thiserror::Error;

/// 405 レスポンスのメッセージ
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST allowed";

/// 500 レスポンスのメッセージ（内部情報を漏らさないため固定値）
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Contact Service で発生するエラー
#[derive(Debug, Error)]
pub enum ContactError {
    /// 入力値の検証失敗
    #[error(transparent)]
    Validation(#[from] ContactValidationError),

    /// POST / OPTIONS 以外のメソッド
    #[error("許可されていないメソッドです")]
    MethodNotAllowed,

    /// リクエスト本文が JSON として読み取れない
    #[error("リクエスト本文を読み取れません: {0}")]
    MalformedBody(String),

    /// メール配信プロバイダの呼び出し失敗
    #[error("メール配信に失敗しました: {0}")]
    Delivery(#[from] NotificationError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ContactError::Validation(e) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(e.to_string()))
            }
            ContactError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiResponse::failure(METHOD_NOT_ALLOWED_MESSAGE),
            ),
            ContactError::MalformedBody(detail) => {
                tracing::error!(
                    error.category = log_error::category::REQUEST,
                    error.kind = log_error::kind::REQUEST_BODY,
                    detail = %detail,
                    "リクエスト本文の読み取りに失敗"
                );
                server_error()
            }
            ContactError::Delivery(e) => {
                tracing::error!(
                    error.category = log_error::category::EXTERNAL_SERVICE,
                    error.kind = log_error::kind::MAIL_DELIVERY,
                    error = %e,
                    "メール配信に失敗"
                );
                server_error()
            }
            ContactError::Internal(msg) => {
                tracing::error!(
                    error.category = log_error::category::INTERNAL,
                    error.kind = log_error::kind::INTERNAL,
                    detail = %msg,
                    "内部エラー"
                );
                server_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn server_error() -> (StatusCode, ApiResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiResponse::failure(SERVER_ERROR_MESSAGE),
    )
}
