//! # CORS ヘッダーミドルウェア
//!
//! どのオリジンからも `Content-Type` ヘッダー付きの POST を送れるよう、
//! 固定の CORS ヘッダーを全レスポンス（204 / 405 / 500 を含む）に設定する。
//! オリジンごとの判定は行わない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// 全レスポンスに CORS ヘッダーを付与する
pub async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
