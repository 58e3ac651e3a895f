//! # Contact Service アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::any};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{ContactState, contact},
    middleware::cors_headers,
};

/// ルーターを構築する
///
/// 問い合わせハンドラはすべてのパス・メソッドに割り当てる。
pub fn build_app(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/", any(contact))
        .route("/{*path}", any(contact))
        .with_state(state)
        .layer(from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
}
