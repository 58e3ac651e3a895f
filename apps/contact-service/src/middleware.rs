//! # ミドルウェア
//!
//! - [`cors`] - 静的な CORS レスポンスヘッダーの付与

pub mod cors;

pub use cors::cors_headers;
