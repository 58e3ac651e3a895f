//! # Contact Service ライブラリ
//!
//! 問い合わせフォームを受け付ける HTTP サービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（CORS ヘッダー）
//! - `usecase`: 検証と配信

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
