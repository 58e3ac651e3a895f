//! # Contact Relay インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール配信プロバイダ**: SendGrid Web API v3 へのメール送信
//! - **テスト用モック**: 送信内容を記録するインメモリ実装（`test-utils` feature）
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと SendGrid 実装
//! - `mock` - テスト用モック（`test-utils` feature 有効時のみ）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use notification::{NotificationSender, SendGridNotificationSender};
