//! # Contact Relay ドメイン層
//!
//! 問い合わせフォームの受付に関するドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（HTTP、メール配信プロバイダ）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 受付時刻の取得を抽象化する時刻プロバイダ
//! - [`contact`] - 問い合わせ内容の抽出と検証
//! - [`notification`] - 通知メールのメッセージとエラー
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use contact_relay_domain::contact::{ContactForm, ContactSubmission};
//!
//! let body = serde_json::json!({
//!     "name": "Jo",
//!     "email": "a@b.c",
//!     "message": "Hi there",
//! });
//! let form = ContactForm::from_json(&body);
//! let submission = ContactSubmission::validate(form, Utc::now()).unwrap();
//! assert_eq!(submission.name().as_str(), "Jo");
//! ```

pub mod clock;
pub mod contact;
pub mod notification;
