//! # 通知送信
//!
//! 問い合わせ通知メールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **実装**: SendGrid（本番用）、Mock（テスト用、`test-utils` feature）
//! - **資格情報による切替**: `SENDGRID_API_KEY` が未設定の場合、送信自体を行わない
//!   （service 側のログのみモード）

mod sendgrid;

use async_trait::async_trait;
use contact_relay_domain::notification::{EmailMessage, NotificationError};
pub use sendgrid::{SENDGRID_API_BASE_URL, SendGridNotificationSender};

/// メール送信トレイト
///
/// 外部のメール配信プロバイダを抽象化する。
/// 呼び出し元は送信完了（または失敗）まで待機する。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
