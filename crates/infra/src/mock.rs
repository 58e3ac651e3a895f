//! # テスト用モック送信
//!
//! ユースケーステストで使用するインメモリのメール送信実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! contact-relay-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_relay_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// 送信内容を記録するモック
///
/// `send_email` に渡されたメッセージは成否にかかわらず記録される。
/// クローンしたインスタンス同士で記録を共有する。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail: bool,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に `SendFailed` を返すモック
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(NotificationError::SendFailed(
                "モック送信失敗".to_string(),
            ));
        }
        Ok(())
    }
}
