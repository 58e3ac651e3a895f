//! # 問い合わせユースケース
//!
//! リクエスト本文の抽出 → 検証 → 組み立て → 配信を順に行う。
//!
//! ## モジュール構成
//!
//! - [`delivery`] - 配信方式（SendGrid 経由 / ログのみ）
//! - [`mail_composer`] - 通知メールの件名・本文の組み立て
//!
//! ## 設計方針
//!
//! - **最初の検証エラーで打ち切る**: 部分的に正しい問い合わせは配信しない
//! - **配信は 1 回まで**: 1 リクエストにつき送信の呼び出しは高々 1 回、再試行しない
//! - **重複排除しない**: 同じ内容を 2 回送れば 2 回配信する

pub mod delivery;
pub mod mail_composer;

use std::sync::Arc;

use contact_relay_domain::{
    clock::Clock,
    contact::{ContactForm, ContactSubmission},
};
use contact_relay_shared::{event_log::event, log_business_event};
pub use delivery::ContactDelivery;
use serde_json::Value;

use crate::error::ContactError;

/// 配信成功時のメッセージ
pub const DELIVERED_MESSAGE: &str = "Message sent.";

/// ログのみモードで受け付けた時のメッセージ
pub const LOGGED_MESSAGE: &str = "Received (no SendGrid configured). Check function logs.";

/// 問い合わせの処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// メール配信プロバイダで送信した
    Delivered,
    /// 配信設定がないためログに出力した
    Logged,
}

impl SubmitOutcome {
    /// レスポンスの `message` に使う文言
    pub fn message(&self) -> &'static str {
        match self {
            Self::Delivered => DELIVERED_MESSAGE,
            Self::Logged => LOGGED_MESSAGE,
        }
    }
}

/// 問い合わせユースケース
///
/// 配信方式と時刻プロバイダは起動時に決定して注入する。
pub struct ContactUseCase {
    delivery: ContactDelivery,
    clock:    Arc<dyn Clock>,
}

impl ContactUseCase {
    pub fn new(delivery: ContactDelivery, clock: Arc<dyn Clock>) -> Self {
        Self { delivery, clock }
    }

    /// 問い合わせを受け付ける
    ///
    /// `body` がオブジェクトでない場合（`null` を含む）は空のレコードとして検証する。
    pub async fn submit(&self, body: &Value) -> Result<SubmitOutcome, ContactError> {
        let form = ContactForm::from_json(body);

        let submission = match ContactSubmission::validate(form, self.clock.now()) {
            Ok(submission) => submission,
            Err(e) => {
                log_business_event!(
                    event.category = event::category::CONTACT,
                    event.action = event::action::CONTACT_REJECTED,
                    event.result = event::result::FAILURE,
                    contact.field = e.field(),
                    "問い合わせを入力検証で拒否"
                );
                return Err(e.into());
            }
        };

        self.delivery.deliver(&submission).await
    }
}
