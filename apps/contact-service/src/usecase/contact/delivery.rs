//! # 配信方式
//!
//! `SENDGRID_API_KEY` の有無で、起動時に 1 度だけ配信方式を決定する。
//!
//! - [`ContactDelivery::Provider`]: メール配信プロバイダ（`NotificationSender`）で送信
//! - [`ContactDelivery::LogOnly`]: 問い合わせ内容をログに出力するだけ（失敗しない）

use std::sync::Arc;

use contact_relay_domain::contact::ContactSubmission;
use contact_relay_infra::notification::{NotificationSender, SendGridNotificationSender};
use contact_relay_shared::{event_log::event, log_business_event};

use super::{SubmitOutcome, mail_composer};
use crate::{config::DeliveryConfig, error::ContactError};

/// 問い合わせの配信方式
pub enum ContactDelivery {
    /// メール配信プロバイダ経由で送信する
    Provider {
        sender:       Arc<dyn NotificationSender>,
        to_address:   String,
        from_address: String,
    },
    /// 配信設定なし。ログ出力のみ行う
    LogOnly,
}

impl ContactDelivery {
    /// 配信設定から配信方式を決定する
    pub fn from_config(config: &DeliveryConfig) -> Self {
        match &config.api_key {
            Some(api_key) => Self::Provider {
                sender:       Arc::new(SendGridNotificationSender::new(
                    api_key.as_str(),
                    &config.api_base_url,
                    config.request_timeout,
                )),
                to_address:   config.to_address.clone(),
                from_address: config.from_address.clone(),
            },
            None => Self::LogOnly,
        }
    }

    /// 任意の送信実装でプロバイダ配信を構築する
    pub fn provider(
        sender: Arc<dyn NotificationSender>,
        to_address: impl Into<String>,
        from_address: impl Into<String>,
    ) -> Self {
        Self::Provider {
            sender,
            to_address: to_address.into(),
            from_address: from_address.into(),
        }
    }

    /// ログ出力用の配信方式名
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Provider { .. } => "sendgrid",
            Self::LogOnly => "log_only",
        }
    }

    /// 問い合わせを配信する
    ///
    /// プロバイダ配信では送信完了まで待機し、失敗はそのまま返す（再試行しない）。
    pub(super) async fn deliver(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmitOutcome, ContactError> {
        match self {
            Self::Provider {
                sender,
                to_address,
                from_address,
            } => {
                let email = mail_composer::compose(submission, to_address, from_address);

                if let Err(e) = sender.send_email(&email).await {
                    log_business_event!(
                        event.category = event::category::CONTACT,
                        event.action = event::action::CONTACT_DELIVERY_FAILED,
                        event.result = event::result::FAILURE,
                        contact.to = %to_address,
                        "問い合わせメールの送信に失敗"
                    );
                    return Err(e.into());
                }

                log_business_event!(
                    event.category = event::category::CONTACT,
                    event.action = event::action::CONTACT_DELIVERED,
                    event.result = event::result::SUCCESS,
                    contact.to = %to_address,
                    "問い合わせメールを送信しました"
                );
                Ok(SubmitOutcome::Delivered)
            }
            Self::LogOnly => {
                let pretty = serde_json::to_string_pretty(submission).map_err(|e| {
                    ContactError::Internal(format!("問い合わせのシリアライズに失敗: {e}"))
                })?;

                tracing::info!("問い合わせを受信しました（SendGrid 未設定）:\n{pretty}");
                log_business_event!(
                    event.category = event::category::CONTACT,
                    event.action = event::action::CONTACT_LOGGED,
                    event.result = event::result::SUCCESS,
                    "問い合わせをログに記録"
                );
                Ok(SubmitOutcome::Logged)
            }
        }
    }
}
