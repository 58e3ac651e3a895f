//! SendGrid 通知送信実装
//!
//! SendGrid Web API v3（`POST /mail/send`）を使用してメールを送信する。
//! リクエストのタイムアウトはこのクライアント側で設定する。

use std::time::Duration;

use async_trait::async_trait;
use contact_relay_domain::notification::{EmailMessage, NotificationError};
use serde::Serialize;

use super::NotificationSender;

/// SendGrid Web API のベース URL
pub const SENDGRID_API_BASE_URL: &str = "https://api.sendgrid.com/v3";

// --- リクエスト型 ---

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from:             Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to:         Option<Address<'a>>,
    subject:          &'a str,
    content:          Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value:        &'a str,
}

impl<'a> From<&'a EmailMessage> for MailSendRequest<'a> {
    fn from(email: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &email.to }],
            }],
            from:             Address { email: &email.from },
            reply_to:         email.reply_to.as_deref().map(|address| Address { email: address }),
            subject:          &email.subject,
            // SendGrid は text/plain を text/html より前に置くことを要求する
            content:          vec![
                Content {
                    content_type: "text/plain",
                    value:        &email.text_body,
                },
                Content {
                    content_type: "text/html",
                    value:        &email.html_body,
                },
            ],
        }
    }
}

/// SendGrid 通知送信
///
/// `reqwest::Client` をラップし、API キーを Bearer トークンとして送る。
pub struct SendGridNotificationSender {
    client:   reqwest::Client,
    api_key:  String,
    base_url: String,
    timeout:  Duration,
}

impl SendGridNotificationSender {
    /// 新しい SendGrid 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `api_key`: SendGrid の API キー
    /// - `base_url`: API のベース URL（通常は [`SENDGRID_API_BASE_URL`]）
    /// - `timeout`: 1 リクエストあたりのタイムアウト
    pub fn new(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl NotificationSender for SendGridNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let url = format!("{}/mail/send", self.base_url);
        let request = MailSendRequest::from(email);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SendGrid 送信失敗: {e}")))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "SendGrid が送信を受け付けました");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            to:        "owner@example.com".to_string(),
            from:      "noreply@example.com".to_string(),
            reply_to:  Some("jo@example.com".to_string()),
            subject:   "New contact form submission from Jo".to_string(),
            html_body: "<p>Hi there</p>".to_string(),
            text_body: "Hi there".to_string(),
        }
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SendGridNotificationSender>();
    }

    #[test]
    fn リクエスト本文がsendgridの形式になる() {
        let email = make_email();

        let json = serde_json::to_value(MailSendRequest::from(&email)).unwrap();

        assert_eq!(
            json,
            json!({
                "personalizations": [{ "to": [{ "email": "owner@example.com" }] }],
                "from": { "email": "noreply@example.com" },
                "reply_to": { "email": "jo@example.com" },
                "subject": "New contact form submission from Jo",
                "content": [
                    { "type": "text/plain", "value": "Hi there" },
                    { "type": "text/html", "value": "<p>Hi there</p>" },
                ],
            })
        );
    }

    #[test]
    fn reply_toがない場合はフィールドを出力しない() {
        let email = EmailMessage {
            reply_to: None,
            ..make_email()
        };

        let json = serde_json::to_value(MailSendRequest::from(&email)).unwrap();

        assert!(json.get("reply_to").is_none());
    }

    #[tokio::test]
    async fn 送信成功時にapiキーと本文を送る() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/mail/send")
            .match_header("authorization", "Bearer test-api-key")
            .match_body(Matcher::PartialJson(json!({
                "personalizations": [{ "to": [{ "email": "owner@example.com" }] }],
                "from": { "email": "noreply@example.com" },
                "subject": "New contact form submission from Jo",
            })))
            .with_status(202)
            .create_async()
            .await;

        let sender = SendGridNotificationSender::new(
            "test-api-key",
            &server.url(),
            Duration::from_secs(5),
        );

        let result = sender.send_email(&make_email()).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn エラーステータスはrejectedになる() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/mail/send")
            .with_status(403)
            .with_body(r#"{"errors":[{"message":"The from address does not match a verified Sender Identity."}]}"#)
            .create_async()
            .await;

        let sender =
            SendGridNotificationSender::new("test-api-key", &server.url(), Duration::from_secs(5));

        let result = sender.send_email(&make_email()).await;

        match result {
            Err(NotificationError::Rejected { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("verified Sender Identity"));
            }
            other => panic!("Rejected を期待したが {other:?} を受け取った"),
        }
    }

    #[tokio::test]
    async fn 接続できない場合はsend_failedになる() {
        // ポート 9 (discard) は通常リッスンされていない
        let sender = SendGridNotificationSender::new(
            "test-api-key",
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        );

        let result = sender.send_email(&make_email()).await;

        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
