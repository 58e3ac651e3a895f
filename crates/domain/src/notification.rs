//! # 通知
//!
//! 問い合わせ通知メールに関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **送信手段からの分離**: メッセージ生成（service）と送信（infra）は分離する
//! - **同期的な失敗伝播**: 送信失敗は呼び出し元に返し、500 レスポンスに変換される

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗（接続エラー、メッセージ構築失敗など）
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// 配信プロバイダがリクエストを受け付けなかった
    #[error("配信プロバイダが送信を拒否 (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// メールメッセージ
///
/// メール組み立ての出力。`NotificationSender` に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 送信元メールアドレス（プロバイダで検証済みであること）
    pub from:      String,
    /// 返信先（問い合わせ者のアドレス）
    pub reply_to:  Option<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejectedのメッセージにステータスと本文が含まれる() {
        let error = NotificationError::Rejected {
            status: 401,
            body:   "unauthorized".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("unauthorized"));
    }
}
