//! # 問い合わせ
//!
//! 問い合わせフォームの送信内容を抽出・検証し、[`ContactSubmission`] を組み立てる。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | ルール |
//! |---|------------|------|
//! | [`ContactForm`] | 未検証の送信内容 | リクエスト本文から取り出しただけの値 |
//! | [`ContactName`] | 氏名 | トリム後 2 文字以上 |
//! | [`ContactEmail`] | 連絡先メールアドレス | トリム後 `x@y.z` 形の緩いパターンに一致 |
//! | [`ContactMessage`] | 問い合わせ本文 | トリム後 4 文字以上 |
//! | [`ContactSubmission`] | 受付済み問い合わせ | すべての検証を通過した値のみから生成 |
//!
//! ## 設計方針
//!
//! - **検証順序の固定**: 氏名 → メールアドレス → 本文の順に検証し、最初の失敗のみを返す
//! - **電話番号・関心分野は検証しない**: 任意の文字列（空文字列を含む）を受け付ける
//! - **緩いメールアドレス検証**: 既存クライアントの挙動を変えないよう厳密化しない

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// `@` の後にドット区切りのドメイン部を持つことだけを要求するパターン
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("メールアドレスのパターンが不正です")
});

/// 問い合わせ検証エラー
///
/// `Display` はそのまま利用者向けのエラーメッセージとして返される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Please provide a valid name.")]
    InvalidName,

    #[error("Please provide a valid email address.")]
    InvalidEmail,

    #[error("Please include a short message.")]
    InvalidMessage,
}

impl ContactValidationError {
    /// 検証に失敗したフィールド名（ログ用）
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName => "name",
            Self::InvalidEmail => "email",
            Self::InvalidMessage => "message",
        }
    }
}

/// 未検証の問い合わせフォーム
///
/// 必須項目は JSON の文字列値だった場合のみ `Some` になる。
/// 任意項目（電話番号・関心分野）は未指定なら空文字列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name:     Option<String>,
    pub email:    Option<String>,
    pub phone:    String,
    /// リクエスト上のキーは `type`
    pub interest: String,
    pub message:  Option<String>,
}

impl ContactForm {
    /// リクエスト本文から各フィールドを取り出す
    ///
    /// オブジェクト以外（`null` を含む）は空のレコードとして扱う。
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::default();
        };

        Self {
            name:     string_field(fields, "name"),
            email:    string_field(fields, "email"),
            phone:    optional_text_field(fields, "phone"),
            interest: optional_text_field(fields, "type"),
            message:  string_field(fields, "message"),
        }
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// 任意項目は数値も文字列として受け付ける（電話番号が数値で送られる場合がある）
fn optional_text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// 氏名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// トリム後の最小文字数（Unicode スカラー値で数える）
    pub const MIN_LENGTH: usize = 2;

    pub fn new(value: &str) -> Result<Self, ContactValidationError> {
        let trimmed = value.trim();
        if trimmed.chars().count() < Self::MIN_LENGTH {
            return Err(ContactValidationError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 連絡先メールアドレス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn new(value: &str) -> Result<Self, ContactValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ContactValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 問い合わせ本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactMessage(String);

impl ContactMessage {
    /// トリム後の最小文字数（Unicode スカラー値で数える）
    pub const MIN_LENGTH: usize = 4;

    pub fn new(value: &str) -> Result<Self, ContactValidationError> {
        let trimmed = value.trim();
        if trimmed.chars().count() < Self::MIN_LENGTH {
            return Err(ContactValidationError::InvalidMessage);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 受付済み問い合わせ
///
/// リクエスト単位で生成され、レスポンス返却後に破棄される。
/// ログ出力時は `name, email, phone, type, message, receivedAt` のキーで
/// シリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    name:        ContactName,
    email:       ContactEmail,
    phone:       String,
    #[serde(rename = "type")]
    interest:    String,
    message:     ContactMessage,
    #[serde(serialize_with = "serialize_received_at")]
    received_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// フォームを検証して問い合わせを組み立てる
    ///
    /// 氏名 → メールアドレス → 本文の順に検証し、最初に失敗した項目の
    /// エラーを返す。すべて通過した場合のみ値を返す。
    pub fn validate(
        form: ContactForm,
        received_at: DateTime<Utc>,
    ) -> Result<Self, ContactValidationError> {
        let name = form
            .name
            .as_deref()
            .ok_or(ContactValidationError::InvalidName)
            .and_then(ContactName::new)?;
        let email = form
            .email
            .as_deref()
            .ok_or(ContactValidationError::InvalidEmail)
            .and_then(ContactEmail::new)?;
        let message = form
            .message
            .as_deref()
            .ok_or(ContactValidationError::InvalidMessage)
            .and_then(ContactMessage::new)?;

        Ok(Self {
            name,
            email,
            phone: form.phone.trim().to_string(),
            interest: form.interest.trim().to_string(),
            message,
            received_at,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    /// 電話番号（未入力なら空文字列）
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// 関心分野（未入力なら空文字列）
    pub fn interest(&self) -> &str {
        &self.interest
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// 受付時刻の ISO-8601 表記（ミリ秒精度、UTC の `Z` 表記）
    pub fn received_at_iso(&self) -> String {
        format_received_at(&self.received_at)
    }
}

fn format_received_at(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_received_at<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_received_at(value))
}
