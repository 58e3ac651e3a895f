//! # Contact Service 設定
//!
//! 環境変数から Contact Service の設定を読み込む。
//! 読み込みはプロセス起動時に 1 回だけ行い、以降は明示的に受け渡す。
//!
//! 空文字列が設定された環境変数は未設定として扱う。

use std::{env, time::Duration};

use contact_relay_infra::notification::SENDGRID_API_BASE_URL;
use thiserror::Error;

/// 送信先・送信元がどちらも未設定の場合に使う宛先
pub const DEFAULT_CONTACT_ADDRESS: &str = "contact@example.com";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8787;
const DEFAULT_SENDGRID_TIMEOUT_SECS: u64 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Contact Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// 配信設定
    pub delivery: DeliveryConfig,
}

/// メール配信の設定
///
/// `api_key` の有無で配信方式が決まる:
/// - 設定あり: SendGrid 経由で送信
/// - 設定なし: 送信せずログ出力のみ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// SendGrid API キー（`SENDGRID_API_KEY`）
    pub api_key:         Option<String>,
    /// 通知の送信先（`CONTACT_TO_EMAIL` → `CONTACT_FROM_EMAIL` → 既定値）
    pub to_address:      String,
    /// 通知の送信元（`CONTACT_FROM_EMAIL` → 送信先）
    pub from_address:    String,
    /// SendGrid API のベース URL（`SENDGRID_API_BASE_URL`）
    pub api_base_url:    String,
    /// SendGrid へのリクエストタイムアウト（`SENDGRID_TIMEOUT_SECS`）
    pub request_timeout: Duration,
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    ///
    /// テストでは環境変数を書き換えずに `HashMap` などを渡す。
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = non_empty(lookup);

        Ok(Self {
            host:     lookup("CONTACT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port:     parse_or("CONTACT_PORT", lookup("CONTACT_PORT"), DEFAULT_PORT)?,
            delivery: DeliveryConfig::resolve(&lookup)?,
        })
    }
}

impl DeliveryConfig {
    /// 配信設定を解決する
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = non_empty(lookup);

        let configured_from = lookup("CONTACT_FROM_EMAIL");
        let to_address = lookup("CONTACT_TO_EMAIL")
            .or_else(|| configured_from.clone())
            .unwrap_or_else(|| DEFAULT_CONTACT_ADDRESS.to_string());
        let from_address = configured_from.unwrap_or_else(|| to_address.clone());

        let timeout_secs = parse_or(
            "SENDGRID_TIMEOUT_SECS",
            lookup("SENDGRID_TIMEOUT_SECS"),
            DEFAULT_SENDGRID_TIMEOUT_SECS,
        )?;

        Ok(Self {
            api_key: lookup("SENDGRID_API_KEY"),
            to_address,
            from_address,
            api_base_url: lookup("SENDGRID_API_BASE_URL")
                .unwrap_or_else(|| SENDGRID_API_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// 前後の空白を除いた空文字列を未設定として扱う参照関数に変換する
fn non_empty<F>(lookup: F) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |name| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => match value.parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue { name, value }),
        },
        None => Ok(default),
    }
}
