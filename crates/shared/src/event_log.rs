//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` で問い合わせの処理結果を追えるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const CONTACT: &str = "contact";
    }

    /// イベントアクション
    pub mod action {
        /// メール配信プロバイダ経由で送信した
        pub const CONTACT_DELIVERED: &str = "contact.delivered";
        /// 配信設定がないためログ出力のみ行った
        pub const CONTACT_LOGGED: &str = "contact.logged";
        /// 入力検証で拒否した
        pub const CONTACT_REJECTED: &str = "contact.rejected";
        pub const CONTACT_DELIVERY_FAILED: &str = "contact.delivery_failed";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// 外部サービス呼び出し（メール配信プロバイダ）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// リクエストの読み取り
        pub const REQUEST: &str = "request";
        /// サービス内部の処理
        pub const INTERNAL: &str = "internal";
    }

    /// エラー種別
    pub mod kind {
        pub const MAIL_DELIVERY: &str = "mail_delivery";
        pub const REQUEST_BODY: &str = "request_body";
        pub const INTERNAL: &str = "internal";
    }
}
