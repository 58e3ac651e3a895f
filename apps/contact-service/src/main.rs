//! # Contact Service サーバー
//!
//! 問い合わせフォームの送信を受け付け、メールで通知する HTTP サービス。
//!
//! ## 処理の流れ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│   Contact    │────▶│   SendGrid   │
//! │ (フォーム)    │     │   Service    │     │ (API キー有) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!                             ▼ API キー無
//!                      ┌──────────────┐
//!                      │   ログ出力   │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CONTACT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CONTACT_PORT` | No | ポート番号（デフォルト: `8787`） |
//! | `SENDGRID_API_KEY` | No | 設定時のみ SendGrid で送信 |
//! | `CONTACT_TO_EMAIL` | No | 通知の送信先 |
//! | `CONTACT_FROM_EMAIL` | No | 通知の送信元（SendGrid で検証済みであること） |
//! | `SENDGRID_API_BASE_URL` | No | SendGrid API のベース URL |
//! | `SENDGRID_TIMEOUT_SECS` | No | SendGrid へのリクエストタイムアウト（デフォルト: 10） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（ログのみモード）
//! cargo run -p contact-relay-service
//!
//! # 本番環境
//! SENDGRID_API_KEY=SG... CONTACT_TO_EMAIL=owner@example.com \
//!   cargo run -p contact-relay-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use contact_relay_domain::clock::SystemClock;
use contact_relay_service::{
    app::build_app,
    config::ServiceConfig,
    handler::ContactState,
    usecase::{ContactDelivery, ContactUseCase},
};
use contact_relay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Contact Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("contact-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    // 配信方式は起動時に 1 度だけ決定する
    let delivery = ContactDelivery::from_config(&config.delivery);
    tracing::info!(
        delivery = delivery.mode(),
        to = %config.delivery.to_address,
        from = %config.delivery.from_address,
        "配信方式を決定しました"
    );

    let usecase = ContactUseCase::new(delivery, Arc::new(SystemClock));
    let app = build_app(Arc::new(ContactState { usecase }));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Contact Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
