//! # ユースケース層
//!
//! - [`contact`] - 問い合わせの検証と配信

pub mod contact;

pub use contact::{ContactDelivery, ContactUseCase, SubmitOutcome};
