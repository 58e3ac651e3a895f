//! # 通知メールの組み立て
//!
//! 受付済み問い合わせから件名・プレーンテキスト本文・HTML 本文を生成する。
//!
//! - **件名**: `New contact form submission from {氏名}`
//! - **本文の項目順**: Name → Email → Phone → Interest → Message → Received at
//! - **未入力の任意項目**: `[not provided]` と表示する
//! - **HTML**: 値は `tera::escape_html` でエスケープし、本文の改行は `<br>` に変換する

use contact_relay_domain::{contact::ContactSubmission, notification::EmailMessage};
use tera::escape_html;

/// 未入力の任意項目の表示
pub const NOT_PROVIDED: &str = "[not provided]";

/// 問い合わせから通知メールを組み立てる
///
/// 問い合わせ者のアドレスを Reply-To に設定する。
pub fn compose(
    submission: &ContactSubmission,
    to_address: &str,
    from_address: &str,
) -> EmailMessage {
    let name = submission.name().as_str();
    let email = submission.email().as_str();
    let phone = or_not_provided(submission.phone());
    let interest = or_not_provided(submission.interest());
    let message = submission.message().as_str();
    let received_at = submission.received_at_iso();

    let text_body = format!(
        "Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Interest: {interest}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Received at: {received_at}\n"
    );

    let html_body = format!(
        "<h2>New contact form submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Interest:</strong> {}</p>\n\
         <p><strong>Message:</strong><br>{}</p>\n\
         <p><small>Received at {}</small></p>\n",
        escape_html(name),
        escape_html(email),
        escape_html(phone),
        escape_html(interest),
        newlines_to_br(&escape_html(message)),
        received_at,
    );

    EmailMessage {
        to: to_address.to_string(),
        from: from_address.to_string(),
        reply_to: Some(email.to_string()),
        subject: format!("New contact form submission from {name}"),
        html_body,
        text_body,
    }
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() { NOT_PROVIDED } else { value }
}

fn newlines_to_br(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use contact_relay_domain::contact::ContactForm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_submission(phone: &str, interest: &str, message: &str) -> ContactSubmission {
        let form = ContactForm {
            name:     Some("Jo Smith".to_string()),
            email:    Some("jo@example.com".to_string()),
            phone:    phone.to_string(),
            interest: interest.to_string(),
            message:  Some(message.to_string()),
        };
        ContactSubmission::validate(form, Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap())
            .unwrap()
    }

    #[test]
    fn test_件名に氏名を含む() {
        let email = compose(
            &make_submission("", "", "Hi there"),
            "owner@example.com",
            "noreply@example.com",
        );

        assert_eq!(email.subject, "New contact form submission from Jo Smith");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.reply_to.as_deref(), Some("jo@example.com"));
    }

    #[test]
    fn test_テキスト本文は全項目を順に含む() {
        let email = compose(
            &make_submission("555-0100", "consulting", "Hi there"),
            "owner@example.com",
            "noreply@example.com",
        );

        assert_eq!(
            email.text_body,
            "Name: Jo Smith\n\
             Email: jo@example.com\n\
             Phone: 555-0100\n\
             Interest: consulting\n\
             \n\
             Message:\n\
             Hi there\n\
             \n\
             Received at: 2026-04-01T09:30:00.000Z\n"
        );
    }

    #[test]
    fn test_未入力の任意項目はnot_providedになる() {
        let email = compose(
            &make_submission("", "", "Hi there"),
            "owner@example.com",
            "noreply@example.com",
        );

        assert!(email.text_body.contains("Phone: [not provided]\n"));
        assert!(email.text_body.contains("Interest: [not provided]\n"));
        assert!(email.html_body.contains("<strong>Phone:</strong> [not provided]"));
    }

    #[test]
    fn test_html本文は改行をbrに変換しエスケープする() {
        let email = compose(
            &make_submission("", "", "Line one\r\nLine <two>\n& three"),
            "owner@example.com",
            "noreply@example.com",
        );

        assert!(
            email
                .html_body
                .contains("<br>Line one<br>Line &lt;two&gt;<br>&amp; three</p>")
        );
    }

    #[test]
    fn test_html本文は引用符とスラッシュもエスケープする() {
        let form = ContactForm {
            name:     Some("O'Brien \"Jo\"".to_string()),
            email:    Some("jo@example.com".to_string()),
            phone:    String::new(),
            interest: "a/b".to_string(),
            message:  Some("Hi there".to_string()),
        };
        let submission =
            ContactSubmission::validate(form, Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap())
                .unwrap();

        let email = compose(&submission, "owner@example.com", "noreply@example.com");

        assert!(
            email
                .html_body
                .contains("<strong>Name:</strong> O&#x27;Brien &quot;Jo&quot;</p>")
        );
        assert!(email.html_body.contains("<strong>Interest:</strong> a&#x2F;b</p>"));
        assert_eq!(email.subject, "New contact form submission from O'Brien \"Jo\"");
    }
}
