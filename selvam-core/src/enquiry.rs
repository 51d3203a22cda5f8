use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_json::Value;
use selvam_shared::{EnquiryReceivedEvent, Masked};
use tracing::{error, info};

use crate::mailer::{Mailer, OutgoingEmail};
use crate::{CoreError, CoreResult, SITE_NAME};

pub const NO_MESSAGE: &str = "No message provided";

/// Contact form body as posted by the site. Every field may be absent, and
/// scripts posting the form sometimes send the mobile number as a JSON number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryRequest {
    pub name: Option<Value>,
    pub mobile: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

/// A validated enquiry.
#[derive(Debug, Clone)]
pub struct Enquiry {
    pub name: String,
    pub mobile: Masked<String>,
    pub email: Masked<String>,
    pub message: Option<String>,
}

/// Text of a scalar field. Null, `false`, `0`, blank strings, arrays and objects count as absent.
fn text(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };
    Some(text).filter(|t| !t.is_empty())
}

fn required(label: &str, value: Option<Value>) -> CoreResult<String> {
    text(value).ok_or_else(|| CoreError::ValidationError(format!("{} is required", label)))
}

impl EnquiryRequest {
    /// Name, mobile and email must be non-blank; the first one missing is reported.
    pub fn validate(self) -> CoreResult<Enquiry> {
        let name = required("Name", self.name)?;
        let mobile = required("Mobile", self.mobile)?;
        let email = required("Email", self.email)?;
        let message = text(self.message);

        Ok(Enquiry {
            name,
            mobile: Masked(mobile),
            email: Masked(email),
            message,
        })
    }
}

impl Enquiry {
    pub fn subject(&self, site_name: &str) -> String {
        format!("New Enquiry from {} - {}", self.name, site_name)
    }

    /// HTML notification for the showroom inbox.
    pub fn html_body(&self, site_name: &str, received_at: &DateTime<FixedOffset>) -> String {
        let field = |label: &str, value: &str| {
            format!(
                "<div class=\"field\"><span class=\"label\">{}:</span> <span class=\"value\">{}</span></div>\n",
                label,
                escape_html(value)
            )
        };

        let mut body = String::new();
        body.push_str("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
        body.push_str("body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\n");
        body.push_str(".header { background: #1a1a1a; color: #d4af37; padding: 20px; text-align: center; }\n");
        body.push_str(".content { background: #f5f5f5; padding: 20px; }\n");
        body.push_str(".field { margin-bottom: 15px; }\n.label { font-weight: bold; color: #1a1a1a; }\n");
        body.push_str("</style>\n</head>\n<body>\n");
        body.push_str("<div class=\"header\"><h2>New Customer Enquiry</h2><p>Shri Selvam Tiles &amp; Granites</p></div>\n");
        body.push_str("<div class=\"content\">\n<p>You have received a new enquiry from your website:</p>\n");
        body.push_str(&field("Name", &self.name));
        body.push_str(&field("Mobile", self.mobile.expose()));
        body.push_str(&field("Email", self.email.expose()));
        body.push_str(&field("Message", self.message.as_deref().unwrap_or(NO_MESSAGE)));
        body.push_str(&field(
            "Received On",
            &received_at.format("%d %B %Y at %I:%M %p").to_string(),
        ));
        body.push_str("</div>\n");
        body.push_str(&format!(
            "<p class=\"footer\">This email was sent from the {} website contact form.</p>\n",
            escape_html(site_name)
        ));
        body.push_str("</body>\n</html>\n");
        body
    }

    pub fn compose(
        &self,
        site_name: &str,
        from: &str,
        to: &str,
        received_at: &DateTime<FixedOffset>,
    ) -> OutgoingEmail {
        OutgoingEmail {
            from: from.to_string(),
            to: to.to_string(),
            subject: self.subject(site_name),
            html_body: self.html_body(site_name, received_at),
        }
    }

    pub fn received_event(&self, at: DateTime<Utc>) -> EnquiryReceivedEvent {
        EnquiryReceivedEvent {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            has_message: self.message.is_some(),
            received_at: at,
        }
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}

/// Validates contact-form enquiries and mails them to the showroom.
pub struct EnquiryService {
    mailer: Arc<dyn Mailer>,
    from: String,
    to: String,
    site_name: String,
}

impl EnquiryService {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
            site_name: SITE_NAME.to_string(),
        }
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub async fn submit(&self, request: EnquiryRequest) -> CoreResult<Enquiry> {
        let enquiry = request.validate()?;
        let now = chrono::Local::now().fixed_offset();
        let email = enquiry.compose(&self.site_name, &self.from, &self.to, &now);

        self.mailer.send(&email).await.map_err(|e| {
            error!("Error sending enquiry: {}", e);
            CoreError::DispatchError(e.to_string())
        })?;

        info!(
            event = %enquiry.received_event(now.with_timezone(&Utc)).to_log_json(),
            "Enquiry email sent"
        );
        Ok(enquiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::MailError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Transport("connection refused".to_string()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn request(name: &str, mobile: &str, email: &str) -> EnquiryRequest {
        EnquiryRequest {
            name: Some(json!(name)),
            mobile: Some(json!(mobile)),
            email: Some(json!(email)),
            message: None,
        }
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let err = EnquiryRequest { name: Some(json!("A")), ..Default::default() }
            .validate()
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg == "Mobile is required"));

        let err = request("  ", "1", "a@b.com").validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg == "Name is required"));
    }

    #[test]
    fn test_email_body_escapes_and_defaults_message() {
        let enquiry = request("<b>Ravi</b>", "9876543210", "ravi@example.com").validate().unwrap();
        let at = DateTime::parse_from_rfc3339("2026-10-17T15:05:00+05:30").unwrap();
        let body = enquiry.html_body(SITE_NAME, &at);

        assert!(body.contains("&lt;b&gt;Ravi&lt;/b&gt;"));
        assert!(!body.contains("<b>Ravi</b>"));
        assert!(body.contains(NO_MESSAGE));
        assert!(body.contains("17 October 2026 at 03:05 PM"));
        assert_eq!(enquiry.subject(SITE_NAME), "New Enquiry from <b>Ravi</b> - Shri Selvam Tiles");
    }

    #[test]
    fn test_numeric_fields_are_accepted_as_text() {
        let request: EnquiryRequest = serde_json::from_str(
            r#"{"name":"A","mobile":9876543210,"email":"a@b.com","message":null}"#,
        )
        .unwrap();
        let enquiry = request.validate().unwrap();
        assert_eq!(enquiry.mobile.expose(), "9876543210");
        assert_eq!(enquiry.message, None);

        let request: EnquiryRequest =
            serde_json::from_str(r#"{"name":"A","mobile":0,"email":"a@b.com"}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg == "Mobile is required"));

        let request: EnquiryRequest =
            serde_json::from_str(r#"{"name":["A"],"mobile":"1","email":"a@b.com"}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg == "Name is required"));
    }

    #[tokio::test]
    async fn test_submit_sends_one_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = EnquiryService::new(mailer.clone(), "shop@gmail.com", "info@shriselvamtiles.com");

        service.submit(request("A", "1", "a@b.com")).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "info@shriselvamtiles.com");
        assert_eq!(sent[0].from, "shop@gmail.com");
        assert_eq!(sent[0].subject, "New Enquiry from A - Shri Selvam Tiles");
    }

    #[tokio::test]
    async fn test_configured_site_name_reaches_subject_and_footer() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = EnquiryService::new(mailer.clone(), "shop@gmail.com", "info@shriselvamtiles.com")
            .with_site_name("Selvam Granites");

        service.submit(request("A", "1", "a@b.com")).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].subject, "New Enquiry from A - Selvam Granites");
        assert!(sent[0].html_body.contains("sent from the Selvam Granites website"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_dispatch_error() {
        let mailer = Arc::new(RecordingMailer { fail: true, ..Default::default() });
        let service = EnquiryService::new(mailer, "shop@gmail.com", "info@shriselvamtiles.com");

        let err = service.submit(request("A", "1", "a@b.com")).await.unwrap_err();
        assert!(matches!(err, CoreError::DispatchError(_)));
    }
}
