use chrono::{DateTime, Utc};
use serde::Serializer;

use crate::pii::{mask_email, mask_mobile, Masked};

/// Serializes with contact details partially hidden, so the event is safe to log.
#[derive(Debug, serde::Serialize, Clone)]
pub struct EnquiryReceivedEvent {
    pub name: String,
    #[serde(serialize_with = "masked_email")]
    pub email: Masked<String>,
    #[serde(serialize_with = "masked_mobile")]
    pub mobile: Masked<String>,
    pub has_message: bool,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuotationSavedEvent {
    pub file_name: String,
    pub public_path: String,
    pub size_bytes: usize,
    pub saved_at: DateTime<Utc>,
}

fn masked_email<S: Serializer>(email: &Masked<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&mask_email(email.expose()))
}

fn masked_mobile<S: Serializer>(mobile: &Masked<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&mask_mobile(mobile.expose()))
}

impl EnquiryReceivedEvent {
    /// JSON rendering for log lines.
    pub fn to_log_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_event_log_json_masks_contacts() {
        let event = EnquiryReceivedEvent {
            name: "Arun".to_string(),
            email: Masked("arun@example.com".to_string()),
            mobile: Masked("9876543210".to_string()),
            has_message: false,
            received_at: Utc::now(),
        };
        let json = event.to_log_json();
        assert_eq!(json["email"], "a***@example.com");
        assert_eq!(json["mobile"], "******3210");
        assert!(!format!("{:?}", event).contains("9876543210"));

        let text = serde_json::to_string(&event).unwrap();
        assert!(!text.contains("9876543210"));
        assert!(!text.contains("arun@example.com"));
    }
}
