//! Facebook Messenger webhook normalization.
//!
//! Messenger delivers batches shaped like:
//!
//! ```json
//! {
//!   "object": "page",
//!   "entry": [{
//!     "id": "<page id>",
//!     "messaging": [{
//!       "sender": {"id": "<psid>"},
//!       "recipient": {"id": "<page id>"},
//!       "timestamp": 1700000000000,
//!       "message": {"mid": "m_...", "text": "..."}
//!     }]
//!   }]
//! }
//! ```
//!
//! Only the first messaging event of the first entry is normalized. The two
//! array levels (`entry`, `messaging`) are checked and produce a structured
//! [`NormalizationError`]; fields below them are read on demand and fail with
//! [`NormalizeError::FieldAccess`].
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{NormalizationError, NormalizeError};
use crate::payload::{first_object, lookup, optional_str, required, required_object, required_str};
use crate::platform::PlatformNormalizer;
use crate::types::{ChannelType, NormalizedMessage, Platform, DEFAULT_LANGUAGE};

/// [`PlatformNormalizer`] for Facebook Messenger.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacebookNormalizer;

impl PlatformNormalizer for FacebookNormalizer {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    fn normalize(&self, raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
        normalize_facebook(raw)
    }
}

/// Normalize a raw Messenger webhook payload.
///
/// # Examples
///
/// ```rust
/// use ingest::normalize_facebook;
/// use serde_json::json;
///
/// let raw = json!({"entry": [{"id": "c1", "messaging": [{
///     "sender": {"id": "U1"},
///     "recipient": {"id": "P1"},
///     "message": {"mid": "m1", "text": "order #12345 shipped"},
///     "timestamp": 100
/// }]}]});
///
/// let message = normalize_facebook(&raw).unwrap();
/// assert_eq!(message.clean_text, "<ORDER_ID> shipped");
/// assert_eq!(message.conversation_id, Some(json!("c1")));
/// ```
pub fn normalize_facebook(raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
    let Some((entry, event)) = messaging_event(raw) else {
        warn!(platform = "facebook", "invalid_payload_structure");
        return Err(NormalizationError::invalid_facebook_structure().into());
    };

    let sender_id = required_str(event, "sender.id")?;
    let message = required_object(event, "message")?;
    let recipient_id = required(event, "recipient.id")?;

    let original_text = optional_str(message, "text")?.unwrap_or_default().to_string();
    let clean_text = redact::mask_pii(&original_text);
    let user_id_hashed = redact::hash_id(sender_id);

    let mut metadata = Map::new();
    metadata.insert("sender_id".into(), Value::String(sender_id.to_string()));
    metadata.insert("recipient_id".into(), recipient_id.clone());

    debug!(
        platform = "facebook",
        user_id_hashed = %user_id_hashed,
        text_len = original_text.len(),
        masked = original_text.trim() != clean_text,
        "normalize_success"
    );

    Ok(NormalizedMessage {
        message_id: lookup(message, "mid").cloned(),
        platform: Platform::Facebook,
        channel_type: ChannelType::Dm,
        conversation_id: lookup(entry, "id").cloned(),
        user_id_hashed,
        original_text,
        clean_text,
        language: DEFAULT_LANGUAGE.to_string(),
        timestamp_utc: lookup(event, "timestamp").cloned(),
        metadata,
    })
}

/// `(entry[0], entry[0].messaging[0])`, when both resolve to objects.
fn messaging_event(raw: &Value) -> Option<(&Value, &Value)> {
    let entry = first_object(raw, "entry")?;
    let event = first_object(entry, "messaging")?;
    Some((entry, event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(event: Value) -> Value {
        json!({"object": "page", "entry": [{"id": "c1", "time": 99, "messaging": [event]}]})
    }

    fn full_event() -> Value {
        json!({
            "sender": {"id": "U1"},
            "recipient": {"id": "P1"},
            "message": {"mid": "m1", "text": "call me at +1 555-123-4567 or visit https://x.co"},
            "timestamp": 100
        })
    }

    fn rejected() -> Result<NormalizedMessage, NormalizeError> {
        Err(NormalizeError::Rejected(
            NormalizationError::invalid_facebook_structure(),
        ))
    }

    #[test]
    fn normalizes_full_event() {
        let message = normalize_facebook(&payload(full_event())).unwrap();

        assert_eq!(message.message_id, Some(json!("m1")));
        assert_eq!(message.platform, Platform::Facebook);
        assert_eq!(message.channel_type, ChannelType::Dm);
        assert_eq!(message.conversation_id, Some(json!("c1")));
        assert_eq!(message.user_id_hashed, redact::hash_id("U1"));
        assert_eq!(
            message.original_text,
            "call me at +1 555-123-4567 or visit https://x.co"
        );
        assert_eq!(message.clean_text, "call me at <PHONE> or visit <URL>");
        assert_eq!(message.language, "en");
        assert_eq!(message.timestamp_utc, Some(json!(100)));
        assert_eq!(message.metadata["sender_id"], "U1");
        assert_eq!(message.metadata["recipient_id"], "P1");
    }

    #[test]
    fn structural_errors_are_structured() {
        assert_eq!(normalize_facebook(&json!({})), rejected());
        assert_eq!(normalize_facebook(&json!({"entry": []})), rejected());
        assert_eq!(normalize_facebook(&json!({"entry": [{"id": "c1"}]})), rejected());
        assert_eq!(
            normalize_facebook(&json!({"entry": [{"messaging": []}]})),
            rejected()
        );
        assert_eq!(normalize_facebook(&json!([1, 2, 3])), rejected());
    }

    #[test]
    fn optional_fields_default() {
        let event = json!({
            "sender": {"id": "U9"},
            "recipient": {"id": "P1"},
            "message": {"attachments": []}
        });
        let raw = json!({"entry": [{"messaging": [event]}]});

        let message = normalize_facebook(&raw).unwrap();
        assert_eq!(message.message_id, None);
        assert_eq!(message.conversation_id, None);
        assert_eq!(message.timestamp_utc, None);
        assert_eq!(message.original_text, "");
        assert_eq!(message.clean_text, "");
    }

    #[test]
    fn original_text_keeps_surrounding_whitespace() {
        let mut event = full_event();
        event["message"]["text"] = json!("  mail a@b.io  ");

        let message = normalize_facebook(&payload(event)).unwrap();
        assert_eq!(message.original_text, "  mail a@b.io  ");
        assert_eq!(message.clean_text, "mail <EMAIL>");
    }

    #[test]
    fn deep_field_failures_are_unstructured() {
        let mut event = full_event();
        event.as_object_mut().unwrap().remove("sender");
        assert_eq!(
            normalize_facebook(&payload(event)),
            Err(NormalizeError::field("sender.id", "a string"))
        );

        let mut event = full_event();
        event.as_object_mut().unwrap().remove("message");
        assert_eq!(
            normalize_facebook(&payload(event)),
            Err(NormalizeError::field("message", "an object"))
        );

        let mut event = full_event();
        event["recipient"] = json!({});
        assert_eq!(
            normalize_facebook(&payload(event)),
            Err(NormalizeError::field("recipient.id", "present"))
        );
    }

    #[test]
    fn recipient_id_is_passed_through_raw() {
        let mut event = full_event();
        event["recipient"]["id"] = json!(123456);

        let message = normalize_facebook(&payload(event)).unwrap();
        assert_eq!(message.metadata["recipient_id"], json!(123456));
    }

    #[test]
    fn null_recipient_id_is_passed_through() {
        let mut event = full_event();
        event["recipient"]["id"] = Value::Null;

        let message = normalize_facebook(&payload(event)).unwrap();
        assert_eq!(message.metadata["recipient_id"], Value::Null);
    }

    #[test]
    fn numeric_ids_are_passed_through() {
        let mut event = full_event();
        event["message"]["mid"] = json!(987);
        let raw = json!({"entry": [{"id": 1234, "messaging": [event]}]});

        let message = normalize_facebook(&raw).unwrap();
        assert_eq!(message.message_id, Some(json!(987)));
        assert_eq!(message.conversation_id, Some(json!(1234)));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["message_id"], 987);
        assert_eq!(value["conversation_id"], 1234);
    }

    #[test]
    fn only_first_event_is_used() {
        let mut second = full_event();
        second["sender"]["id"] = json!("U2");
        let raw = json!({"entry": [
            {"id": "c1", "messaging": [full_event(), second]},
            {"id": "c2", "messaging": [full_event()]}
        ]});

        let message = normalize_facebook(&raw).unwrap();
        assert_eq!(message.user_id_hashed, redact::hash_id("U1"));
        assert_eq!(message.conversation_id, Some(json!("c1")));
    }
}
