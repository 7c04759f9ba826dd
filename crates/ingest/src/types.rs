//! Core data model for normalized messages.
//!
//! ```text
//! serde_json::Value (raw platform webhook)
//!
//!         ↓ PlatformNormalizer::normalize()
//!
//! NormalizedMessage
//! ├── message_id: Option<Value>
//! ├── platform: Platform
//! ├── channel_type: ChannelType
//! ├── conversation_id: Option<Value>
//! ├── user_id_hashed: String (16 hex chars)
//! ├── original_text: String
//! ├── clean_text: String (PII masked)
//! ├── language: String
//! ├── timestamp_utc: Option<Value> (as sent by the platform)
//! └── metadata: Map<String, Value>
//! ```
//!
//! Absent optional fields serialize as `null`, never skipped, so every
//! normalized message has the same set of keys.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::NormalizeError;

/// Language stamped on every message until detection exists.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Messaging platform a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Facebook, Platform::Instagram];

    /// Tag used in routes and serialized messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = NormalizeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == tag)
            .ok_or_else(|| NormalizeError::UnsupportedPlatform(tag.to_string()))
    }
}

/// Kind of conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ChannelType {
    /// One-to-one direct message.
    Dm,
}

/// Platform-independent message with PII masked out of `clean_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    /// Platform message id, as sent (Messenger uses strings).
    pub message_id: Option<Value>,
    pub platform: Platform,
    pub channel_type: ChannelType,
    /// Platform conversation or page id, as sent.
    pub conversation_id: Option<Value>,
    pub user_id_hashed: String,
    pub original_text: String,
    pub clean_text: String,
    pub language: String,
    /// Passed through unconverted; Messenger sends epoch milliseconds.
    pub timestamp_utc: Option<Value>,
    /// Raw platform identifiers (`sender_id`, `recipient_id`, ...).
    pub metadata: Map<String, Value>,
}
