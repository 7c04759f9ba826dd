//! Ingest layer: raw platform webhooks in, normalized messages out.
//!
//! Social platforms each deliver webhooks in their own shape. This crate
//! pulls the handful of fields we care about out of a raw JSON payload and
//! into one fixed schema, [`NormalizedMessage`], masking PII on the way.
//!
//! ## What we do here
//!
//! - **Extract fields** - message id, conversation id, sender/recipient ids,
//!   text and timestamp, each from its platform-specific location
//! - **Hash the sender** - the raw sender id becomes a 16-char pseudonym via
//!   [`redact::hash_id`]
//! - **Mask the text** - `clean_text` is [`redact::mask_pii`] of the original
//! - **Dispatch by platform** - [`PlatformRegistry`] maps a tag to its
//!   [`PlatformNormalizer`]
//!
//! ## Failure modes
//!
//! A payload whose top-level structure is wrong gets a structured
//! [`NormalizationError`] that clients receive as a normal response body.
//! Fields below that level are read on demand; a missing one surfaces as
//! [`NormalizeError::FieldAccess`].
//!
//! ## Example
//!
//! ```
//! use ingest::{PlatformRegistry, Platform};
//! use serde_json::json;
//!
//! let registry = PlatformRegistry::with_defaults();
//! let raw = json!({"entry": [{"id": "c1", "messaging": [{
//!     "sender": {"id": "U1"},
//!     "recipient": {"id": "P1"},
//!     "message": {"mid": "m1", "text": "  ping me at jane@example.com "},
//!     "timestamp": 1700000000000u64
//! }]}]});
//!
//! let message = registry.normalize(Platform::Facebook, &raw).unwrap();
//! assert_eq!(message.clean_text, "ping me at <EMAIL>");
//! assert_eq!(message.user_id_hashed.len(), 16);
//! ```

mod error;
mod facebook;
mod instagram;
mod payload;
mod platform;
mod types;

pub use crate::error::{
    NormalizationError, NormalizeError, INSTAGRAM_NOT_IMPLEMENTED, INVALID_FACEBOOK_PAYLOAD,
};
pub use crate::facebook::{normalize_facebook, FacebookNormalizer};
pub use crate::instagram::{normalize_instagram, InstagramNormalizer};
pub use crate::platform::{PlatformNormalizer, PlatformRegistry};
pub use crate::types::{ChannelType, NormalizedMessage, Platform, DEFAULT_LANGUAGE};
