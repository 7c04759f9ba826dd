//! PII masking and sender hashing for inbound social messages.
//!
//! Two pure functions sit at the center of this crate:
//!
//! - [`mask_pii`] trims a message body and replaces URLs, email addresses,
//!   phone numbers and order references with fixed placeholder tokens.
//! - [`hash_id`] turns a raw platform user id into a 16-character hex pseudonym.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no shared state. Same input, same output, on any thread.

mod hash;
mod mask;

pub use crate::hash::{hash_id, HASH_ID_LEN};
pub use crate::mask::{detect_pii, mask_pii, MaskRule, PiiKind, MASK_RULES};
