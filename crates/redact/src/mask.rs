//! Regex-driven PII masking for message bodies.
//!
//! Masking is a fixed, ordered list of substitutions. Each rule runs as a
//! single left-to-right replace-all pass over the output of the previous rule,
//! so later rules see the placeholder tokens emitted by earlier ones:
//!
//! | Order | Kind                       | Token        |
//! |-------|----------------------------|--------------|
//! | 1     | [`PiiKind::Url`]           | `<URL>`      |
//! | 2     | [`PiiKind::Email`]         | `<EMAIL>`    |
//! | 3     | [`PiiKind::Phone`]         | `<PHONE>`    |
//! | 4     | [`PiiKind::OrderId`]       | `<ORDER_ID>` |
//!
//! No other categories (names, street addresses, card numbers) are detected.
//! None of the tokens is matched by any rule, so masking is idempotent.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

/// Category of personally identifiable information that gets masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    /// `http://` or `https://` followed by non-whitespace.
    Url,
    /// `local@domain.tld` style addresses.
    Email,
    /// Loosely delimited runs of at least nine digit-ish characters.
    Phone,
    /// `order`/`ord` followed by a reference code.
    OrderId,
}

impl PiiKind {
    /// Placeholder written in place of a match.
    pub const fn token(self) -> &'static str {
        match self {
            PiiKind::Url => "<URL>",
            PiiKind::Email => "<EMAIL>",
            PiiKind::Phone => "<PHONE>",
            PiiKind::OrderId => "<ORDER_ID>",
        }
    }
}

/// A single masking rule: what it detects and the pattern it detects it with.
pub struct MaskRule {
    pub kind: PiiKind,
    pattern: Lazy<Regex>,
}

impl MaskRule {
    /// Returns true if the rule would replace anything in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace every match in `text` with this rule's token.
    ///
    /// Borrows the input unchanged when nothing matches.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, NoExpand(self.kind.token()))
    }
}

/// Masking rules in the order they are applied.
pub static MASK_RULES: [MaskRule; 4] = [
    MaskRule {
        kind: PiiKind::Url,
        pattern: Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern compiles")),
    },
    MaskRule {
        kind: PiiKind::Email,
        pattern: Lazy::new(|| {
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.\w+").expect("email pattern compiles")
        }),
    },
    MaskRule {
        kind: PiiKind::Phone,
        pattern: Lazy::new(|| Regex::new(r"\+?\d[\d\s-]{7,}\d").expect("phone pattern compiles")),
    },
    MaskRule {
        kind: PiiKind::OrderId,
        pattern: Lazy::new(|| {
            Regex::new(r"(?i)\b(order|ord)[\s:#-]*[A-Za-z0-9-]+\b")
                .expect("order id pattern compiles")
        }),
    },
];

/// Trim `text` and mask URLs, emails, phone numbers and order references.
///
/// # Examples
///
/// ```rust
/// use redact::mask_pii;
///
/// assert_eq!(mask_pii("  order #12345 shipped "), "<ORDER_ID> shipped");
/// assert_eq!(
///     mask_pii("mail me: jane@example.com"),
///     "mail me: <EMAIL>"
/// );
/// ```
pub fn mask_pii(text: &str) -> String {
    let mut masked = text.trim().to_string();
    for rule in MASK_RULES.iter() {
        let replaced = match rule.apply(&masked) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        if let Some(replaced) = replaced {
            tracing::trace!(kind = ?rule.kind, "pii_masked");
            masked = replaced;
        }
    }
    masked
}

/// Kinds of PII present in `text`, in rule order.
///
/// Each rule is checked against the output of the rules before it, exactly as
/// [`mask_pii`] would see it.
pub fn detect_pii(text: &str) -> Vec<PiiKind> {
    let mut found = Vec::new();
    let mut current = text.trim().to_string();
    for rule in MASK_RULES.iter() {
        if rule.is_match(&current) {
            found.push(rule.kind);
            current = rule.apply(&current).into_owned();
        }
    }
    found
}
