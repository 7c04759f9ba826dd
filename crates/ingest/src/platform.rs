//! Platform normalizer contract and registry.
//!
//! Every platform implements [`PlatformNormalizer`]. The HTTP layer never
//! names a platform directly; it resolves the route tag through a
//! [`PlatformRegistry`], so adding a platform means one enum variant, one
//! implementation and one [`PlatformRegistry::register`] call.
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NormalizeError;
use crate::facebook::FacebookNormalizer;
use crate::instagram::InstagramNormalizer;
use crate::types::{NormalizedMessage, Platform};

/// Extracts a [`NormalizedMessage`] from one platform's raw webhook payload.
///
/// Implementations must be pure: no I/O, no shared mutable state.
pub trait PlatformNormalizer: Send + Sync {
    /// Platform this normalizer handles.
    fn platform(&self) -> Platform;

    /// Normalize a raw payload.
    fn normalize(&self, raw: &Value) -> Result<NormalizedMessage, NormalizeError>;
}

/// Lookup table from [`Platform`] to its normalizer.
#[derive(Clone, Default)]
pub struct PlatformRegistry {
    normalizers: HashMap<Platform, Arc<dyn PlatformNormalizer>>,
}

impl PlatformRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in platform.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FacebookNormalizer));
        registry.register(Arc::new(InstagramNormalizer));
        registry
    }

    /// Register a normalizer, returning the one it replaced.
    pub fn register(
        &mut self,
        normalizer: Arc<dyn PlatformNormalizer>,
    ) -> Option<Arc<dyn PlatformNormalizer>> {
        self.normalizers.insert(normalizer.platform(), normalizer)
    }

    pub fn get(&self, platform: Platform) -> Option<&Arc<dyn PlatformNormalizer>> {
        self.normalizers.get(&platform)
    }

    /// Registered platforms, sorted.
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<Platform> = self.normalizers.keys().copied().collect();
        platforms.sort();
        platforms
    }

    /// Normalize `raw` with the normalizer registered for `platform`.
    pub fn normalize(
        &self,
        platform: Platform,
        raw: &Value,
    ) -> Result<NormalizedMessage, NormalizeError> {
        let normalizer = self
            .get(platform)
            .ok_or_else(|| NormalizeError::UnsupportedPlatform(platform.to_string()))?;
        normalizer.normalize(raw)
    }

    /// Normalize `raw` for a platform given by its route tag.
    pub fn normalize_tag(&self, tag: &str, raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
        let platform: Platform = tag.parse()?;
        self.normalize(platform, raw)
    }
}

impl fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizationError;
    use crate::types::ChannelType;
    use serde_json::{json, Map};

    struct EchoNormalizer;

    impl PlatformNormalizer for EchoNormalizer {
        fn platform(&self) -> Platform {
            Platform::Instagram
        }

        fn normalize(&self, raw: &Value) -> Result<NormalizedMessage, NormalizeError> {
            let text = raw["text"].as_str().unwrap_or_default().to_string();
            Ok(NormalizedMessage {
                message_id: None,
                platform: Platform::Instagram,
                channel_type: ChannelType::Dm,
                conversation_id: None,
                user_id_hashed: redact::hash_id("echo"),
                clean_text: redact::mask_pii(&text),
                original_text: text,
                language: "en".into(),
                timestamp_utc: None,
                metadata: Map::new(),
            })
        }
    }

    #[test]
    fn defaults_cover_every_platform() {
        let registry = PlatformRegistry::with_defaults();
        assert_eq!(registry.platforms(), Platform::ALL.to_vec());
    }

    #[test]
    fn dispatches_by_tag() {
        let registry = PlatformRegistry::with_defaults();
        let err = registry.normalize_tag("instagram", &json!({})).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::Rejected(NormalizationError::instagram_not_implemented())
        );

        let err = registry.normalize_tag("facebook", &json!({})).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::Rejected(NormalizationError::invalid_facebook_structure())
        );
    }

    #[test]
    fn unknown_or_unregistered_platform_is_unsupported() {
        let registry = PlatformRegistry::new();
        assert_eq!(
            registry.normalize_tag("facebook", &json!({})),
            Err(NormalizeError::UnsupportedPlatform("facebook".into()))
        );
        assert_eq!(
            PlatformRegistry::with_defaults().normalize_tag("tiktok", &json!({})),
            Err(NormalizeError::UnsupportedPlatform("tiktok".into()))
        );
    }

    #[test]
    fn register_replaces_existing_normalizer() {
        let mut registry = PlatformRegistry::with_defaults();
        let replaced = registry.register(Arc::new(EchoNormalizer));
        assert!(replaced.is_some());

        let message = registry
            .normalize(Platform::Instagram, &json!({"text": " ord 55 "}))
            .unwrap();
        assert_eq!(message.clean_text, "<ORDER_ID>");
        assert_eq!(message.original_text, " ord 55 ");
    }
}
