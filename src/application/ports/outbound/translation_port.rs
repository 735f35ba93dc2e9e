//! Translation port - the host's localization lookup

/// Resolves translation keys to display text.
///
/// Lookups never fail: unknown keys come back unchanged, matching the host's behaviour.
pub trait TranslationPort: Send + Sync {
    fn i18n(&self, key: &str) -> String;
}

/// Returns every key as-is. Used when no catalog is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl TranslationPort for IdentityTranslator {
    fn i18n(&self, key: &str) -> String {
        key.to_string()
    }
}
