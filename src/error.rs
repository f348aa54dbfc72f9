use thiserror::Error;

/// Errors raised while validating normalizer options.
///
/// The transform itself is total; only configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The casing name is not in the supported set.
    #[error("unknown casing mode '{0}' (expected camel, pascal, lower or upper)")]
    UnknownCasing(String),

    /// Separators are a single character or the empty string.
    #[error("separator '{0}' must be a single character or empty")]
    SeparatorTooLong(String),

    /// A letter or digit separator would be ambiguous with token content.
    #[error("separator '{0}' must not be a letter or digit")]
    AlphanumericSeparator(char),
}
