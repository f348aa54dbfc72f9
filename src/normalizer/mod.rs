pub mod casing;
pub mod tokenizer;

use crate::config::Config;
use crate::error::NormalizeError;
pub use casing::CasingMode;
pub use tokenizer::tokenize;

/// Rewrites mixed-delimiter, mixed-case strings into one target
/// convention. Options are validated once at construction; the
/// transform itself is pure and cannot fail.
#[derive(Debug)]
pub struct CaseNormalizer {
    casing: CasingMode,
    separator: Option<char>,
    drop_vowels: bool,
}

impl CaseNormalizer {
    /// Build a normalizer from loaded configuration.
    pub fn new(config: &Config) -> Result<Self, NormalizeError> {
        let casing = config.casing.parse()?;
        let separator = parse_separator(&config.separator)?;
        Self::with_options(casing, separator, config.drop_vowels)
    }

    /// Build a normalizer from explicit options.
    pub fn with_options(
        casing: CasingMode,
        separator: Option<char>,
        drop_vowels: bool,
    ) -> Result<Self, NormalizeError> {
        if let Some(sep) = separator {
            if sep.is_ascii_alphanumeric() {
                return Err(NormalizeError::AlphanumericSeparator(sep));
            }
        }

        Ok(Self {
            casing,
            separator,
            drop_vowels,
        })
    }

    /// Normalize a single string. An empty input yields an empty output.
    pub fn normalize(&self, input: &str) -> String {
        let mut tokens = tokenize(input, self.separator);

        if self.drop_vowels {
            for token in &mut tokens {
                *token = strip_vowels(token);
            }
        }

        self.casing.render(&tokens, self.separator)
    }

    /// Normalize a batch. The output has the same length and order as
    /// the input.
    pub fn normalize_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<String> {
        inputs.iter().map(|s| self.normalize(s.as_ref())).collect()
    }
}

/// One-shot convenience wrapper over [`CaseNormalizer`].
pub fn parse<S: AsRef<str>>(
    inputs: &[S],
    separator: Option<char>,
    casing: CasingMode,
    drop_vowels: bool,
) -> Result<Vec<String>, NormalizeError> {
    let normalizer = CaseNormalizer::with_options(casing, separator, drop_vowels)?;
    Ok(normalizer.normalize_all(inputs))
}

/// Interpret a surface separator string: empty means "no separator",
/// one symbol character is the separator, anything else is rejected.
pub(crate) fn parse_separator(raw: &str) -> Result<Option<char>, NormalizeError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(sep), None) => {
            if sep.is_ascii_alphanumeric() {
                Err(NormalizeError::AlphanumericSeparator(sep))
            } else {
                Ok(Some(sep))
            }
        }
        _ => Err(NormalizeError::SeparatorTooLong(raw.to_string())),
    }
}

/// Drop vowels from a token, always keeping its leading character.
fn strip_vowels(token: &str) -> String {
    let mut chars = token.chars();
    let mut out = String::with_capacity(token.len());

    if let Some(first) = chars.next() {
        out.push(first);
        out.extend(chars.filter(|c| !is_vowel(*c)));
    }

    out
}

fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
