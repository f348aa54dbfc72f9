use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target capitalization convention applied to a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingMode {
    /// First token lowercase, later tokens capitalized, fused together.
    Camel,
    /// Every token capitalized, fused together.
    Pascal,
    /// Everything lowercase, tokens rejoined with the separator.
    Lower,
    /// Everything uppercase, tokens rejoined with the separator.
    Upper,
}

/// Fixed name-to-mode table. The mode set is closed, so no registration
/// mechanism is needed.
pub const CASING_MODES: [(&str, CasingMode); 4] = [
    ("camel", CasingMode::Camel),
    ("pascal", CasingMode::Pascal),
    ("lower", CasingMode::Lower),
    ("upper", CasingMode::Upper),
];

impl CasingMode {
    /// Names accepted by [`CasingMode::from_str`], in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        CASING_MODES.iter().map(|(name, _)| *name)
    }

    /// Render tokens into the final string for this mode.
    ///
    /// Lower and upper rejoin with `separator`; camel and pascal always
    /// fuse tokens directly.
    pub fn render(&self, tokens: &[String], separator: Option<char>) -> String {
        match self {
            CasingMode::Lower => join(tokens.iter().map(|t| t.to_ascii_lowercase()), separator),
            CasingMode::Upper => join(tokens.iter().map(|t| t.to_ascii_uppercase()), separator),
            CasingMode::Pascal => tokens.iter().map(|t| capitalize(t)).collect(),
            CasingMode::Camel => tokens
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    if i == 0 {
                        t.to_ascii_lowercase()
                    } else {
                        capitalize(t)
                    }
                })
                .collect(),
        }
    }
}

impl FromStr for CasingMode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        CASING_MODES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| NormalizeError::UnknownCasing(s.to_string()))
    }
}

impl fmt::Display for CasingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasingMode::Camel => write!(f, "camel"),
            CasingMode::Pascal => write!(f, "pascal"),
            CasingMode::Lower => write!(f, "lower"),
            CasingMode::Upper => write!(f, "upper"),
        }
    }
}

fn join(tokens: impl Iterator<Item = String>, separator: Option<char>) -> String {
    let sep = separator.map(String::from).unwrap_or_default();
    tokens.collect::<Vec<_>>().join(&sep)
}

/// Uppercase the leading character, lowercase the rest. Digits pass
/// through unchanged.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(token.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
