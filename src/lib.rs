pub mod cli;
pub mod config;
pub mod error;
pub mod normalizer;

pub use config::Config;
pub use error::NormalizeError;
pub use normalizer::{parse, CaseNormalizer, CasingMode};
