use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    total: usize,
    results: Vec<JsonEntry>,
}

/// Print normalized strings to stdout in the requested format.
///
/// Text output is one normalized string per line, uncolored, so it can
/// be piped into other tools.
pub fn print_results(inputs: &[String], outputs: &[String], format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            for output in outputs {
                println!("{}", output);
            }
        }
        OutputFormat::Json => print_json(inputs, outputs),
    }
}

fn print_json(inputs: &[String], outputs: &[String]) {
    let results: Vec<JsonEntry> = inputs
        .iter()
        .zip(outputs)
        .map(|(input, output)| JsonEntry {
            input: input.clone(),
            output: output.clone(),
        })
        .collect();

    let document = JsonOutput {
        total: results.len(),
        results,
    };

    println!("{}", serde_json::to_string_pretty(&document).unwrap());
}

/// Summary goes to stderr so stdout stays machine-consumable.
pub fn print_summary(total: usize, colored: bool) {
    let noun = if total == 1 { "string" } else { "strings" };
    if colored {
        eprintln!(
            "{} {} {} normalized",
            "✓".green().bold(),
            total.to_string().bold(),
            noun
        );
    } else {
        eprintln!("✓ {} {} normalized", total, noun);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert!(matches!(
            "text".parse::<OutputFormat>().unwrap(),
            OutputFormat::Text
        ));
        assert!(matches!(
            "JSON".parse::<OutputFormat>().unwrap(),
            OutputFormat::Json
        ));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_round_trip() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
