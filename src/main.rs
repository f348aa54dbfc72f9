use anyhow::Result;
use casefmt::cli::output::{self, OutputFormat};
use casefmt::{CaseNormalizer, Config};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, BufRead, IsTerminal};

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "A blazingly fast case normalizer CLI", long_about = None)]
struct Cli {
    /// Strings to normalize (reads stdin lines when omitted)
    #[arg(value_name = "STRINGS")]
    strings: Vec<String>,

    /// Target casing convention (camel, pascal, lower, upper)
    #[arg(short, long)]
    casing: Option<String>,

    /// Word separator; splits input and rejoins lower/upper output.
    /// Pass an empty string to fuse tokens directly.
    #[arg(short, long)]
    separator: Option<String>,

    /// Strip vowels from every token after its leading character
    #[arg(short = 'd', long)]
    drop_vowels: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.casing.clone(), cli.separator.clone(), cli.drop_vowels)?;

    // Collect input strings
    let inputs = if cli.strings.is_empty() {
        read_stdin_lines()?
    } else {
        cli.strings.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No input strings. Pass strings as arguments or pipe them on stdin.");
    }

    // Initialize the normalizer and run the transform
    let normalizer = CaseNormalizer::new(&config)?;
    let outputs = normalizer.normalize_all(&inputs);

    output::print_results(&inputs, &outputs, &cli.format);
    output::print_summary(outputs.len(), !cli.no_color);

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}
