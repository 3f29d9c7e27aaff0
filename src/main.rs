//! Smart View CLI
//!
//! Usage:
//!   smart-view [OPTIONS] [FILE]
//!
//! The input is a TOML document:
//!
//! ```toml
//! title = "Payments"
//! paths = [
//!     [{ identifier = "d1", name = "Payments", type = "domain" },
//!      { identifier = "s1", name = "Ledger", type = "system" }],
//! ]
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use serde::Deserialize;

use smart_view::{CliError, PathElement, Settings, SmartViewEngine};

#[derive(Parser)]
#[command(name = "smart-view")]
#[command(about = "Lay out hierarchical architecture maps as nested boxes")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Layout engine: nested or hierarchy (overrides the settings file)
    #[arg(short, long)]
    layout: Option<String>,

    /// View title (overrides the title in the input)
    #[arg(short, long)]
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Input {
    title: Option<String>,
    paths: Vec<Vec<PathElement>>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(layout) = &cli.layout {
        settings = settings.with_layout_type(layout.as_str());
    }

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let input: Input = toml::from_str(&source)?;
    debug!("read {} paths", input.paths.len());

    let title = cli
        .title
        .clone()
        .or(input.title)
        .unwrap_or_default();
    let view = SmartViewEngine::new(settings).generate_view(input.paths, &title)?;
    Ok(view.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const INPUT: &str = r#"
title = "Payments"
paths = [
    [{ identifier = "d1", name = "Payments", type = "domain" },
     { identifier = "s1", name = "Ledger", type = "system" }],
    [{ identifier = "d1", name = "Payments", type = "domain" },
     { identifier = "s2", name = "Billing", type = "system" }],
]
"#;

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("smart-view").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_uses_input_title() {
        let file = input_file(INPUT);
        let path = file.path().to_str().unwrap();

        let text = run(&cli(&[path])).unwrap();

        assert!(text.starts_with("view \"Payments\" "));
        assert!(text.contains("  s2 [system]"));
        assert!(text.contains(" in d1\n"));
    }

    #[test]
    fn test_run_overrides_title_and_layout() {
        let file = input_file(INPUT);
        let path = file.path().to_str().unwrap();

        let text = run(&cli(&["--layout", "hierarchy", "--title", "Map", path])).unwrap();

        // Hierarchy layout: d1 spans two leaf columns at the page margin
        assert!(text.starts_with("view \"Map\" 316x141\n"));
        assert!(text.contains("d1 [domain] x=12 y=12 w=292 h=105\n"));
    }

    #[test]
    fn test_run_reads_layout_from_settings_file() {
        let settings = input_file("layout_type = \"hierarchy\"\n");
        let file = input_file(INPUT);

        let text = run(&cli(&[
            "-s",
            settings.path().to_str().unwrap(),
            file.path().to_str().unwrap(),
        ]))
        .unwrap();

        assert!(text.contains("d1 [domain] x=12 y=12 w=292 h=105\n"));
    }

    #[test]
    fn test_run_rejects_malformed_input() {
        let file = input_file("paths = [[{ identifier = \"d1\" }]]");
        let path = file.path().to_str().unwrap();

        let err = run(&cli(&[path])).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }
}
