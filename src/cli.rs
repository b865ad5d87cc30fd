//! Command-line interface for wikiconv.

use clap::Parser;
use std::path::PathBuf;

/// Wikiconv - a Creole wiki markup to TikiWiki markup converter.
#[derive(Parser, Debug)]
#[command(
    name = "wkc",
    author = "Wikiconv Contributors",
    version,
    about = "Convert Creole wiki markup to TikiWiki markup",
    after_help = "Repository: https://github.com/wikiconv/wikiconv\n\n\
                  Examples:\n  \
                  cat page.txt | wkc\n  \
                  wkc page.txt -o page.tiki\n  \
                  wkc --tokens page.txt\n  \
                  wkc --no-camelcase --image-prefix uploads/ page.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Dump the parsed segment stream as JSON instead of rendering
    #[arg(long = "tokens")]
    pub tokens: bool,

    /// Do not turn bare CamelCase words into page links
    #[arg(long = "no-camelcase")]
    pub no_camelcase: bool,

    /// Path prefixed to relative image sources
    #[arg(long = "image-prefix", value_name = "PATH")]
    pub image_prefix: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use wikiconv_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
