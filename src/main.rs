//! Wikiconv - a Creole wiki markup to TikiWiki markup converter.
//!
//! This binary provides the CLI interface to the wikiconv library,
//! converting whole documents from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use wikiconv_config::Config;
use wikiconv_parser::Parser as WikiParser;
use wikiconv_render::Renderer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Wikiconv v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    let config = load_config(cli);
    let parser = WikiParser::with_config(config.clone());
    let renderer = Renderer::with_config(config.render.clone());

    let mut out = String::new();
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        out.push_str(&convert(&input, &parser, &renderer, cli.tokens)?);
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = fs::read_to_string(path)?;
            out.push_str(&convert(&input, &parser, &renderer, cli.tokens)?);
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, out)?,
        None => {
            io::stdout().write_all(out.as_bytes())?;
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_default();

    // Apply config override if provided
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            // It's a file path
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    // CLI flags win over any config file
    if cli.no_camelcase {
        config.parse.camelcase = false;
    }
    if let Some(ref prefix) = cli.image_prefix {
        config.render.image_prefix = prefix.clone();
    }

    config
}

/// Convert one document body.
fn convert(
    input: &str,
    parser: &WikiParser,
    renderer: &Renderer,
    tokens: bool,
) -> io::Result<String> {
    let doc = parser.parse(input);
    if tokens {
        let json = serde_json::to_string_pretty(doc.segments())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(json + "\n")
    } else {
        Ok(renderer.render(&doc))
    }
}
