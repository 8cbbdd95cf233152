//! CLI entry point for seedmd

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use seedmd::{
    JsonCollector, Language, Layout, ListingConfig, ListingWalker, OutputConfig, TextFormatter,
    print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "seedmd")]
#[command(about = "List package source files as underlined sections to seed a markdown document")]
#[command(version)]
struct Args {
    /// Project root holding src/main/<language>/...
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Package to list (can be used multiple times; replaces the built-in list)
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    packages: Vec<String>,

    /// Language to check (can be used multiple times; replaces Java and Scala)
    #[arg(short = 'l', long = "language", value_name = "NAME")]
    languages: Vec<String>,

    /// Dotted namespace the packages live under
    #[arg(long = "namespace", value_name = "DOTTED")]
    namespace: Option<String>,

    /// Blank line after every underline and after every language
    #[arg(long = "spaced", conflicts_with = "json")]
    spaced: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn listing_config(&self) -> ListingConfig {
        let mut config = ListingConfig::default();
        if !self.packages.is_empty() {
            config.packages = self.packages.clone();
        }
        if !self.languages.is_empty() {
            config.languages = self
                .languages
                .iter()
                .map(|l| Language::new(l.as_str()))
                .collect();
        }
        if let Some(ref namespace) = self.namespace {
            config.namespace = namespace.clone();
        }
        config
    }
}

fn main() {
    let args = Args::parse();
    let walker = ListingWalker::new(args.listing_config());

    let result = if args.json {
        let mut collector = JsonCollector::new(&walker.config().namespace);
        walker
            .walk(&args.path, &mut collector)
            .and_then(|_| print_json(collector.document()))
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            layout: if args.spaced {
                Layout::Spaced
            } else {
                Layout::Compact
            },
        };
        let mut formatter = TextFormatter::stdout(output_config);
        walker.walk(&args.path, &mut formatter).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("seedmd: {}", e);
        process::exit(1);
    }
}
