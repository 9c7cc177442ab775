// Chunk: docs/chunks/preview_cli - Command-line entry point
//!
//! tint: print a source file with syntax highlighting.
//!
//! Usage:
//!   tint FILE                       Highlight by file extension
//!   tint --language css FILE        Force a language
//!   tint --theme theme.json FILE    Use a theme file
//!   tint --tokens FILE              List tokens instead of coloring

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tint::preview::{language_for, load_theme, read_source, render, render_tokens};
use tint_syntax::SyntaxHighlighter;
use tracing_subscriber::EnvFilter;

/// Print a source file with syntax highlighting.
#[derive(Debug, Parser)]
#[command(name = "tint", version, about)]
struct Args {
    /// Language id (python, javascript, html, css). Detected from the file
    /// extension when omitted.
    #[arg(short, long)]
    language: Option<String>,

    /// Theme file. Defaults to the tint/theme.json file in the config dir.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Print one `line:col-line:col type` row per token.
    #[arg(long)]
    tokens: bool,

    /// File to highlight.
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let text = read_source(&args.file).with_context(|| format!("cannot preview {}", args.file.display()))?;
    let theme = load_theme(args.theme.as_deref()).context("cannot load theme")?;
    let highlighter = SyntaxHighlighter::new(theme);
    let language = language_for(&args.file, args.language.as_deref());

    let output = if args.tokens {
        render_tokens(&highlighter, &text, language.as_deref())
    } else {
        let mut rendered = render(&highlighter, &text, language.as_deref());
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    };

    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
