//! CLI binary for markdown-wx.
//!
//! A thin shim over the library crate: reads Markdown from a file, stdin, or
//! an interactive prompt, converts it, and writes the HTML to a file or
//! stdout.

use anyhow::{Context, Result};
use clap::Parser;
use markdown_wx::{convert_file, read_markdown, ConversionConfig, Converter};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a file (stdout)
  md2wx article.md

  # Convert to file
  md2wx article.md -o article.html

  # Pipe through stdin
  cat article.md | md2wx > article.html

  # Interactive: type Markdown, an empty line converts, 'quit' exits
  md2wx -i

  # Custom styles (JSON, only the keys you override)
  md2wx --config theme.json article.md

  # HTML plus footnotes and stats as JSON
  md2wx --json article.md

CONFIG FILE:
  {
    "references_title": "参考",
    "styles": { "link": "color: #1e6bb8; text-decoration: none;" },
    "table_rules": { "key_keywords": ["login", "upload", "logout"] }
  }

ENVIRONMENT VARIABLES:
  MD2WX_OUTPUT            Default output file
  MD2WX_CONFIG            Default config file
  MD2WX_REFERENCES_TITLE  Footnote section heading
  RUST_LOG                Log filter (overrides -v / -q)
"#;

/// Convert Markdown to inline-styled HTML for the WeChat article editor.
#[derive(Parser, Debug)]
#[command(
    name = "md2wx",
    version,
    about = "Convert Markdown to inline-styled HTML for the WeChat article editor",
    long_about = "Convert Markdown to an HTML fragment where every element carries inline styles \
and every link becomes a numbered footnote, ready to paste into the WeChat official account editor.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to convert. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "MD2WX_OUTPUT")]
    output: Option<PathBuf>,

    /// Interactive mode: an empty line converts the lines typed so far.
    #[arg(short, long, conflicts_with_all = ["input", "output", "json"])]
    interactive: bool,

    /// JSON file overriding styles, table cell rules, or the references title.
    #[arg(long, env = "MD2WX_CONFIG")]
    config: Option<PathBuf>,

    /// Heading of the footnote section.
    #[arg(long, env = "MD2WX_REFERENCES_TITLE")]
    references_title: Option<String>,

    /// Output structured JSON (html, footnotes, stats) instead of HTML.
    #[arg(long, env = "MD2WX_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2WX_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2WX_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    debug!("Using config: {:?}", config);

    // ── Interactive mode ─────────────────────────────────────────────────
    if cli.interactive {
        let converter = Converter::new(config);
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_interactive(&converter, stdin.lock(), &mut out)
            .context("Interactive session failed")?;
        return Ok(());
    }

    // ── File to file ─────────────────────────────────────────────────────
    if let (Some(input), Some(output), false) = (&cli.input, &cli.output, cli.json) {
        let stats = convert_file(input, output, &config).context("Conversion failed")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} bytes  {} footnotes  {} code blocks  →  {}",
                green("✔"),
                stats.output_bytes,
                stats.footnotes,
                stats.code_blocks,
                bold(&output.display().to_string()),
            );
        }
        return Ok(());
    }

    // ── Everything else ──────────────────────────────────────────────────
    let markdown = match &cli.input {
        Some(path) => read_markdown(path).context("Failed to read input")?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = Converter::new(config).convert_detailed(&markdown);
    let mut payload = if cli.json {
        serde_json::to_string_pretty(&output).context("Failed to serialise output")?
    } else {
        output.html.clone()
    };
    if !payload.ends_with('\n') {
        payload.push('\n');
    }

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &payload)
                .with_context(|| format!("Failed to write output to {:?}", path))?;
            if !cli.quiet {
                eprintln!("Output written to: {}", bold(&path.display().to_string()));
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(payload.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    if !cli.quiet && !cli.json {
        eprintln!(
            "{}",
            dim(&format!(
                "{} footnotes, {} code blocks, {}us",
                output.stats.footnotes, output.stats.code_blocks, output.stats.duration_us
            ))
        );
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut config = match &cli.config {
        Some(path) => ConversionConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => ConversionConfig::default(),
    };

    if let Some(ref title) = cli.references_title {
        config.references_title = title.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Read Markdown documents line by line until EOF or `quit`.
///
/// An empty line converts the lines buffered so far; whatever is still
/// buffered at EOF or `quit` is converted before returning. Returns the
/// number of documents converted.
fn run_interactive<R: BufRead, W: Write>(
    converter: &Converter,
    input: R,
    out: &mut W,
) -> io::Result<usize> {
    writeln!(out, "md2wx interactive mode")?;
    writeln!(
        out,
        "Type Markdown; an empty line converts it, Ctrl+D or 'quit' exits."
    )?;
    writeln!(out, "{}", "-".repeat(50))?;

    let mut buffer: Vec<String> = Vec::new();
    let mut converted = 0;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if line == "quit" {
            break;
        }
        if line.is_empty() {
            if !buffer.is_empty() {
                print_result(converter, &buffer.join("\n"), out)?;
                buffer.clear();
                converted += 1;
            }
            continue;
        }
        buffer.push(line);
    }

    if !buffer.is_empty() {
        print_result(converter, &buffer.join("\n"), out)?;
        converted += 1;
    }
    Ok(converted)
}

fn print_result<W: Write>(converter: &Converter, markdown: &str, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Result:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", converter.convert(markdown))?;
    writeln!(out, "{rule}")
}
