//! merchant-graph CLI entry point.
//!
//! Reads a JSON array of funnel records and prints their layout.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use merchant_graph::renderers::{JsonRenderer, Renderer, TextRenderer};
use merchant_graph::{LayoutConfig, RenderConfig, layout_funnels, parse_funnels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Lay out merchant funnel relationships.
#[derive(Parser, Debug)]
#[command(
    name = "merchant-graph",
    version = env!("MERCHANT_GRAPH_VERSION"),
    about = "Lay out merchant funnel relationships as leveled components"
)]
struct Cli {
    /// Input file with a JSON array of funnels (reads from stdin if not provided)
    input: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    format: Format,

    /// JSON layout config (trigger catalog overrides)
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Print display names instead of ids (text format only)
    #[arg(short = 'n', long = "names")]
    names: bool,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)))
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let layout_config = match cli.config {
        Some(ref path) => {
            let src = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)));
            LayoutConfig::from_json(&src).unwrap_or_else(|e| fail(e))
        }
        None => LayoutConfig::default(),
    };

    let funnels = parse_funnels(&text).unwrap_or_else(|e| fail(e));
    let layout = layout_funnels(&funnels, &layout_config);

    let mut rendered = match cli.format {
        Format::Json => JsonRenderer::new(cli.pretty)
            .try_render(&layout)
            .unwrap_or_else(|e| fail(e)),
        Format::Text => {
            let render_config = RenderConfig {
                show_names: cli.names,
                ..RenderConfig::default()
            };
            TextRenderer::new(render_config, &funnels).render(&layout)
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
