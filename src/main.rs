use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hegex::compile;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hegex pattern, e.g. `{site}.example.com`
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Text to match against the pattern
    #[arg(value_name = "TEXT")]
    text: String,

    /// Print captured values as `key=value` lines
    #[arg(short = 'x', long, conflicts_with = "rewrite")]
    extract: bool,

    /// Substitute captured values into this template
    #[arg(short = 'r', long, value_name = "TEMPLATE")]
    rewrite: Option<String>,
}

/// Install a log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &Args) -> Result<bool> {
    let h = compile(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    if let Some(template) = args.rewrite.as_deref() {
        let (rewritten, matched) = h.rewrite(&args.text, template);
        if matched {
            println!("{rewritten}");
        }
        return Ok(matched);
    }

    if args.extract {
        let Some(captures) = h.extract(&args.text) else {
            return Ok(false);
        };
        for (key, value) in &captures {
            println!("{key}={value}");
        }
        return Ok(true);
    }

    let matched = h.is_match(&args.text);
    println!("{matched}");
    Ok(matched)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
