// ABOUTME: CLI binary for Enhanced QIS.
// ABOUTME: Rewrites a saved QIS page (file or stdin) and prints the HTML or a JSON report.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser};
use qis_grades::Vocabulary;
use qis_page::{decode_html, Enhanced, Enhancer, EnhancerConfig};
use tracing::{metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "enhanced-qis")]
#[command(about = "Clean up a QIS grade overview and add the weighted average grade")]
struct Args {
    /// URL the page was served from; its `state` parameter selects the page type
    #[arg(long = "url")]
    url: Option<String>,

    /// Saved HTML page to rewrite (default: stdin)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the JSON report instead of the rewritten page
    #[arg(long = "json")]
    json_output: bool,

    /// Charset of the input, e.g. iso-8859-1 (default: detect)
    #[arg(long = "charset")]
    charset: Option<String>,

    /// Calendar year for the special-attempt check (default: current year)
    #[arg(long = "year")]
    year: Option<i32>,

    /// JSON config overriding layout, vocabulary, palette or selectors
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Match the English rendering of the pages
    #[arg(long = "english")]
    english: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let fmt = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false);
    tracing_subscriber::registry()
        .with(fmt)
        .with(LevelFilter::from_level(level))
        .init();
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading file {:?}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn build_enhancer(args: &Args) -> anyhow::Result<Enhancer> {
    let config = match &args.config {
        Some(path) => EnhancerConfig::from_path(path)?,
        None => EnhancerConfig::default(),
    };
    let mut builder = Enhancer::builder().config(config);
    if args.english {
        builder = builder.vocabulary(Vocabulary::english());
    }
    if let Some(year) = args.year {
        builder = builder.year(year);
    }
    Ok(builder.build())
}

fn format_output(result: &Enhanced, json_output: bool) -> anyhow::Result<String> {
    if json_output {
        Ok(result.to_json()?)
    } else {
        Ok(result.html.clone())
    }
}

fn run(args: &Args, url: &str) -> anyhow::Result<()> {
    let enhancer = build_enhancer(args)?;
    let bytes = read_input(args.html.as_ref())?;
    let html = decode_html(&bytes, args.charset.as_deref());

    let start = Instant::now();
    let result = enhancer.enhance(&html, url)?;
    let elapsed = start.elapsed();

    let output = format_output(&result, args.json_output)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing to {:?}", path))?
        }
        None => println!("{}", output),
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(url) = args.url.clone() else {
        eprintln!("error: --url is required");
        return ExitCode::from(1);
    };

    match run(&args, &url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
