use anyhow::Context;
use clap::Parser;
use lang_detect::jsonl;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Classifies diary notes by script and primary language.
#[derive(Parser)]
#[command(name = "lang_detect", about = "Diary note language detector")]
struct Args {
    /// Input JSONL file (one {"id", "text"} record per line)
    #[arg(long = "in")]
    input: PathBuf,
    /// Output JSONL file
    #[arg(long = "out")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let input = File::open(&args.input)
        .with_context(|| format!("opening input {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("creating output {}", args.output.display()))?;

    let reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let processed = jsonl::run(reader, &mut writer)?;

    info!(processed, output = %args.output.display(), "done");
    Ok(())
}
