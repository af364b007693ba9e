use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shadowflow::captions::merge_captions;
use shadowflow::scoring;
use shadowflow::types::{
    CaptionSegment, SegmenterConfig, DEFAULT_FINAL_DURATION, DEFAULT_GAP_THRESHOLD,
    DEFAULT_MAX_BUFFER_WORDS,
};

/// Shadowflow - caption segmentation and shadowing practice scoring
///
/// Reconstructs sentence records from raw timed caption streams and scores
/// spoken shadowing attempts against reference sentences.
#[derive(Parser, Debug)]
#[command(name = "shadowflow")]
#[command(version = "0.1.0")]
#[command(about = "Caption segmentation and shadowing-attempt scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge a timed caption stream into sentence records.
    Segment(SegmentArgs),
    /// Score a spoken attempt against a reference sentence.
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct SegmentArgs {
    /// Caption JSON file: an array of {"text", "start", "duration"} records
    #[arg(value_name = "CAPTIONS")]
    input: PathBuf,

    /// Silence gap in seconds that ends a sentence in unpunctuated streams
    #[arg(long, default_value_t = DEFAULT_GAP_THRESHOLD)]
    gap_threshold: f64,

    /// Buffered word count that ends a sentence in unpunctuated streams
    #[arg(long, default_value_t = DEFAULT_MAX_BUFFER_WORDS)]
    max_buffer_words: usize,

    /// Synthesized duration in seconds for a final fragment that reports none
    #[arg(long, default_value_t = DEFAULT_FINAL_DURATION)]
    final_duration: f64,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pretty: bool,
}

impl SegmentArgs {
    fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Caption file does not exist: {:?}", self.input);
        }
        if !self.input.is_file() {
            bail!("Caption path is not a file: {:?}", self.input);
        }
        if self.gap_threshold <= 0.0 {
            bail!("Gap threshold must be positive, got: {}", self.gap_threshold);
        }
        if self.max_buffer_words == 0 {
            bail!("Word cap must be at least 1");
        }
        if self.final_duration < 0.0 {
            bail!("Final duration must be non-negative, got: {}", self.final_duration);
        }
        Ok(())
    }

    fn segmenter_config(&self) -> SegmenterConfig {
        SegmenterConfig::new(self.gap_threshold, self.max_buffer_words, self.final_duration)
    }
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Reference sentence text (inline)
    #[arg(long, value_name = "TEXT", conflicts_with = "reference_file")]
    reference: Option<String>,

    /// Path to a file holding the reference sentence text
    #[arg(long, value_name = "PATH", conflicts_with = "reference")]
    reference_file: Option<PathBuf>,

    /// Spoken attempt transcript (inline); empty counts as no speech
    #[arg(long, value_name = "TEXT", conflicts_with = "candidate_file")]
    candidate: Option<String>,

    /// Path to a file holding the spoken attempt transcript
    #[arg(long, value_name = "PATH", conflicts_with = "candidate")]
    candidate_file: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pretty: bool,
}

impl ScoreArgs {
    fn reference_text(&self) -> Result<String> {
        load_text_from_sources(self.reference_file.as_deref(), self.reference.as_deref())
            .context("Provide a reference via --reference or --reference-file")
    }

    fn candidate_text(&self) -> Result<String> {
        load_text_from_sources(self.candidate_file.as_deref(), self.candidate.as_deref())
            .context("Provide an attempt via --candidate or --candidate-file")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Segment(args) => handle_segment(&args),
        Command::Score(args) => handle_score(&args),
    }
}

fn handle_segment(args: &SegmentArgs) -> Result<()> {
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read caption file {:?}", args.input))?;
    let segments: Vec<CaptionSegment> =
        serde_json::from_str(&raw).context("Failed to parse caption JSON")?;
    info!(fragment_count = segments.len(), "loaded caption stream");

    let sentences = merge_captions(&segments, args.segmenter_config())
        .context("Failed to merge caption stream")?;
    info!(sentence_count = sentences.len(), "merged caption stream");

    println!("{}", to_json(&sentences, args.pretty)?);
    Ok(())
}

fn handle_score(args: &ScoreArgs) -> Result<()> {
    let reference = args.reference_text()?;
    let candidate = args.candidate_text()?;

    let result = scoring::score(&reference, &candidate);
    info!(
        score = result.score,
        matched = result.matched_count,
        total = result.total_count,
        "scored attempt"
    );

    println!("{}", to_json(&result, args.pretty)?);
    Ok(())
}

fn load_text_from_sources(path: Option<&Path>, inline: Option<&str>) -> Result<String> {
    if let Some(p) = path {
        let data =
            fs::read_to_string(p).with_context(|| format!("Failed to read text file {:?}", p))?;
        return Ok(data);
    }

    if let Some(raw) = inline {
        return Ok(raw.to_string());
    }

    bail!("No text source provided");
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output JSON")
}
