//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::normalizer::{ChatNormalizer, read_document};
use chatlens::output::OutputConfig;
use chatlens::sentiment::{LexiconClassifier, Sentiment, SentimentAnalyzer};
use chatlens::stats::{ChatStats, SentimentDistribution, word_frequencies};

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("chatlens={}", args.log_level())));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {}", args.input.display());
    println!("Output:  {}", output_path.display());
    println!("Format:  {}", format);
    println!();

    let normalizer = ChatNormalizer::with_config(args.parser_config())?;

    // Step 1: Read + decode (document-level failures stop here)
    let text = read_document(&args.input)?;

    // Step 2: Normalize
    let parse_start = Instant::now();
    let (table, report) = normalizer.normalize_with_report(&text);
    println!(
        "Parsed {} messages from {} lines ({:.2}s)",
        table.len(),
        report.total_lines,
        parse_start.elapsed().as_secs_f64()
    );
    if table.is_empty() {
        println!("No messages found. Check that the export uses day/month/year dates.");
    }

    if args.report {
        println!();
        println!("Dropped lines:");
        println!("   blank: {}", report.blank);
        for (kind, count) in report.iter() {
            println!("   {}: {}", kind, count);
        }
    }

    if args.diagnose {
        println!();
        for diagnostic in normalizer.diagnose(&text) {
            println!("   line {}: {}", diagnostic.line, diagnostic.rejection);
        }
    }

    // Step 3: Sentiment (optional)
    let sentiments: Option<Vec<Sentiment>> = args.sentiment.then(|| {
        SentimentAnalyzer::new(LexiconClassifier::new()).analyze_table(&table)
    });

    // Step 4: Statistics (optional)
    if args.stats {
        print_stats(&table, sentiments.as_deref(), args.top_words);
    }

    // Step 5: Write output
    let mut output_config = OutputConfig::new();
    if args.raw_time {
        output_config = output_config.with_raw_time();
    }
    write_to_format(
        &table,
        sentiments.as_deref(),
        &output_path,
        format,
        &output_config,
    )?;

    println!();
    println!("Done! Output saved to {}", output_path.display());
    println!("Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_stats(table: &chatlens::ChatTable, sentiments: Option<&[Sentiment]>, top_words: usize) {
    let stats = ChatStats::from_table(table);

    println!();
    println!("Statistics:");
    println!("   Messages:  {}", stats.total_messages);
    println!("   Senders:   {}", stats.unique_senders);
    if let Some((first, last)) = stats.date_range {
        println!("   Range:     {} to {}", first, last);
    }
    if let Some((day, count)) = stats.busiest_day() {
        println!("   Busiest:   {} ({} messages)", day, count);
    }

    println!();
    println!("Most active:");
    for (sender, count) in stats.messages_per_sender() {
        println!("   {:<20} {}", sender, count);
    }

    let words = word_frequencies(table, top_words);
    if !words.is_empty() {
        println!();
        println!("Top words:");
        for (word, count) in words {
            println!("   {:<20} {}", word, count);
        }
    }

    if let Some(column) = sentiments {
        let dist = SentimentDistribution::from_sentiments(column);
        println!();
        println!("Sentiment:");
        for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
            println!("   {:<9} {:.1}%", sentiment.as_str(), dist.percentage(sentiment));
        }
    }
}
