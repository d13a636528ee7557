//! Poem corpus preparation CLI.
//!
//! `poemset chunks` measures the pre-chunked corpus and assembles the
//! train/test fine-tuning archive; `poemset poems` fetches the full-length
//! books archive, reports word and token statistics, and exports the
//! long-poem CSV.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use poemset::constants;
use poemset::{
    CorpusRoot, DatasetError, Dimension, HistogramSink, ItemId, MeasurementPipeline,
    PretrainedTokenizer, SvgHistogram, long_items, report, split_ids, threshold, write_archive,
};

#[derive(Parser, Debug)]
#[command(name = "poemset", version, about = "Prepare a poem corpus for fine-tuning")]
struct Cli {
    /// Root data directory
    #[arg(long, global = true, default_value = constants::corpus::DATA_DIR)]
    data_dir: PathBuf,

    /// Pretrained tokenizer identifier
    #[arg(long, global = true, default_value = constants::tokenizer::PRETRAINED_ID)]
    tokenizer: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure pre-chunked poems and build the train/test dataset archive
    Chunks,
    /// Fetch full-length poems, report statistics, and export long poems
    Poems,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Chunks => run_chunks(&cli),
        Commands::Poems => run_poems(&cli),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Missing inputs are an instruction to the operator, not a failure.
        Err(err @ DatasetError::PrerequisiteMissing { .. }) => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_chunks(cli: &Cli) -> Result<(), DatasetError> {
    let chunked_dir = cli.data_dir.join(constants::corpus::CHUNKED_DIR);
    let corpus = CorpusRoot::new(&chunked_dir);
    if !corpus.exists() {
        return Err(DatasetError::PrerequisiteMissing {
            dir: chunked_dir,
            instruction: "chunk the corpus into it first".into(),
        });
    }
    let entries = corpus.scan()?;

    println!("Calculating token counts...");
    let counter = PretrainedTokenizer::from_pretrained(&cli.tokenizer)?;
    let pipeline =
        MeasurementPipeline::new(counter).with_marker(constants::tokenizer::POEM_MARKER);
    let measurements = pipeline.measure_entries(&entries)?;

    let mut stdout = io::stdout().lock();
    report::write_summary(&mut stdout, &measurements, Dimension::Tokens)?;

    let token_counts = report::dimension_values(&measurements, Dimension::Tokens);
    SvgHistogram::default().render(
        "Poem chunk token count histogram",
        &token_counts,
        Path::new(constants::report::CHUNKED_TOKEN_HIST),
    )?;

    println!("\nCreating the dataset for fine-tuning...");
    let ids: Vec<ItemId> = entries.iter().map(|entry| entry.id.clone()).collect();
    let assignment = split_ids(
        &ids,
        constants::partition::SHUFFLE_SEED,
        constants::partition::TRAIN_FRACTION,
    );
    println!(
        "Train size: {}, Test size: {}",
        assignment.train.len(),
        assignment.test.len()
    );

    let paths: BTreeMap<ItemId, PathBuf> = entries
        .iter()
        .map(|entry| (entry.id.clone(), entry.path().to_path_buf()))
        .collect();
    write_archive(
        Path::new(constants::partition::ARCHIVE_FILENAME),
        &assignment,
        constants::tokenizer::POEM_MARKER,
        |id| {
            let path = paths
                .get(id)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "item left the corpus"))?;
            std::fs::read_to_string(path)
        },
    )?;

    println!("\n\nAll done!");
    Ok(())
}

fn run_poems(cli: &Cli) -> Result<(), DatasetError> {
    let archive_path = cli
        .data_dir
        .join(constants::fetch::BOOKS_ARCHIVE_FILENAME);
    poemset::fetch::ensure_books_archive(&archive_path, constants::fetch::BOOKS_ARCHIVE_URL)?;
    let full_length_dir = cli.data_dir.join(constants::corpus::FULL_LENGTH_DIR);
    poemset::fetch::extract_archive(&archive_path, &full_length_dir)?;

    let entries = CorpusRoot::new(&full_length_dir).scan()?;
    let counter = PretrainedTokenizer::from_pretrained(&cli.tokenizer)?;
    let pipeline = MeasurementPipeline::new(counter).with_word_counts(true);
    let measurements = pipeline.measure_entries(&entries)?;

    let mut stdout = io::stdout().lock();
    report::write_summary(&mut stdout, &measurements, Dimension::Words)?;
    report::write_summary(&mut stdout, &measurements, Dimension::Tokens)?;

    let histogram = SvgHistogram::default();
    histogram.render(
        "Poem word counts histogram",
        &report::dimension_values(&measurements, Dimension::Words),
        Path::new(constants::report::FULL_LENGTH_WORD_HIST),
    )?;
    histogram.render(
        "Poem token counts histogram",
        &report::dimension_values(&measurements, Dimension::Tokens),
        Path::new(constants::report::FULL_LENGTH_TOKEN_HIST),
    )?;

    let long = long_items(&measurements, constants::threshold::LONG_POEM_TOKENS);
    println!("\nLong poems:");
    for record in &long {
        println!(
            "  {} - {}: {} tokens",
            record.group, record.item, record.token_count
        );
    }
    println!(
        "\nSaving long poems to {}...",
        constants::threshold::CSV_FILENAME
    );
    threshold::write_csv(Path::new(constants::threshold::CSV_FILENAME), &long)?;

    println!("\n\nAll done!");
    Ok(())
}
