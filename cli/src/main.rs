//! itempress CLI - catalog import tool

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use itempress::{
    parse_file, Importer, LogSink, PartitionOptions, Result, Submission, TransferBatch,
};

#[derive(Parser)]
#[command(name = "itempress")]
#[command(version)]
#[command(about = "Import item-catalog JSON into normalized preset batches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a catalog document and print the records as JSON
    Convert {
        /// Input catalog JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Creator marker stamped on every record
        #[arg(long, default_value = itempress::IMPORT_CREATOR)]
        creator: String,
    },

    /// Show the batch plan (count, record ranges, payload sizes)
    Plan {
        /// Input catalog JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Lower payload bound in bytes
        #[arg(long, default_value_t = itempress::LOWER_BOUND)]
        lower: usize,

        /// Upper payload bound in bytes
        #[arg(long, default_value_t = itempress::UPPER_BOUND)]
        upper: usize,
    },

    /// Normalize, batch, and submit a catalog to a preset backend
    Push {
        /// Input catalog JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Backend base URL (e.g. https://backend.example/api/)
        #[arg(short, long, env = "ITEMPRESS_URL")]
        url: String,

        /// Creator marker stamped on every record
        #[arg(long, default_value = itempress::IMPORT_CREATOR)]
        creator: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
            creator,
        } => convert(&input, output.as_deref(), pretty, &creator),
        Commands::Plan { input, lower, upper } => plan(&input, lower, upper),
        Commands::Push { input, url, creator } => push(&input, &url, &creator),
    };

    if let Err(err) = outcome {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn convert(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    pretty: bool,
    creator: &str,
) -> Result<()> {
    let doc = parse_file(input)?;
    let records = Importer::new().with_creator(creator).normalize(&doc);

    let json = if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
    .map_err(itempress::Error::Parse)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!(
                "{} wrote {} records to {}",
                "✓".green(),
                records.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn plan(input: &std::path::Path, lower: usize, upper: usize) -> Result<()> {
    let doc = parse_file(input)?;
    let importer = Importer::new()
        .with_partition_options(PartitionOptions::new().with_bounds(lower, upper));
    let batches = importer.plan(&doc)?;

    println!(
        "{} items -> {} batches",
        doc.item_count(),
        batches.len().to_string().bold()
    );
    let mut offset = 0;
    for (index, batch) in batches.iter().enumerate() {
        let size = batch.byte_size()?;
        println!(
            "  batch {:>3}: records {:>5}..{:<5} {:>8} bytes",
            index + 1,
            offset,
            offset + batch.len(),
            size
        );
        offset += batch.len();
    }
    Ok(())
}

fn push(input: &std::path::Path, url: &str, creator: &str) -> Result<()> {
    let doc = parse_file(input)?;
    let importer = Importer::new().with_creator(creator);
    let batches = importer.plan(&doc)?;

    if batches.is_empty() {
        println!("{} nothing to submit", "✓".green());
        return Ok(());
    }
    log::info!("submitting {} batches to {}", batches.len(), url);

    let bar = ProgressBar::new(batches.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let submission = ProgressSubmission {
        inner: HttpSubmission::new(url),
        bar: bar.clone(),
    };
    let report = itempress::submit_all(&batches, &submission, &LogSink);
    bar.finish_and_clear();

    let records: usize = batches.iter().map(TransferBatch::len).sum();
    if report.is_complete() {
        println!(
            "{} submitted {} records in {} batches",
            "✓".green(),
            records,
            report.submitted
        );
        Ok(())
    } else {
        println!(
            "{} {} of {} batches failed ({} records submitted)",
            "✗".red(),
            report.failed,
            batches.len(),
            report.records
        );
        std::process::exit(1);
    }
}

/// Submits batches to the preset backend's bulk-import endpoint.
struct HttpSubmission {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSubmission {
    fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: format!("{}itemPreset/addExtern", ensure_trailing_slash(base_url)),
        }
    }
}

impl Submission for HttpSubmission {
    fn submit(&self, batch: &TransferBatch) -> Result<()> {
        let response = self
            .client
            .put(&self.endpoint)
            .json(batch)
            .send()
            .map_err(|e| itempress::Error::submission(batch.len(), e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(itempress::Error::submission(
                batch.len(),
                format!("{}", status),
            ))
        }
    }
}

/// Ticks a progress bar around an inner submission.
struct ProgressSubmission {
    inner: HttpSubmission,
    bar: ProgressBar,
}

impl Submission for ProgressSubmission {
    fn submit(&self, batch: &TransferBatch) -> Result<()> {
        let result = self.inner.submit(batch);
        self.bar.inc(1);
        result
    }
}

fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
