//! Process command implementation

use crate::abbreviation_source::AbbreviationSource;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, SegmentedDocument};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use svtok_core::Segmenter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one output file per input into this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format [default: tokens]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// External abbreviation table (TOML)
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_abbreviations")]
    pub abbreviations: Option<PathBuf>,

    /// Disable abbreviation folding
    #[arg(long)]
    pub no_abbreviations: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let format = self.resolve_format(&config)?;
        let threads = self.resolve_threads(&config)?;

        let source = AbbreviationSource::select(
            self.no_abbreviations,
            self.abbreviations.as_ref(),
            &config.processing,
        );
        log::info!("Abbreviations: {}", source.display_name());
        let segmenter = Segmenter::new(Arc::new(source.load()?));

        let files = resolve_patterns(&self.input)?;
        let targets = match &self.output_dir {
            Some(dir) => Some(output_targets(&files, dir, format)?),
            None => None,
        };
        log::info!(
            "Processing {} file(s) with {} thread(s)",
            files.len(),
            threads.unwrap_or_else(num_cpus::get)
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = match threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("Failed to build worker thread pool")?
                .install(|| segment_files(&files, &segmenter, &progress))?,
            None => segment_files(&files, &segmenter, &progress)?,
        };
        progress.finish();

        self.write_output(&documents, targets.as_deref(), format, config.output.pretty_json)?;

        log::info!("Wrote {} sentence(s)", progress.sentence_count());
        Ok(())
    }

    /// Command-line format, then the config file's default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    /// `None` leaves the global rayon pool in charge
    fn resolve_threads(&self, config: &CliConfig) -> Result<Option<usize>> {
        match self.threads {
            Some(0) => {
                Err(CliError::ConfigError("threads must be greater than 0".to_string()).into())
            }
            Some(n) => Ok(Some(n)),
            None if config.performance.worker_threads > 0 => {
                Ok(Some(config.performance.worker_threads))
            }
            None => Ok(None),
        }
    }

    /// `targets` holds one output file per document when `--output-dir` is set
    fn write_output(
        &self,
        documents: &[SegmentedDocument],
        targets: Option<&[PathBuf]>,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<()> {
        if let (Some(dir), Some(targets)) = (&self.output_dir, targets) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

            for (target, document) in targets.iter().zip(documents) {
                let mut formatter = format.formatter(create_file(target)?, pretty_json);
                document.write_to(formatter.as_mut())?;
                formatter.finish()?;
                log::debug!("Wrote {}", target.display());
            }
            return Ok(());
        }

        let mut formatter = match &self.output {
            Some(path) => format.formatter(create_file(path)?, pretty_json),
            None => format.formatter(io::stdout(), pretty_json),
        };
        for document in documents {
            document.write_to(formatter.as_mut())?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Output file for each input inside `dir`
///
/// Fails before anything is written when two inputs would share a target.
fn output_targets(files: &[PathBuf], dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &PathBuf> = HashMap::with_capacity(files.len());
    let mut targets = Vec::with_capacity(files.len());

    for path in files {
        let target = FileReader::output_path(path, dir, format.extension())?;
        if let Some(first) = claimed.insert(target.clone(), path) {
            return Err(CliError::OutputConflict {
                target,
                first: first.clone(),
                second: path.clone(),
            }
            .into());
        }
        targets.push(target);
    }

    Ok(targets)
}

/// Segment every file, keeping input order in the result
fn segment_files(
    files: &[PathBuf],
    segmenter: &Segmenter,
    progress: &ProgressReporter,
) -> Result<Vec<SegmentedDocument>> {
    files
        .par_iter()
        .map(|path| {
            let document = segment_file(path, segmenter)?;
            progress.file_completed(&document.name, document.sentences.len());
            Ok(document)
        })
        .collect()
}

fn segment_file(path: &Path, segmenter: &Segmenter) -> Result<SegmentedDocument> {
    let text = FileReader::read_text(path)?;
    let sentences: Vec<Vec<String>> = segmenter
        .sentences(&text)
        .map(|sentence| sentence.into_iter().map(str::to_owned).collect())
        .collect();

    let document = SegmentedDocument {
        name: path.display().to_string(),
        sentences,
    };
    log::debug!(
        "{}: {} sentence(s), {} token(s)",
        document.name,
        document.sentences.len(),
        document.token_count()
    );
    Ok(document)
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}
