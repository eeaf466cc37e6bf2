//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Per-file progress over segmentation workers
///
/// Shared by reference across rayon workers, so counters are atomic.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    sentences: AtomicUsize,
}

impl ProgressReporter {
    /// Create a reporter; `quiet` suppresses the bar entirely
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            sentences: AtomicUsize::new(0),
        }
    }

    /// Start a bar sized to the number of input files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a segmented file and its sentence count
    pub fn file_completed(&self, filename: &str, sentences: usize) {
        let total = self.sentences.fetch_add(sentences, Ordering::Relaxed) + sentences;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} ({total} sentences so far)"));
            pb.inc(1);
        }
    }

    /// Sentences reported so far
    pub fn sentence_count(&self) -> usize {
        self.sentences.load(Ordering::Relaxed)
    }

    /// Close the bar with the sentence total
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} sentences", self.sentence_count()));
        }
    }
}
