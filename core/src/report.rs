use std::path::{Path, PathBuf};

use crate::converter::Outcome;
use crate::error::ConvertError;

/// Result of handling a single file.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub result: Result<Outcome, ConvertError>,
}

impl FileResult {
    pub fn is_converted(&self) -> bool {
        matches!(self.result, Ok(Outcome::Converted { .. }))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.result, Ok(Outcome::Skipped))
    }

    pub fn error(&self) -> Option<&ConvertError> {
        self.result.as_ref().err()
    }
}

/// Aggregate report for all files seen during one run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
    /// The run started from a directory rather than a single file.
    pub directory: bool,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_directory() -> Self {
        Self {
            results: Vec::new(),
            directory: true,
        }
    }

    /// Print the progress line for `path` and keep the result.
    pub fn record(&mut self, path: &Path, result: Result<Outcome, ConvertError>) {
        print_progress(path, &result);
        self.push(path, result);
    }

    /// Keep the result without printing anything.
    pub fn push(&mut self, path: &Path, result: Result<Outcome, ConvertError>) {
        self.results.push(FileResult {
            path: path.to_path_buf(),
            result,
        });
    }

    pub fn converted_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_converted()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_skipped()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.error().is_some()).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&Path, &ConvertError)> {
        self.results
            .iter()
            .filter_map(|r| r.error().map(|e| (r.path.as_path(), e)))
    }

    /// Bytes read from converted PNGs and bytes written as JPEG.
    pub fn total_sizes(&self) -> (u64, u64) {
        self.results
            .iter()
            .filter_map(|r| match r.result {
                Ok(Outcome::Converted { input_size, output_size, .. }) => Some((input_size, output_size)),
                _ => None,
            })
            .fold((0, 0), |(i, o), (a, b)| (i + a, o + b))
    }

    pub fn print_summary(&self) {
        println!("\n--- Summary ---");
        println!(
            "Converted: {} | Skipped: {} | Errors: {}",
            self.converted_count(),
            self.skipped_count(),
            self.error_count()
        );

        if self.converted_count() > 0 {
            let (png, jpeg) = self.total_sizes();
            println!("Total: {} PNG → {} JPEG", format_size(png), format_size(jpeg));
        }
    }
}

/// One `==> "path" ...` line on stdout per handled file.
pub fn print_progress(path: &Path, result: &Result<Outcome, ConvertError>) {
    println!("{}", progress_line(path, result));
}

fn progress_line(path: &Path, result: &Result<Outcome, ConvertError>) -> String {
    match result {
        Ok(Outcome::Converted { output, .. }) => {
            format!("==> {:?} converted to JPEG ({})", path, output.display())
        }
        Ok(Outcome::Skipped) => format!("==> {:?} skip JPEG file", path),
        Err(e) => format!("==> {:?} {}", path, e),
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
