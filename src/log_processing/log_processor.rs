use crate::error::QuakeLogError;
use crate::log_processing::error_policy::ErrorPolicy;
use crate::log_processing::parse_report::ParseReport;
use crate::match_aggregation::session_aggregator::SessionAggregator;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parses several log files in parallel, one independent run per file.
///
/// Lines within a file are always processed in order by a single worker.
///
/// # Arguments
///
/// * `paths` - The log files to parse.
/// * `num_threads` - The number of threads to use for parallel processing.
/// * `policy` - How malformed event lines are handled in each file.
///
/// # Returns
///
/// One `ParseReport` per path, in the order of `paths`, or the first error that stopped a file.
pub fn process_files_in_parallel(
    paths: &[PathBuf],
    num_threads: usize,
    policy: ErrorPolicy,
) -> Result<Vec<ParseReport>, QuakeLogError> {
    let thread_pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

    thread_pool.install(|| {
        paths
            .par_iter()
            .map(|path| parse_file(path, policy))
            .collect()
    })
}

/// Opens and parses a single log file.
///
/// # Errors
///
/// `QuakeLogError::InputUnavailable` if the file cannot be opened or read, or the first
/// line error when `policy` is `ErrorPolicy::FailFast`.
pub fn parse_file(path: &Path, policy: ErrorPolicy) -> Result<ParseReport, QuakeLogError> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|source| QuakeLogError::InputUnavailable {
        source_name: source_name.clone(),
        source,
    })?;

    parse_reader(BufReader::new(file), &source_name, policy)
}

/// Parses log lines from any buffered reader, one line at a time.
///
/// Lines that are not valid UTF-8 are decoded lossily.
///
/// # Arguments
///
/// * `reader` - The line source.
/// * `source_name` - Label used in the report, logs and errors.
/// * `policy` - How malformed event lines are handled.
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    source_name: &str,
    policy: ErrorPolicy,
) -> Result<ParseReport, QuakeLogError> {
    let mut aggregator = SessionAggregator::new();
    let mut rejected_lines = Vec::new();
    let mut buffer = Vec::new();
    let mut lines_read = 0;

    loop {
        buffer.clear();
        let bytes = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| QuakeLogError::InputUnavailable {
                source_name: source_name.to_owned(),
                source,
            })?;
        if bytes == 0 {
            break;
        }
        lines_read += 1;

        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(['\n', '\r']);

        match aggregator.apply_line(lines_read, line) {
            Ok(_) => {}
            Err(err) if policy == ErrorPolicy::Collect && err.is_line_error() => {
                warn!(source = source_name, "skipping line: {}", err);
                rejected_lines.push(err);
            }
            Err(err) => return Err(err),
        }
    }

    let matches = aggregator.finish();
    info!(
        source = source_name,
        lines = lines_read,
        matches = matches.len(),
        rejected = rejected_lines.len(),
        "log parsed"
    );
    for (index, record) in matches.iter().enumerate() {
        debug!(
            source = source_name,
            game = index + 1,
            total_kills = record.total_kills,
            players = record.players.len(),
            "match summary"
        );
    }

    Ok(ParseReport {
        source_name: source_name.to_owned(),
        matches,
        lines_read,
        rejected_lines,
    })
}
