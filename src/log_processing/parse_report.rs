use crate::error::QuakeLogError;
use crate::match_aggregation::match_record::MatchRecord;

/// Result of parsing one log source.
///
/// # Fields
///
/// * `source_name` - Path or label of the parsed source.
/// * `matches` - One record per `InitGame`, in log order.
/// * `lines_read` - Number of lines consumed.
/// * `rejected_lines` - Line errors skipped under `ErrorPolicy::Collect`. Always empty under `FailFast`.
#[derive(Debug)]
pub struct ParseReport {
    pub source_name: String,
    pub matches: Vec<MatchRecord>,
    pub lines_read: usize,
    pub rejected_lines: Vec<QuakeLogError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.rejected_lines.is_empty()
    }
}
