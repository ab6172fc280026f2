use crate::log_processing::parse_report::ParseReport;
use crate::match_aggregation::match_record::MatchRecord;
use serde::Serialize;

/// The games parsed from one source, labelled with that source.
///
/// # Fields
///
/// * `source` - Path of the parsed log.
/// * `games` - Its matches, in log order.
#[derive(Serialize, Debug)]
pub struct SourceGames<'a> {
    pub(crate) source: &'a str,
    pub(crate) games: &'a [MatchRecord],
}

/// Shape of the JSON document written for a run.
///
/// A single source is written as a bare array of matches. Several sources are
/// written as an array of `SourceGames`.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum JsonFormat<'a> {
    SingleSource(&'a [MatchRecord]),
    MultipleSources(Vec<SourceGames<'a>>),
}

impl<'a> JsonFormat<'a> {
    pub fn from_reports(reports: &'a [ParseReport]) -> Self {
        match reports {
            [report] => JsonFormat::SingleSource(&report.matches),
            _ => JsonFormat::MultipleSources(
                reports
                    .iter()
                    .map(|report| SourceGames {
                        source: &report.source_name,
                        games: &report.matches,
                    })
                    .collect(),
            ),
        }
    }
}
