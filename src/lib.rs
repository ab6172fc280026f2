//! Per-match kill summaries from Quake 3 Arena server logs.
//!
//! A log is scanned once, line by line. Each line is classified by its action word,
//! `Kill:` and `ClientUserinfoChanged:` lines are parsed into facts, and the facts are
//! folded into the `MatchRecord` opened by the latest `InitGame:` line.
//!
//! ```no_run
//! use quake_log_parser::{parse_file, ErrorPolicy};
//! use std::path::Path;
//!
//! let report = parse_file(Path::new("input/qgames.log"), ErrorPolicy::FailFast)?;
//! for record in &report.matches {
//!     println!("{} kills, leader: {:?}", record.total_kills, record.ranking.first());
//! }
//! # Ok::<(), quake_log_parser::QuakeLogError>(())
//! ```

pub mod error;
pub mod file_creation;
pub mod line_parsing;
pub mod log_processing;
pub mod match_aggregation;

pub use error::{ExtractionError, QuakeLogError};
pub use file_creation::file_creator::{create_json_file, generate_json, write_json};
pub use line_parsing::kill_fact::{parse_kill, KillFact};
pub use line_parsing::line_kind::{classify_line, LineKind};
pub use line_parsing::means_of_death::MeansOfDeath;
pub use line_parsing::player_name::parse_player_name;
pub use log_processing::error_policy::ErrorPolicy;
pub use log_processing::log_processor::{parse_file, parse_reader, process_files_in_parallel};
pub use log_processing::parse_report::ParseReport;
pub use match_aggregation::match_record::MatchRecord;
pub use match_aggregation::session_aggregator::SessionAggregator;
