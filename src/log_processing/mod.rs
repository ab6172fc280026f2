pub mod error_policy;
pub mod log_processor;
pub mod parse_report;
