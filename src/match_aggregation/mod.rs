pub mod match_record;
pub mod session_aggregator;
