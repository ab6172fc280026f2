use crate::error::{NoOpenSession, QuakeLogError};
use crate::line_parsing::kill_fact::{parse_kill, KillFact};
use crate::line_parsing::line_kind::{classify_line, LineKind};
use crate::line_parsing::player_name::parse_player_name;
use crate::match_aggregation::match_record::MatchRecord;

use tracing::debug;

/// Folds classified log lines into one `MatchRecord` per `InitGame`.
///
/// Records are kept in the order their `InitGame` lines appear. `current` indexes
/// the record that receives kills and player names; it is `None` until the first
/// `InitGame`. `ShutdownGame` does not close a record: only the next `InitGame` does.
#[derive(Debug, Default)]
pub struct SessionAggregator {
    matches: Vec<MatchRecord>,
    current: Option<usize>,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new match and makes it the target of subsequent facts.
    pub fn open_session(&mut self) {
        self.matches.push(MatchRecord::new());
        self.current = Some(self.matches.len() - 1);
        debug!(game = self.matches.len(), "match opened");
    }

    /// Applies a kill to the open match.
    pub fn record_kill(&mut self, kill: &KillFact) -> Result<(), NoOpenSession> {
        self.current_match()?.add_kill(kill);
        Ok(())
    }

    /// Registers a player name in the open match.
    pub fn record_player(&mut self, name: &str) -> Result<(), NoOpenSession> {
        self.current_match()?.add_player(name);
        Ok(())
    }

    /// Classifies `line`, extracts its facts and folds them into the open match.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based position of the line, used in error reports.
    /// * `line` - The raw log line.
    ///
    /// # Returns
    ///
    /// The kind the line was classified as, or an error if a kill or userinfo line
    /// is malformed or arrives before any `InitGame`. A failed line leaves the state unchanged.
    pub fn apply_line(&mut self, line_number: usize, line: &str) -> Result<LineKind, QuakeLogError> {
        let kind = classify_line(line);

        let applied = match kind {
            LineKind::Irrelevant | LineKind::ShutdownGame => Ok(()),
            LineKind::InitGame => {
                self.open_session();
                Ok(())
            }
            LineKind::Kill => {
                let kill = parse_kill(line).map_err(|source| QuakeLogError::MalformedEventLine {
                    line_number,
                    kind,
                    source,
                    line: line.to_owned(),
                })?;
                self.record_kill(&kill)
            }
            LineKind::ClientUserinfoChanged => {
                let name =
                    parse_player_name(line).map_err(|source| QuakeLogError::MalformedEventLine {
                        line_number,
                        kind,
                        source,
                        line: line.to_owned(),
                    })?;
                self.record_player(&name)
            }
        };

        applied.map_err(|NoOpenSession| QuakeLogError::NoOpenSession { line_number, kind })?;
        Ok(kind)
    }

    /// The match currently receiving facts, if any.
    pub fn current(&self) -> Option<&MatchRecord> {
        self.current.and_then(|index| self.matches.get(index))
    }

    /// Matches opened so far, in log order.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Consumes the aggregator, returning every match in log order.
    pub fn finish(self) -> Vec<MatchRecord> {
        self.matches
    }

    fn current_match(&mut self) -> Result<&mut MatchRecord, NoOpenSession> {
        self.current
            .and_then(|index| self.matches.get_mut(index))
            .ok_or(NoOpenSession)
    }
}
