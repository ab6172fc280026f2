use crate::error::ExtractionError;
use crate::line_parsing::means_of_death::MeansOfDeath;

use regex::Regex;
use std::sync::LazyLock;

/// Name the server uses as killer for environmental deaths.
pub const WORLD_KILLER: &str = "<world>";

static KILL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s*\d+:\d+\sKill:\s+\d+\s+\d+\s+\d+:\s([a-zA-Z\s<>]+)\skilled\s([a-zA-Z\s]+)\sby\s(MOD_\w*)",
    )
    .expect("kill line pattern is valid")
});

/// Represents one death reported by a `Kill:` line.
///
/// # Fields
///
/// * `killer` - Display name of the killer, or `<world>` for environmental deaths.
/// * `victim` - Display name of the player who died.
/// * `means` - What caused the death.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillFact {
    pub killer: String,
    pub victim: String,
    pub means: MeansOfDeath,
}

impl KillFact {
    /// Whether the death was caused by the map rather than by another player.
    pub fn is_world_kill(&self) -> bool {
        self.killer == WORLD_KILLER
    }
}

/// Extracts the killer, victim and means of death from a `Kill:` line.
///
/// Names may contain letters and spaces only, so `Is ga la mi do` is kept whole.
///
/// # Arguments
///
/// * `line` - A line already classified as `LineKind::Kill`.
///
/// # Returns
///
/// The parsed `KillFact`, `ExtractionError::KillShape` if the line does not follow the
/// `<killer> killed <victim> by MOD_*` grammar, or `ExtractionError::UnknownMeans` if
/// the cause is not a known means of death.
pub fn parse_kill(line: &str) -> Result<KillFact, ExtractionError> {
    let captures = KILL_LINE.captures(line).ok_or(ExtractionError::KillShape)?;
    let means = captures[3].parse::<MeansOfDeath>()?;

    Ok(KillFact {
        killer: captures[1].to_owned(),
        victim: captures[2].to_owned(),
        means,
    })
}
