use crate::error::ExtractionError;

use regex::Regex;
use std::sync::LazyLock;

static USERINFO_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\d+:\d+\sClientUserinfoChanged:\s+\d+\s+n\\([a-zA-Z\s]+)")
        .expect("userinfo line pattern is valid")
});

/// Extracts the player's display name from a `ClientUserinfoChanged:` line.
///
/// Only letters and spaces are captured: a name such as `Player1` comes back as `Player`.
pub fn parse_player_name(line: &str) -> Result<String, ExtractionError> {
    USERINFO_LINE
        .captures(line)
        .map(|captures| captures[1].to_owned())
        .ok_or(ExtractionError::MissingPlayerName)
}
