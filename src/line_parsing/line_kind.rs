use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `<minutes>:<seconds> <Action>:` prefix shared by every game event line.
static ACTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\d+:\d+\s(\w+):").expect("action line pattern is valid"));

/// The kind of event a single server log line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Anything the parser does not act on (`ClientConnect`, `Exit`, separators...).
    Irrelevant,
    /// `InitGame:`, opens a new match.
    InitGame,
    /// `ShutdownGame:`, observed but does not close the match.
    ShutdownGame,
    /// `Kill:`
    Kill,
    /// `ClientUserinfoChanged:`, carries the player's display name.
    ClientUserinfoChanged,
}

impl LineKind {
    /// Returns the action word as it appears in the log.
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Irrelevant => "irrelevant",
            LineKind::InitGame => "InitGame",
            LineKind::ShutdownGame => "ShutdownGame",
            LineKind::Kill => "Kill",
            LineKind::ClientUserinfoChanged => "ClientUserinfoChanged",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies one raw log line by its action word.
///
/// Lines without a timestamped action prefix, and actions other than the four
/// the parser understands, are `LineKind::Irrelevant`. The payload after the
/// action is not inspected.
pub fn classify_line(line: &str) -> LineKind {
    let Some(captures) = ACTION_LINE.captures(line) else {
        return LineKind::Irrelevant;
    };

    match &captures[1] {
        "InitGame" => LineKind::InitGame,
        "ShutdownGame" => LineKind::ShutdownGame,
        "Kill" => LineKind::Kill,
        "ClientUserinfoChanged" => LineKind::ClientUserinfoChanged,
        _ => LineKind::Irrelevant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_actions() {
        let cases = [
            (
                r"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_hostname\Code Miner Server\g_gametype\0\mapname\q3dm17\gamename\baseq3\g_needpass\0",
                LineKind::InitGame,
            ),
            (" 20:37 ShutdownGame:", LineKind::ShutdownGame),
            (
                r" 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\xian/default\hmodel\xian/default\g_redteam\\g_blueteam\\c1\4\c2\5\hc\100\w\0\l\0\tt\0\tl\0",
                LineKind::ClientUserinfoChanged,
            ),
            (
                " 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT",
                LineKind::Kill,
            ),
            (
                " 22:18 Kill: 2 2 7: Is ga la mi do killed Isgalamido by MOD_ROCKET_SPLASH",
                LineKind::Kill,
            ),
        ];

        for (line, expected) in cases {
            assert_eq!(classify_line(line), expected, "line: {line}");
        }
    }

    #[test]
    fn other_actions_are_irrelevant() {
        let lines = [
            " 15:00 Exit: Timelimit hit.",
            " 20:34 ClientConnect: 2",
            " 20:37 ClientBegin: 2",
            "  1:47 ClientDisconnect: 4",
            "  3:02 Item: 2 weapon_rocketlauncher",
        ];

        for line in lines {
            assert_eq!(classify_line(line), LineKind::Irrelevant, "line: {line}");
        }
    }

    #[test]
    fn lines_without_action_prefix_are_irrelevant() {
        assert_eq!(classify_line(""), LineKind::Irrelevant);
        assert_eq!(
            classify_line("  0:00 ------------------------------------------------------------"),
            LineKind::Irrelevant
        );
        assert_eq!(classify_line("Kill: 1022 2 22: <world> killed Isgalamido"), LineKind::Irrelevant);
    }

    #[test]
    fn payload_does_not_affect_classification() {
        assert_eq!(classify_line(" 20:54 Kill: garbage"), LineKind::Kill);
        assert_eq!(classify_line(" 20:54 ClientUserinfoChanged:"), LineKind::ClientUserinfoChanged);
    }
}
