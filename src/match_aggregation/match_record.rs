use crate::line_parsing::kill_fact::KillFact;
use crate::line_parsing::means_of_death::MeansOfDeath;

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Summary of one game session.
///
/// # Fields
///
/// * `total_kills` - Every kill in the match, including world kills.
/// * `players` - Display names from userinfo lines, in first-seen order, without duplicates.
/// * `kills` - Credited score per player. World kills subtract one from the victim, so scores can be negative.
/// * `ranking` - Keys of `kills` by descending score. Equal scores keep the order in which players first scored.
/// * `kills_by_means` - Deaths per cause, with every known cause present.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub total_kills: u32,
    pub players: Vec<String>,
    pub kills: BTreeMap<String, i32>,
    pub ranking: Vec<String>,
    pub kills_by_means: BTreeMap<MeansOfDeath, u32>,
    #[serde(skip)]
    scoring_order: Vec<String>,
}

impl MatchRecord {
    /// Creates an empty record with every means of death counted at zero.
    pub fn new() -> Self {
        MatchRecord {
            total_kills: 0,
            players: Vec::new(),
            kills: BTreeMap::new(),
            ranking: Vec::new(),
            kills_by_means: MeansOfDeath::ALL.into_iter().map(|means| (means, 0)).collect(),
            scoring_order: Vec::new(),
        }
    }

    /// Folds one kill into the record and recomputes the ranking.
    ///
    /// The killer is credited with one point, unless the killer is `<world>`, in which
    /// case the victim loses one instead.
    pub fn add_kill(&mut self, kill: &KillFact) {
        self.total_kills += 1;
        *self.kills_by_means.entry(kill.means).or_insert(0) += 1;

        if kill.is_world_kill() {
            self.adjust_score(&kill.victim, -1);
        } else {
            self.adjust_score(&kill.killer, 1);
        }

        self.update_ranking();
    }

    /// Adds a player name unless it is already listed.
    pub fn add_player(&mut self, name: &str) {
        if !self.players.iter().any(|player| player == name) {
            self.players.push(name.to_owned());
        }
    }

    fn adjust_score(&mut self, player: &str, delta: i32) {
        match self.kills.get_mut(player) {
            Some(score) => *score += delta,
            None => {
                self.kills.insert(player.to_owned(), delta);
                self.scoring_order.push(player.to_owned());
            }
        }
    }

    /// Stable sort over first-scoring order, so ties never reshuffle between kills.
    fn update_ranking(&mut self) {
        let mut ranking = self.scoring_order.clone();
        ranking.sort_by_key(|player| Reverse(self.kills.get(player).copied().unwrap_or_default()));
        self.ranking = ranking;
    }
}

impl Default for MatchRecord {
    fn default() -> Self {
        Self::new()
    }
}
