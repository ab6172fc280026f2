use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cause a Quake 3 server attributes a kill to.
///
/// Serialized as its `MOD_*` identifier, e.g. `MeansOfDeath::RocketSplash` is `"MOD_ROCKET_SPLASH"`.
/// Deserializing an identifier outside this set fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MeansOfDeath {
    Unknown,
    Shotgun,
    Gauntlet,
    Machinegun,
    Grenade,
    GrenadeSplash,
    Rocket,
    RocketSplash,
    Plasma,
    PlasmaSplash,
    Railgun,
    Lightning,
    Bfg,
    BfgSplash,
    Water,
    Slime,
    Lava,
    Crush,
    Telefrag,
    Falling,
    Suicide,
    TargetLaser,
    TriggerHurt,
    Nail,
    Chaingun,
    ProximityMine,
    Kamikaze,
    Juiced,
    Grapple,
}

impl MeansOfDeath {
    /// Every known cause, in the order the game declares them.
    pub const ALL: [MeansOfDeath; 29] = [
        MeansOfDeath::Unknown,
        MeansOfDeath::Shotgun,
        MeansOfDeath::Gauntlet,
        MeansOfDeath::Machinegun,
        MeansOfDeath::Grenade,
        MeansOfDeath::GrenadeSplash,
        MeansOfDeath::Rocket,
        MeansOfDeath::RocketSplash,
        MeansOfDeath::Plasma,
        MeansOfDeath::PlasmaSplash,
        MeansOfDeath::Railgun,
        MeansOfDeath::Lightning,
        MeansOfDeath::Bfg,
        MeansOfDeath::BfgSplash,
        MeansOfDeath::Water,
        MeansOfDeath::Slime,
        MeansOfDeath::Lava,
        MeansOfDeath::Crush,
        MeansOfDeath::Telefrag,
        MeansOfDeath::Falling,
        MeansOfDeath::Suicide,
        MeansOfDeath::TargetLaser,
        MeansOfDeath::TriggerHurt,
        MeansOfDeath::Nail,
        MeansOfDeath::Chaingun,
        MeansOfDeath::ProximityMine,
        MeansOfDeath::Kamikaze,
        MeansOfDeath::Juiced,
        MeansOfDeath::Grapple,
    ];

    /// Returns the identifier used in server logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MeansOfDeath::Unknown => "MOD_UNKNOWN",
            MeansOfDeath::Shotgun => "MOD_SHOTGUN",
            MeansOfDeath::Gauntlet => "MOD_GAUNTLET",
            MeansOfDeath::Machinegun => "MOD_MACHINEGUN",
            MeansOfDeath::Grenade => "MOD_GRENADE",
            MeansOfDeath::GrenadeSplash => "MOD_GRENADE_SPLASH",
            MeansOfDeath::Rocket => "MOD_ROCKET",
            MeansOfDeath::RocketSplash => "MOD_ROCKET_SPLASH",
            MeansOfDeath::Plasma => "MOD_PLASMA",
            MeansOfDeath::PlasmaSplash => "MOD_PLASMA_SPLASH",
            MeansOfDeath::Railgun => "MOD_RAILGUN",
            MeansOfDeath::Lightning => "MOD_LIGHTNING",
            MeansOfDeath::Bfg => "MOD_BFG",
            MeansOfDeath::BfgSplash => "MOD_BFG_SPLASH",
            MeansOfDeath::Water => "MOD_WATER",
            MeansOfDeath::Slime => "MOD_SLIME",
            MeansOfDeath::Lava => "MOD_LAVA",
            MeansOfDeath::Crush => "MOD_CRUSH",
            MeansOfDeath::Telefrag => "MOD_TELEFRAG",
            MeansOfDeath::Falling => "MOD_FALLING",
            MeansOfDeath::Suicide => "MOD_SUICIDE",
            MeansOfDeath::TargetLaser => "MOD_TARGET_LASER",
            MeansOfDeath::TriggerHurt => "MOD_TRIGGER_HURT",
            MeansOfDeath::Nail => "MOD_NAIL",
            MeansOfDeath::Chaingun => "MOD_CHAINGUN",
            MeansOfDeath::ProximityMine => "MOD_PROXIMITY_MINE",
            MeansOfDeath::Kamikaze => "MOD_KAMIKAZE",
            MeansOfDeath::Juiced => "MOD_JUICED",
            MeansOfDeath::Grapple => "MOD_GRAPPLE",
        }
    }
}

/// Error returned when a string is not one of the known `MOD_*` identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown means of death: {0}")]
pub struct UnknownMeansOfDeath(pub String);

impl FromStr for MeansOfDeath {
    type Err = UnknownMeansOfDeath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeansOfDeath::ALL
            .into_iter()
            .find(|means| means.as_str() == s)
            .ok_or_else(|| UnknownMeansOfDeath(s.to_owned()))
    }
}

impl TryFrom<String> for MeansOfDeath {
    type Error = UnknownMeansOfDeath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MeansOfDeath> for String {
    fn from(means: MeansOfDeath) -> Self {
        means.as_str().to_owned()
    }
}

impl fmt::Display for MeansOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
