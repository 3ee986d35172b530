use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The time controls and variants (a.k.a. game modes) a bot can be rated in.
/// Every variant except `Unknown` has its own leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum PerfType {
    Unknown,
    // Regular time controls
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    // Variants
    Chess960,
    Antichess,
    ThreeCheck,
    Atomic,
    KingOfTheHill,
    Crazyhouse,
    Horde,
    RacingKings
}

impl PerfType {
    /// All perf types which have a leaderboard, in display order.
    pub fn all_except_unknown() -> impl Iterator<Item = PerfType> {
        PerfType::iter().filter(|perf_type| *perf_type != PerfType::Unknown)
    }

    /// Maps the key used by the upstream feed. Unrecognized keys map to `Unknown`.
    pub fn from_key(key: &str) -> PerfType {
        match key {
            "bullet" => PerfType::Bullet,
            "blitz" => PerfType::Blitz,
            "rapid" => PerfType::Rapid,
            "classical" => PerfType::Classical,
            "correspondence" => PerfType::Correspondence,
            "chess960" => PerfType::Chess960,
            "antichess" => PerfType::Antichess,
            "threeCheck" => PerfType::ThreeCheck,
            "atomic" => PerfType::Atomic,
            "kingOfTheHill" => PerfType::KingOfTheHill,
            "crazyhouse" => PerfType::Crazyhouse,
            "horde" => PerfType::Horde,
            "racingKings" => PerfType::RacingKings,
            _ => PerfType::Unknown
        }
    }

    /// The feed key, also used for file names.
    pub fn key(&self) -> &'static str {
        match self {
            PerfType::Unknown => "unknown",
            PerfType::Bullet => "bullet",
            PerfType::Blitz => "blitz",
            PerfType::Rapid => "rapid",
            PerfType::Classical => "classical",
            PerfType::Correspondence => "correspondence",
            PerfType::Chess960 => "chess960",
            PerfType::Antichess => "antichess",
            PerfType::ThreeCheck => "threeCheck",
            PerfType::Atomic => "atomic",
            PerfType::KingOfTheHill => "kingOfTheHill",
            PerfType::Crazyhouse => "crazyhouse",
            PerfType::Horde => "horde",
            PerfType::RacingKings => "racingKings"
        }
    }

    pub fn readable_name(&self) -> &'static str {
        match self {
            PerfType::Unknown => "Unknown",
            PerfType::Bullet => "Bullet",
            PerfType::Blitz => "Blitz",
            PerfType::Rapid => "Rapid",
            PerfType::Classical => "Classical",
            PerfType::Correspondence => "Correspondence",
            PerfType::Chess960 => "Chess960",
            PerfType::Antichess => "Antichess",
            PerfType::ThreeCheck => "Three Check",
            PerfType::Atomic => "Atomic",
            PerfType::KingOfTheHill => "King of the Hill",
            PerfType::Crazyhouse => "Crazyhouse",
            PerfType::Horde => "Horde",
            PerfType::RacingKings => "Racing Kings"
        }
    }
}

impl fmt::Display for PerfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
