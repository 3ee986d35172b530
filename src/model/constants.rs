// Durations (seconds)
pub const ONE_MINUTE: i64 = 60;
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;
pub const ONE_DAY: i64 = 24 * ONE_HOUR;
/// How recently a bot must have been seen, and have played, to receive a visible rank.
pub const TWO_WEEKS: i64 = 14 * ONE_DAY;
/// Rank given to rows which are not shown on the leaderboard
pub const UNRANKED: i32 = 0;
