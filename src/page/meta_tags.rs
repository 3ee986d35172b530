use crate::model::structures::perf_type::PerfType;
use itertools::Itertools;

/// Content of the "description" meta tag. `None` is the index page.
pub fn description(perf_type: Option<PerfType>) -> String {
    match perf_type {
        Some(perf_type) => {
            let name = perf_type.readable_name();
            format!(
                "Automatically updated Lichess bot {name} leaderboard. Rankings for the top {name} bots on Lichess."
            )
        }
        None => "Automatically updated Lichess bot leaderboards. \
                 Rankings for the top Lichess bots for each time control and variant."
            .to_string()
    }
}

/// Content of the "keywords" meta tag. `None` is the index page.
pub fn keywords(perf_type: Option<PerfType>) -> String {
    match perf_type {
        Some(perf_type) => {
            let name = perf_type.readable_name();
            [
                format!("{name} bot leaderboard"),
                format!("best bot at {name}"),
                format!("top {name} bot"),
                format!("Lichess bot {name} rankings"),
                format!("Lichess {name} bot"),
                format!("Lichess bot {name} leaderboard")
            ]
            .join(", ")
        }
        None => ["Lichess bot leaderboard", "best bot on Lichess", "top Lichess bot", "Lichess bot rankings"]
            .into_iter()
            .map(str::to_string)
            .chain(PerfType::all_except_unknown().map(|perf_type| format!("{} leaderboard", perf_type.readable_name())))
            .join(", ")
    }
}
