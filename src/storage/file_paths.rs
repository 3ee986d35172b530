use crate::model::structures::perf_type::PerfType;

pub const DATA_DIR: &str = "leaderboard_data";
pub const HTML_DIR: &str = "leaderboard_html";

pub fn bot_profiles_path() -> String {
    format!("{DATA_DIR}/bot_profiles.json")
}

pub fn data_path(perf_type: PerfType) -> String {
    format!("{DATA_DIR}/{}.json", perf_type.key())
}

pub fn generation_number_path() -> String {
    format!("{DATA_DIR}/generation_number.txt")
}

pub fn html_path(name: &str) -> String {
    format!("{HTML_DIR}/{name}.html")
}
