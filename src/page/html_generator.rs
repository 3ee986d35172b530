use crate::{
    model::{
        leaderboard_data::LeaderboardData,
        structures::{bot_profile::BotProfile, leaderboard_row::LeaderboardRow, perf_type::PerfType}
    },
    page::{
        date_formatting::{format_age, format_date, format_date_time},
        flag_emoji, meta_tags
    }
};
use indexmap::IndexMap;
use minijinja::{context, AutoEscape, Environment, Error};
use serde::Serialize;

const SITE_TITLE: &str = "Lichess Bot Leaderboards";

const TEMPLATES: [(&str, &str); 3] = [
    ("main_frame.html", include_str!("../../templates/main_frame.html.jinja")),
    ("index.html", include_str!("../../templates/index.html.jinja")),
    ("leaderboard.html", include_str!("../../templates/leaderboard.html.jinja"))
];

/// A value in one of the delta columns and the class used to color it.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Delta {
    text: String,
    class: &'static str
}

impl Delta {
    fn for_rank(delta_rank: i32, is_new: bool) -> Delta {
        match delta_rank {
            d if d > 0 => Delta::new(format!("↑{}", d), "delta-pos"),
            d if d < 0 => Delta::new(format!("↓{}", d.abs()), "delta-neg"),
            _ if is_new => Delta::new("🆕".to_string(), ""),
            _ => Delta::new(String::new(), "")
        }
    }

    fn for_rating(delta_rating: i32) -> Delta {
        match delta_rating {
            d if d > 0 => Delta::new(format!("(+{})", d), "delta-pos"),
            d if d < 0 => Delta::new(format!("(-{})", d.abs()), "delta-neg"),
            _ => Delta::new(String::new(), "")
        }
    }

    fn new(text: String, class: &'static str) -> Delta {
        Delta { text, class }
    }
}

#[derive(Debug, Serialize)]
struct NavLink {
    link: String,
    name: &'static str,
    is_active: bool
}

/// Shared by the index and every leaderboard page.
#[derive(Debug, Serialize)]
struct MainFrame<'a> {
    title: &'a str,
    description: String,
    keywords: String,
    last_updated: String,
    nav_links: Vec<NavLink>
}

#[derive(Debug, Serialize)]
struct Leader<'a> {
    name: &'a str,
    rating: i32
}

/// One line of the index table
#[derive(Debug, Serialize)]
struct LeaderboardSummary<'a> {
    key: &'static str,
    name: &'static str,
    ranked_count: usize,
    leader: Option<Leader<'a>>
}

#[derive(Debug, Serialize)]
struct HtmlLeaderboardRow<'a> {
    rank: i32,
    delta_rank: Delta,
    flag: String,
    name: &'a str,
    rating: i32,
    delta_rating: Delta,
    games: i32,
    peak_rank: i32,
    peak_rating: i32,
    created_date: String,
    age: String
}

impl<'a> HtmlLeaderboardRow<'a> {
    fn new(row: &'a LeaderboardRow, profile: Option<&BotProfile>, current_time: i64) -> HtmlLeaderboardRow<'a> {
        let is_new = profile.is_some_and(|profile| profile.new);
        let (age, created_date) = match profile {
            Some(profile) if profile.created > 0 => (
                format_age(profile.created, current_time),
                format_date(profile.created)
            ),
            _ => (String::new(), String::new())
        };

        HtmlLeaderboardRow {
            rank: row.rank_info.rank,
            delta_rank: Delta::for_rank(row.rank_info.delta_rank, is_new),
            flag: profile
                .map(|profile| flag_emoji::from_string(&profile.flag))
                .unwrap_or_default(),
            name: &row.name,
            rating: row.perf.rating,
            delta_rating: Delta::for_rating(row.rank_info.delta_rating),
            games: row.perf.games,
            peak_rank: row.rank_info.peak_rank,
            peak_rating: row.rank_info.peak_rating,
            created_date,
            age
        }
    }
}

/// Renders the index page and one page per perf type.
///
/// Every value inserted into a template is HTML-escaped.
pub struct HtmlGenerator {
    current_time: i64,
    environment: Environment<'static>
}

impl HtmlGenerator {
    pub fn new(current_time: i64) -> Result<HtmlGenerator, Error> {
        let mut environment = Environment::new();
        environment.set_auto_escape_callback(|_| AutoEscape::Html);
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            environment.add_template(name, source)?;
        }

        Ok(HtmlGenerator {
            current_time,
            environment
        })
    }

    /// Pages keyed by name, "index" first and then each perf type's key.
    pub fn generate_leaderboard_html(&self, data: &LeaderboardData) -> Result<IndexMap<String, String>, Error> {
        let mut html_by_name = IndexMap::new();
        html_by_name.insert("index".to_string(), self.index_html(data)?);
        for perf_type in PerfType::all_except_unknown() {
            html_by_name.insert(perf_type.key().to_string(), self.leaderboard_html(data, perf_type)?);
        }

        Ok(html_by_name)
    }

    fn main_frame<'a>(&self, title: &'a str, active: Option<PerfType>) -> MainFrame<'a> {
        let home = NavLink {
            link: "index.html".to_string(),
            name: "Home",
            is_active: active.is_none()
        };
        let perf_types = PerfType::all_except_unknown().map(|perf_type| NavLink {
            link: format!("{}.html", perf_type.key()),
            name: perf_type.readable_name(),
            is_active: active == Some(perf_type)
        });

        MainFrame {
            title,
            description: meta_tags::description(active),
            keywords: meta_tags::keywords(active),
            last_updated: format_date_time(self.current_time),
            nav_links: std::iter::once(home).chain(perf_types).collect()
        }
    }

    fn index_html(&self, data: &LeaderboardData) -> Result<String, Error> {
        let summaries = PerfType::all_except_unknown()
            .map(|perf_type| LeaderboardSummary {
                key: perf_type.key(),
                name: perf_type.readable_name(),
                ranked_count: data.ranked_count(perf_type),
                leader: data.leader(perf_type).map(|row| Leader {
                    name: &row.name,
                    rating: row.perf.rating
                })
            })
            .collect::<Vec<_>>();

        self.environment.get_template("index.html")?.render(context! {
            main_frame => self.main_frame(SITE_TITLE, None),
            summaries => summaries
        })
    }

    fn leaderboard_html(&self, data: &LeaderboardData, perf_type: PerfType) -> Result<String, Error> {
        let leaderboard_rows = data
            .visible_rows(perf_type)
            .map(|row| HtmlLeaderboardRow::new(row, data.bot_profile(&row.name), self.current_time))
            .collect::<Vec<_>>();

        self.environment.get_template("leaderboard.html")?.render(context! {
            main_frame => self.main_frame(perf_type.readable_name(), Some(perf_type)),
            leaderboard_rows => leaderboard_rows
        })
    }
}
