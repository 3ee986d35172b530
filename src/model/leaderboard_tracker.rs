use crate::model::{
    constants::UNRANKED,
    leaderboard_update::LeaderboardUpdate,
    structures::{bot_profile::BotProfile, leaderboard_perf::BotPerf, leaderboard_row::LeaderboardRow}
};
use indexmap::IndexMap;
use itertools::Itertools;
use std::{cmp::Reverse, collections::HashMap};
use tracing::warn;

/// Combines the known profiles with the profiles of the bots currently online.
///
/// Profiles are never dropped. A bot found in both is marked online and not new.
pub fn merge_bot_profiles(
    previous: HashMap<String, BotProfile>,
    current: HashMap<String, BotProfile>
) -> HashMap<String, BotProfile> {
    let mut merged = previous;
    for (name, profile) in current {
        let profile = if merged.contains_key(&name) {
            profile.merged_copy()
        } else {
            profile
        };
        merged.insert(name, profile);
    }

    merged
}

/// Builds one perf type's leaderboard from the previous generation's rows and the current feed.
pub struct LeaderboardTracker<'a> {
    // Merged profiles, current for any bot which is online
    bot_profiles: &'a HashMap<String, BotProfile>,
    current_time: i64
}

impl<'a> LeaderboardTracker<'a> {
    pub fn new(bot_profiles: &'a HashMap<String, BotProfile>, current_time: i64) -> LeaderboardTracker<'a> {
        LeaderboardTracker {
            bot_profiles,
            current_time
        }
    }

    fn has_tos_violation(&self, name: &str) -> bool {
        self.bot_profiles
            .get(name)
            .is_some_and(|profile| profile.tos_violation)
    }

    /// Pairs previous rows with current perfs by name.
    ///
    /// Previous rows come first in their stored order, followed by bots new to this
    /// leaderboard in feed order. Bots with a terms of service violation are left out.
    pub fn create_updates(&self, previous_rows: &[LeaderboardRow], current_bot_perfs: &[BotPerf]) -> Vec<LeaderboardUpdate> {
        let mut previous_row_by_name: IndexMap<&str, &LeaderboardRow> = IndexMap::new();
        for row in previous_rows {
            previous_row_by_name.entry(row.name.as_str()).or_insert(row);
        }

        let mut current_bot_perf_by_name: IndexMap<&str, &BotPerf> = IndexMap::new();
        for bot_perf in current_bot_perfs {
            current_bot_perf_by_name
                .entry(bot_perf.name.as_str())
                .or_insert(bot_perf);
        }

        let new_names = current_bot_perf_by_name
            .keys()
            .filter(|name| !previous_row_by_name.contains_key(*name));

        previous_row_by_name
            .keys()
            .chain(new_names)
            .filter(|name| !self.has_tos_violation(name))
            .map(|name| {
                LeaderboardUpdate::create(
                    previous_row_by_name.get(name).map(|row| (*row).clone()),
                    current_bot_perf_by_name.get(name).map(|bot_perf| (*bot_perf).clone())
                )
            })
            .collect()
    }

    fn is_active(&self, name: &str) -> bool {
        match self.bot_profiles.get(name) {
            Some(profile) => profile.is_active(self.current_time),
            None => {
                warn!("No profile found for {}, leaving it unranked", name);
                false
            }
        }
    }

    /// Sorts the updates and assigns standard competition ("1224") ranks.
    ///
    /// Ties on rating are broken by rating deviation, then account age, then name, so the
    /// output is fully deterministic. Ineligible bots are kept with rank 0 and do not use up a rank.
    pub fn create_ranked_rows(&self, updates: Vec<LeaderboardUpdate>) -> Vec<LeaderboardRow> {
        let sorted_updates = updates.into_iter().sorted_by_cached_key(|update| {
            let created = self
                .bot_profiles
                .get(update.name())
                .map_or(0, |profile| profile.created);

            (
                Reverse(update.rating()),
                update.rd(),
                created,
                update.name().to_lowercase(),
                update.name().to_string()
            )
        });

        let mut rank = 0;
        let mut same_rank_count = 0;
        let mut previous_rating: Option<i32> = None;
        let mut ranked_rows = Vec::with_capacity(sorted_updates.len());

        for update in sorted_updates {
            let eligible = self.is_active(update.name()) && update.is_eligible(self.current_time);

            let row_rank = if !eligible {
                UNRANKED
            } else if previous_rating == Some(update.rating()) {
                same_rank_count += 1;
                rank
            } else {
                rank += same_rank_count + 1;
                same_rank_count = 0;
                previous_rating = Some(update.rating());
                rank
            };

            ranked_rows.push(update.into_leaderboard_row(row_rank, self.current_time));
        }

        ranked_rows
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            constants::{ONE_DAY, TWO_WEEKS},
            leaderboard_tracker::{merge_bot_profiles, LeaderboardTracker},
            leaderboard_update::LeaderboardUpdate,
            structures::{bot_profile::BotProfile, leaderboard_perf::BotPerf, leaderboard_row::LeaderboardRow}
        },
        utils::test_utils::*
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    const NOW: i64 = DATE_2025_04_01 + ONE_DAY;

    fn active_profiles(names: &[&str]) -> HashMap<String, BotProfile> {
        profiles_by_name(
            names
                .iter()
                .map(|name| generate_bot_profile(name, DATE_2021_04_01, NOW))
                .collect()
        )
    }

    fn rank_current(profiles: &HashMap<String, BotProfile>, bot_perfs: &[BotPerf]) -> Vec<(String, i32)> {
        let tracker = LeaderboardTracker::new(profiles, NOW);
        let updates = tracker.create_updates(&[], bot_perfs);

        tracker
            .create_ranked_rows(updates)
            .into_iter()
            .map(|row| (row.name, row.rank_info.rank))
            .collect()
    }

    fn ranked(pairs: &[(&str, i32)]) -> Vec<(String, i32)> {
        pairs
            .iter()
            .map(|(name, rank)| (name.to_string(), *rank))
            .collect()
    }

    #[test]
    fn test_merge_bot_profiles() {
        let offline = generate_bot_profile("Bot-1", DATE_2021_04_01, DATE_2024_04_01);
        let known = generate_bot_profile("Bot-2", DATE_2021_04_01, DATE_2024_04_01);
        let known_now = BotProfile {
            new: true,
            online: true,
            patron: true,
            ..generate_bot_profile("Bot-2", DATE_2021_04_01, DATE_2025_04_01)
        };
        let brand_new = BotProfile {
            new: true,
            online: true,
            ..generate_bot_profile("Bot-3", DATE_2025_04_01, DATE_2025_04_01)
        };

        let merged = merge_bot_profiles(
            profiles_by_name(vec![offline.clone(), known]),
            profiles_by_name(vec![known_now, brand_new.clone()])
        );

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["Bot-1"], offline);
        assert!(!merged["Bot-1"].online);
        assert_eq!(merged["Bot-3"], brand_new);

        let bot_2 = &merged["Bot-2"];
        assert!(!bot_2.new);
        assert!(bot_2.online);
        assert!(bot_2.patron);
        assert_eq!(bot_2.last_seen, DATE_2025_04_01);
    }

    #[test]
    fn test_merge_with_nothing_previous() {
        let current = profiles_by_name(vec![BotProfile {
            new: true,
            online: true,
            ..generate_bot_profile("Bot-1", DATE_2021_04_01, DATE_2025_04_01)
        }]);

        let merged = merge_bot_profiles(HashMap::new(), current.clone());

        assert_eq!(merged, current);
    }

    #[test]
    fn test_create_updates_order_and_variants() {
        let profiles = active_profiles(&["Bot-1", "Bot-2", "Bot-3", "Bot-4"]);
        let tracker = LeaderboardTracker::new(&profiles, NOW);
        let previous_rows = vec![
            generate_leaderboard_row("Bot-2", 2500, 50, 100, 1),
            generate_leaderboard_row("Bot-1", 2400, 50, 100, 2)
        ];
        let current = vec![
            generate_bot_perf("Bot-4", 2000, 50, 10),
            generate_bot_perf("Bot-1", 2450, 50, 110),
            generate_bot_perf("Bot-3", 2100, 50, 10)
        ];

        let updates = tracker.create_updates(&previous_rows, &current);

        let names = updates.iter().map(|update| update.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Bot-2", "Bot-1", "Bot-4", "Bot-3"]);
        assert!(matches!(updates[0], LeaderboardUpdate::PreviousRowOnly(_)));
        assert!(matches!(updates[1], LeaderboardUpdate::Full { .. }));
        assert!(matches!(updates[2], LeaderboardUpdate::CurrentBotPerfOnly(_)));
        assert!(matches!(updates[3], LeaderboardUpdate::CurrentBotPerfOnly(_)));
    }

    #[test]
    fn test_create_updates_excludes_tos_violations() {
        let mut profiles = active_profiles(&["Bot-1", "Bot-2", "Bot-3"]);
        for name in ["Bot-1", "Bot-3"] {
            profiles.get_mut(name).unwrap().tos_violation = true;
        }
        let tracker = LeaderboardTracker::new(&profiles, NOW);

        let updates = tracker.create_updates(
            &[generate_leaderboard_row("Bot-1", 2500, 50, 100, 1)],
            &[generate_bot_perf("Bot-2", 2000, 50, 10), generate_bot_perf("Bot-3", 2600, 50, 10)]
        );

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].name(), "Bot-2");
    }

    #[test]
    fn test_create_updates_empty() {
        let profiles = HashMap::new();
        let tracker = LeaderboardTracker::new(&profiles, NOW);

        assert!(tracker.create_updates(&[], &[]).is_empty());
        assert!(tracker.create_ranked_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_ranking_skips_after_tie() {
        let profiles = active_profiles(&["A", "B", "C", "D"]);

        let ranks = rank_current(
            &profiles,
            &[
                generate_bot_perf("C", 2900, 50, 10),
                generate_bot_perf("D", 2800, 50, 10),
                generate_bot_perf("A", 3000, 50, 10),
                generate_bot_perf("B", 2900, 50, 10)
            ]
        );

        assert_eq!(ranks, ranked(&[("A", 1), ("B", 2), ("C", 2), ("D", 4)]));
    }

    #[test]
    fn test_ranking_three_way_tie() {
        let profiles = active_profiles(&["A", "B", "C", "D"]);

        let ranks = rank_current(
            &profiles,
            &[
                generate_bot_perf("A", 2000, 50, 10),
                generate_bot_perf("B", 2000, 50, 10),
                generate_bot_perf("C", 2000, 50, 10),
                generate_bot_perf("D", 1900, 50, 10)
            ]
        );

        assert_eq!(ranks, ranked(&[("A", 1), ("B", 1), ("C", 1), ("D", 4)]));
    }

    #[test]
    fn test_tie_break_order() {
        let mut profiles = active_profiles(&["alpha", "Beta", "gamma", "Old", "Young"]);
        profiles.get_mut("Old").unwrap().created = DATE_2021_04_01 - ONE_DAY;

        let ranks = rank_current(
            &profiles,
            &[
                generate_bot_perf("gamma", 2000, 50, 10),
                generate_bot_perf("Beta", 2000, 50, 10),
                generate_bot_perf("Young", 2000, 40, 10),
                generate_bot_perf("alpha", 2000, 50, 10),
                generate_bot_perf("Old", 2000, 40, 10)
            ]
        );

        // Lower rd first, then older accounts, then case-insensitive name
        let names = ranks.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Old", "Young", "alpha", "Beta", "gamma"]);
        assert!(ranks.iter().all(|(_, rank)| *rank == 1));
    }

    #[test]
    fn test_ineligible_rows_are_unranked_and_use_no_rank() {
        let mut profiles = active_profiles(&["A", "B", "C", "D"]);
        // Not seen recently
        profiles.get_mut("B").unwrap().last_seen = NOW - TWO_WEEKS - 1;
        let tracker = LeaderboardTracker::new(&profiles, NOW);
        // Has not played recently
        let mut stale_row = generate_leaderboard_row("C", 2800, 50, 100, 3);
        stale_row.rank_info.last_played = NOW - TWO_WEEKS - 1;

        let updates = tracker.create_updates(
            &[stale_row],
            &[
                generate_bot_perf("A", 3000, 50, 10),
                generate_bot_perf("B", 2900, 50, 10),
                generate_bot_perf("D", 2700, 50, 10)
            ]
        );
        let rows = tracker.create_ranked_rows(updates);

        let ranks = rows
            .iter()
            .map(|row| (row.name.clone(), row.rank_info.rank))
            .collect::<Vec<_>>();
        assert_eq!(ranks, ranked(&[("A", 1), ("B", 0), ("C", 0), ("D", 2)]));
        assert_eq!(rows[2].rank_info.peak_rank, 3);
    }

    #[test]
    fn test_ineligible_row_does_not_break_a_tie() {
        let mut profiles = active_profiles(&["A", "B", "C"]);
        profiles.get_mut("B").unwrap().last_seen = NOW - TWO_WEEKS - 1;

        let ranks = rank_current(
            &profiles,
            &[
                generate_bot_perf("A", 2000, 40, 10),
                generate_bot_perf("B", 2000, 45, 10),
                generate_bot_perf("C", 2000, 50, 10)
            ]
        );

        assert_eq!(ranks, ranked(&[("A", 1), ("B", 0), ("C", 1)]));
    }

    #[test]
    fn test_provisional_previous_row_is_unranked() {
        let profiles = active_profiles(&["A"]);
        let tracker = LeaderboardTracker::new(&profiles, NOW);
        let mut row = generate_leaderboard_row("A", 2000, 50, 100, 1);
        row.perf.prov = true;
        row.rank_info.last_played = NOW;

        let rows = tracker.create_ranked_rows(tracker.create_updates(&[row], &[]));

        assert_eq!(rows[0].rank_info.rank, 0);
    }

    #[test]
    fn test_missing_profile_is_unranked() {
        let profiles = active_profiles(&["A"]);

        let ranks = rank_current(
            &profiles,
            &[generate_bot_perf("A", 2000, 50, 10), generate_bot_perf("Ghost", 2100, 50, 10)]
        );

        assert_eq!(ranks, ranked(&[("Ghost", 0), ("A", 1)]));
    }

    #[test]
    fn test_deltas_follow_rank_movement() {
        let profiles = active_profiles(&["A", "B"]);
        let tracker = LeaderboardTracker::new(&profiles, NOW);

        let updates = tracker.create_updates(
            &[
                generate_leaderboard_row("A", 2500, 50, 100, 1),
                generate_leaderboard_row("B", 2400, 50, 100, 2)
            ],
            &[generate_bot_perf("A", 2450, 50, 110), generate_bot_perf("B", 2550, 50, 120)]
        );
        let rows = tracker.create_ranked_rows(updates);

        assert_eq!(rows[0].name, "B");
        assert_eq!(rows[0].rank_info.rank, 1);
        assert_eq!(rows[0].rank_info.delta_rank, 1);
        assert_eq!(rows[0].rank_info.delta_rating, 150);
        assert_eq!(rows[0].rank_info.delta_games, 20);
        assert_eq!(rows[1].name, "A");
        assert_eq!(rows[1].rank_info.delta_rank, -1);
        assert_eq!(rows[1].rank_info.delta_rating, -50);
        assert_eq!(rows[1].rank_info.peak_rank, 1);
    }

    #[test]
    fn test_previous_row_only_falls_behind() {
        let profiles = active_profiles(&["A", "B", "C", "D", "E"]);
        let tracker = LeaderboardTracker::new(&profiles, NOW);
        let mut previous = generate_leaderboard_row("E", 2900, 50, 100, 2);
        previous.rank_info.peak_rating = 3000;

        let updates = tracker.create_updates(
            &[previous],
            &[
                generate_bot_perf("A", 3100, 50, 10),
                generate_bot_perf("B", 3050, 50, 10),
                generate_bot_perf("C", 3000, 50, 10),
                generate_bot_perf("D", 2950, 50, 10)
            ]
        );
        let rows = tracker.create_ranked_rows(updates);
        let row = rows.iter().find(|row| row.name == "E").unwrap();

        assert_eq!(row.rank_info.rank, 5);
        assert_eq!(row.rank_info.delta_rank, -3);
        assert_eq!(row.rank_info.delta_rating, 0);
        assert_eq!(row.rank_info.peak_rank, 2);
        assert_eq!(row.rank_info.peak_rating, 3000);
        assert_eq!(row.perf, generate_perf(2900, 50, 100));
    }

    #[test]
    fn test_reranking_without_changes_is_stable() {
        let profiles = active_profiles(&["A", "B", "C"]);
        let tracker = LeaderboardTracker::new(&profiles, NOW);
        let current = vec![
            generate_bot_perf("A", 2000, 50, 10),
            generate_bot_perf("B", 2100, 50, 10),
            generate_bot_perf("C", 2000, 50, 10)
        ];

        let first = tracker.create_ranked_rows(tracker.create_updates(&[], &current));
        let second = tracker.create_ranked_rows(tracker.create_updates(&first, &current));

        assert_eq!(
            first.iter().map(|row| &row.name).collect::<Vec<_>>(),
            second.iter().map(|row| &row.name).collect::<Vec<_>>()
        );
        for (before, after) in first.iter().zip(&second) {
            assert_eq!(after.rank_info.rank, before.rank_info.rank);
            assert_eq!(after.rank_info.delta_rank, 0);
            assert_eq!(after.rank_info.delta_rating, 0);
            assert_eq!(after.rank_info.delta_games, 0);
            assert_eq!(after.rank_info.peak_rank, before.rank_info.peak_rank);
            assert_eq!(after.rank_info.peak_rating, before.rank_info.peak_rating);
        }
    }

    #[test]
    fn test_random_cycles_keep_ranks_ordered_and_peaks_monotonic() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let names = (0..30).map(|i| format!("Bot-{}", i)).collect::<Vec<_>>();
        let mut profiles: HashMap<String, BotProfile> = HashMap::new();
        let mut games_by_name: HashMap<String, i32> = HashMap::new();
        let mut previous_rows: Vec<LeaderboardRow> = Vec::new();
        let mut ranked_count = 0;
        let mut unranked_count = 0;

        for cycle in 0..40 {
            let now = NOW + cycle * ONE_DAY;
            let mut current_bot_perfs = Vec::new();

            for (i, name) in names.iter().enumerate() {
                // Every sixth bot is rarely online, so its rows go stale
                let online_chance = if i % 6 == 0 { 0.1 } else { 0.7 };
                if !rng.random_bool(online_chance) {
                    continue;
                }

                let profile = profiles
                    .entry(name.clone())
                    .or_insert_with(|| generate_bot_profile(name, DATE_2021_04_01, now));
                profile.last_seen = now - rng.random_range(0..=20) * ONE_DAY;

                let games = games_by_name.entry(name.clone()).or_insert(0);
                if rng.random_bool(0.3) {
                    *games += rng.random_range(1..=5);
                }

                // A narrow band of ratings so ties are common
                let rating = 1500 + 10 * rng.random_range(0..8);
                current_bot_perfs.push(generate_bot_perf(name, rating, rng.random_range(45..=120), *games));
            }

            let tracker = LeaderboardTracker::new(&profiles, now);
            let rows = tracker.create_ranked_rows(tracker.create_updates(&previous_rows, &current_bot_perfs));
            assert_eq!(rows.len(), profiles.len());

            let mut position = 0;
            let mut previous_ranked: Option<&LeaderboardRow> = None;
            for row in &rows {
                let eligible = profiles[&row.name].is_active(now) && now - row.rank_info.last_played <= TWO_WEEKS;
                assert_eq!(row.rank_info.rank > 0, eligible, "cycle {}: {}", cycle, row.name);
                assert!(row.rank_info.peak_rating >= row.perf.rating);
                if !eligible {
                    unranked_count += 1;
                    continue;
                }

                ranked_count += 1;
                position += 1;
                match previous_ranked {
                    Some(previous) if previous.perf.rating == row.perf.rating => {
                        assert_eq!(row.rank_info.rank, previous.rank_info.rank)
                    }
                    Some(previous) => {
                        assert!(previous.perf.rating > row.perf.rating);
                        assert_eq!(row.rank_info.rank, position);
                    }
                    None => assert_eq!(row.rank_info.rank, 1)
                }
                assert!(row.rank_info.peak_rank > 0 && row.rank_info.peak_rank <= row.rank_info.rank);
                previous_ranked = Some(row);
            }

            for previous in &previous_rows {
                let row = rows.iter().find(|row| row.name == previous.name).unwrap();
                assert!(row.rank_info.peak_rating >= previous.rank_info.peak_rating);
                if previous.rank_info.peak_rank > 0 {
                    assert!(row.rank_info.peak_rank > 0 && row.rank_info.peak_rank <= previous.rank_info.peak_rank);
                }
            }

            previous_rows = rows;
        }

        assert!(ranked_count > 0);
        assert!(unranked_count > 0);
    }
}
