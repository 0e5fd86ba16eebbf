use super::{int, key, real, text, Column, Leaderboard, SportSchema};
use crate::cli::types::Sport;

pub(super) static SCHEMA: SportSchema = SportSchema {
    sport: Sport::Volleyball,
    standings: STANDINGS,
    teams: TEAMS,
    players: PLAYERS,
    player_rules: &[],
    leaderboards: &[
        Leaderboard {
            name: "leaderboard",
            columns: &["matches_played"],
        },
        Leaderboard {
            name: "sets_leaderboard",
            columns: &["sets_played"],
        },
    ],
};

const STANDINGS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("total_wins"),
    int("total_losses"),
    real("win_percentage"),
    int("sets_for"),
    int("sets_against"),
    int("points"),
    text("conference"),
];

const TEAMS: &[Column] = &[
    key("team_name"),
    int("matches_played"),
    int("sets_played"),
    int("kills"),
    real("kills_per_set"),
    int("errors"),
    int("total_attacks"),
    real("hitting_percentage"),
    int("assists"),
    real("assists_per_set"),
    real("points"),
    real("points_per_set"),
    int("digs"),
    real("digs_per_set"),
    int("block_solos"),
    int("block_assists"),
    real("total_blocks"),
    real("blocks_per_set"),
    int("service_aces"),
    real("service_aces_per_set"),
    int("service_errors"),
    int("receptions"),
    int("reception_errors"),
    text("conference"),
];

const PLAYERS: &[Column] = &[
    key("lastname_initials"),
    key("first_name"),
    key("school"),
    int("matches_played"),
    int("sets_played"),
    int("kills"),
    real("kills_per_set"),
    int("errors"),
    int("total_attacks"),
    real("total_attacks_per_set"),
    real("hitting_percentage"),
    int("assists"),
    real("assists_per_set"),
    real("points"),
    real("points_per_set"),
    int("digs"),
    real("digs_per_set"),
    int("block_solos"),
    int("block_assists"),
    real("total_blocks"),
    real("blocks_per_set"),
    int("serve_attempts"),
    int("service_aces"),
    real("service_aces_per_set"),
    int("service_errors"),
    int("receptions"),
    int("reception_errors"),
];
