use super::{int, key, real, text, Column, Leaderboard, SportSchema};
use crate::cli::types::Sport;

pub(super) static SCHEMA: SportSchema = SportSchema {
    sport: Sport::Basketball,
    standings: STANDINGS,
    teams: TEAMS,
    players: PLAYERS,
    player_rules: &[],
    leaderboards: &[Leaderboard {
        name: "leaderboard",
        columns: &["games_played"],
    }],
};

const STANDINGS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("total_wins"),
    int("total_losses"),
    real("win_percentage"),
    int("total_points"),
    int("total_points_against"),
    text("conference"),
];

const TEAMS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    real("points_per_game"),
    int("field_goal_made"),
    int("field_goal_attempted"),
    real("field_goal_percentage"),
    int("three_pointers_made"),
    int("three_pointers_attempted"),
    real("three_point_percentage"),
    int("free_throws_made"),
    int("free_throws_attempted"),
    real("free_throw_percentage"),
    real("offensive_rebounds_per_game"),
    real("defensive_rebounds_per_game"),
    real("total_rebounds_per_game"),
    real("rebound_margin"),
    real("assists_per_game"),
    real("turnovers_per_game"),
    real("steals_per_game"),
    real("blocks_per_game"),
    real("team_fouls_per_game"),
    real("offensive_efficiency"),
    real("defensive_efficiency"),
    real("net_efficiency"),
    real("net_efficiency_against"),
    int("field_goal_made_against"),
    int("field_goal_attempted_against"),
    real("field_goal_percentage_against"),
    int("three_pointers_made_against"),
    int("three_pointers_attempted_against"),
    real("three_point_percentage_against"),
    real("offensive_rebounds_per_game_against"),
    real("defensive_rebounds_per_game_against"),
    real("total_rebounds_per_game_against"),
    real("rebound_margin_against"),
    real("assists_per_game_against"),
    real("turnovers_per_game_against"),
    real("steals_per_game_against"),
    real("blocks_per_game_against"),
    real("team_fouls_per_game_against"),
    real("points_per_game_against"),
    text("conference"),
];

const PLAYERS: &[Column] = &[
    key("lastname_initials"),
    key("first_name"),
    key("school"),
    int("games_played"),
    int("games_started"),
    int("minutes_played"),
    int("field_goal_made"),
    int("field_goal_attempted"),
    real("field_goal_percentage"),
    int("three_pointers_made"),
    int("three_pointers_attempted"),
    real("three_pointers_percentage"),
    int("free_throws_made"),
    int("free_throws_attempted"),
    real("free_throws_percentage"),
    int("total_points"),
    int("offensive_rebounds"),
    int("defensive_rebounds"),
    int("total_rebounds"),
    int("assists"),
    int("turnovers"),
    int("steals"),
    int("blocks"),
    real("assist_to_turnover_ratio"),
    int("personal_fouls"),
    int("disqualifications"),
];
