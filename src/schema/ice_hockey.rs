use super::{int, key, real, text, CategoryRule, Column, Leaderboard, SportSchema};
use crate::cli::types::Sport;

pub(super) static SCHEMA: SportSchema = SportSchema {
    sport: Sport::IceHockey,
    standings: STANDINGS,
    teams: TEAMS,
    players: PLAYERS,
    player_rules: &[CategoryRule {
        column: "role",
        allowed: &["skater", "goalie"],
    }],
    leaderboards: &[
        Leaderboard {
            name: "leaderboard",
            columns: &["games_played"],
        },
        Leaderboard {
            name: "role_leaderboard",
            columns: &["role", "games_played"],
        },
    ],
};

const STANDINGS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("total_wins"),
    int("total_losses"),
    int("goals_for"),
    int("goals_against"),
    int("total_points"),
    text("conference"),
];

const TEAMS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("goals"),
    int("assists"),
    real("goals_per_game"),
    int("shots"),
    int("penalty_minutes"),
    int("power_play_goals"),
    int("power_play_opportunities"),
    real("power_play_percentage"),
    int("power_play_goals_against"),
    int("times_short_handed"),
    real("penalty_kill_percentage"),
    int("short_handed_goals"),
    int("short_handed_goals_against"),
    int("goals_against"),
    real("goals_against_average"),
    int("saves"),
    real("save_percentage"),
    int("empty_net_goals_against"),
    text("conference"),
];

const PLAYERS: &[Column] = &[
    key("lastname_initials"),
    key("first_name"),
    key("school"),
    int("games_played"),
    int("goals"),
    int("assists"),
    int("points"),
    int("penalty_minutes"),
    int("plus_minus"),
    int("power_play_goals"),
    int("short_handed_goals"),
    int("empty_net_goals"),
    int("game_winning_goals"),
    int("game_tying_goals"),
    int("hat_tricks"),
    int("shots_on_goal"),
    text("role"),
    int("goalie_games_played"),
    int("goalie_games_started"),
    real("goalie_minutes_played"),
    int("goalie_goals_against"),
    real("goalie_goals_against_average"),
    int("goalie_saves"),
    real("goalie_save_percentage"),
    int("goalie_wins"),
    int("goalie_losses"),
    int("goalie_ties"),
    real("goalie_win_percentage"),
];
