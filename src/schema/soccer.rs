use super::{int, key, real, text, CategoryRule, Column, Leaderboard, SportSchema};
use crate::cli::types::Sport;

pub(super) static SCHEMA: SportSchema = SportSchema {
    sport: Sport::Soccer,
    standings: STANDINGS,
    teams: TEAMS,
    players: PLAYERS,
    player_rules: &[CategoryRule {
        column: "position",
        allowed: &["goalie", "field"],
    }],
    leaderboards: &[
        Leaderboard {
            name: "leaderboard",
            columns: &["games_played"],
        },
        Leaderboard {
            name: "position_leaderboard",
            columns: &["position", "games_played"],
        },
    ],
};

const STANDINGS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("total_wins"),
    int("total_losses"),
    int("ties"),
    int("goals_for"),
    int("goals_against"),
    int("points"),
    text("conference"),
];

const TEAMS: &[Column] = &[
    key("team_name"),
    int("games_played"),
    int("shots"),
    int("goals"),
    real("goals_per_game"),
    int("assists"),
    int("points"),
    real("shot_percentage"),
    real("shots_per_game"),
    int("goals_against"),
    real("goals_against_average"),
    int("saves"),
    int("shutouts"),
    int("yellow_cards"),
    int("red_cards"),
    int("corner_kicks"),
    text("conference"),
];

const PLAYERS: &[Column] = &[
    key("lastname_initials"),
    key("first_name"),
    key("school"),
    text("position"),
    int("games_played"),
    int("games_started"),
    int("goals"),
    int("assists"),
    int("points"),
    int("shots"),
    real("shot_percentage"),
    int("shots_on_goal"),
    real("sog_percentage"),
    int("yellow_cards"),
    int("red_cards"),
    int("penalty_kicks"),
    int("game_winning_goals"),
    int("goalie_games_started"),
    int("goalie_goals_against"),
    int("goalie_saves"),
    real("goalie_save_percentage"),
    int("goalie_wins"),
    int("goalie_losses"),
    int("goalie_ties"),
    int("goalie_shutouts"),
    real("goalie_minutes_played"),
];
