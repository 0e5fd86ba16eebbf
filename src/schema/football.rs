use super::{int, key, real, text, Column, Leaderboard, SportSchema};
use crate::cli::types::Sport;

pub(super) static SCHEMA: SportSchema = SportSchema {
    sport: Sport::Football,
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
    int("touchdowns"),
    int("field_goals"),
    int("extra_points"),
    int("two_point_conversions"),
    int("defensive_extra_points"),
    int("safeties"),
    int("points"),
    real("points_per_game"),
    int("rushing_yards"),
    int("passing_yards"),
    int("total_offense"),
    real("yards_per_game"),
    int("pass_completions"),
    int("pass_attempts"),
    int("pass_interceptions"),
    real("passing_yards_per_game"),
    real("yards_per_attempt"),
    real("yards_per_completion"),
    int("passing_touchdowns"),
    int("rushing_attempts"),
    real("rushing_yards_per_game"),
    real("rushing_average"),
    int("rushing_touchdowns"),
    int("total_first_downs"),
    int("rushing_first_downs"),
    int("passing_first_downs"),
    int("penalty_first_downs"),
    real("first_downs_per_game"),
    int("third_down_conversions_made"),
    int("third_down_attempts"),
    real("third_down_conversion_percentage"),
    int("fourth_down_conversions_made"),
    int("fourth_down_attempts"),
    real("fourth_down_conversion_percentage"),
    int("kick_return_count"),
    int("kick_return_yards"),
    real("kickoff_return_average"),
    int("punt_return_count"),
    int("punt_return_yards"),
    real("punt_return_average"),
    int("field_goal_made"),
    int("field_goal_attempt"),
    real("field_goal_percentage"),
    int("extra_point_made"),
    int("extra_point_attempt"),
    real("extra_point_percentage"),
    int("punt_count"),
    int("punt_yards"),
    real("punt_average"),
    int("kickoff_count"),
    int("kickoff_yards"),
    real("kickoff_average"),
    int("scores_made"),
    int("scores_attempt"),
    real("red_zone_percentage"),
    int("touchdowns_made"),
    int("touchdowns_attempt"),
    real("touchdown_percentage"),
    int("fumbles"),
    int("fumbles_lost"),
    int("fumble_recoveries"),
    int("interceptions"),
    int("interception_yards"),
    real("interception_average"),
    int("interception_touchdowns"),
    real("tackles"),
    int("sacks"),
    int("penalties"),
    real("penalties_per_game"),
    int("penalty_yards"),
    real("penalty_yards_per_game"),
    real("tackles_per_game"),
    int("time_of_possession"),
    int("home_attendance"),
    int("average_home_attendance"),
    text("conference"),
];

const PLAYERS: &[Column] = &[
    key("lastname_initials"),
    key("first_name"),
    key("school"),
    int("games_played"),
    int("pass_completions"),
    int("pass_attempts"),
    real("completion_percentage"),
    int("passing_yards"),
    real("passing_yards_per_game"),
    real("yards_per_attempt"),
    int("passing_touchdowns"),
    int("interceptions"),
    int("longest_pass"),
    real("passing_efficiency"),
    int("rushing_attempts"),
    int("rushing_yards"),
    real("rushing_yards_per_game"),
    real("yards_per_carry"),
    int("rushing_touchdowns"),
    int("longest_rush"),
    int("fumbles"),
    int("fumbles_lost"),
    int("receptions"),
    real("receptions_per_game"),
    int("receiving_yards"),
    real("receiving_yards_per_game"),
    real("yards_per_reception"),
    int("receiving_touchdowns"),
    int("longest_reception"),
    int("field_goals_made"),
    int("field_goals_attempted"),
    real("field_goal_percentage"),
    int("longest_field_goal"),
    int("extra_points_made"),
    int("extra_points_attempted"),
    real("extra_point_percentage"),
    int("kicking_points"),
    int("punts"),
    int("punting_yards"),
    real("yards_per_punt"),
    int("longest_punt"),
    int("punts_inside_20"),
    int("fair_catches"),
    int("touchbacks"),
    int("blocked_punts"),
    int("kick_returns"),
    int("kick_return_yards"),
    real("yards_per_kick_return"),
    int("kick_return_touchdowns"),
    int("longest_kick_return"),
    int("punt_returns"),
    int("punt_return_yards"),
    real("yards_per_punt_return"),
    int("punt_return_touchdowns"),
    int("longest_punt_return"),
    int("total_yards"),
    real("yards_per_game"),
    int("total_points"),
    real("points_per_game"),
    int("interception_return_touchdowns"),
    int("fumble_return_touchdowns"),
    int("two_point_conversions"),
    int("miscellaneous_touchdowns"),
    int("solo_tackles"),
    int("assisted_tackles"),
    real("total_tackles"),
    real("tackles_per_game"),
    real("sacks"),
    int("sack_yards"),
    real("tackles_for_loss"),
    int("tackles_for_loss_yards"),
    int("forced_fumbles"),
    int("fumble_recoveries"),
    int("fumble_recovery_yards"),
    int("interception_return_yards"),
    int("pass_breakups"),
    int("blocked_kicks"),
];
