//! Seasonal activation calendar.
//!
//! Maps a calendar month to the sports and season phases worth fetching. Fall sports
//! (football, soccer) run September through December; winter sports (basketball, ice hockey,
//! volleyball) start their regular season in October and finish with championships in March.
//! Once a phase has started it stays active for the rest of that sport's season so the
//! earlier phases keep receiving late stat corrections.

use crate::cli::types::{SeasonPhase, Sport};
use std::collections::BTreeMap;


/// Active phases per sport, ordered by sport then by phase.
pub type ActiveSeasons = BTreeMap<Sport, Vec<SeasonPhase>>;

const FALL_SPORTS: [Sport; 2] = [Sport::Football, Sport::Soccer];
const WINTER_SPORTS: [Sport; 3] = [Sport::Basketball, Sport::IceHockey, Sport::Volleyball];

const REGULAR: &[SeasonPhase] = &[SeasonPhase::Regular];
const THROUGH_PLAYOFFS: &[SeasonPhase] = &[SeasonPhase::Regular, SeasonPhase::Playoffs];
const FULL_SEASON: &[SeasonPhase] = &[
    SeasonPhase::Regular,
    SeasonPhase::Playoffs,
    SeasonPhase::Championship,
];

/// Resolve which (sport, phases) are active in `month`.
///
/// Months outside September-March (and anything outside 1-12) yield an empty map.
pub fn resolve(month: u32) -> ActiveSeasons {
    let mut active = ActiveSeasons::new();
    let mut activate = |sports: &[Sport], phases: &[SeasonPhase]| {
        for sport in sports {
            active.insert(*sport, phases.to_vec());
        }
    };

    match month {
        9 => activate(&FALL_SPORTS, REGULAR),
        10 => {
            activate(&FALL_SPORTS, REGULAR);
            activate(&WINTER_SPORTS, REGULAR);
        }
        11 | 12 => {
            activate(&FALL_SPORTS, FULL_SEASON);
            activate(&WINTER_SPORTS, REGULAR);
        }
        1 => activate(&WINTER_SPORTS, REGULAR),
        2 => activate(&WINTER_SPORTS, THROUGH_PLAYOFFS),
        3 => activate(&WINTER_SPORTS, FULL_SEASON),
        _ => {}
    }

    active
}
