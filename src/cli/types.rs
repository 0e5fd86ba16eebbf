//! Type-safe wrappers and enums for sports, leagues, season phases and months.

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// A U SPORTS sport with its own standings/team/player tables.
///
/// Declaration order is the order sports appear in resolver output and batch runs:
/// fall sports first, then winter sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Soccer,
    Basketball,
    IceHockey,
    Volleyball,
}

impl Sport {
    pub const ALL: [Sport; 5] = [
        Sport::Football,
        Sport::Soccer,
        Sport::Basketball,
        Sport::IceHockey,
        Sport::Volleyball,
    ];

    /// Canonical lowercase name, also used as the table prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Soccer => "soccer",
            Sport::Basketball => "basketball",
            Sport::IceHockey => "ice_hockey",
            Sport::Volleyball => "volleyball",
        }
    }

    /// Leagues this sport is played in. Football is men only.
    pub fn leagues(&self) -> &'static [League] {
        match self {
            Sport::Football => &[League::Men],
            _ => &[League::Men, League::Women],
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "football" => Ok(Sport::Football),
            "soccer" => Ok(Sport::Soccer),
            "basketball" => Ok(Sport::Basketball),
            "ice_hockey" | "ice-hockey" | "hockey" => Ok(Sport::IceHockey),
            "volleyball" => Ok(Sport::Volleyball),
            _ => Err(SyncError::InvalidSport {
                name: s.to_string(),
            }),
        }
    }
}

/// Men's or women's division, stored as `m` / `w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "m")]
    Men,
    #[serde(rename = "w")]
    Women,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Men => "m",
            League::Women => "w",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "men" => Ok(League::Men),
            "w" | "women" => Ok(League::Women),
            _ => Err(SyncError::InvalidLeague {
                name: s.to_string(),
            }),
        }
    }
}

/// Scoring period within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    Regular,
    Playoffs,
    Championship,
}

impl SeasonPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonPhase::Regular => "regular",
            SeasonPhase::Playoffs => "playoffs",
            SeasonPhase::Championship => "championship",
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, SeasonPhase::Regular)
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonPhase {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(SeasonPhase::Regular),
            "playoffs" => Ok(SeasonPhase::Playoffs),
            "championship" => Ok(SeasonPhase::Championship),
            _ => Err(SyncError::InvalidPhase {
                name: s.to_string(),
            }),
        }
    }
}

/// One (sport, league, season phase) fetch/sync cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkUnit {
    pub sport: Sport,
    pub league: League,
    pub phase: SeasonPhase,
}

impl WorkUnit {
    /// Build a unit. Football is always forced to the men's league.
    pub fn new(sport: Sport, league: League, phase: SeasonPhase) -> Self {
        let league = match sport {
            Sport::Football => League::Men,
            _ => league,
        };
        Self {
            sport,
            league,
            phase,
        }
    }
}

impl fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.sport, self.league, self.phase)
    }
}

/// Type-safe wrapper for a calendar month (1-12).
///
/// # Examples
///
/// ```rust
/// use northscore_sync::Month;
///
/// let month: Month = "11".parse().unwrap();
/// assert_eq!(month.as_u32(), 11);
/// assert!("13".parse::<Month>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(SyncError::InvalidMonth {
                value: month.to_string(),
            })
        }
    }

    /// Month of the local wall clock.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self(chrono::Local::now().month())
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<u32>().map_err(|_| SyncError::InvalidMonth {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}
