//! Show which sports and phases are active for a month

use crate::{
    cli::types::Month,
    season::{resolve, ActiveSeasons},
    Result,
};

pub fn handle_seasons(month: Option<Month>, as_json: bool) -> Result<ActiveSeasons> {
    let month = month.unwrap_or_else(Month::current);
    let active = resolve(month.as_u32());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&active)?);
    } else {
        print!("{}", format_seasons(month, &active));
    }

    Ok(active)
}

pub fn format_seasons(month: Month, active: &ActiveSeasons) -> String {
    if active.is_empty() {
        return format!("No sports in season for month {month}\n");
    }

    let mut out = format!("Active seasons for month {month}:\n");
    for (sport, phases) in active {
        let phases: Vec<&str> = phases.iter().map(|p| p.as_str()).collect();
        let leagues: Vec<&str> = sport.leagues().iter().map(|l| l.as_str()).collect();
        out.push_str(&format!(
            "  {:<11} [{}] {}\n",
            sport.as_str(),
            leagues.join(","),
            phases.join(", ")
        ));
    }
    out
}
