//! Canonical U SPORTS member institution names.

use std::collections::HashSet;

pub const VALID_SCHOOLS: &[&str] = &[
    "Acadia",
    "Alberta",
    "Algoma",
    "Bishop's",
    "Brandon",
    "Brock",
    "Calgary",
    "Cape Breton",
    "Carleton",
    "Concordia",
    "Dalhousie",
    "Guelph",
    "Lakehead",
    "Laurentian",
    "Laval",
    "Lethbridge",
    "MacEwan",
    "Manitoba",
    "McGill",
    "McMaster",
    "Memorial",
    "Moncton",
    "Montréal",
    "Mount Allison",
    "Mount Royal",
    "Nipissing",
    "Ontario Tech",
    "Ottawa",
    "Queen's",
    "Regina",
    "RMC",
    "Saint Mary's",
    "Saskatchewan",
    "Sherbrooke",
    "St. Francis Xavier",
    "Thompson Rivers",
    "Toronto",
    "TMU",
    "Trinity Western",
    "UBC",
    "UBC Okanagan",
    "UFV",
    "UNB",
    "UNBC",
    "UPEI",
    "UQAM",
    "UQTR",
    "Victoria",
    "Waterloo",
    "Western",
    "Wilfrid Laurier",
    "Windsor",
    "Winnipeg",
    "York",
];

/// The default valid school set as owned strings.
pub fn valid_schools() -> HashSet<String> {
    VALID_SCHOOLS.iter().map(|s| s.to_string()).collect()
}
