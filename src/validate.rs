//! Schema checks applied to fetched records before any database write.

use crate::{
    error::{Result, SyncError},
    records::{RecordSet, UnitData},
    schema::{CategoryRule, RecordKind, SportSchema},
};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};


/// Check a record set against its column contract and the closed set of valid organizations.
///
/// Empty record sets pass. Missing columns and unknown organization names are errors;
/// unexpected extra columns only produce a warning.
pub fn validate_records(
    records: &RecordSet,
    expected_columns: &[&str],
    valid_orgs: &HashSet<String>,
    org_column: &str,
    label: &str,
) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let expected: BTreeSet<&str> = expected_columns.iter().copied().collect();

    // A column is missing as soon as one record lacks it.
    let missing: Vec<&str> = expected
        .difference(&records.common_columns())
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(SyncError::Validation {
            table: label.to_string(),
            message: format!("missing columns: {}", missing.join(", ")),
        });
    }

    let extra: Vec<&str> = records.columns().difference(&expected).copied().collect();
    if !extra.is_empty() {
        tracing::warn!(table = label, extra = ?extra, "record set has extra columns");
    }

    let invalid = values_outside(records, org_column, |v| valid_orgs.contains(v));
    if !invalid.is_empty() {
        return Err(SyncError::Validation {
            table: label.to_string(),
            message: format!(
                "invalid school names in column '{org_column}': {}",
                invalid.join(", ")
            ),
        });
    }

    Ok(())
}

fn check_category(records: &RecordSet, rule: &CategoryRule, label: &str) -> Result<()> {
    if !records.columns().contains(rule.column) {
        return Ok(());
    }
    let invalid = values_outside(records, rule.column, |v| rule.allowed.contains(&v));
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Validation {
            table: label.to_string(),
            message: format!("invalid {} values: {}", rule.column, invalid.join(", ")),
        })
    }
}

/// Distinct rendered values of `column` rejected by `is_valid`. Non-text values are rejected.
fn values_outside(
    records: &RecordSet,
    column: &str,
    is_valid: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut bad = BTreeSet::new();
    for record in &records.records {
        match record.get(column) {
            Some(Value::String(s)) if is_valid(s) => {}
            Some(Value::String(s)) => {
                bad.insert(s.clone());
            }
            Some(other) => {
                bad.insert(other.to_string());
            }
            None => {
                bad.insert("null".to_string());
            }
        }
    }
    bad.into_iter().collect()
}

/// Validate everything fetched for one unit against a sport's contracts.
pub fn validate_unit(
    schema: &SportSchema,
    data: &UnitData,
    valid_orgs: &HashSet<String>,
) -> Result<()> {
    let mut sets = vec![
        (RecordKind::Teams, &data.teams),
        (RecordKind::Players, &data.players),
    ];
    if let Some(standings) = &data.standings {
        sets.insert(0, (RecordKind::Standings, standings));
    }

    for (kind, records) in sets {
        let label = schema.label(kind);
        validate_records(
            records,
            &schema.column_names(kind),
            valid_orgs,
            kind.org_column(),
            &label,
        )?;
        if kind == RecordKind::Players {
            for rule in schema.player_rules {
                check_category(records, rule, &label)?;
            }
        }
        if !records.is_empty() {
            tracing::debug!(table = %label, records = records.len(), "validation passed");
        }
    }

    Ok(())
}
