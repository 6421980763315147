// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ordered upgrades from older saved layouts to the current one.
//!
//! Every step works on the raw JSON tree before the typed decode and must be idempotent: running
//! the whole list on an already current document changes nothing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::model::{SedeData, DEFAULT_SEDES};

type Object = Map<String, Value>;

pub struct Migration {
    pub name: &'static str,
    pub apply: fn(&mut Object, NaiveDate) -> serde_json::Result<bool>,
}

pub const MIGRATIONS: [Migration; 5] = [
    Migration { name: "split-exercise-logs", apply: split_exercise_logs },
    Migration { name: "flatten-sede-records", apply: flatten_sede_records },
    Migration { name: "split-cardio-sessions", apply: split_cardio_sessions },
    Migration { name: "distance-unit-mts", apply: rename_meter_unit },
    Migration { name: "merge-default-sedes", apply: merge_default_sedes },
];

/// Runs every step in order. Returns the names of the steps that changed the document.
pub fn run_migrations(root: &mut Object, today: NaiveDate) -> serde_json::Result<Vec<&'static str>> {
    apply_steps(&MIGRATIONS, root, today)
}

/// Runs the record-layout steps only. Imported documents are merged into an existing state, so
/// default sedes must not be injected into them.
pub fn upgrade_records(root: &mut Object, today: NaiveDate) -> serde_json::Result<Vec<&'static str>> {
    apply_steps(&MIGRATIONS[..MIGRATIONS.len() - 1], root, today)
}

fn apply_steps(
    steps: &[Migration],
    root: &mut Object,
    today: NaiveDate,
) -> serde_json::Result<Vec<&'static str>> {
    let mut applied = Vec::new();
    for migration in steps {
        if (migration.apply)(root, today)? {
            applied.push(migration.name);
        }
    }
    Ok(applied)
}

const FLAG_KEY: &str = "isSavedToSummary";
const LEGACY_FLAG_KEY: &str = "wasEverSaved";
const SNAPSHOT_KEY: &str = "savedState";

const EXERCISE_SNAPSHOT_KEYS: [&str; 7] =
    ["exerciseName", "date", "reps", "kilos", "series", "media", "notes"];
const CARDIO_SNAPSHOT_KEYS: [&str; 4] = ["date", "title", "metrics", "notes"];

fn flag(record: &Object, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn record_id(record: &Object) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn pick(record: &Object, keys: &[&str]) -> Object {
    keys.iter()
        .filter_map(|key| record.get(*key).map(|value| ((*key).to_owned(), value.clone())))
        .collect()
}

fn stored_snapshot(record: &Object) -> Option<&Object> {
    record.get(SNAPSHOT_KEY).and_then(Value::as_object)
}

/// Daily form of a legacy record: keeps its snapshot only while flagged.
fn daily_copy(record: &Object, snapshot_keys: &[&str]) -> Object {
    let mut daily = record.clone();
    if flag(record, FLAG_KEY) {
        let snapshot = stored_snapshot(record).cloned().unwrap_or_else(|| pick(record, snapshot_keys));
        daily.insert(SNAPSHOT_KEY.to_owned(), Value::Object(snapshot));
    } else {
        daily.remove(FLAG_KEY);
        daily.remove(SNAPSHOT_KEY);
    }
    daily.remove(LEGACY_FLAG_KEY);
    daily
}

/// Summary copy of a legacy exercise log, built from its snapshot when one was saved.
fn summary_log(record: &Object) -> Object {
    let source = stored_snapshot(record).unwrap_or(record);
    let mut summary = pick(source, &EXERCISE_SNAPSHOT_KEYS);
    for key in ["id", "day"] {
        if let Some(value) = record.get(key) {
            summary.insert(key.to_owned(), value.clone());
        }
    }
    if let Some(sede) = source.get("sede").or_else(|| record.get("sede")) {
        summary.insert("sede".to_owned(), sede.clone());
    }
    summary
}

fn summary_session(record: &Object) -> Object {
    let mut summary = record.clone();
    summary.remove(FLAG_KEY);
    summary.remove(LEGACY_FLAG_KEY);
    summary.remove(SNAPSHOT_KEY);
    summary
}

fn extend_array(root: &mut Object, key: &str, items: Vec<Value>) {
    match root.get_mut(key) {
        Some(Value::Array(existing)) => existing.extend(items),
        _ => {
            root.insert(key.to_owned(), Value::Array(items));
        }
    }
}

fn take_array(root: &mut Object, key: &str) -> Option<Vec<Value>> {
    match root.remove(key)? {
        Value::Array(items) => Some(items),
        _ => Some(Vec::new()),
    }
}

fn ids_in(root: &Object, key: &str) -> HashSet<String> {
    root.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.as_object().and_then(record_id).map(str::to_owned))
        .collect()
}

/// Appends legacy exercise logs: every record becomes a daily log, flagged or once-saved ones
/// also get a summary copy.
fn push_legacy_logs(root: &mut Object, legacy: Vec<Value>) {
    let mut summary_ids = ids_in(root, "summaryLogs");
    let mut daily = Vec::new();
    let mut summary = Vec::new();
    for record in legacy.iter().filter_map(Value::as_object) {
        let saved = flag(record, FLAG_KEY) || flag(record, LEGACY_FLAG_KEY);
        if let Some(id) = record_id(record) {
            if saved && summary_ids.insert(id.to_owned()) {
                summary.push(Value::Object(summary_log(record)));
            }
        }
        daily.push(Value::Object(daily_copy(record, &EXERCISE_SNAPSHOT_KEYS)));
    }
    extend_array(root, "dailyLogs", daily);
    extend_array(root, "summaryLogs", summary);
}

fn push_legacy_cardio(root: &mut Object, legacy: Vec<Value>) {
    let mut summary_ids = ids_in(root, "summaryCardioSessions");
    let mut daily = Vec::new();
    let mut summary = Vec::new();
    for record in legacy.iter().filter_map(Value::as_object) {
        if let Some(id) = record_id(record) {
            if flag(record, FLAG_KEY) && summary_ids.insert(id.to_owned()) {
                summary.push(Value::Object(summary_session(record)));
            }
        }
        daily.push(Value::Object(daily_copy(record, &CARDIO_SNAPSHOT_KEYS)));
    }
    extend_array(root, "dailyCardioSessions", daily);
    extend_array(root, "summaryCardioSessions", summary);
}

fn split_exercise_logs(root: &mut Object, _today: NaiveDate) -> serde_json::Result<bool> {
    if root.contains_key("dailyLogs") || root.contains_key("summaryLogs") {
        return Ok(false);
    }
    let Some(legacy) = take_array(root, "exerciseLogs") else {
        return Ok(false);
    };
    push_legacy_logs(root, legacy);
    Ok(true)
}

/// Moves records stored inside each sede into the global collections, tagged with that sede.
fn flatten_sede_records(root: &mut Object, _today: NaiveDate) -> serde_json::Result<bool> {
    let mut cardio = Vec::new();
    let mut logs = Vec::new();
    let mut removed = false;
    if let Some(sedes) = root.get_mut("sedes").and_then(Value::as_object_mut) {
        for (name, sede) in sedes.iter_mut() {
            let Some(sede) = sede.as_object_mut() else { continue };
            for (key, target) in [("cardioSessions", &mut cardio), ("exerciseLogs", &mut logs)] {
                let Some(records) = sede.remove(key) else { continue };
                removed = true;
                let Value::Array(records) = records else { continue };
                target.extend(records.into_iter().filter_map(|record| match record {
                    Value::Object(mut record) => {
                        record.insert("sede".to_owned(), Value::String(name.clone()));
                        Some(Value::Object(record))
                    }
                    _ => None,
                }));
            }
        }
    }
    if !removed {
        return Ok(false);
    }

    if !logs.is_empty() {
        push_legacy_logs(root, logs);
    }
    if !cardio.is_empty() {
        if root.contains_key("dailyCardioSessions") || root.contains_key("summaryCardioSessions") {
            push_legacy_cardio(root, cardio);
        } else {
            extend_array(root, "cardioSessions", cardio);
        }
    }
    Ok(true)
}

fn split_cardio_sessions(root: &mut Object, _today: NaiveDate) -> serde_json::Result<bool> {
    if root.contains_key("dailyCardioSessions") || root.contains_key("summaryCardioSessions") {
        return Ok(false);
    }
    let Some(legacy) = take_array(root, "cardioSessions") else {
        return Ok(false);
    };
    push_legacy_cardio(root, legacy);
    Ok(true)
}

fn rename_unit(metrics: Option<&mut Value>) -> bool {
    let Some(unit) = metrics.and_then(|metrics| metrics.get_mut("distanceUnit")) else {
        return false;
    };
    if unit.as_str() == Some("M") {
        *unit = Value::from("MTS");
        true
    } else {
        false
    }
}

fn rename_meter_unit(root: &mut Object, _today: NaiveDate) -> serde_json::Result<bool> {
    let mut changed = false;
    for key in ["dailyCardioSessions", "summaryCardioSessions", "cardioSessions"] {
        let Some(sessions) = root.get_mut(key).and_then(Value::as_array_mut) else { continue };
        for session in sessions.iter_mut() {
            changed |= rename_unit(session.get_mut("metrics"));
            changed |= rename_unit(
                session.get_mut(SNAPSHOT_KEY).and_then(|snapshot| snapshot.get_mut("metrics")),
            );
        }
    }

    if let Some(sedes) = root.get_mut("sedes").and_then(Value::as_object_mut) {
        for sede in sedes.values_mut() {
            let Some(days) = sede.get_mut("workoutDays").and_then(Value::as_object_mut) else {
                continue;
            };
            for day in days.values_mut() {
                changed |=
                    rename_unit(day.get_mut("cardio").and_then(|form| form.get_mut("metrics")));
            }
        }
    }
    Ok(changed)
}

/// Adds any missing default sede and fills in the display order when none was saved.
fn merge_default_sedes(root: &mut Object, today: NaiveDate) -> serde_json::Result<bool> {
    let mut changed = false;
    let sedes = root.entry("sedes".to_owned()).or_insert_with(|| {
        changed = true;
        Value::Object(Map::new())
    });
    let Some(sedes) = sedes.as_object_mut() else {
        return Ok(changed);
    };

    for name in DEFAULT_SEDES {
        if !sedes.contains_key(name) {
            sedes.insert(name.to_owned(), serde_json::to_value(SedeData::initial(today))?);
            changed = true;
        }
    }

    if !root.get("sedeOrder").is_some_and(Value::is_array) {
        let mut order: Vec<String> = DEFAULT_SEDES.iter().map(|name| (*name).to_owned()).collect();
        if let Some(sedes) = root.get("sedes").and_then(Value::as_object) {
            let mut rest: Vec<&String> =
                sedes.keys().filter(|key| !DEFAULT_SEDES.contains(&key.as_str())).collect();
            rest.sort();
            order.extend(rest.into_iter().cloned());
        }
        root.insert("sedeOrder".to_owned(), Value::from(order));
        changed = true;
    }
    Ok(changed)
}
