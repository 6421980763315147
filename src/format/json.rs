// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural JSON exports and the import merge.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::model::{AppState, CardioSession, DayCategory, ExerciseLog};
use crate::query::WeekRange;
use crate::store::envelope::{self, DocumentKind};
use crate::store::migrate::upgrade_records;
use crate::store::StoreError;

use super::{
    day_file_name, day_selection, full_file_name, summary_file_name, week_file_name,
    week_selection, DayExportKind, ExportError, ExportFile, ExportFormat,
};

/// Summary-only document. Absent collections are omitted rather than written empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary_cardio_sessions: Option<Vec<&'a CardioSession>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary_logs: Option<Vec<&'a ExerciseLog>>,
}

fn render(mut value: Value, kind: DocumentKind) -> Result<String, ExportError> {
    if let Value::Object(root) = &mut value {
        envelope::stamp(root, kind);
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_summary(document: &SummaryDocument<'_>) -> Result<String, ExportError> {
    render(serde_json::to_value(document)?, DocumentKind::Partial)
}

pub fn export_full(state: &AppState, today: NaiveDate) -> Result<ExportFile, ExportError> {
    Ok(ExportFile {
        file_name: full_file_name(today),
        contents: render(serde_json::to_value(state)?, DocumentKind::Backup)?,
    })
}

pub fn export_summary(state: &AppState, today: NaiveDate) -> Result<ExportFile, ExportError> {
    let document = SummaryDocument {
        summary_cardio_sessions: Some(state.summary_cardio_sessions().iter().collect()),
        summary_logs: Some(state.summary_logs().iter().collect()),
    };
    Ok(ExportFile {
        file_name: summary_file_name(today, ExportFormat::Json),
        contents: render_summary(&document)?,
    })
}

/// Summary records dated inside the week. An empty week still exports.
pub fn export_week(
    state: &AppState,
    week: WeekRange,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let (cardio, logs) = week_selection(state, week, today);
    let document =
        SummaryDocument { summary_cardio_sessions: Some(cardio), summary_logs: Some(logs) };
    Ok(ExportFile {
        file_name: week_file_name(week, ExportFormat::Json),
        contents: render_summary(&document)?,
    })
}

pub fn export_day(
    state: &AppState,
    week: WeekRange,
    day: DayCategory,
    kind: DayExportKind,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let (cardio, logs) = day_selection(state, week, day, kind, today);
    let document = match kind {
        DayExportKind::Cardio if !cardio.is_empty() => {
            SummaryDocument { summary_cardio_sessions: Some(cardio), summary_logs: None }
        }
        DayExportKind::Exercises if !logs.is_empty() => {
            SummaryDocument { summary_cardio_sessions: None, summary_logs: Some(logs) }
        }
        _ => return Err(ExportError::NoData),
    };
    Ok(ExportFile {
        file_name: day_file_name(week, day, kind, ExportFormat::Json)?,
        contents: render_summary(&document)?,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("import is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("import root is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("imported records are invalid: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// Result of merging a document into the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    pub state: AppState,
    pub kind: DocumentKind,
}

/// Daily collections accept the legacy key as a fallback source.
const MERGED_COLLECTIONS: [(&str, &[&str]); 4] = [
    ("dailyCardioSessions", &["dailyCardioSessions", "cardioSessions"]),
    ("summaryCardioSessions", &["summaryCardioSessions"]),
    ("dailyLogs", &["dailyLogs"]),
    ("summaryLogs", &["summaryLogs"]),
];

/// Merges an imported document into `current`.
///
/// Full backups are deep-merged: nested objects merge key by key while arrays and scalars are
/// replaced. Anything else merges its record collections by id; incoming records overwrite
/// existing ones in place and new ones are appended. `current` is never modified.
pub fn import_document(
    current: &AppState,
    raw: &str,
    today: NaiveDate,
) -> Result<Imported, ImportError> {
    let mut incoming = match serde_json::from_str(raw).map_err(ImportError::Malformed)? {
        Value::Object(root) => root,
        _ => return Err(ImportError::NotAnObject),
    };
    envelope::check_schema_version(&incoming)?;
    let kind = DocumentKind::detect(&incoming);
    envelope::strip(&mut incoming);

    let mut merged = match serde_json::to_value(current).map_err(StoreError::json)? {
        Value::Object(root) => root,
        _ => return Err(ImportError::NotAnObject),
    };

    match kind {
        DocumentKind::Backup => {
            let applied = upgrade_records(&mut incoming, today).map_err(ImportError::Invalid)?;
            if !applied.is_empty() {
                info!(steps = ?applied, "migrated imported backup");
            }
            deep_merge(&mut merged, incoming);
        }
        DocumentKind::Partial => {
            for (target, sources) in MERGED_COLLECTIONS {
                let Some(records) = sources.iter().find_map(|key| incoming.remove(*key)) else {
                    continue;
                };
                let Value::Array(records) = records else { continue };
                merge_collection(&mut merged, target, records);
            }
        }
    }

    let mut state: AppState =
        serde_json::from_value(Value::Object(merged)).map_err(ImportError::Invalid)?;
    let cleared = state.revalidate_promotion_states();
    info!(kind = kind.as_str(), cleared, "imported document");
    Ok(Imported { state, kind })
}

fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    deep_merge(existing, incoming);
                    continue;
                }
                target.insert(key, Value::Object(incoming));
            }
            value => {
                target.insert(key, value);
            }
        }
    }
}

fn merge_collection(root: &mut Map<String, Value>, key: &str, incoming: Vec<Value>) {
    match root.get_mut(key) {
        Some(Value::Array(existing)) => merge_by_id(existing, incoming),
        _ => {
            let mut fresh = Vec::new();
            merge_by_id(&mut fresh, incoming);
            root.insert(key.to_owned(), Value::Array(fresh));
        }
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn merge_by_id(existing: &mut Vec<Value>, incoming: Vec<Value>) {
    for record in incoming {
        let position = record_id(&record)
            .and_then(|id| existing.iter().position(|current| record_id(current) == Some(id)));
        match position {
            Some(index) => existing[index] = record,
            None => existing.push(record),
        }
    }
}
