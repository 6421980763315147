// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Export and import encodings.
//!
//! Exports always read the summary history (the full backup aside) and come in two encodings:
//! structural JSON that can be imported again, and a human-readable text report.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::{
    format_iso_date, month_name, AppState, CardioSession, DayCategory, ExerciseLog,
};
use crate::query::WeekRange;

pub mod json;
pub mod text;


pub use json::{import_document, Imported, ImportError};

pub const NO_DATA_MESSAGE: &str = "No hay datos para exportar.";

/// A rendered export, ready to be written under `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

/// Which summary collection a day-scoped export reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayExportKind {
    Cardio,
    Exercises,
}

impl DayExportKind {
    fn file_tag(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Exercises => "ejercicios",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// The whole state. The text encoding renders the summary report.
    Full,
    Summary,
    Week { week_start: String },
    Day { week_start: String, day: DayCategory, kind: DayExportKind },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No hay datos para exportar.")]
    NoData,
    #[error("invalid week start {value:?}")]
    InvalidWeekStart { value: String },
    #[error("failed to encode export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub fn export(
    state: &AppState,
    scope: &ExportScope,
    format: ExportFormat,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    match (scope, format) {
        (ExportScope::Full, ExportFormat::Json) => json::export_full(state, today),
        (ExportScope::Full | ExportScope::Summary, ExportFormat::Text) => {
            Ok(text::export_summary(state, today))
        }
        (ExportScope::Summary, ExportFormat::Json) => json::export_summary(state, today),
        (ExportScope::Week { week_start }, ExportFormat::Json) => {
            json::export_week(state, week_range(week_start, today)?, today)
        }
        (ExportScope::Week { week_start }, ExportFormat::Text) => {
            Ok(text::export_week(state, week_range(week_start, today)?, today))
        }
        (ExportScope::Day { week_start, day, kind }, ExportFormat::Json) => {
            json::export_day(state, week_range(week_start, today)?, *day, *kind, today)
        }
        (ExportScope::Day { week_start, day, kind }, ExportFormat::Text) => {
            text::export_day(state, week_range(week_start, today)?, *day, *kind, today)
        }
    }
}

fn week_range(week_start: &str, today: NaiveDate) -> Result<WeekRange, ExportError> {
    WeekRange::parse(week_start, today)
        .ok_or_else(|| ExportError::InvalidWeekStart { value: week_start.to_owned() })
}

/// File-name fragment for a day title: `"Pecho y Bíceps"` becomes `"pecho-y-biceps"`.
pub fn day_slug(title: &str) -> Result<String, regex::Error> {
    let whitespace = Regex::new(r"\s+")?;
    let disallowed = Regex::new(r"[^a-z0-9-]")?;

    let folded: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .replace('&', "y");
    let dashed = whitespace.replace_all(&folded, "-");
    Ok(disallowed.replace_all(&dashed, "").into_owned())
}

pub(crate) fn full_file_name(today: NaiveDate) -> String {
    format!("progreso-gym-completo-{}.json", format_iso_date(today))
}

pub(crate) fn summary_file_name(today: NaiveDate, format: ExportFormat) -> String {
    format!("resumen-progreso-gym-global-{}.{}", format_iso_date(today), format.extension())
}

pub(crate) fn week_file_name(week: WeekRange, format: ExportFormat) -> String {
    let start = week.start();
    format!(
        "resumen-semana-{}-{}-{}.{}",
        week.week_of_month(),
        month_name(start),
        start.year(),
        format.extension()
    )
}

pub(crate) fn day_file_name(
    week: WeekRange,
    day: DayCategory,
    kind: DayExportKind,
    format: ExportFormat,
) -> Result<String, ExportError> {
    Ok(format!(
        "resumen-{}-{}-{}.{}",
        kind.file_tag(),
        day_slug(day.title())?,
        format_iso_date(week.start()),
        format.extension()
    ))
}

/// Summary records dated inside `week`, in collection order.
pub(crate) fn week_selection<'a>(
    state: &'a AppState,
    week: WeekRange,
    today: NaiveDate,
) -> (Vec<&'a CardioSession>, Vec<&'a ExerciseLog>) {
    let cardio = state
        .summary_cardio_sessions()
        .iter()
        .filter(|session| week.contains_record(*session, today))
        .collect();
    let logs =
        state.summary_logs().iter().filter(|log| week.contains_record(*log, today)).collect();
    (cardio, logs)
}

/// Summary records of one category dated inside `week`. Only the collection named by `kind` is
/// read; the other side is empty.
pub(crate) fn day_selection<'a>(
    state: &'a AppState,
    week: WeekRange,
    day: DayCategory,
    kind: DayExportKind,
    today: NaiveDate,
) -> (Vec<&'a CardioSession>, Vec<&'a ExerciseLog>) {
    let (cardio, logs) = week_selection(state, week, today);
    match kind {
        DayExportKind::Cardio => {
            (cardio.into_iter().filter(|session| session.day == day).collect(), Vec::new())
        }
        DayExportKind::Exercises => {
            (Vec::new(), logs.into_iter().filter(|log| log.day == day).collect())
        }
    }
}
