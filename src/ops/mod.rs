// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations over [`AppState`].
//!
//! Every state change is an [`Op`]. A batch is applied to a working copy and committed only when
//! every op succeeds, and the result carries a coarse delta of the records it touched. An empty
//! delta means nothing changed (missing ids, no active sede and similar silent no-ops).

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::model::media::remove_media_at;
use crate::model::{
    normalize_sede_name, AppState, CardioForm, CardioId, CardioMetrics, CardioSession, Daily,
    DayCategory, ExerciseLog, ExerciseMedia, FavoriteExercise, FavoriteId, LinkId, LinkItem,
    LogId, Promotable, Record, SedeData,
};
use crate::query::WeekRange;

mod promotion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Sede(SedeOp),
    Log(LogOp),
    Cardio(CardioOp),
    Summary(SummaryOp),
    Day(DayOp),
    Link(LinkOp),
    Favorite(FavoriteOp),
}

impl Op {
    /// Adds a daily log under a freshly generated id.
    pub fn add_log(draft: ExerciseDraft) -> Self {
        Self::Log(LogOp::Add { log_id: LogId::generate(), draft })
    }

    /// Adds a daily cardio session under a freshly generated id.
    pub fn add_cardio(draft: CardioDraft) -> Self {
        Self::Cardio(CardioOp::Add { session_id: CardioId::generate(), draft })
    }

    pub fn add_link(target: LinkTarget, url: impl Into<String>) -> Self {
        Self::Link(LinkOp::Add { target, link_id: LinkId::generate(), url: url.into() })
    }

    pub fn add_favorite(draft: FavoriteDraft) -> Self {
        Self::Favorite(FavoriteOp::Add { favorite_id: FavoriteId::generate(), draft })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SedeOp {
    /// `None` deactivates. A new name creates the sede with default configuration.
    SetActive { name: Option<String> },
    /// Re-keys the sede and retags its records. Rejects the whole batch with `BlankSedeName`,
    /// `SedeNotFound` or `SedeNameConflict`; renaming to the same name is a no-op.
    Rename { old: String, new: String },
    /// Removes the configuration and every record tagged with the sede.
    RemoveWithData { name: String },
    /// Removes the configuration only; records keep their tag.
    RemoveOnly { name: String },
    Move { index: usize, direction: MoveDirection },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOp {
    Add { log_id: LogId, draft: ExerciseDraft },
    Update { log_id: LogId, patch: ExercisePatch },
    Remove { log_id: LogId },
    RemoveMedia { log_id: LogId, index: usize },
    Promote { log_id: LogId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardioOp {
    Add { session_id: CardioId, draft: CardioDraft },
    Update { session_id: CardioId, patch: CardioPatch },
    Remove { session_id: CardioId },
    Promote { session_id: CardioId },
    ToggleCollapsed { session_id: CardioId },
}

/// Removals on the summary side. Each one also clears the promotion of the daily origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOp {
    RemoveLog { log_id: LogId },
    /// Edits the summary copy only; the daily origin keeps its media.
    RemoveLogMedia { log_id: LogId, index: usize },
    RemoveCardio { session_id: CardioId },
    RemoveWeek { week_start: String },
    RemoveWeekCardio { week_start: String },
    RemoveDayExercises { week_start: String, day: DayCategory },
}

/// Per-day form state of the active sede.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOp {
    UpdateCardioForm { day: DayCategory, patch: CardioFormPatch },
    SetCardioVisibility { day: DayCategory, visible: bool },
    ClearCardioForm { day: DayCategory },
    ToggleLogExpansion { day: DayCategory, log_id: LogId },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Stretching,
    Posture,
    MuscleGroup { day: DayCategory, muscle: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOp {
    /// Ignored when the URL is blank or already listed.
    Add { target: LinkTarget, link_id: LinkId, url: String },
    Remove { target: LinkTarget, link_id: LinkId },
    Rename { target: LinkTarget, link_id: LinkId, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteOp {
    /// Merges into an existing favorite with the same name (ignoring case).
    Add { favorite_id: FavoriteId, draft: FavoriteDraft },
    Remove { favorite_id: FavoriteId },
    RemoveMedia { favorite_id: FavoriteId, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub exercise_name: String,
    pub date: String,
    pub day: DayCategory,
    pub series: String,
    pub reps: String,
    pub kilos: String,
    pub incline: Option<String>,
    pub media: Vec<ExerciseMedia>,
    pub notes: Option<String>,
}

impl ExerciseDraft {
    pub fn new(exercise_name: impl Into<String>, date: impl Into<String>, day: DayCategory) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            date: date.into(),
            day,
            series: String::new(),
            reps: String::new(),
            kilos: String::new(),
            incline: None,
            media: Vec::new(),
            notes: None,
        }
    }

    pub fn sets(mut self, series: &str, reps: &str, kilos: &str) -> Self {
        series.clone_into(&mut self.series);
        reps.clone_into(&mut self.reps);
        kilos.clone_into(&mut self.kilos);
        self
    }

    fn into_log(self, log_id: LogId, sede: String) -> ExerciseLog {
        ExerciseLog {
            id: log_id,
            exercise_name: self.exercise_name.to_uppercase(),
            date: self.date,
            reps: self.reps,
            kilos: self.kilos,
            series: self.series,
            incline: self.incline,
            day: self.day,
            media: self.media,
            notes: self.notes,
            sede,
        }
    }
}

/// Field-wise merge for a daily log. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExercisePatch {
    pub exercise_name: Option<String>,
    pub date: Option<String>,
    pub day: Option<DayCategory>,
    pub series: Option<String>,
    pub reps: Option<String>,
    pub kilos: Option<String>,
    pub incline: Option<Option<String>>,
    pub media: Option<Vec<ExerciseMedia>>,
    pub notes: Option<Option<String>>,
    pub sede: Option<String>,
}

impl ExercisePatch {
    fn apply_to(&self, log: &mut ExerciseLog) {
        if let Some(name) = &self.exercise_name {
            log.exercise_name = name.to_uppercase();
        }
        if let Some(date) = &self.date {
            log.date.clone_from(date);
        }
        if let Some(day) = self.day {
            log.day = day;
        }
        if let Some(series) = &self.series {
            log.series.clone_from(series);
        }
        if let Some(reps) = &self.reps {
            log.reps.clone_from(reps);
        }
        if let Some(kilos) = &self.kilos {
            log.kilos.clone_from(kilos);
        }
        if let Some(incline) = &self.incline {
            log.incline.clone_from(incline);
        }
        if let Some(media) = &self.media {
            log.media.clone_from(media);
        }
        if let Some(notes) = &self.notes {
            log.notes.clone_from(notes);
        }
        if let Some(sede) = &self.sede {
            log.sede.clone_from(sede);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardioDraft {
    pub date: String,
    pub title: Option<String>,
    pub metrics: CardioMetrics,
    pub notes: Option<String>,
}

impl CardioDraft {
    /// Draft from a filled-in day form; blank title and notes become absent.
    pub fn from_form(form: &CardioForm) -> Self {
        let non_blank = |s: &str| (!s.trim().is_empty()).then(|| s.to_owned());
        Self {
            date: form.date.clone(),
            title: non_blank(&form.title),
            metrics: form.metrics.clone(),
            notes: non_blank(&form.notes),
        }
    }

    fn into_session(self, session_id: CardioId, sede: String) -> CardioSession {
        CardioSession {
            id: session_id,
            day: DayCategory::Cardio,
            date: self.date,
            title: self.title,
            metrics: self.metrics,
            notes: self.notes,
            sede,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardioPatch {
    pub date: Option<String>,
    pub title: Option<Option<String>>,
    pub metrics: Option<CardioMetrics>,
    pub notes: Option<Option<String>>,
}

impl CardioPatch {
    fn apply_to(&self, session: &mut CardioSession) {
        if let Some(date) = &self.date {
            session.date.clone_from(date);
        }
        if let Some(title) = &self.title {
            session.title.clone_from(title);
        }
        if let Some(metrics) = &self.metrics {
            session.metrics.clone_from(metrics);
        }
        if let Some(notes) = &self.notes {
            session.notes.clone_from(notes);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardioFormPatch {
    pub date: Option<String>,
    pub title: Option<String>,
    pub metrics: Option<CardioMetrics>,
    pub notes: Option<String>,
}

impl CardioFormPatch {
    fn apply_to(&self, form: &mut CardioForm) {
        if let Some(date) = &self.date {
            form.date.clone_from(date);
        }
        if let Some(title) = &self.title {
            form.title.clone_from(title);
        }
        if let Some(metrics) = &self.metrics {
            form.metrics.clone_from(metrics);
        }
        if let Some(notes) = &self.notes {
            form.notes.clone_from(notes);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteDraft {
    pub name: String,
    pub day_title: String,
    pub media: Vec<ExerciseMedia>,
    pub notes: Option<String>,
}

/// Inputs an op needs from outside the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpEnv {
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub applied: usize,
    pub delta: Delta,
}

/// A changed part of the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordRef {
    /// Configuration of one sede (forms, links, favorites).
    Sede(String),
    ActiveSede,
    SedeOrder,
    DailyLog(String),
    SummaryLog(String),
    DailyCardio(String),
    SummaryCardio(String),
    CardioCollapse,
}

/// Coarse delta of what an op batch touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<RecordRef>,
    pub removed: Vec<RecordRef>,
    pub updated: Vec<RecordRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<RecordRef>,
    removed: HashSet<RecordRef>,
    updated: HashSet<RecordRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, record: RecordRef) {
        if self.removed.remove(&record) {
            // removed then re-added within one batch
            self.updated.insert(record);
            return;
        }
        self.updated.remove(&record);
        self.added.insert(record);
    }

    fn record_removed(&mut self, record: RecordRef) {
        self.updated.remove(&record);
        if self.added.remove(&record) {
            return;
        }
        self.removed.insert(record);
    }

    fn record_updated(&mut self, record: RecordRef) {
        if self.added.contains(&record) || self.removed.contains(&record) {
            return;
        }
        self.updated.insert(record);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta { added, removed, updated }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    DailyLog,
    DailyCardio,
    Link,
    Favorite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("a sede named {name} already exists")]
    SedeNameConflict { name: String },
    #[error("sede name must not be blank")]
    BlankSedeName,
    #[error("sede {name} not found")]
    SedeNotFound { name: String },
    #[error("{kind:?} with id {id} already exists")]
    AlreadyExists { kind: RecordKind, id: String },
}

/// Applies `ops` in order. Either every op succeeds and the state is replaced, or the state is
/// left untouched.
pub fn apply_ops(state: &mut AppState, ops: &[Op], env: &OpEnv) -> Result<ApplyResult, ApplyError> {
    if ops.is_empty() {
        return Ok(ApplyResult { applied: 0, delta: Delta::default() });
    }

    let mut next = state.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Sede(op) => apply_sede_op(&mut next, op, env, &mut delta)?,
            Op::Log(op) => apply_log_op(&mut next, op, &mut delta)?,
            Op::Cardio(op) => apply_cardio_op(&mut next, op, &mut delta)?,
            Op::Summary(op) => apply_summary_op(&mut next, op, env, &mut delta),
            Op::Day(op) => apply_day_op(&mut next, op, env, &mut delta),
            Op::Link(op) => apply_link_op(&mut next, op, &mut delta)?,
            Op::Favorite(op) => apply_favorite_op(&mut next, op, &mut delta)?,
        }
    }

    let delta = delta.finish();
    if !delta.is_empty() {
        *state = next;
    }
    debug!(
        ops = ops.len(),
        added = delta.added.len(),
        removed = delta.removed.len(),
        updated = delta.updated.len(),
        "applied ops"
    );

    Ok(ApplyResult { applied: ops.len(), delta })
}

// Extracted op-application implementation for sede/record/config mutations.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
