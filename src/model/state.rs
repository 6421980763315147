// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cardio::CardioSession;
use super::daily::Daily;
use super::exercise::ExerciseLog;
use super::ids::CardioId;
use super::sede::{sede_names_equal, SedeData};

/// Sedes every fresh installation starts with, in display order.
pub const DEFAULT_SEDES: [&str; 2] = ["VENTAS", "LEGANÉS"];

/// The whole persisted tree.
///
/// Fields are private; mutation goes through [`crate::ops::apply_ops`] so the promotion invariant
/// of every [`Daily`] record and the sede/order bookkeeping stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    sedes: BTreeMap<String, SedeData>,
    #[serde(default)]
    active_sede: Option<String>,
    #[serde(default)]
    daily_cardio_sessions: Vec<Daily<CardioSession>>,
    #[serde(default)]
    summary_cardio_sessions: Vec<CardioSession>,
    #[serde(default)]
    daily_logs: Vec<Daily<ExerciseLog>>,
    #[serde(default)]
    summary_logs: Vec<ExerciseLog>,
    #[serde(default)]
    sede_order: Vec<String>,
    #[serde(default)]
    collapsed_daily_cardio_sessions: Vec<CardioId>,
}

impl AppState {
    /// Fresh state: the default sedes, nothing active, no history.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            sedes: default_sedes(today),
            active_sede: None,
            daily_cardio_sessions: Vec::new(),
            summary_cardio_sessions: Vec::new(),
            daily_logs: Vec::new(),
            summary_logs: Vec::new(),
            sede_order: DEFAULT_SEDES.iter().map(|name| (*name).to_owned()).collect(),
            collapsed_daily_cardio_sessions: Vec::new(),
        }
    }

    pub fn sedes(&self) -> &BTreeMap<String, SedeData> {
        &self.sedes
    }

    pub(crate) fn sedes_mut(&mut self) -> &mut BTreeMap<String, SedeData> {
        &mut self.sedes
    }

    /// Existing sede key matching `name` without regard to case.
    pub fn find_sede_key(&self, name: &str) -> Option<&str> {
        self.sedes.keys().find(|key| sede_names_equal(key, name)).map(String::as_str)
    }

    pub fn active_sede(&self) -> Option<&str> {
        self.active_sede.as_deref()
    }

    pub(crate) fn set_active_sede(&mut self, name: Option<String>) {
        self.active_sede = name;
    }

    /// Configuration of the active sede, when one is active and still configured.
    pub fn active_sede_data(&self) -> Option<&SedeData> {
        self.active_sede.as_ref().and_then(|name| self.sedes.get(name))
    }

    pub(crate) fn active_sede_data_mut(&mut self) -> Option<&mut SedeData> {
        let name = self.active_sede.as_ref()?;
        self.sedes.get_mut(name)
    }

    pub fn daily_cardio_sessions(&self) -> &[Daily<CardioSession>] {
        &self.daily_cardio_sessions
    }

    pub(crate) fn daily_cardio_sessions_mut(&mut self) -> &mut Vec<Daily<CardioSession>> {
        &mut self.daily_cardio_sessions
    }

    pub fn summary_cardio_sessions(&self) -> &[CardioSession] {
        &self.summary_cardio_sessions
    }

    pub(crate) fn summary_cardio_sessions_mut(&mut self) -> &mut Vec<CardioSession> {
        &mut self.summary_cardio_sessions
    }

    pub fn daily_logs(&self) -> &[Daily<ExerciseLog>] {
        &self.daily_logs
    }

    pub(crate) fn daily_logs_mut(&mut self) -> &mut Vec<Daily<ExerciseLog>> {
        &mut self.daily_logs
    }

    pub fn summary_logs(&self) -> &[ExerciseLog] {
        &self.summary_logs
    }

    pub(crate) fn summary_logs_mut(&mut self) -> &mut Vec<ExerciseLog> {
        &mut self.summary_logs
    }

    /// Daily and summary logs borrowed together.
    pub(crate) fn logs_mut(&mut self) -> (&mut Vec<Daily<ExerciseLog>>, &mut Vec<ExerciseLog>) {
        (&mut self.daily_logs, &mut self.summary_logs)
    }

    /// Daily and summary cardio sessions borrowed together.
    pub(crate) fn cardio_mut(
        &mut self,
    ) -> (&mut Vec<Daily<CardioSession>>, &mut Vec<CardioSession>) {
        (&mut self.daily_cardio_sessions, &mut self.summary_cardio_sessions)
    }

    pub fn sede_order(&self) -> &[String] {
        &self.sede_order
    }

    pub(crate) fn sede_order_mut(&mut self) -> &mut Vec<String> {
        &mut self.sede_order
    }

    pub fn collapsed_daily_cardio_sessions(&self) -> &[CardioId] {
        &self.collapsed_daily_cardio_sessions
    }

    pub(crate) fn collapsed_daily_cardio_sessions_mut(&mut self) -> &mut Vec<CardioId> {
        &mut self.collapsed_daily_cardio_sessions
    }

    pub fn daily_log(&self, id: &str) -> Option<&Daily<ExerciseLog>> {
        self.daily_logs.iter().find(|log| log.id() == id)
    }

    pub fn daily_cardio_session(&self, id: &str) -> Option<&Daily<CardioSession>> {
        self.daily_cardio_sessions.iter().find(|session| session.id() == id)
    }

    pub fn summary_log(&self, id: &str) -> Option<&ExerciseLog> {
        self.summary_logs.iter().find(|log| log.id.as_str() == id)
    }

    pub fn summary_cardio_session(&self, id: &str) -> Option<&CardioSession> {
        self.summary_cardio_sessions.iter().find(|session| session.id.as_str() == id)
    }

    /// Re-checks the promotion flag of every daily record. Returns how many were cleared.
    pub fn revalidate_promotion_states(&mut self) -> usize {
        let logs = self
            .daily_logs
            .iter_mut()
            .map(Daily::revalidate_promotion_state)
            .filter(|cleared| *cleared)
            .count();
        let cardio = self
            .daily_cardio_sessions
            .iter_mut()
            .map(Daily::revalidate_promotion_state)
            .filter(|cleared| *cleared)
            .count();
        logs + cardio
    }
}

pub(crate) fn default_sedes(today: NaiveDate) -> BTreeMap<String, SedeData> {
    DEFAULT_SEDES.iter().map(|name| ((*name).to_owned(), SedeData::initial(today))).collect()
}
