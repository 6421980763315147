// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Op implementation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_sede_op(
    state: &mut AppState,
    op: &SedeOp,
    env: &OpEnv,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        SedeOp::SetActive { name: None } => {
            if state.active_sede().is_some() {
                state.set_active_sede(None);
                delta.record_updated(RecordRef::ActiveSede);
            }
            Ok(())
        }
        SedeOp::SetActive { name: Some(raw) } => {
            let name = normalize_sede_name(raw);
            if name.is_empty() {
                return Ok(());
            }

            if let Some(key) = state.find_sede_key(&name).map(str::to_owned) {
                if !state.sede_order().contains(&key) {
                    state.sede_order_mut().push(key.clone());
                    delta.record_updated(RecordRef::SedeOrder);
                }
                if state.active_sede() != Some(key.as_str()) {
                    state.set_active_sede(Some(key));
                    delta.record_updated(RecordRef::ActiveSede);
                }
                return Ok(());
            }

            state.sedes_mut().insert(name.clone(), SedeData::initial(env.today));
            state.sede_order_mut().push(name.clone());
            state.set_active_sede(Some(name.clone()));
            delta.record_added(RecordRef::Sede(name));
            delta.record_updated(RecordRef::SedeOrder);
            delta.record_updated(RecordRef::ActiveSede);
            Ok(())
        }
        SedeOp::Rename { old, new } => rename_sede(state, old, new, delta),
        SedeOp::RemoveWithData { name } => {
            let key = resolve_sede_key(state, name);
            remove_sede_config(state, &key, delta);

            let (daily_logs, summary_logs) = state.logs_mut();
            remove_tagged_daily(daily_logs, &key, RecordRef::DailyLog, delta);
            remove_tagged_summary(summary_logs, &key, RecordRef::SummaryLog, delta);
            let (daily_cardio, summary_cardio) = state.cardio_mut();
            remove_tagged_daily(daily_cardio, &key, RecordRef::DailyCardio, delta);
            remove_tagged_summary(summary_cardio, &key, RecordRef::SummaryCardio, delta);
            Ok(())
        }
        SedeOp::RemoveOnly { name } => {
            let key = resolve_sede_key(state, name);
            remove_sede_config(state, &key, delta);
            Ok(())
        }
        SedeOp::Move { index, direction } => {
            let order = state.sede_order_mut();
            let index = *index;
            let target = match direction {
                MoveDirection::Up if index > 0 && index < order.len() => index - 1,
                MoveDirection::Down if index < order.len().saturating_sub(1) => index + 1,
                _ => return Ok(()),
            };
            order.swap(index, target);
            delta.record_updated(RecordRef::SedeOrder);
            Ok(())
        }
    }
}

fn resolve_sede_key(state: &AppState, name: &str) -> String {
    state.find_sede_key(name).map_or_else(|| name.to_owned(), str::to_owned)
}

fn rename_sede(
    state: &mut AppState,
    old: &str,
    new: &str,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    let new_name = normalize_sede_name(new);
    if new_name.is_empty() {
        return Err(ApplyError::BlankSedeName);
    }
    let Some(old_key) = state.find_sede_key(old).map(str::to_owned) else {
        return Err(ApplyError::SedeNotFound { name: old.to_owned() });
    };
    if new_name == old_key {
        return Ok(());
    }
    if state.find_sede_key(&new_name).is_some_and(|existing| existing != old_key) {
        return Err(ApplyError::SedeNameConflict { name: new_name });
    }

    if let Some(config) = state.sedes_mut().remove(&old_key) {
        state.sedes_mut().insert(new_name.clone(), config);
    }
    delta.record_removed(RecordRef::Sede(old_key.clone()));
    delta.record_added(RecordRef::Sede(new_name.clone()));

    let (daily_logs, summary_logs) = state.logs_mut();
    retag_daily(daily_logs, &old_key, &new_name, RecordRef::DailyLog, delta);
    retag_summary(summary_logs, &old_key, &new_name, RecordRef::SummaryLog, delta);
    let (daily_cardio, summary_cardio) = state.cardio_mut();
    retag_daily(daily_cardio, &old_key, &new_name, RecordRef::DailyCardio, delta);
    retag_summary(summary_cardio, &old_key, &new_name, RecordRef::SummaryCardio, delta);

    let mut order_changed = false;
    for name in state.sede_order_mut().iter_mut().filter(|name| **name == old_key) {
        name.clone_from(&new_name);
        order_changed = true;
    }
    if order_changed {
        delta.record_updated(RecordRef::SedeOrder);
    }
    if state.active_sede() == Some(old_key.as_str()) {
        state.set_active_sede(Some(new_name));
        delta.record_updated(RecordRef::ActiveSede);
    }
    Ok(())
}

fn remove_sede_config(state: &mut AppState, key: &str, delta: &mut DeltaBuilder) {
    if state.sedes_mut().remove(key).is_some() {
        delta.record_removed(RecordRef::Sede(key.to_owned()));
    }
    let order = state.sede_order_mut();
    let before = order.len();
    order.retain(|name| name != key);
    if order.len() != before {
        delta.record_updated(RecordRef::SedeOrder);
    }
    if state.active_sede() == Some(key) {
        state.set_active_sede(None);
        delta.record_updated(RecordRef::ActiveSede);
    }
}

fn retag_daily<T: Promotable + PartialEq>(
    records: &mut [Daily<T>],
    old: &str,
    new: &str,
    to_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    for record in records.iter_mut().filter(|record| record.entry().sede() == old) {
        record.update(|entry| entry.set_sede(new.to_owned()));
        delta.record_updated(to_ref(record.id().to_owned()));
    }
}

fn retag_summary<T: Record>(
    records: &mut [T],
    old: &str,
    new: &str,
    to_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    for record in records.iter_mut().filter(|record| record.sede() == old) {
        record.set_sede(new.to_owned());
        delta.record_updated(to_ref(record.record_id().to_owned()));
    }
}

fn remove_tagged_daily<T: Promotable>(
    records: &mut Vec<Daily<T>>,
    sede: &str,
    to_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    records.retain(|record| {
        let keep = record.entry().sede() != sede;
        if !keep {
            delta.record_removed(to_ref(record.id().to_owned()));
        }
        keep
    });
}

fn remove_tagged_summary<T: Record>(
    records: &mut Vec<T>,
    sede: &str,
    to_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    records.retain(|record| {
        let keep = record.sede() != sede;
        if !keep {
            delta.record_removed(to_ref(record.record_id().to_owned()));
        }
        keep
    });
}

fn record_promotion(
    outcome: Option<promotion::Promotion>,
    id: &str,
    daily_ref: fn(String) -> RecordRef,
    summary_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    let Some(outcome) = outcome else {
        return;
    };
    if outcome.daily_changed {
        delta.record_updated(daily_ref(id.to_owned()));
    }
    match outcome.summary {
        promotion::SummaryUpsert::Inserted => delta.record_added(summary_ref(id.to_owned())),
        promotion::SummaryUpsert::Replaced => delta.record_updated(summary_ref(id.to_owned())),
        promotion::SummaryUpsert::Unchanged => {}
    }
}

fn record_demotion(
    demotion: promotion::Demotion,
    id: &str,
    daily_ref: fn(String) -> RecordRef,
    summary_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    if demotion.summary_removed {
        delta.record_removed(summary_ref(id.to_owned()));
    }
    if demotion.daily_cleared {
        delta.record_updated(daily_ref(id.to_owned()));
    }
}

fn record_bulk_removal(
    removal: promotion::BulkRemoval,
    daily_ref: fn(String) -> RecordRef,
    summary_ref: fn(String) -> RecordRef,
    delta: &mut DeltaBuilder,
) {
    for id in removal.cleared {
        delta.record_updated(daily_ref(id));
    }
    for id in removal.removed {
        delta.record_removed(summary_ref(id));
    }
}

fn apply_log_op(state: &mut AppState, op: &LogOp, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    match op {
        LogOp::Add { log_id, draft } => {
            let Some(sede) = state.active_sede().map(str::to_owned) else {
                return Ok(());
            };
            if state.daily_log(log_id.as_str()).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: RecordKind::DailyLog,
                    id: log_id.to_string(),
                });
            }
            let log = draft.clone().into_log(log_id.clone(), sede);
            state.daily_logs_mut().insert(0, Daily::new(log));
            delta.record_added(RecordRef::DailyLog(log_id.to_string()));
            Ok(())
        }
        LogOp::Update { log_id, patch } => {
            update_daily_log(state, log_id, delta, |log| patch.apply_to(log));
            Ok(())
        }
        LogOp::Remove { log_id } => {
            let logs = state.daily_logs_mut();
            let before = logs.len();
            logs.retain(|log| log.id() != log_id.as_str());
            if logs.len() != before {
                delta.record_removed(RecordRef::DailyLog(log_id.to_string()));
            }
            Ok(())
        }
        LogOp::RemoveMedia { log_id, index } => {
            update_daily_log(state, log_id, delta, |log| {
                remove_media_at(&mut log.media, *index);
            });
            Ok(())
        }
        LogOp::Promote { log_id } => {
            let (daily, summary) = state.logs_mut();
            let outcome = promotion::promote(daily, summary, log_id.as_str());
            record_promotion(outcome, log_id.as_str(), RecordRef::DailyLog, RecordRef::SummaryLog, delta);
            Ok(())
        }
    }
}

fn update_daily_log(
    state: &mut AppState,
    log_id: &LogId,
    delta: &mut DeltaBuilder,
    edit: impl FnOnce(&mut ExerciseLog),
) {
    let Some(log) = state.daily_logs_mut().iter_mut().find(|log| log.id() == log_id.as_str()) else {
        return;
    };
    if log.update(edit) {
        delta.record_updated(RecordRef::DailyLog(log_id.to_string()));
    }
}

fn apply_cardio_op(
    state: &mut AppState,
    op: &CardioOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        CardioOp::Add { session_id, draft } => {
            let Some(sede) = state.active_sede().map(str::to_owned) else {
                return Ok(());
            };
            if state.daily_cardio_session(session_id.as_str()).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: RecordKind::DailyCardio,
                    id: session_id.to_string(),
                });
            }
            let session = draft.clone().into_session(session_id.clone(), sede);
            state.daily_cardio_sessions_mut().insert(0, Daily::new(session));
            delta.record_added(RecordRef::DailyCardio(session_id.to_string()));
            Ok(())
        }
        CardioOp::Update { session_id, patch } => {
            let sessions = state.daily_cardio_sessions_mut();
            if let Some(session) = sessions.iter_mut().find(|s| s.id() == session_id.as_str()) {
                if session.update(|s| patch.apply_to(s)) {
                    delta.record_updated(RecordRef::DailyCardio(session_id.to_string()));
                }
            }
            Ok(())
        }
        CardioOp::Remove { session_id } => {
            let sessions = state.daily_cardio_sessions_mut();
            let before = sessions.len();
            sessions.retain(|s| s.id() != session_id.as_str());
            if sessions.len() != before {
                delta.record_removed(RecordRef::DailyCardio(session_id.to_string()));
            }
            Ok(())
        }
        CardioOp::Promote { session_id } => {
            let (daily, summary) = state.cardio_mut();
            let outcome = promotion::promote(daily, summary, session_id.as_str());
            record_promotion(
                outcome,
                session_id.as_str(),
                RecordRef::DailyCardio,
                RecordRef::SummaryCardio,
                delta,
            );
            Ok(())
        }
        CardioOp::ToggleCollapsed { session_id } => {
            let collapsed = state.collapsed_daily_cardio_sessions_mut();
            if let Some(position) = collapsed.iter().position(|id| id == session_id) {
                collapsed.remove(position);
            } else {
                collapsed.push(session_id.clone());
            }
            delta.record_updated(RecordRef::CardioCollapse);
            Ok(())
        }
    }
}

fn apply_summary_op(state: &mut AppState, op: &SummaryOp, env: &OpEnv, delta: &mut DeltaBuilder) {
    let today = env.today;
    match op {
        SummaryOp::RemoveLog { log_id } => {
            let (daily, summary) = state.logs_mut();
            let demotion = promotion::demote(daily, summary, log_id.as_str());
            record_demotion(demotion, log_id.as_str(), RecordRef::DailyLog, RecordRef::SummaryLog, delta);
        }
        SummaryOp::RemoveLogMedia { log_id, index } => {
            let logs = state.summary_logs_mut();
            if let Some(log) = logs.iter_mut().find(|log| log.id == *log_id) {
                if remove_media_at(&mut log.media, *index) {
                    delta.record_updated(RecordRef::SummaryLog(log_id.to_string()));
                }
            }
        }
        SummaryOp::RemoveCardio { session_id } => {
            let (daily, summary) = state.cardio_mut();
            let demotion = promotion::demote(daily, summary, session_id.as_str());
            record_demotion(
                demotion,
                session_id.as_str(),
                RecordRef::DailyCardio,
                RecordRef::SummaryCardio,
                delta,
            );
        }
        SummaryOp::RemoveWeek { week_start } => {
            let Some(week) = WeekRange::parse(week_start, today) else {
                return;
            };
            let (daily, summary) = state.cardio_mut();
            let removal =
                promotion::remove_summary_where(daily, summary, |s| week.contains_record(s, today));
            record_bulk_removal(removal, RecordRef::DailyCardio, RecordRef::SummaryCardio, delta);

            let (daily, summary) = state.logs_mut();
            let removal =
                promotion::remove_summary_where(daily, summary, |l| week.contains_record(l, today));
            record_bulk_removal(removal, RecordRef::DailyLog, RecordRef::SummaryLog, delta);
        }
        SummaryOp::RemoveWeekCardio { week_start } => {
            let Some(week) = WeekRange::parse(week_start, today) else {
                return;
            };
            let (daily, summary) = state.cardio_mut();
            let removal =
                promotion::remove_summary_where(daily, summary, |s| week.contains_record(s, today));
            record_bulk_removal(removal, RecordRef::DailyCardio, RecordRef::SummaryCardio, delta);
        }
        SummaryOp::RemoveDayExercises { week_start, day } => {
            let Some(week) = WeekRange::parse(week_start, today) else {
                return;
            };
            let (daily, summary) = state.logs_mut();
            let removal = promotion::remove_summary_where(daily, summary, |l| {
                l.day == *day && week.contains_record(l, today)
            });
            record_bulk_removal(removal, RecordRef::DailyLog, RecordRef::SummaryLog, delta);
        }
    }
}

fn apply_day_op(state: &mut AppState, op: &DayOp, env: &OpEnv, delta: &mut DeltaBuilder) {
    let Some(sede_name) = state.active_sede().map(str::to_owned) else {
        return;
    };
    let Some(sede) = state.active_sede_data_mut() else {
        return;
    };

    let day = match op {
        DayOp::UpdateCardioForm { day, .. }
        | DayOp::SetCardioVisibility { day, .. }
        | DayOp::ClearCardioForm { day }
        | DayOp::ToggleLogExpansion { day, .. } => *day,
    };
    let before = sede.workout_days.get(&day).cloned();
    let day_state = sede.workout_day_mut(day, env.today);

    match op {
        DayOp::UpdateCardioForm { patch, .. } => patch.apply_to(&mut day_state.cardio),
        DayOp::SetCardioVisibility { visible, .. } => day_state.is_cardio_form_visible = *visible,
        DayOp::ClearCardioForm { .. } => day_state.cardio = CardioForm::blank(env.today),
        DayOp::ToggleLogExpansion { log_id, .. } => {
            let expanded = &mut day_state.expanded_logs;
            if let Some(position) = expanded.iter().position(|id| id == log_id) {
                expanded.remove(position);
            } else {
                expanded.push(log_id.clone());
            }
        }
    }

    if sede.workout_days.get(&day) != before.as_ref() {
        delta.record_updated(RecordRef::Sede(sede_name));
    }
}

fn link_list_mut<'a>(
    sede: &'a mut SedeData,
    target: &LinkTarget,
    create: bool,
) -> Option<&'a mut Vec<LinkItem>> {
    match target {
        LinkTarget::Stretching => Some(&mut sede.stretching_links),
        LinkTarget::Posture => Some(&mut sede.posture_links),
        LinkTarget::MuscleGroup { day, muscle } if create => Some(
            sede.muscle_group_links.entry(*day).or_default().entry(muscle.clone()).or_default(),
        ),
        LinkTarget::MuscleGroup { day, muscle } => {
            sede.muscle_group_links.get_mut(day).and_then(|groups| groups.get_mut(muscle))
        }
    }
}

fn apply_link_op(state: &mut AppState, op: &LinkOp, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    let Some(sede_name) = state.active_sede().map(str::to_owned) else {
        return Ok(());
    };
    let Some(sede) = state.active_sede_data_mut() else {
        return Ok(());
    };

    let changed = match op {
        LinkOp::Add { target, link_id, url } => {
            let url = url.trim();
            if url.is_empty() {
                return Ok(());
            }
            let Some(links) = link_list_mut(sede, target, true) else {
                return Ok(());
            };
            if links.iter().any(|link| link.id == *link_id) {
                return Err(ApplyError::AlreadyExists {
                    kind: RecordKind::Link,
                    id: link_id.to_string(),
                });
            }
            if links.iter().any(|link| link.url == url) {
                false
            } else {
                let name = format!("Video {}", links.len() + 1);
                links.push(LinkItem { id: link_id.clone(), url: url.to_owned(), name });
                true
            }
        }
        LinkOp::Remove { target, link_id } => link_list_mut(sede, target, false).is_some_and(|links| {
            let before = links.len();
            links.retain(|link| link.id != *link_id);
            links.len() != before
        }),
        LinkOp::Rename { target, link_id, name } => link_list_mut(sede, target, false)
            .and_then(|links| links.iter_mut().find(|link| link.id == *link_id))
            .is_some_and(|link| {
                if link.name == *name {
                    return false;
                }
                link.name.clone_from(name);
                true
            }),
    };

    if changed {
        delta.record_updated(RecordRef::Sede(sede_name));
    }
    Ok(())
}

fn apply_favorite_op(
    state: &mut AppState,
    op: &FavoriteOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    let Some(sede_name) = state.active_sede().map(str::to_owned) else {
        return Ok(());
    };
    let Some(sede) = state.active_sede_data_mut() else {
        return Ok(());
    };
    let favorites = &mut sede.favorite_exercises;

    let changed = match op {
        FavoriteOp::Add { favorite_id, draft } => {
            let wanted = draft.name.to_uppercase();
            match favorites.iter_mut().find(|fav| fav.name.to_uppercase() == wanted) {
                Some(existing) => {
                    existing.media.extend(draft.media.iter().cloned());
                    existing.day_title.clone_from(&draft.day_title);
                    existing.notes.clone_from(&draft.notes);
                }
                None => {
                    if favorites.iter().any(|fav| fav.id == *favorite_id) {
                        return Err(ApplyError::AlreadyExists {
                            kind: RecordKind::Favorite,
                            id: favorite_id.to_string(),
                        });
                    }
                    favorites.push(FavoriteExercise {
                        id: favorite_id.clone(),
                        name: draft.name.clone(),
                        day_title: draft.day_title.clone(),
                        media: draft.media.clone(),
                        notes: draft.notes.clone(),
                    });
                }
            }
            true
        }
        FavoriteOp::Remove { favorite_id } => {
            let before = favorites.len();
            favorites.retain(|fav| fav.id != *favorite_id);
            favorites.len() != before
        }
        FavoriteOp::RemoveMedia { favorite_id, index } => favorites
            .iter_mut()
            .find(|fav| fav.id == *favorite_id)
            .is_some_and(|fav| remove_media_at(&mut fav.media, *index)),
    };

    if changed {
        delta.record_updated(RecordRef::Sede(sede_name));
    }
    Ok(())
}
