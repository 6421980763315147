// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use crate::model::{
    AppState, CardioId, CardioMetrics, DayCategory, DistanceUnit, ExerciseMedia, FavoriteId, LinkId,
    LogId, MediaKind,
};

use super::{
    apply_ops, ApplyError, CardioDraft, CardioFormPatch, CardioOp, CardioPatch, DayOp,
    ExerciseDraft, ExercisePatch, FavoriteDraft, FavoriteOp, LinkOp, LinkTarget, LogOp,
    MoveDirection, Op, OpEnv, RecordKind, RecordRef, SedeOp, SummaryOp,
};

fn env() -> OpEnv {
    OpEnv { today: NaiveDate::from_ymd_opt(2024, 3, 5).expect("date") }
}

fn apply(state: &mut AppState, ops: &[Op]) -> super::ApplyResult {
    apply_ops(state, ops, &env()).expect("apply")
}

fn activate(name: &str) -> Op {
    Op::Sede(SedeOp::SetActive { name: Some(name.to_owned()) })
}

fn log_id(id: &str) -> LogId {
    LogId::new(id).expect("log id")
}

fn cardio_id(id: &str) -> CardioId {
    CardioId::new(id).expect("cardio id")
}

fn add_log(id: &str, name: &str, date: &str, day: DayCategory) -> Op {
    Op::Log(LogOp::Add {
        log_id: log_id(id),
        draft: ExerciseDraft::new(name, date, day).sets("3", "10", "40"),
    })
}

fn add_cardio(id: &str, date: &str) -> Op {
    Op::Cardio(CardioOp::Add {
        session_id: cardio_id(id),
        draft: CardioDraft {
            date: date.to_owned(),
            title: Some("Cinta".to_owned()),
            metrics: CardioMetrics {
                speed: "10".to_owned(),
                distance: "5".to_owned(),
                distance_unit: Some(DistanceUnit::Km),
                ..CardioMetrics::default()
            },
            notes: None,
        },
    })
}

#[fixture]
fn state() -> AppState {
    AppState::new(env().today)
}

#[fixture]
fn active_state(mut state: AppState) -> AppState {
    apply(&mut state, &[activate("ventas")]);
    state
}

#[rstest]
fn set_active_normalizes_and_reuses_existing_sede(mut state: AppState) {
    let result = apply(&mut state, &[activate("  ventas ")]);
    assert_eq!(state.active_sede(), Some("VENTAS"));
    assert_eq!(result.delta.updated, vec![RecordRef::ActiveSede]);
    assert_eq!(state.sede_order(), ["VENTAS", "LEGANÉS"]);

    apply(&mut state, &[activate("Centro")]);
    assert_eq!(state.active_sede(), Some("CENTRO"));
    assert_eq!(state.sede_order(), ["VENTAS", "LEGANÉS", "CENTRO"]);
    assert!(state.sedes().contains_key("CENTRO"));

    apply(&mut state, &[Op::Sede(SedeOp::SetActive { name: None })]);
    assert_eq!(state.active_sede(), None);
}

#[rstest]
fn blank_sede_name_is_ignored(mut state: AppState) {
    let result = apply(&mut state, &[activate("   ")]);
    assert!(result.delta.is_empty());
    assert_eq!(state.active_sede(), None);
}

#[rstest]
fn rename_rewrites_every_reference(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            add_cardio("c1", "2024-03-04"),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            Op::Cardio(CardioOp::Promote { session_id: cardio_id("c1") }),
        ],
    );

    apply(
        &mut active_state,
        &[Op::Sede(SedeOp::Rename { old: "VENTAS".to_owned(), new: "centro".to_owned() })],
    );

    assert!(active_state.sedes().contains_key("CENTRO"));
    assert!(!active_state.sedes().contains_key("VENTAS"));
    assert_eq!(active_state.active_sede(), Some("CENTRO"));
    assert_eq!(active_state.sede_order(), ["CENTRO", "LEGANÉS"]);
    assert_eq!(active_state.daily_logs()[0].entry().sede, "CENTRO");
    assert_eq!(active_state.summary_logs()[0].sede, "CENTRO");
    assert_eq!(active_state.daily_cardio_sessions()[0].entry().sede, "CENTRO");
    assert_eq!(active_state.summary_cardio_sessions()[0].sede, "CENTRO");
    // the sede is not a promotable field
    assert!(active_state.daily_logs()[0].is_promoted());
}

#[rstest]
fn rename_conflict_rejects_the_whole_batch(mut active_state: AppState) {
    let before = active_state.clone();
    let err = apply_ops(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            Op::Sede(SedeOp::Rename { old: "VENTAS".to_owned(), new: "leganés".to_owned() }),
        ],
        &env(),
    )
    .unwrap_err();

    assert_eq!(err, ApplyError::SedeNameConflict { name: "LEGANÉS".to_owned() });
    assert_eq!(active_state, before);
}

#[rstest]
fn rename_to_same_name_is_a_no_op(mut active_state: AppState) {
    let result = apply(
        &mut active_state,
        &[Op::Sede(SedeOp::Rename { old: "VENTAS".to_owned(), new: " ventas".to_owned() })],
    );
    assert!(result.delta.is_empty());
}

#[rstest]
fn rename_to_blank_name_is_reported(mut active_state: AppState) {
    let before = active_state.clone();
    let err = apply_ops(
        &mut active_state,
        &[Op::Sede(SedeOp::Rename { old: "VENTAS".to_owned(), new: "   ".to_owned() })],
        &env(),
    )
    .unwrap_err();
    assert_eq!(err, ApplyError::BlankSedeName);
    assert_eq!(active_state, before);
}

#[rstest]
fn rename_of_unknown_sede_is_reported(mut state: AppState) {
    let err = apply_ops(
        &mut state,
        &[Op::Sede(SedeOp::Rename { old: "NOPE".to_owned(), new: "OTRA".to_owned() })],
        &env(),
    )
    .unwrap_err();
    assert_eq!(err, ApplyError::SedeNotFound { name: "NOPE".to_owned() });
}

#[rstest]
fn remove_only_keeps_history_and_remove_with_data_drops_it(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            add_cardio("c1", "2024-03-04"),
        ],
    );

    let mut config_only = active_state.clone();
    apply(&mut config_only, &[Op::Sede(SedeOp::RemoveOnly { name: "VENTAS".to_owned() })]);
    assert!(!config_only.sedes().contains_key("VENTAS"));
    assert_eq!(config_only.active_sede(), None);
    assert_eq!(config_only.sede_order(), ["LEGANÉS"]);
    assert_eq!(config_only.daily_logs(), active_state.daily_logs());
    assert_eq!(config_only.summary_logs(), active_state.summary_logs());
    assert_eq!(config_only.daily_cardio_sessions(), active_state.daily_cardio_sessions());

    let mut with_data = active_state;
    let result =
        apply(&mut with_data, &[Op::Sede(SedeOp::RemoveWithData { name: "VENTAS".to_owned() })]);
    assert!(with_data.daily_logs().is_empty());
    assert!(with_data.summary_logs().is_empty());
    assert!(with_data.daily_cardio_sessions().is_empty());
    assert!(result.delta.removed.contains(&RecordRef::SummaryLog("l1".to_owned())));
}

#[rstest]
#[case(0, MoveDirection::Up, ["VENTAS", "LEGANÉS"])]
#[case(1, MoveDirection::Down, ["VENTAS", "LEGANÉS"])]
#[case(1, MoveDirection::Up, ["LEGANÉS", "VENTAS"])]
#[case(0, MoveDirection::Down, ["LEGANÉS", "VENTAS"])]
#[case(7, MoveDirection::Up, ["VENTAS", "LEGANÉS"])]
#[case(usize::MAX, MoveDirection::Down, ["VENTAS", "LEGANÉS"])]
fn move_swaps_neighbours_within_bounds(
    mut state: AppState,
    #[case] index: usize,
    #[case] direction: MoveDirection,
    #[case] expected: [&str; 2],
) {
    apply(&mut state, &[Op::Sede(SedeOp::Move { index, direction })]);
    assert_eq!(state.sede_order(), expected);
}

#[rstest]
fn adding_without_active_sede_is_silent(mut state: AppState) {
    let result = apply(
        &mut state,
        &[add_log("l1", "press", "2024-03-04", DayCategory::Day1), add_cardio("c1", "2024-03-04")],
    );
    assert!(result.delta.is_empty());
    assert!(state.daily_logs().is_empty());
    assert!(state.daily_cardio_sessions().is_empty());
}

#[rstest]
fn add_log_prepends_uppercased_and_stamped(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press banca", "2024-03-04", DayCategory::Day1),
            add_log("l2", "curl", "2024-03-04", DayCategory::Day1),
        ],
    );
    let logs = active_state.daily_logs();
    assert_eq!(logs[0].id(), "l2");
    assert_eq!(logs[1].entry().exercise_name, "PRESS BANCA");
    assert_eq!(logs[1].entry().sede, "VENTAS");
    assert!(!logs[1].is_promoted());
}

#[rstest]
fn duplicate_log_id_is_rejected(mut active_state: AppState) {
    apply(&mut active_state, &[add_log("l1", "press", "2024-03-04", DayCategory::Day1)]);
    let err = apply_ops(
        &mut active_state,
        &[add_log("l1", "curl", "2024-03-04", DayCategory::Day1)],
        &env(),
    )
    .unwrap_err();
    assert!(matches!(err, ApplyError::AlreadyExists { .. }));
}

#[rstest]
fn promote_then_edit_kilos_marks_unsaved(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
        ],
    );
    assert!(active_state.daily_logs()[0].is_promoted());
    assert_eq!(active_state.summary_logs()[0].kilos, "40");

    apply(
        &mut active_state,
        &[Op::Log(LogOp::Update {
            log_id: log_id("l1"),
            patch: ExercisePatch { kilos: Some("45".to_owned()), ..ExercisePatch::default() },
        })],
    );

    let daily = &active_state.daily_logs()[0];
    assert!(!daily.is_promoted());
    assert!(daily.snapshot().is_none());
    assert_eq!(daily.entry().kilos, "45");
    assert_eq!(active_state.summary_logs()[0].kilos, "40");
}

#[rstest]
fn incline_edits_do_not_invalidate_promotion(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press inclinado", "2024-03-04", DayCategory::Day1),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            Op::Log(LogOp::Update {
                log_id: log_id("l1"),
                patch: ExercisePatch {
                    incline: Some(Some("30".to_owned())),
                    ..ExercisePatch::default()
                },
            }),
        ],
    );
    assert!(active_state.daily_logs()[0].is_promoted());
}

#[rstest]
fn removing_daily_media_revalidates(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            Op::Log(LogOp::Add {
                log_id: log_id("l1"),
                draft: ExerciseDraft {
                    media: vec![ExerciseMedia::new(MediaKind::Image, "data:image/png;base64,AA")],
                    ..ExerciseDraft::new("press", "2024-03-04", DayCategory::Day1)
                },
            }),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
        ],
    );

    let out_of_range =
        apply(&mut active_state, &[Op::Log(LogOp::RemoveMedia { log_id: log_id("l1"), index: 3 })]);
    assert!(out_of_range.delta.is_empty());
    assert!(active_state.daily_logs()[0].is_promoted());

    apply(&mut active_state, &[Op::Log(LogOp::RemoveMedia { log_id: log_id("l1"), index: 0 })]);
    assert!(!active_state.daily_logs()[0].is_promoted());
    assert_eq!(active_state.summary_logs()[0].media.len(), 1);
}

#[rstest]
fn removing_summary_copy_clears_origin_flag(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            Op::Summary(SummaryOp::RemoveLog { log_id: log_id("l1") }),
        ],
    );
    assert!(active_state.summary_logs().is_empty());
    assert!(!active_state.daily_logs()[0].is_promoted());
    assert_eq!(active_state.daily_logs()[0].entry().kilos, "40");
}

#[rstest]
fn removing_daily_record_keeps_summary_copy(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_cardio("c1", "2024-03-04"),
            Op::Cardio(CardioOp::Promote { session_id: cardio_id("c1") }),
            Op::Cardio(CardioOp::Remove { session_id: cardio_id("c1") }),
        ],
    );
    assert!(active_state.daily_cardio_sessions().is_empty());
    assert_eq!(active_state.summary_cardio_sessions().len(), 1);

    let result = apply(
        &mut active_state,
        &[Op::Summary(SummaryOp::RemoveCardio { session_id: cardio_id("c1") })],
    );
    assert_eq!(result.delta.removed, vec![RecordRef::SummaryCardio("c1".to_owned())]);
    assert!(active_state.summary_cardio_sessions().is_empty());
}

#[rstest]
fn cardio_update_revalidates_metrics(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_cardio("c1", "2024-03-04"),
            Op::Cardio(CardioOp::Promote { session_id: cardio_id("c1") }),
        ],
    );
    let mut metrics = active_state.daily_cardio_sessions()[0].entry().metrics.clone();
    metrics.time = "30".to_owned();
    apply(
        &mut active_state,
        &[Op::Cardio(CardioOp::Update {
            session_id: cardio_id("c1"),
            patch: CardioPatch { metrics: Some(metrics), ..CardioPatch::default() },
        })],
    );
    assert!(!active_state.daily_cardio_sessions()[0].is_promoted());
    assert_eq!(active_state.daily_cardio_sessions()[0].entry().day, DayCategory::Cardio);
}

#[rstest]
fn summary_media_removal_leaves_daily_origin(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            Op::Log(LogOp::Add {
                log_id: log_id("l1"),
                draft: ExerciseDraft {
                    media: vec![ExerciseMedia::new(MediaKind::Video, "data:video/mp4;base64,AA")],
                    ..ExerciseDraft::new("press", "2024-03-04", DayCategory::Day1)
                },
            }),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            Op::Summary(SummaryOp::RemoveLogMedia { log_id: log_id("l1"), index: 0 }),
        ],
    );
    assert!(active_state.summary_logs()[0].media.is_empty());
    assert_eq!(active_state.daily_logs()[0].entry().media.len(), 1);
    assert!(active_state.daily_logs()[0].is_promoted());
}

#[rstest]
fn remove_week_clears_flags_and_deletes_summary_range(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("in", "press", "2024-03-04", DayCategory::Day1),
            add_log("out", "press", "2024-03-11", DayCategory::Day1),
            add_cardio("c-in", "2024-03-10"),
            Op::Log(LogOp::Promote { log_id: log_id("in") }),
            Op::Log(LogOp::Promote { log_id: log_id("out") }),
            Op::Cardio(CardioOp::Promote { session_id: cardio_id("c-in") }),
        ],
    );

    apply(
        &mut active_state,
        &[Op::Summary(SummaryOp::RemoveWeek { week_start: "2024-03-04".to_owned() })],
    );

    assert_eq!(active_state.summary_logs().len(), 1);
    assert_eq!(active_state.summary_logs()[0].id.as_str(), "out");
    assert!(active_state.summary_cardio_sessions().is_empty());
    assert!(!active_state.daily_log("in").unwrap().is_promoted());
    assert!(active_state.daily_log("out").unwrap().is_promoted());
    assert!(!active_state.daily_cardio_session("c-in").unwrap().is_promoted());
    assert_eq!(active_state.daily_log("in").unwrap().entry().kilos, "40");
}

#[rstest]
fn remove_week_with_bad_start_is_a_no_op(mut active_state: AppState) {
    let result = apply(
        &mut active_state,
        &[Op::Summary(SummaryOp::RemoveWeek { week_start: "not a date".to_owned() })],
    );
    assert!(result.delta.is_empty());
}

#[rstest]
fn remove_week_cardio_leaves_logs(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("l1", "press", "2024-03-04", DayCategory::Day1),
            add_cardio("c1", "2024-03-05"),
            Op::Log(LogOp::Promote { log_id: log_id("l1") }),
            Op::Cardio(CardioOp::Promote { session_id: cardio_id("c1") }),
            Op::Summary(SummaryOp::RemoveWeekCardio { week_start: "2024-03-04".to_owned() }),
        ],
    );
    assert!(active_state.summary_cardio_sessions().is_empty());
    assert_eq!(active_state.summary_logs().len(), 1);
}

#[rstest]
fn remove_day_exercises_scopes_by_category(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            add_log("d1", "press", "2024-03-04", DayCategory::Day1),
            add_log("d2", "sentadilla", "2024-03-05", DayCategory::Day2),
            Op::Log(LogOp::Promote { log_id: log_id("d1") }),
            Op::Log(LogOp::Promote { log_id: log_id("d2") }),
            Op::Summary(SummaryOp::RemoveDayExercises {
                week_start: "2024-03-04".to_owned(),
                day: DayCategory::Day1,
            }),
        ],
    );
    let remaining = active_state.summary_logs().iter().map(|l| l.id.as_str()).collect::<Vec<_>>();
    assert_eq!(remaining, vec!["d2"]);
    assert!(!active_state.daily_log("d1").unwrap().is_promoted());
    assert!(active_state.daily_log("d2").unwrap().is_promoted());
}

#[rstest]
fn day_form_ops_touch_only_the_active_sede(mut active_state: AppState) {
    apply(
        &mut active_state,
        &[
            Op::Day(DayOp::UpdateCardioForm {
                day: DayCategory::Day3,
                patch: CardioFormPatch { title: Some("Elíptica".to_owned()), ..Default::default() },
            }),
            Op::Day(DayOp::SetCardioVisibility { day: DayCategory::Day3, visible: false }),
            Op::Day(DayOp::ToggleLogExpansion { day: DayCategory::Day3, log_id: log_id("l1") }),
        ],
    );
    let day = &active_state.sedes()["VENTAS"].workout_days[&DayCategory::Day3];
    assert_eq!(day.cardio.title, "Elíptica");
    assert!(!day.is_cardio_form_visible);
    assert_eq!(day.expanded_logs, vec![log_id("l1")]);
    assert_eq!(
        active_state.sedes()["LEGANÉS"].workout_days[&DayCategory::Day3].cardio.title,
        ""
    );

    apply(
        &mut active_state,
        &[
            Op::Day(DayOp::ClearCardioForm { day: DayCategory::Day3 }),
            Op::Day(DayOp::ToggleLogExpansion { day: DayCategory::Day3, log_id: log_id("l1") }),
        ],
    );
    let day = &active_state.sedes()["VENTAS"].workout_days[&DayCategory::Day3];
    assert_eq!(day.cardio.title, "");
    assert_eq!(day.cardio.date, "2024-03-05");
    assert!(day.expanded_logs.is_empty());
}

#[rstest]
fn day_ops_without_active_sede_do_nothing(mut state: AppState) {
    let result =
        apply(&mut state, &[Op::Day(DayOp::ClearCardioForm { day: DayCategory::Cardio })]);
    assert!(result.delta.is_empty());
}

#[rstest]
fn links_deduplicate_by_url_and_number_names(mut active_state: AppState) {
    let target = LinkTarget::MuscleGroup { day: DayCategory::Day1, muscle: "Pecho".to_owned() };
    apply(
        &mut active_state,
        &[
            Op::add_link(target.clone(), "https://video/a"),
            Op::add_link(target.clone(), "https://video/a"),
            Op::add_link(target.clone(), "https://video/b"),
            Op::add_link(target.clone(), "   "),
            Op::add_link(LinkTarget::Stretching, "https://video/a"),
        ],
    );
    let sede = &active_state.sedes()["VENTAS"];
    let links = &sede.muscle_group_links[&DayCategory::Day1]["Pecho"];
    assert_eq!(links.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), ["Video 1", "Video 2"]);
    assert_eq!(sede.stretching_links.len(), 1);

    let first = links[0].id.clone();
    apply(
        &mut active_state,
        &[
            Op::Link(LinkOp::Rename {
                target: target.clone(),
                link_id: first.clone(),
                name: "Aperturas".to_owned(),
            }),
            Op::Link(LinkOp::Remove { target: LinkTarget::Posture, link_id: first.clone() }),
        ],
    );
    let links = &active_state.sedes()["VENTAS"].muscle_group_links[&DayCategory::Day1]["Pecho"];
    assert_eq!(links[0].name, "Aperturas");

    apply(&mut active_state, &[Op::Link(LinkOp::Remove { target, link_id: first })]);
    let links = &active_state.sedes()["VENTAS"].muscle_group_links[&DayCategory::Day1]["Pecho"];
    assert_eq!(links.len(), 1);
}

#[rstest]
fn favorites_merge_by_name(mut active_state: AppState) {
    let image = ExerciseMedia::new(MediaKind::Image, "data:image/png;base64,AA");
    let video = ExerciseMedia::new(MediaKind::Video, "data:video/mp4;base64,BB");
    apply(
        &mut active_state,
        &[
            Op::add_favorite(FavoriteDraft {
                name: "Press Banca".to_owned(),
                day_title: "Pecho y Bíceps".to_owned(),
                media: vec![image],
                notes: Some("agarre medio".to_owned()),
            }),
            Op::add_favorite(FavoriteDraft {
                name: "PRESS BANCA".to_owned(),
                day_title: "Pecho".to_owned(),
                media: vec![video],
                notes: None,
            }),
        ],
    );
    let favorites = &active_state.sedes()["VENTAS"].favorite_exercises;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].name, "Press Banca");
    assert_eq!(favorites[0].media.len(), 2);
    assert_eq!(favorites[0].day_title, "Pecho");
    assert_eq!(favorites[0].notes, None);

    let id = favorites[0].id.clone();
    apply(
        &mut active_state,
        &[Op::Favorite(FavoriteOp::RemoveMedia { favorite_id: id.clone(), index: 0 })],
    );
    assert_eq!(active_state.sedes()["VENTAS"].favorite_exercises[0].media[0].kind, MediaKind::Video);

    apply(&mut active_state, &[Op::Favorite(FavoriteOp::Remove { favorite_id: id })]);
    assert!(active_state.sedes()["VENTAS"].favorite_exercises.is_empty());
}

#[rstest]
fn collapse_toggle_round_trips(mut state: AppState) {
    let toggle = Op::Cardio(CardioOp::ToggleCollapsed { session_id: cardio_id("c1") });
    apply(&mut state, &[toggle.clone()]);
    assert_eq!(state.collapsed_daily_cardio_sessions(), [cardio_id("c1")]);
    apply(&mut state, &[toggle]);
    assert!(state.collapsed_daily_cardio_sessions().is_empty());
}

#[rstest]
fn missing_ids_are_silent_no_ops(mut active_state: AppState) {
    let result = apply(
        &mut active_state,
        &[
            Op::Log(LogOp::Promote { log_id: log_id("ghost") }),
            Op::Log(LogOp::Remove { log_id: log_id("ghost") }),
            Op::Summary(SummaryOp::RemoveLog { log_id: log_id("ghost") }),
            Op::Cardio(CardioOp::Update {
                session_id: cardio_id("ghost"),
                patch: CardioPatch::default(),
            }),
        ],
    );
    assert!(result.delta.is_empty());
    assert_eq!(result.applied, 4);
}

#[rstest]
fn colliding_link_and_favorite_ids_reject_the_batch(mut active_state: AppState) {
    let link_id = LinkId::new("k1").expect("link id");
    let add_link = |url: &str| {
        Op::Link(LinkOp::Add {
            target: LinkTarget::Posture,
            link_id: link_id.clone(),
            url: url.to_owned(),
        })
    };
    apply(&mut active_state, &[add_link("https://video/a")]);
    let before = active_state.clone();

    let err = apply_ops(
        &mut active_state,
        &[add_link("https://video/b"), Op::Sede(SedeOp::SetActive { name: None })],
        &env(),
    )
    .unwrap_err();
    assert_eq!(err, ApplyError::AlreadyExists { kind: RecordKind::Link, id: "k1".to_owned() });
    assert_eq!(active_state, before);

    let favorite_id = FavoriteId::new("f1").expect("favorite id");
    let add_favorite = |name: &str| {
        Op::Favorite(FavoriteOp::Add {
            favorite_id: favorite_id.clone(),
            draft: FavoriteDraft {
                name: name.to_owned(),
                day_title: "Pierna y Glúteo".to_owned(),
                media: Vec::new(),
                notes: None,
            },
        })
    };
    apply(&mut active_state, &[add_favorite("Sentadilla")]);
    let before = active_state.clone();

    let err = apply_ops(&mut active_state, &[add_favorite("Prensa")], &env()).unwrap_err();
    assert_eq!(
        err,
        ApplyError::AlreadyExists { kind: RecordKind::Favorite, id: "f1".to_owned() }
    );
    assert_eq!(active_state, before);
}
