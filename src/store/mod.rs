// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence of the state blob.
//!
//! Loading parses the blob, runs the ordered migrations and decodes the typed tree. Saving writes
//! the whole tree back inside a versioned envelope. Neither direction ever aborts the caller:
//! unreadable blobs fall back to the default state and failed writes are logged.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::model::AppState;

pub mod envelope;
pub mod migrate;
pub mod storage;


pub use envelope::{DocumentKind, SCHEMA_VERSION};
pub use migrate::{run_migrations, Migration, MIGRATIONS};
pub use storage::{FileStorage, MemoryStorage, StateStorage, WriteDurability, STATE_KEY};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("document schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u64, supported: u64 },
    #[error("document root is not a JSON object")]
    NotAnObject,
}

impl StoreError {
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json { path: PathBuf::from(STATE_KEY), source }
    }
}

/// Parses a document into its root object and rejects newer schemas.
pub(crate) fn parse_root(raw: &str) -> Result<Map<String, Value>, StoreError> {
    match serde_json::from_str(raw).map_err(StoreError::json)? {
        Value::Object(root) => {
            envelope::check_schema_version(&root)?;
            Ok(root)
        }
        _ => Err(StoreError::NotAnObject),
    }
}

/// Brings a full document to the current layout and decodes it.
pub(crate) fn decode_root(
    mut root: Map<String, Value>,
    today: NaiveDate,
) -> Result<AppState, StoreError> {
    let applied = run_migrations(&mut root, today).map_err(StoreError::json)?;
    if !applied.is_empty() {
        info!(steps = ?applied, "migrated saved state");
    }
    envelope::strip(&mut root);

    let mut state: AppState = serde_json::from_value(Value::Object(root)).map_err(StoreError::json)?;
    let cleared = state.revalidate_promotion_states();
    if cleared > 0 {
        info!(cleared, "cleared stale promotion flags");
    }
    Ok(state)
}

pub fn decode_state(raw: &str, today: NaiveDate) -> Result<AppState, StoreError> {
    decode_root(parse_root(raw)?, today)
}

pub fn encode_state(state: &AppState) -> Result<String, StoreError> {
    let mut root = match serde_json::to_value(state).map_err(StoreError::json)? {
        Value::Object(root) => root,
        _ => return Err(StoreError::NotAnObject),
    };
    envelope::stamp(&mut root, DocumentKind::Backup);
    serde_json::to_string(&root).map_err(StoreError::json)
}

/// Reads the saved state. Missing or unreadable blobs yield the default state.
pub fn load_state(storage: &impl StateStorage, today: NaiveDate) -> AppState {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no saved state; starting from defaults");
            return AppState::new(today);
        }
        Err(err) => {
            warn!(error = %err, "could not read saved state; starting from defaults");
            return AppState::new(today);
        }
    };

    match decode_state(&raw, today) {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, "could not decode saved state; starting from defaults");
            AppState::new(today)
        }
    }
}

/// Writes the whole state. Failures are logged and swallowed; returns whether the write landed.
pub fn save_state(storage: &impl StateStorage, state: &AppState) -> bool {
    match encode_state(state).and_then(|raw| storage.write(&raw)) {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "could not save state");
            false
        }
    }
}
