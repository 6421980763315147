// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Version and kind markers written next to the payload of every document.

use serde_json::{Map, Value};

use super::StoreError;

/// Newest document layout this build reads and writes.
pub const SCHEMA_VERSION: u64 = 3;

pub const SCHEMA_VERSION_KEY: &str = "schemaVersion";
pub const DOCUMENT_KIND_KEY: &str = "documentKind";

/// Top-level keys that together identify a full backup written before documents were tagged.
const FULL_BACKUP_KEYS: [&str; 3] = ["sedes", "activeSede", "sedeOrder"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The whole state: the saved blob or a complete export.
    Backup,
    /// Some record collections only.
    Partial,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backup => "backup",
            Self::Partial => "partial",
        }
    }

    /// Tagged kind when present, otherwise inferred from the top-level keys.
    pub fn detect(root: &Map<String, Value>) -> Self {
        match root.get(DOCUMENT_KIND_KEY).and_then(Value::as_str) {
            Some("backup") => Self::Backup,
            Some("partial") => Self::Partial,
            _ if FULL_BACKUP_KEYS.iter().all(|key| root.contains_key(*key)) => Self::Backup,
            _ => Self::Partial,
        }
    }
}

/// Rejects documents written by a newer build. Untagged documents are accepted as legacy.
pub fn check_schema_version(root: &Map<String, Value>) -> Result<(), StoreError> {
    match root.get(SCHEMA_VERSION_KEY).and_then(Value::as_u64) {
        Some(found) if found > SCHEMA_VERSION => {
            Err(StoreError::UnsupportedSchema { found, supported: SCHEMA_VERSION })
        }
        _ => Ok(()),
    }
}

pub fn stamp(root: &mut Map<String, Value>, kind: DocumentKind) {
    root.insert(SCHEMA_VERSION_KEY.to_owned(), Value::from(SCHEMA_VERSION));
    root.insert(DOCUMENT_KIND_KEY.to_owned(), Value::from(kind.as_str()));
}

pub fn strip(root: &mut Map<String, Value>) {
    root.remove(SCHEMA_VERSION_KEY);
    root.remove(DOCUMENT_KIND_KEY);
}
