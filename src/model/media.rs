// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A photo or clip attached to an exercise, carried inline as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub data_url: String,
}

impl ExerciseMedia {
    pub fn new(kind: MediaKind, data_url: impl Into<String>) -> Self {
        Self { kind, data_url: data_url.into() }
    }
}

/// Removes the item at `index`, returning whether anything was removed.
pub(crate) fn remove_media_at(media: &mut Vec<ExerciseMedia>, index: usize) -> bool {
    if index >= media.len() {
        return false;
    }
    media.remove(index);
    true
}
