/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::{get_config_file, load_config_at, save_config_at, ConfigKey};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::watch;

/// CV under construction. Everything is free text; the builder makes no
/// attempt to structure work history beyond what the user types.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CvDraft {
    pub full_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub objective: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

impl CvDraft {
    /// A draft without at least a name or an email is noise and is never
    /// written out.
    pub fn should_persist(&self) -> bool {
        !self.full_name.trim().is_empty() || !self.email.trim().is_empty()
    }
}

pub fn load_draft_at(config_file: &Path) -> Option<CvDraft> {
    let config = load_config_at(config_file);
    let raw = config.get(&ConfigKey::CvDraft).cloned().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn load_draft() -> Option<CvDraft> {
    load_draft_at(&get_config_file())
}

/// Returns whether the draft was actually written.
pub fn save_draft_at(config_file: &Path, draft: &CvDraft) -> bool {
    if !draft.should_persist() {
        return false;
    }

    let raw = serde_json::to_string(draft).expect("Failed to serialize CV draft");
    let mut config = load_config_at(config_file);
    config.insert(ConfigKey::CvDraft, Some(raw));
    save_config_at(config_file, &config);
    true
}

pub fn save_draft(draft: &CvDraft) -> bool {
    save_draft_at(&get_config_file(), draft)
}

pub fn clear_draft_at(config_file: &Path) {
    let mut config = load_config_at(config_file);
    config.insert(ConfigKey::CvDraft, None);
    save_config_at(config_file, &config);
}

pub fn clear_draft() {
    clear_draft_at(&get_config_file());
}

/// Debounced autosave. Each edit restarts a quiescence window; only once
/// the window passes with no further edits is the draft persisted, and
/// only if it carries a name or email. Runs until the sender side of the
/// channel is dropped.
pub async fn autosave_loop(
    mut rx: watch::Receiver<CvDraft>,
    config_file: PathBuf,
    quiescence: Duration,
) {
    loop {
        if rx.changed().await.is_err() {
            return;
        }

        loop {
            tokio::select! {
                _ = tokio::time::sleep(quiescence) => break,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        let draft = rx.borrow_and_update().clone();
        if draft.should_persist() {
            save_draft_at(&config_file, &draft);
        }
    }
}
