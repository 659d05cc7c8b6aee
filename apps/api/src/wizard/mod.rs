//! The wizard controller: five fixed sections, a cursor, and the gates on
//! forward progression and final submission.
//!
//! Navigation is deliberately permissive — `go_to` jumps anywhere, `next`
//! and `previous` never validate — because the original flow lets users
//! roam between section tabs freely. Only the terminal submit enforces the
//! required fields, and a failed submit leaves the draft fully intact.

pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::draft::{Draft, DraftPatch};
use crate::models::record::UserRecord;

/// Number of wizard sections. Section identity is index-based and fixed.
pub const SECTION_COUNT: usize = 5;

/// The five fixed wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    BasicInfo,
    BioSkills,
    Projects,
    Education,
    Experience,
}

impl Section {
    pub fn from_index(index: usize) -> Option<Section> {
        match index {
            0 => Some(Section::BasicInfo),
            1 => Some(Section::BioSkills),
            2 => Some(Section::Projects),
            3 => Some(Section::Education),
            4 => Some(Section::Experience),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::BasicInfo => 0,
            Section::BioSkills => 1,
            Section::Projects => 2,
            Section::Education => 3,
            Section::Experience => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::BasicInfo => "Basic Info",
            Section::BioSkills => "Skills & Bio",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Experience => "Experience",
        }
    }
}

/// Result of a `next()` call: either the cursor moved, or the call landed
/// on the last section and performed submission instead (the overloaded
/// "Next / Generate" affordance).
#[derive(Debug, Clone)]
pub enum StepOutcome {
    Advanced(Section),
    Submitted(UserRecord),
}

/// One wizard session: the mutable draft, the selected template, and the
/// section cursor. Each session owns exactly one draft; nothing is shared
/// across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSession {
    pub id: Uuid,
    pub template_id: String,
    /// 0-based section index.
    pub cursor: usize,
    pub draft: Draft,
}

impl WizardSession {
    /// Seeds a fresh session at the first section with a blank draft.
    pub fn new(template_id: &str) -> Self {
        WizardSession {
            id: Uuid::new_v4(),
            template_id: template_id.to_string(),
            cursor: 0,
            draft: Draft::new(),
        }
    }

    pub fn section(&self) -> Section {
        // cursor is maintained within [0, SECTION_COUNT) by construction
        Section::from_index(self.cursor).unwrap_or(Section::BasicInfo)
    }

    /// Jumps directly to a section. Out-of-range input is rejected as a
    /// no-op, never an error — this backs the section-tab navigation.
    pub fn go_to(&mut self, index: usize) {
        if index < SECTION_COUNT {
            self.cursor = index;
        }
    }

    /// Moves back one section, clamped at the first.
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Advances one section without validating anything, or — when already
    /// on the last section — performs submission.
    pub fn next(&mut self) -> Result<StepOutcome, AppError> {
        if self.cursor + 1 < SECTION_COUNT {
            self.cursor += 1;
            Ok(StepOutcome::Advanced(self.section()))
        } else {
            self.submit().map(StepOutcome::Submitted)
        }
    }

    /// Applies a draft mutation. Delegates entirely to the draft; all
    /// patches are infallible no-op-on-nonsense operations.
    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    pub fn add_skill(&mut self, skill: &str) -> bool {
        self.draft.add_skill(skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        self.draft.remove_skill(skill)
    }

    /// Validates the required fields and freezes the draft. Reachable from
    /// any section. On failure the draft and cursor are untouched; the
    /// submission is a side-exit, not a state — the cursor never moves.
    pub fn submit(&self) -> Result<UserRecord, AppError> {
        if self.draft.name.trim().is_empty() || self.draft.email.trim().is_empty() {
            return Err(AppError::Validation(
                "name and email are required".to_string(),
            ));
        }
        Ok(UserRecord::freeze(&self.draft, &self.template_id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
