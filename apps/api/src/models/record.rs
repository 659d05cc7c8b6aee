//! The finalized submission: an immutable snapshot of a draft paired with
//! the template it was built against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::draft::{Draft, Education, Experience, Project};

/// Frozen at successful submit; never mutated afterwards. This pairing is
/// the unit persisted and the unit rendered — a public portfolio page needs
/// nothing beyond it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub template_id: String,
    pub name: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

impl UserRecord {
    /// Snapshots a draft. The caller (the wizard's submit path) is
    /// responsible for having validated the required fields first.
    pub fn freeze(draft: &Draft, template_id: &str) -> Self {
        UserRecord {
            template_id: template_id.to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            profile_photo: draft.profile_photo.clone(),
            bio: draft.bio.clone(),
            skills: draft.skills.clone(),
            projects: draft.projects.clone(),
            education: draft.education.clone(),
            experience: draft.experience.clone(),
        }
    }

    /// Projects that participate in display/export: title must be non-empty.
    /// Entries failing the filter stay in the record but are suppressed.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.title.trim().is_empty())
    }

    /// Education entries with a non-empty institution.
    pub fn visible_education(&self) -> impl Iterator<Item = &Education> {
        self.education
            .iter()
            .filter(|e| !e.institution.trim().is_empty())
    }

    /// Experience entries with a non-empty company.
    pub fn visible_experience(&self) -> impl Iterator<Item = &Experience> {
        self.experience
            .iter()
            .filter(|e| !e.company.trim().is_empty())
    }

    /// Copy with the hidden placeholder rows removed — the payload the
    /// public portfolio page serves. The stored record keeps every row.
    pub fn public_view(&self) -> UserRecord {
        UserRecord {
            projects: self.visible_projects().cloned().collect(),
            education: self.visible_education().cloned().collect(),
            experience: self.visible_experience().cloned().collect(),
            ..self.clone()
        }
    }
}

/// A persisted portfolio. The full `UserRecord` lives in the JSONB `record`
/// column; `slug` is the public address.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub slug: String,
    pub template_id: String,
    pub record: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_entries() -> UserRecord {
        let mut draft = Draft::new();
        draft.name = "Jane Doe".into();
        draft.email = "jane@x.com".into();
        draft.experience = vec![
            Experience {
                company: "Acme".into(),
                position: "Eng".into(),
                duration: "2020-2022".into(),
                description: "Built X".into(),
            },
            Experience::default(),
        ];
        draft.education = vec![Education::default()];
        draft.projects = vec![Project {
            title: "  ".into(),
            ..Default::default()
        }];
        UserRecord::freeze(&draft, "tech-modern")
    }

    #[test]
    fn test_freeze_copies_template_id() {
        let record = record_with_entries();
        assert_eq!(record.template_id, "tech-modern");
        assert_eq!(record.name, "Jane Doe");
    }

    #[test]
    fn test_blank_placeholders_are_filtered() {
        let record = record_with_entries();
        assert_eq!(record.visible_experience().count(), 1);
        assert_eq!(record.visible_education().count(), 0);
        // whitespace-only title does not count
        assert_eq!(record.visible_projects().count(), 0);
    }

    #[test]
    fn test_filtered_entries_are_retained_in_record() {
        let record = record_with_entries();
        assert_eq!(record.experience.len(), 2);
    }

    #[test]
    fn test_public_view_drops_hidden_rows() {
        let record = record_with_entries();
        let view = record.public_view();
        assert_eq!(view.experience.len(), 1);
        assert_eq!(view.experience[0].company, "Acme");
        assert!(view.education.is_empty());
        assert!(view.projects.is_empty());
        // the underlying record is untouched
        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.projects.len(), 1);
    }
}
