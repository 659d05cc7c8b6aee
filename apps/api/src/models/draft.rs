//! The in-progress wizard submission and its mutation operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    /// Free text, e.g. "2020-2024". Not a structured date.
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free text, e.g. "Jan 2022 - Present".
    pub duration: String,
    pub description: String,
}

/// The mutable form state owned by exactly one wizard session.
///
/// Skills keep insertion order and hold no duplicates or empties. Each
/// repeatable list starts with a single blank placeholder row and is never
/// allowed to become empty — a half-filled row the user abandons is kept in
/// the draft and filtered out at render time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub bio: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

impl Draft {
    /// A blank draft with one placeholder row per repeatable list.
    pub fn new() -> Self {
        Draft {
            name: String::new(),
            email: String::new(),
            profile_photo: None,
            bio: String::new(),
            skills: vec![],
            projects: vec![Project::default()],
            education: vec![Education::default()],
            experience: vec![Experience::default()],
        }
    }

    /// Applies a partial update. Out-of-range list indices and removals
    /// that would empty a list are silent no-ops, matching the forgiving
    /// form semantics: nothing a client sends here is an error.
    pub fn apply(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::SetName { value } => self.name = value,
            DraftPatch::SetEmail { value } => self.email = value,
            DraftPatch::SetProfilePhoto { value } => self.profile_photo = value,
            DraftPatch::SetBio { value } => self.bio = value,

            DraftPatch::AddProject => self.projects.push(Project::default()),
            DraftPatch::UpdateProject { index, fields } => {
                if let Some(project) = self.projects.get_mut(index) {
                    fields.apply_to(project);
                }
            }
            DraftPatch::RemoveProject { index } => {
                remove_retaining_one(&mut self.projects, index);
            }

            DraftPatch::AddEducation => self.education.push(Education::default()),
            DraftPatch::UpdateEducation { index, fields } => {
                if let Some(entry) = self.education.get_mut(index) {
                    fields.apply_to(entry);
                }
            }
            DraftPatch::RemoveEducation { index } => {
                remove_retaining_one(&mut self.education, index);
            }

            DraftPatch::AddExperience => self.experience.push(Experience::default()),
            DraftPatch::UpdateExperience { index, fields } => {
                if let Some(entry) = self.experience.get_mut(index) {
                    fields.apply_to(entry);
                }
            }
            DraftPatch::RemoveExperience { index } => {
                remove_retaining_one(&mut self.experience, index);
            }
        }
    }

    /// Trims and appends a skill. No-op when the trimmed text is empty or
    /// already present (case-sensitive exact match). Returns whether the
    /// skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let trimmed = skill.trim();
        if trimmed.is_empty() || self.skills.iter().any(|s| s == trimmed) {
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    /// Removes the first exact match. Returns whether anything was removed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(i) => {
                self.skills.remove(i);
                true
            }
            None => false,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Draft::new()
    }
}

/// Removes `index` unless doing so would leave the list empty.
fn remove_retaining_one<T>(list: &mut Vec<T>, index: usize) {
    if list.len() > 1 && index < list.len() {
        list.remove(index);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Patches
// ────────────────────────────────────────────────────────────────────────────

/// One wizard mutation: a scalar update or a repeatable-list operation.
/// Repeatable-list entries are addressed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftPatch {
    SetName { value: String },
    SetEmail { value: String },
    SetProfilePhoto { value: Option<String> },
    SetBio { value: String },

    AddProject,
    UpdateProject { index: usize, fields: ProjectPatch },
    RemoveProject { index: usize },

    AddEducation,
    UpdateEducation { index: usize, fields: EducationPatch },
    RemoveEducation { index: usize },

    AddExperience,
    UpdateExperience { index: usize, fields: ExperiencePatch },
    RemoveExperience { index: usize },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl ProjectPatch {
    fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(link) = self.link {
            project.link = link;
        }
        if let Some(image) = self.image {
            project.image = Some(image);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
}

impl EducationPatch {
    fn apply_to(self, entry: &mut Education) {
        if let Some(institution) = self.institution {
            entry.institution = institution;
        }
        if let Some(degree) = self.degree {
            entry.degree = degree;
        }
        if let Some(year) = self.year {
            entry.year = year;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    fn apply_to(self, entry: &mut Experience) {
        if let Some(company) = self.company {
            entry.company = company;
        }
        if let Some(position) = self.position {
            entry.position = position;
        }
        if let Some(duration) = self.duration {
            entry.duration = duration;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
