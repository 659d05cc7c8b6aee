use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Creative,
    Professional,
    Minimal,
    Tech,
}

/// A catalog template. Immutable; loaded from the built-in catalog at
/// startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub preview_image: String,
    pub full_preview_image: String,
    /// Display palette, ordered.
    pub colors: Vec<String>,
    /// Feature bullet points, ordered.
    pub features: Vec<String>,
    pub rating: f64,
    pub usage_count: u32,
}
