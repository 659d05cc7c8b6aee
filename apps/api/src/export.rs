//! Document export — pluggable, trait-based rendering of positioned blocks
//! into a downloadable byte document.
//!
//! Default: `PlainTextExporter` (pure-Rust, deterministic, dependency-free).
//! A PDF backend would implement the same trait; `AppState` holds an
//! `Arc<dyn DocumentExporter>`, chosen at startup.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::layout::PositionedBlock;
use crate::models::record::UserRecord;

/// The export backend seam. The layout engine supplies the blocks; a
/// backend only decides how they become bytes.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn render(
        &self,
        record: &UserRecord,
        blocks: &[PositionedBlock],
    ) -> Result<Bytes, AppError>;

    /// MIME type of the produced document.
    fn content_type(&self) -> &'static str;

    /// File extension (without dot) for download filenames.
    fn file_extension(&self) -> &'static str;
}

/// Renders the block sequence as a plain-text page mockup: one page banner
/// per page, one line per block with its tier and coordinates. Output is
/// byte-identical for identical input.
pub struct PlainTextExporter;

#[async_trait]
impl DocumentExporter for PlainTextExporter {
    async fn render(
        &self,
        record: &UserRecord,
        blocks: &[PositionedBlock],
    ) -> Result<Bytes, AppError> {
        Ok(Bytes::from(render_plain_text(record, blocks)))
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

fn render_plain_text(record: &UserRecord, blocks: &[PositionedBlock]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Resume — {}\n", record.name));

    let mut current_page: Option<u32> = None;
    for block in blocks {
        if current_page != Some(block.page) {
            out.push_str(&format!("\n=== Page {} ===\n", block.page + 1));
            current_page = Some(block.page);
        }
        out.push_str(&format!(
            "[{:>7}] ({:>5.1}, {:>5.1}) {}\n",
            tier_label(block),
            block.x,
            block.y,
            block.text
        ));
    }
    out
}

fn tier_label(block: &PositionedBlock) -> &'static str {
    match block.tier {
        crate::layout::FontTier::Title => "title",
        crate::layout::FontTier::Heading => "heading",
        crate::layout::FontTier::Body => "body",
        crate::layout::FontTier::Caption => "caption",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, layout_resume};
    use crate::models::record::UserRecord;

    fn record() -> UserRecord {
        UserRecord {
            template_id: "minimal-pro".into(),
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            profile_photo: None,
            bio: "Engineer.".into(),
            skills: vec!["Go".into(), "Rust".into()],
            projects: vec![],
            education: vec![],
            experience: vec![],
        }
    }

    #[tokio::test]
    async fn test_plain_text_export_contains_all_blocks() {
        let record = record();
        let blocks = layout_resume(&record, &default_page_config());
        let bytes = PlainTextExporter.render(&record, &blocks).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("jane@x.com"));
        assert!(text.contains("Go • Rust"));
        assert!(text.contains("=== Page 1 ==="));
    }

    #[tokio::test]
    async fn test_plain_text_export_is_deterministic() {
        let record = record();
        let blocks = layout_resume(&record, &default_page_config());
        let a = PlainTextExporter.render(&record, &blocks).await.unwrap();
        let b = PlainTextExporter.render(&record, &blocks).await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exporter_metadata() {
        assert_eq!(PlainTextExporter.file_extension(), "txt");
        assert!(PlainTextExporter.content_type().starts_with("text/plain"));
    }
}
