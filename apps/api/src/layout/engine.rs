//! The layout/pagination engine.
//!
//! Turns a finalized [`UserRecord`] into an ordered sequence of
//! [`PositionedBlock`]s against a fixed page width, advancing a running
//! vertical cursor and starting a new page when a group of blocks would
//! cross the bottom margin. The same output drives the on-screen resume
//! preview and the document export, so the two stay visually consistent.
//!
//! The output is a pure function of `(record, config)` — no clocks, no
//! randomness — which keeps rendering reproducible and testable.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, FontTier, PageConfig};
use crate::models::record::UserRecord;

/// A unit of text placed at specific page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedBlock {
    pub text: String,
    /// Horizontal offset from the left page edge, mm.
    pub x: f32,
    /// Vertical offset from the top page edge, mm.
    pub y: f32,
    /// 0-based page index.
    pub page: u32,
    pub tier: FontTier,
}

// Vertical advances, in mm. These mirror the fixed spacing of the original
// single-page export routine.
const HEADER_NAME_Y: f32 = 30.0;
const HEADER_EMAIL_Y: f32 = 40.0;
const BODY_START_Y: f32 = 60.0;
const HEADING_GAP: f32 = 10.0;
const SUMMARY_LINE_GAP: f32 = 5.0;
const SUMMARY_TRAILING: f32 = 15.0;
const SKILLS_TRAILING: f32 = 20.0;
const ROW_LABEL_GAP: f32 = 6.0;
const ROW_SUBLINE_GAP: f32 = 8.0;
const DESCRIPTION_LINE_GAP: f32 = 4.0;
const ROW_TRAILING: f32 = 10.0;
const EDUCATION_ROW_TRAILING: f32 = 15.0;

/// Skills are joined onto a single unwrapped line. Long skill lists can
/// overrun the content width; kept as-is to match the original output.
const SKILL_SEPARATOR: &str = " • ";

/// Running layout position: current page and vertical offset.
struct Cursor {
    page: u32,
    y: f32,
    top: f32,
    limit: f32,
}

impl Cursor {
    /// Starts a new page if emitting a group of `height` mm at the current
    /// position would cross the bottom margin. A group taller than a whole
    /// page is emitted anyway rather than looping forever.
    fn fit(&mut self, height: f32) {
        if self.y + height > self.limit && self.y > self.top {
            self.page += 1;
            self.y = self.top;
        }
    }
}

/// Computes the full positioned-block sequence for a record.
pub fn layout_resume(record: &UserRecord, config: &PageConfig) -> Vec<PositionedBlock> {
    let metrics = get_metrics();
    let mut blocks: Vec<PositionedBlock> = Vec::new();
    let left = config.margin_left;

    // Page header: name and contact line at fixed positions.
    blocks.push(PositionedBlock {
        text: record.name.clone(),
        x: left,
        y: HEADER_NAME_Y,
        page: 0,
        tier: FontTier::Title,
    });
    blocks.push(PositionedBlock {
        text: record.email.clone(),
        x: left,
        y: HEADER_EMAIL_Y,
        page: 0,
        tier: FontTier::Body,
    });

    let mut cursor = Cursor {
        page: 0,
        y: BODY_START_Y,
        top: config.top_y,
        limit: config.content_limit(),
    };

    // Summary
    if !record.bio.trim().is_empty() {
        let lines = metrics.wrap_text(&record.bio, FontTier::Caption.size_pt(), config.content_width);
        // Keep the heading together with the first wrapped line.
        cursor.fit(HEADING_GAP + SUMMARY_LINE_GAP);
        push_heading(&mut blocks, &mut cursor, left, "Summary");
        for line in lines {
            cursor.fit(SUMMARY_LINE_GAP);
            blocks.push(PositionedBlock {
                text: line,
                x: left,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Caption,
            });
            cursor.y += SUMMARY_LINE_GAP;
        }
        cursor.y += SUMMARY_TRAILING;
    }

    // Skills
    if !record.skills.is_empty() {
        cursor.fit(HEADING_GAP + SUMMARY_LINE_GAP);
        push_heading(&mut blocks, &mut cursor, left, "Skills");
        blocks.push(PositionedBlock {
            text: record.skills.join(SKILL_SEPARATOR),
            x: left,
            y: cursor.y,
            page: cursor.page,
            tier: FontTier::Caption,
        });
        cursor.y += SKILLS_TRAILING;
    }

    // Experience
    let experience: Vec<_> = record.visible_experience().collect();
    if !experience.is_empty() {
        cursor.fit(HEADING_GAP + ROW_LABEL_GAP + ROW_SUBLINE_GAP);
        push_heading(&mut blocks, &mut cursor, left, "Experience");
        for entry in experience {
            // The position/duration pair and the company sub-line form one
            // atomic group; descriptions may break across pages per line.
            cursor.fit(ROW_LABEL_GAP + ROW_SUBLINE_GAP);
            blocks.push(PositionedBlock {
                text: entry.position.clone(),
                x: left,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Body,
            });
            blocks.push(PositionedBlock {
                text: entry.duration.clone(),
                x: config.secondary_x,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Caption,
            });
            cursor.y += ROW_LABEL_GAP;

            blocks.push(PositionedBlock {
                text: entry.company.clone(),
                x: left,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Caption,
            });
            cursor.y += ROW_SUBLINE_GAP;

            if !entry.description.trim().is_empty() {
                let lines = metrics.wrap_text(
                    &entry.description,
                    FontTier::Caption.size_pt(),
                    config.content_width,
                );
                for line in lines {
                    cursor.fit(DESCRIPTION_LINE_GAP);
                    blocks.push(PositionedBlock {
                        text: line,
                        x: left,
                        y: cursor.y,
                        page: cursor.page,
                        tier: FontTier::Caption,
                    });
                    cursor.y += DESCRIPTION_LINE_GAP;
                }
            }
            cursor.y += ROW_TRAILING;
        }
    }

    // Education
    let education: Vec<_> = record.visible_education().collect();
    if !education.is_empty() {
        cursor.fit(HEADING_GAP + ROW_LABEL_GAP + EDUCATION_ROW_TRAILING);
        push_heading(&mut blocks, &mut cursor, left, "Education");
        for entry in education {
            cursor.fit(ROW_LABEL_GAP + EDUCATION_ROW_TRAILING);
            blocks.push(PositionedBlock {
                text: entry.degree.clone(),
                x: left,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Body,
            });
            blocks.push(PositionedBlock {
                text: entry.year.clone(),
                x: config.secondary_x,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Caption,
            });
            cursor.y += ROW_LABEL_GAP;

            blocks.push(PositionedBlock {
                text: entry.institution.clone(),
                x: left,
                y: cursor.y,
                page: cursor.page,
                tier: FontTier::Caption,
            });
            cursor.y += EDUCATION_ROW_TRAILING;
        }
    }

    blocks
}

fn push_heading(blocks: &mut Vec<PositionedBlock>, cursor: &mut Cursor, x: f32, title: &str) {
    blocks.push(PositionedBlock {
        text: title.to_string(),
        x,
        y: cursor.y,
        page: cursor.page,
        tier: FontTier::Heading,
    });
    cursor.y += HEADING_GAP;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_config;
    use crate::models::draft::{Education, Experience};

    fn base_record() -> UserRecord {
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

    fn texts(blocks: &[PositionedBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_minimal_record_block_sequence() {
        let blocks = layout_resume(&base_record(), &default_page_config());
        assert_eq!(
            texts(&blocks),
            vec![
                "Jane Doe",
                "jane@x.com",
                "Summary",
                "Engineer.",
                "Skills",
                "Go • Rust",
            ]
        );
        // No Experience or Education headings for empty lists.
        assert!(!texts(&blocks).contains(&"Experience"));
        assert!(!texts(&blocks).contains(&"Education"));
    }

    #[test]
    fn test_header_positions_and_tiers() {
        let blocks = layout_resume(&base_record(), &default_page_config());
        assert_eq!(blocks[0].tier, FontTier::Title);
        assert_eq!((blocks[0].x, blocks[0].y, blocks[0].page), (20.0, 30.0, 0));
        assert_eq!(blocks[1].tier, FontTier::Body);
        assert_eq!((blocks[1].x, blocks[1].y), (20.0, 40.0));
    }

    #[test]
    fn test_summary_and_skills_vertical_flow() {
        let blocks = layout_resume(&base_record(), &default_page_config());
        // Summary heading starts where body content begins.
        assert_eq!(blocks[2].y, 60.0);
        // One wrapped bio line, 10mm below the heading.
        assert_eq!(blocks[3].y, 70.0);
        // Skills heading: 60 + 10 + 1×5 + 15 = 90.
        assert_eq!(blocks[4].y, 90.0);
        assert_eq!(blocks[5].y, 100.0);
    }

    #[test]
    fn test_empty_bio_skips_summary_section() {
        let mut record = base_record();
        record.bio = "   ".into();
        let blocks = layout_resume(&record, &default_page_config());
        assert!(!texts(&blocks).contains(&"Summary"));
        // Skills moves up to the body start.
        assert_eq!(blocks[2].text, "Skills");
        assert_eq!(blocks[2].y, 60.0);
    }

    #[test]
    fn test_blank_experience_rows_are_filtered() {
        let mut record = base_record();
        record.experience = vec![
            Experience {
                company: "Acme".into(),
                position: "Eng".into(),
                duration: "2020-2022".into(),
                description: "Built X".into(),
            },
            Experience::default(),
        ];
        let blocks = layout_resume(&record, &default_page_config());
        let t = texts(&blocks);
        assert!(t.contains(&"Experience"));
        assert!(t.contains(&"Eng"));
        assert!(t.contains(&"Acme"));
        assert!(t.contains(&"2020-2022"));
        // Exactly one row: one Body-tier position label after the heading.
        let positions = blocks
            .iter()
            .filter(|b| b.tier == FontTier::Body && b.text != "jane@x.com")
            .count();
        assert_eq!(positions, 1, "the blank second row must be suppressed");
    }

    #[test]
    fn test_experience_row_geometry() {
        let mut record = base_record();
        record.bio = String::new();
        record.skills = vec![];
        record.experience = vec![Experience {
            company: "Acme".into(),
            position: "Eng".into(),
            duration: "2020-2022".into(),
            description: String::new(),
        }];
        let blocks = layout_resume(&record, &default_page_config());
        // name, email, heading, position, duration, company
        assert_eq!(blocks.len(), 6);
        let heading = &blocks[2];
        assert_eq!(heading.y, 60.0);
        let position = &blocks[3];
        let duration = &blocks[4];
        let company = &blocks[5];
        assert_eq!(position.y, 70.0);
        assert_eq!(duration.y, 70.0, "duration shares the row baseline");
        assert_eq!(duration.x, 150.0, "duration sits in the secondary column");
        assert_eq!(company.y, 76.0);
    }

    #[test]
    fn test_education_row_geometry() {
        let mut record = base_record();
        record.bio = String::new();
        record.skills = vec![];
        record.education = vec![Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            year: "2018".into(),
        }];
        let blocks = layout_resume(&record, &default_page_config());
        let t = texts(&blocks);
        assert!(t.contains(&"Education"));
        let degree = blocks.iter().find(|b| b.text == "BSc").unwrap();
        let year = blocks.iter().find(|b| b.text == "2018").unwrap();
        let institution = blocks.iter().find(|b| b.text == "MIT").unwrap();
        assert_eq!(degree.y, year.y);
        assert_eq!(year.x, 150.0);
        assert_eq!(institution.y, degree.y + 6.0);
    }

    #[test]
    fn test_long_bio_wraps_to_multiple_lines() {
        let mut record = base_record();
        record.skills = vec![];
        record.bio = "systems ".repeat(80);
        let blocks = layout_resume(&record, &default_page_config());
        let bio_lines = blocks
            .iter()
            .filter(|b| b.tier == FontTier::Caption)
            .count();
        assert!(bio_lines > 1, "a 600+ character bio must wrap");
        // Consecutive wrapped lines are 5mm apart.
        let lines: Vec<&PositionedBlock> = blocks
            .iter()
            .filter(|b| b.tier == FontTier::Caption)
            .collect();
        assert_eq!(lines[1].y - lines[0].y, 5.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut record = base_record();
        record.experience = vec![Experience {
            company: "Acme".into(),
            position: "Eng".into(),
            duration: "2020-2022".into(),
            description: "Shipped the billing pipeline and cut invoice latency in half".into(),
        }];
        let config = default_page_config();
        let first = layout_resume(&record, &config);
        let second = layout_resume(&record, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflowing_content_breaks_onto_next_page() {
        let mut record = base_record();
        record.experience = (0..20)
            .map(|i| Experience {
                company: format!("Company {i}"),
                position: format!("Role {i}"),
                duration: "2020".into(),
                description: "Owned the service end to end".into(),
            })
            .collect();
        let config = default_page_config();
        let blocks = layout_resume(&record, &config);

        let max_page = blocks.iter().map(|b| b.page).max().unwrap();
        assert!(max_page >= 1, "20 experience rows cannot fit one page");
        for block in &blocks {
            assert!(
                block.y <= config.content_limit() + 1e-3,
                "block '{}' at y={} crosses the bottom margin",
                block.text,
                block.y
            );
        }
        // Content on continuation pages starts at the top margin.
        let first_on_next = blocks.iter().find(|b| b.page == 1).unwrap();
        assert_eq!(first_on_next.y, config.top_y);
    }

    #[test]
    fn test_heading_never_dangles_at_page_bottom() {
        // Enough experience rows to push the Education heading near the
        // bottom, plus one education row.
        let mut record = base_record();
        record.experience = (0..30)
            .map(|i| Experience {
                company: format!("Company {i}"),
                position: format!("Role {i}"),
                duration: "2020".into(),
                description: String::new(),
            })
            .collect();
        record.education = vec![Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            year: "2018".into(),
        }];
        let blocks = layout_resume(&record, &default_page_config());
        let heading = blocks.iter().find(|b| b.text == "Education").unwrap();
        let degree = blocks.iter().find(|b| b.text == "BSc").unwrap();
        assert_eq!(
            heading.page, degree.page,
            "a section heading must share a page with its first row"
        );
    }
}
