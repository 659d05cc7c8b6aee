//! HTTP surface of the wizard: session lifecycle, navigation, draft
//! mutation, and submission.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::find_template;
use crate::errors::AppError;
use crate::models::draft::{Draft, DraftPatch};
use crate::portfolio::save_portfolio;
use crate::state::AppState;
use crate::wizard::{Section, StepOutcome, WizardSession, SECTION_COUNT};

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GotoRequest {
    pub section: usize,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

/// Client-facing snapshot of a session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub template_id: String,
    pub section: Section,
    pub section_title: &'static str,
    pub section_index: usize,
    pub section_count: usize,
    pub draft: Draft,
}

impl SessionView {
    fn from_session(session: WizardSession) -> Self {
        let section = session.section();
        SessionView {
            id: session.id,
            template_id: session.template_id,
            section,
            section_title: section.title(),
            section_index: section.index(),
            section_count: SECTION_COUNT,
            draft: session.draft,
        }
    }
}

/// Outcome of `next` and `submit`: the overloaded "Next / Generate" button
/// either moves the cursor or finalizes the portfolio.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResponse {
    Advanced {
        section: Section,
        section_index: usize,
    },
    Submitted {
        portfolio: PortfolioCreated,
    },
}

#[derive(Debug, Serialize)]
pub struct PortfolioCreated {
    pub id: Uuid,
    pub slug: String,
    pub url: String,
}

/// POST /api/v1/wizard
///
/// Starts a session against a catalog template. Unknown template ids are
/// rejected up front so a session can never point at a template the
/// renderer will later fail to resolve.
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    find_template(&state.catalog, &req.template_id).ok_or_else(|| {
        AppError::NotFound(format!("no template with id '{}'", req.template_id))
    })?;

    let session = WizardSession::new(&req.template_id);
    let view = SessionView::from_session(session.clone());
    state.sessions.insert(session).await;

    tracing::info!(session_id = %view.id, template_id = %view.template_id, "wizard session created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/wizard/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::from_session(session)))
}

/// POST /api/v1/wizard/:id/next
///
/// Advances one section, or submits when already on the last one. The
/// persistence write happens after the session lock is released, and a
/// failed write leaves the session (and its draft) fully intact.
pub async fn next_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, AppError> {
    let outcome = state.sessions.update(id, |s| s.next()).await?;
    step_response(&state, outcome).await.map(Json)
}

/// POST /api/v1/wizard/:id/previous
pub async fn previous_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.previous();
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionView::from_session(session)))
}

/// POST /api/v1/wizard/:id/goto
///
/// Jumps to any section by index. Out-of-range indices leave the cursor
/// where it was, mirroring the free section-tab navigation.
pub async fn goto_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GotoRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.go_to(req.section);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionView::from_session(session)))
}

/// PATCH /api/v1/wizard/:id/draft
pub async fn patch_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<DraftPatch>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.apply(patch);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionView::from_session(session)))
}

/// POST /api/v1/wizard/:id/skills
///
/// Blank and duplicate skills are silently dropped; the returned draft is
/// the source of truth for what actually landed.
pub async fn add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.add_skill(&req.skill);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionView::from_session(session)))
}

/// DELETE /api/v1/wizard/:id/skills
pub async fn remove_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.remove_skill(&req.skill);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionView::from_session(session)))
}

/// POST /api/v1/wizard/:id/submit
///
/// Explicit submission, reachable from any section.
pub async fn submit_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, AppError> {
    let record = state.sessions.get(id).await?.submit()?;
    step_response(&state, StepOutcome::Submitted(record))
        .await
        .map(Json)
}

async fn step_response(state: &AppState, outcome: StepOutcome) -> Result<StepResponse, AppError> {
    match outcome {
        StepOutcome::Advanced(section) => Ok(StepResponse::Advanced {
            section,
            section_index: section.index(),
        }),
        StepOutcome::Submitted(record) => {
            let saved = save_portfolio(&state.db, &record).await?;
            let url = format!(
                "{}/{}",
                state.config.public_base_url.trim_end_matches('/'),
                saved.slug
            );
            tracing::info!(portfolio_id = %saved.id, slug = %saved.slug, "portfolio published");
            Ok(StepResponse::Submitted {
                portfolio: PortfolioCreated {
                    id: saved.id,
                    slug: saved.slug,
                    url,
                },
            })
        }
    }
}
