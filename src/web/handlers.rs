//! # Handlers HTTP — Os Endpoints da Entrevista
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma rota
//! em [`super::create_router()`]. Todas as respostas são JSON; a
//! renderização fica a cargo do cliente.
//!
//! | Handler | Método | Rota | Retorno |
//! |---------|--------|------|---------|
//! | `status` | GET | `/status` | liveness + tamanhos do catálogo |
//! | `catalog` | GET | `/catalog` | disciplinas, carreiras, escala |
//! | `create_session` | POST | `/sessions` | [`QuestionView`] |
//! | `current_question` | GET | `/sessions/{id}/question` | [`QuestionView`] |
//! | `submit_answer` | POST | `/sessions/{id}/answers` | [`QuestionView`] |
//! | `results` | GET | `/sessions/{id}/results` | [`ResultsResponse`] |
//! | `reset_session` | POST | `/sessions/{id}/reset` | [`QuestionView`] |
//! | `delete_session` | DELETE | `/sessions/{id}` | 204 |
//!
//! ## Locks
//!
//! Os handlers adquirem o lock de sessões, fazem todo o trabalho (síncrono
//! e limitado) e liberam antes de retornar. Nenhum lock atravessa `.await`.
//!
//! ## Expiração
//!
//! Uma sessão parada há mais que o TTL responde 404 mesmo antes de a
//! varredura removê-la. Criar uma sessão varre as expiradas.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ApiError;
use super::state::{AppState, SessionSlot};
use crate::core::{Course, Job};
use crate::inference::EvidenceRow;
use crate::interview::{scale, AgendaMode, InterviewSession, LikertChoice, SessionOptions};

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub courses: usize,
    pub jobs: usize,
    pub rules: usize,
    pub sessions: usize,
}

// ─── Tipos do endpoint /catalog ──────────────────────────────────

#[derive(Serialize)]
pub struct CatalogResponse {
    /// Disciplinas com regra e seu valor diagnóstico, em ordem de catálogo.
    pub courses: Vec<CourseInfo>,
    pub jobs: Vec<JobInfo>,
    pub likert: Vec<LikertChoice>,
}

#[derive(Serialize)]
pub struct CourseInfo {
    pub course: Course,
    pub weight: f64,
}

#[derive(Serialize)]
pub struct JobInfo {
    pub job: Job,
    pub rules: Vec<CourseInfo>,
}

// ─── Tipos das sessões ───────────────────────────────────────────

/// Parâmetros de criação: `POST /sessions?mode=exhaustive`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionParams {
    pub mode: Option<AgendaMode>,
}

/// Corpo de `POST /sessions/{id}/answers`.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Nome de exibição da disciplina.
    pub course: String,
    /// Resposta Likert (1..=5).
    pub value: u8,
}

/// Estado da pergunta atual de uma sessão.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub session_id: Uuid,
    pub mode: AgendaMode,
    /// Disciplina a perguntar; `null` quando a entrevista terminou.
    pub course: Option<Course>,
    pub question_number: usize,
    pub done: bool,
    pub asked: usize,
    pub pending: usize,
    pub updated_at: DateTime<Utc>,
}

impl QuestionView {
    fn of(id: Uuid, slot: &SessionSlot) -> Self {
        let session = &slot.session;
        Self {
            session_id: id,
            mode: session.mode(),
            course: session.current_question(),
            question_number: session.question_number(),
            done: session.is_done(),
            asked: session.agenda().asked().len(),
            pending: session.agenda().pending(),
            updated_at: slot.updated_at,
        }
    }
}

/// Uma carreira no resultado final.
#[derive(Debug, Serialize)]
pub struct ResultView {
    pub job: Job,
    pub cf: f64,
    pub evidence: Vec<EvidenceRow>,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub session_id: Uuid,
    pub done: bool,
    pub results: Vec<ResultView>,
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidSessionId(raw.to_string()))
}

fn live_slot<'a>(
    state: &AppState,
    sessions: &'a HashMap<Uuid, SessionSlot>,
    id: Uuid,
) -> Result<&'a SessionSlot, ApiError> {
    sessions
        .get(&id)
        .filter(|slot| !slot.is_expired(Utc::now(), state.session_ttl))
        .ok_or(ApiError::SessionNotFound(id))
}

fn live_slot_mut<'a>(
    state: &AppState,
    sessions: &'a mut HashMap<Uuid, SessionSlot>,
    id: Uuid,
) -> Result<&'a mut SessionSlot, ApiError> {
    sessions
        .get_mut(&id)
        .filter(|slot| !slot.is_expired(Utc::now(), state.session_ttl))
        .ok_or(ApiError::SessionNotFound(id))
}

// ─── Handlers ────────────────────────────────────────────────────

/// GET `/status`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: true,
        courses: state.rules.referenced_courses().len(),
        jobs: state.rules.jobs().count(),
        rules: state.rules.iter().count(),
        sessions: state.sessions.read().len(),
    })
}

/// GET `/catalog` — catálogo completo para montar a interface.
pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let courses = state
        .rules
        .course_weights()
        .into_iter()
        .map(|(course, weight)| CourseInfo { course, weight })
        .collect();

    let jobs = state
        .rules
        .jobs()
        .map(|job| JobInfo {
            job,
            rules: state
                .rules
                .rules_for(job)
                .iter()
                .map(|&(course, weight)| CourseInfo { course, weight })
                .collect(),
        })
        .collect();

    Json(CatalogResponse {
        courses,
        jobs,
        likert: scale::choices(),
    })
}

/// POST `/sessions` — inicia uma entrevista.
///
/// O modo padrão vem da configuração; `?mode=` sobrescreve por sessão.
pub async fn create_session(
    State(state): State<AppState>,
    Query(params): Query<CreateSessionParams>,
) -> (StatusCode, Json<QuestionView>) {
    let options = SessionOptions {
        mode: params.mode.unwrap_or(state.options.mode),
        ..state.options
    };
    let evicted = state.evict_expired(Utc::now());
    if evicted > 0 {
        tracing::info!(evicted, "Sessões inativas descartadas");
    }

    let id = Uuid::new_v4();
    let slot = SessionSlot::new(InterviewSession::new(state.rules.clone(), options));
    let view = QuestionView::of(id, &slot);

    state.sessions.write().insert(id, slot);
    tracing::info!(session = %id, mode = ?options.mode, "Sessão criada");

    (StatusCode::CREATED, Json(view))
}

/// GET `/sessions/{id}/question`
pub async fn current_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionView>, ApiError> {
    let id = parse_id(&id)?;
    let sessions = state.sessions.read();
    let slot = live_slot(&state, &sessions, id)?;
    Ok(Json(QuestionView::of(id, slot)))
}

/// POST `/sessions/{id}/answers` — registra uma resposta Likert.
///
/// A disciplina respondida não precisa ser a pergunta atual: reresponder
/// uma disciplina já perguntada apenas atualiza o fato.
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<QuestionView>, ApiError> {
    let id = parse_id(&id)?;
    let mut sessions = state.sessions.write();
    let slot = live_slot_mut(&state, &mut sessions, id)?;

    let next = slot.session.submit_answer(&req.course, req.value)?;
    slot.touch();

    match next {
        Some(course) => {
            tracing::info!(session = %id, answered = %req.course, value = req.value, next = %course, "Resposta recebida")
        }
        None => tracing::info!(session = %id, answered = %req.course, "Entrevista concluída"),
    }

    Ok(Json(QuestionView::of(id, slot)))
}

/// GET `/sessions/{id}/results` — ranking atual das carreiras.
///
/// Pode ser chamado a qualquer momento; antes do fim reflete as respostas
/// dadas até agora.
pub async fn results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultsResponse>, ApiError> {
    let id = parse_id(&id)?;
    let sessions = state.sessions.read();
    let slot = live_slot(&state, &sessions, id)?;

    let results = slot
        .session
        .ranked_results()
        .into_iter()
        .map(|r| ResultView {
            explanation: r.explanation(),
            job: r.job,
            cf: r.cf,
            evidence: r.evidence,
        })
        .collect();

    Ok(Json(ResultsResponse {
        session_id: id,
        done: slot.session.is_done(),
        results,
    }))
}

/// POST `/sessions/{id}/reset` — descarta respostas e re-semeia a agenda.
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionView>, ApiError> {
    let id = parse_id(&id)?;
    let mut sessions = state.sessions.write();
    let slot = live_slot_mut(&state, &mut sessions, id)?;

    slot.session.reset();
    slot.touch();
    tracing::info!(session = %id, "Sessão resetada");

    Ok(Json(QuestionView::of(id, slot)))
}

/// DELETE `/sessions/{id}`
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let removed = state.sessions.write().remove(&id);
    match removed {
        Some(slot) => {
            tracing::info!(session = %id, started = %slot.created_at, "Sessão encerrada");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::SessionNotFound(id)),
    }
}
