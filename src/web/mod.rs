//! # Módulo Web — Transporte HTTP da Entrevista
//!
//! Camada fina que expõe a interface da sessão de entrevista como uma API
//! JSON, construída com **Axum**. A apresentação (telas, estilos,
//! navegação) é responsabilidade do cliente.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Cliente (SPA / CLI / testes)                            │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET    /status                  → liveness         │
//! │  ├── GET    /catalog                 → catálogo + escala│
//! │  ├── POST   /sessions                → nova entrevista  │
//! │  ├── GET    /sessions/{id}/question  → pergunta atual   │
//! │  ├── POST   /sessions/{id}/answers   → responder        │
//! │  ├── GET    /sessions/{id}/results   → ranking          │
//! │  ├── POST   /sessions/{id}/reset     → recomeçar        │
//! │  └── DELETE /sessions/{id}           → descartar        │
//! ├─────────────────────────────────────────────────────────┤
//! │ InterviewSession → Agenda + InferenceEngine             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`, `SessionSlot`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`error`] | `ApiError` → status HTTP + corpo JSON |

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// CORS é permissivo porque a interface roda em outra origem.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/catalog", get(handlers::catalog))
        // ── Sessões ──────────────────────────────────────────
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", delete(handlers::delete_session))
        .route("/sessions/{id}/question", get(handlers::current_question))
        .route("/sessions/{id}/answers", post(handlers::submit_answer))
        .route("/sessions/{id}/results", get(handlers::results))
        .route("/sessions/{id}/reset", post(handlers::reset_session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
