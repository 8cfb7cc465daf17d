//! # Erros da API HTTP
//!
//! O motor nunca falha; os únicos erros visíveis ao cliente vêm da borda
//! HTTP: sessão inexistente, id malformado e resposta fora da escala.
//! Cada variante mapeia para um status HTTP e um corpo `{ "error": "..." }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::interview::ScaleError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("sessão {0} não encontrada")]
    SessionNotFound(Uuid),

    #[error("id de sessão inválido: {0}")]
    InvalidSessionId(String),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::InvalidSessionId(_) => StatusCode::NOT_FOUND,
            ApiError::Scale(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Requisição rejeitada");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
