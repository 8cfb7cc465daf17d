//! # Estado da Aplicação Web
//!
//! Define o estado compartilhado entre todos os handlers Axum.
//!
//! ```text
//! AppState (Clone barato — só Arcs)
//!  ├── rules:    Arc<RuleBase>                          imutável, construída no startup
//!  ├── options:  SessionOptions                         padrão de toda sessão nova
//!  ├── session_ttl: Duration                            inatividade máxima
//!  └── sessions: Arc<RwLock<HashMap<Uuid, SessionSlot>>> entrevistas em memória
//! ```
//!
//! As sessões vivem apenas em memória: nada é persistido, e reiniciar o
//! processo descarta todas as entrevistas em andamento. Sessões paradas há
//! mais que `session_ttl` são descartadas por [`AppState::evict_expired`],
//! chamada a cada criação de sessão e periodicamente por
//! [`spawn_session_reaper`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::core::RuleBase;
use crate::interview::{InterviewSession, SessionOptions};

/// Uma sessão de entrevista e seus metadados.
pub struct SessionSlot {
    pub session: InterviewSession,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionSlot {
    pub fn new(session: InterviewSession) -> Self {
        let now = Utc::now();
        Self {
            session,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marca a sessão como modificada agora.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Verdadeiro se a sessão está parada há mais que `ttl` em `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // Diferença negativa (relógio voltou) conta como sessão ativa.
        (now - self.updated_at).to_std().is_ok_and(|idle| idle > ttl)
    }
}

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Base de regras compartilhada, somente leitura.
    pub rules: Arc<RuleBase>,
    /// Opções padrão para novas sessões.
    pub options: SessionOptions,
    /// Inatividade máxima antes do descarte.
    pub session_ttl: Duration,
    /// Sessões ativas, protegidas por `RwLock`.
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionSlot>>>,
}

impl AppState {
    pub fn new(rules: Arc<RuleBase>, options: SessionOptions, session_ttl: Duration) -> Self {
        Self {
            rules,
            options,
            session_ttl,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Remove as sessões expiradas em `now`. Retorna quantas saíram.
    pub fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|id, slot| {
            let expired = slot.is_expired(now, self.session_ttl);
            if expired {
                tracing::debug!(session = %id, idle_since = %slot.updated_at, "Sessão expirada");
            }
            !expired
        });
        before - sessions.len()
    }
}

/// Varre as sessões expiradas em segundo plano, a cada quarto do TTL
/// (mínimo de 1s).
pub fn spawn_session_reaper(state: AppState) -> tokio::task::JoinHandle<()> {
    let period = (state.session_ttl / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = state.evict_expired(Utc::now());
            if evicted > 0 {
                tracing::info!(evicted, "Sessões inativas descartadas");
            }
        }
    })
}
