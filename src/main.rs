//! # Career Advisor — Servidor
//!
//! **Ponto de entrada** da aplicação: inicializa logging, lê a
//! configuração, constrói a base de regras e sobe a API HTTP.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG, padrão "info")
//!   ├── Lê AppConfig do ambiente
//!   ├── Constrói a RuleBase (uma vez, imutável, Arc)
//!   ├── Monta AppState, inicia a varredura de sessões inativas e o Router
//!   └── Inicia servidor TCP e atende até o processo encerrar
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Logs detalhados do motor (expansões da fronteira, respostas)
//! RUST_LOG=debug cargo run
//!
//! # Modo exaustivo, porta alternativa
//! CAREER_AGENDA_MODE=exhaustive CAREER_ADDR=127.0.0.1:8080 cargo run
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use career_advisor::config::AppConfig;
use career_advisor::core::RuleBase;
use career_advisor::web;
use career_advisor::web::state::{spawn_session_reaper, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎓 Career Advisor — Starting...");

    let config = AppConfig::load().context("Falha ao ler a configuração")?;

    let rules = Arc::new(RuleBase::standard());
    tracing::info!(
        jobs = rules.jobs().count(),
        courses = rules.referenced_courses().len(),
        rules = rules.iter().count(),
        "Base de regras carregada"
    );

    let state = AppState::new(rules, config.session, config.session_ttl);
    spawn_session_reaper(state.clone());
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {}", config.addr))?;
    tracing::info!(
        addr = %config.addr,
        mode = ?config.session.mode,
        seeds = config.session.seed_count,
        session_ttl_secs = config.session_ttl.as_secs(),
        "🚀 Server running"
    );

    axum::serve(listener, app)
        .await
        .context("Servidor axum encerrou com erro")?;

    Ok(())
}
