//! # Configuração — Variáveis de Ambiente
//!
//! A configuração é lida uma vez no startup com o crate `config`: valores
//! padrão via `set_default` e sobrescritas vindas de variáveis de ambiente
//! com prefixo `CAREER_`. Valores inválidos não derrubam o processo: geram
//! um `warn!` e o padrão é usado.
//!
//! | Variável | Padrão | Descrição |
//! |----------|--------|-----------|
//! | `CAREER_ADDR` | `0.0.0.0:3000` | Endereço de bind do servidor HTTP |
//! | `CAREER_SEED_COUNT` | `8` | Sementes da agenda adaptativa |
//! | `CAREER_AGENDA_MODE` | `adaptive` | `adaptive` ou `exhaustive` |
//! | `CAREER_TOP_EVIDENCE` | `4` | Evidências por carreira nos resultados |
//! | `CAREER_SESSION_TTL_SECS` | `1800` | Inatividade até a sessão ser descartada |
//!
//! O nível de log segue `RUST_LOG` (ver `main`).

use std::str::FromStr;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::core::rules::DEFAULT_SEED_COUNT;
use crate::interview::{AgendaMode, SessionOptions, DEFAULT_TOP_EVIDENCE};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

/// Configuração da aplicação.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Endereço de bind do servidor.
    pub addr: String,
    /// Opções aplicadas a toda sessão nova (o modo pode ser sobrescrito por sessão).
    pub session: SessionOptions,
    /// Tempo sem atividade após o qual uma sessão é descartada.
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            session: SessionOptions::default(),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

/// Valores crus como vieram das fontes. Ficam como texto para que um valor
/// inválido caia no padrão sozinho, sem invalidar o resto.
#[derive(Debug, Deserialize)]
struct RawConfig {
    addr: String,
    seed_count: String,
    agenda_mode: String,
    top_evidence: String,
    session_ttl_secs: String,
}

impl AppConfig {
    /// Lê a configuração do ambiente do processo.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix("CAREER"))
    }

    /// Lê a configuração a partir de uma fonte de ambiente específica.
    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let raw: RawConfig = Config::builder()
            .set_default("addr", DEFAULT_ADDR)?
            .set_default("seed_count", DEFAULT_SEED_COUNT.to_string())?
            .set_default("agenda_mode", "adaptive")?
            .set_default("top_evidence", DEFAULT_TOP_EVIDENCE.to_string())?
            .set_default("session_ttl_secs", DEFAULT_SESSION_TTL_SECS.to_string())?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let mode = AgendaMode::parse(&raw.agenda_mode).unwrap_or_else(|| {
            tracing::warn!(value = %raw.agenda_mode, "CAREER_AGENDA_MODE inválido, usando adaptive");
            AgendaMode::default()
        });

        let ttl_secs = parse_or("CAREER_SESSION_TTL_SECS", &raw.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
        let ttl_secs = if ttl_secs == 0 {
            tracing::warn!("CAREER_SESSION_TTL_SECS não pode ser 0, usando padrão");
            DEFAULT_SESSION_TTL_SECS
        } else {
            ttl_secs
        };

        Self {
            addr: raw.addr,
            session: SessionOptions {
                seed_count: parse_or("CAREER_SEED_COUNT", &raw.seed_count, DEFAULT_SEED_COUNT),
                mode,
                top_evidence: parse_or("CAREER_TOP_EVIDENCE", &raw.top_evidence, DEFAULT_TOP_EVIDENCE),
            },
            session_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = %raw, "Valor inválido, usando padrão");
        default
    })
}
