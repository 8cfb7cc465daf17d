//! # Módulo Inference — Motor de Fatores de Certeza
//!
//! Deriva, a partir dos fatos do usuário, o grau de certeza de cada
//! carreira e a trilha de evidências que o sustenta.
//!
//! ## Exemplo
//!
//! ```text
//! Fatos: Software Development = 0.8, Database = 0.6
//!
//! Software Engineer:
//!   Software Development  0.8 × 0.90 = 0.72
//!   Database              0.6 × 0.65 = 0.39
//!   CF = 0.72 + 0.39 × (1 − 0.72) = 0.8292
//! ```
//!
//! Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com o encadeamento progressivo.
pub mod forward_chain;

/// Sub-módulo com os tipos de resultado.
pub mod result;

pub use forward_chain::InferenceEngine;
pub use result::{EvidenceRow, Inference, RankedJob};
