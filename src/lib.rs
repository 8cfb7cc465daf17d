//! # Career Advisor — Motor de Recomendação de Carreiras em TI
//!
//! Recomenda carreiras de TI a partir da afinidade declarada do usuário
//! por disciplinas acadêmicas, usando:
//!
//! - um modelo de **fatores de certeza** (CF) com encadeamento progressivo, e
//! - uma **agenda adaptativa** que decide qual disciplina perguntar a seguir.
//!
//! ## Ciclo de uma Resposta
//!
//! ```text
//! usuário responde disciplina (Likert 1..5)
//!   ├── escala → CF
//!   ├── fatos atualizados
//!   ├── InferenceEngine recalcula CF de cada carreira
//!   ├── Agenda expande a fronteira (carreiras com CF ≥ 0.3)
//!   └── Agenda expõe a próxima disciplina (ou fim da entrevista)
//! ```
//!
//! ## Módulos
//!
//! | Módulo | Camada |
//! |--------|--------|
//! | [`core`] | Catálogos, base de regras, fatos, aritmética de CF |
//! | [`inference`] | Motor de inferência e resultados ranqueados |
//! | [`interview`] | Agenda, sessão e escala Likert |
//! | [`config`] | Configuração via variáveis de ambiente |
//! | [`web`] | API JSON (axum) sobre as sessões |

pub mod config;
pub mod core;
pub mod inference;
pub mod interview;
pub mod web;
