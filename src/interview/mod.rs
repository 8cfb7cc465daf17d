//! # Módulo Interview — Entrevista Adaptativa
//!
//! Conduz a entrevista pergunta a pergunta:
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`agenda`] | Fronteira de perguntas pendentes, sementes e expansão por gate |
//! | [`session`] | Fatos + agenda de um usuário; interface para a apresentação |
//! | [`scale`] | Conversão da escala Likert 1..=5 em CF |

pub mod agenda;
pub mod scale;
pub mod session;

pub use agenda::{Agenda, AgendaMode, FrontierEntry, SEED_PRIORITY};
pub use scale::{Likert, LikertChoice, ScaleError};
pub use session::{InterviewSession, SessionOptions, DEFAULT_TOP_EVIDENCE};
