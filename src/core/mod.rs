//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os tipos sobre os quais o motor e a agenda operam:
//!
//! - [`Course`] / [`Job`] — catálogos fechados de disciplinas e carreiras
//! - [`RuleBase`] — tabela imutável `(Job, Course) → peso especialista`
//! - [`UserFacts`] — respostas do usuário, `disciplina → CF`
//! - [`certainty`] — combinação positiva de fatores de certeza e arredondamento
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use career_advisor::core::{Course, RuleBase, UserFacts};
//!
//! let rules = RuleBase::standard();
//! let mut facts = UserFacts::new();
//! facts.record(Course::Database.name(), 0.75);
//!
//! assert_eq!(rules.seed_courses(1), vec![Course::SoftwareDevelopment]);
//! ```

/// Sub-módulo com os catálogos [`Course`] e [`Job`].
pub mod catalog;

/// Sub-módulo com a aritmética de fatores de certeza.
pub mod certainty;

/// Sub-módulo com [`UserFacts`].
pub mod facts;

/// Sub-módulo com a [`RuleBase`] e as constantes de expansão.
pub mod rules;

// Re-exports para conveniência — permite usar `crate::core::RuleBase` diretamente.
pub use catalog::{Course, Job};
pub use facts::UserFacts;
pub use rules::{RuleBase, RuleBaseError};
