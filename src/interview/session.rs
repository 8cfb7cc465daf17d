//! # Sessão de Entrevista
//!
//! A [`InterviewSession`] junta os dois estados mutáveis de uma entrevista
//! — os [`UserFacts`] e a [`Agenda`] — e expõe a interface consumida pela
//! camada de apresentação.
//!
//! ## Fluxo de uma Resposta
//!
//! ```text
//! submit_answer(disciplina, likert)
//!   └── answer(disciplina, cf)
//!         ├── a. registra o fato (sobrescreve se já existia)
//!         ├── b. marca como perguntada, remove da fronteira
//!         ├── c. recalcula a inferência sobre TODOS os fatos
//!         ├── d. expande a fronteira (carreiras com CF ≥ 0.3)
//!         └── e. devolve a próxima pergunta (peek_next)
//! ```
//!
//! A sessão **não guarda** o resultado da inferência: scores são sempre
//! rederivados dos fatos atuais via [`inference()`](InterviewSession::inference).
//!
//! ## Concorrência
//!
//! Cada sessão possui seus fatos e sua agenda com exclusividade. Não há
//! estado mutável compartilhado entre sessões — apenas a [`RuleBase`],
//! imutável, via `Arc`.

use std::sync::Arc;

use crate::core::{Course, RuleBase, UserFacts};
use crate::inference::{Inference, InferenceEngine, RankedJob};

use super::agenda::{Agenda, AgendaMode};
use super::scale::{Likert, ScaleError};

/// Número padrão de evidências por carreira nos resultados.
pub const DEFAULT_TOP_EVIDENCE: usize = 4;

/// Parâmetros de criação de uma sessão.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub seed_count: usize,
    pub mode: AgendaMode,
    pub top_evidence: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed_count: crate::core::rules::DEFAULT_SEED_COUNT,
            mode: AgendaMode::Adaptive,
            top_evidence: DEFAULT_TOP_EVIDENCE,
        }
    }
}

/// Uma entrevista em andamento.
#[derive(Clone, Debug)]
pub struct InterviewSession {
    rules: Arc<RuleBase>,
    options: SessionOptions,
    facts: UserFacts,
    agenda: Agenda,
}

impl InterviewSession {
    /// Inicia uma sessão com fatos vazios e agenda semeada.
    pub fn new(rules: Arc<RuleBase>, options: SessionOptions) -> Self {
        let agenda = Agenda::new(&rules, options.seed_count, options.mode);
        Self {
            rules,
            options,
            facts: UserFacts::new(),
            agenda,
        }
    }

    /// Pergunta atual, ou `None` quando a entrevista terminou.
    pub fn current_question(&self) -> Option<Course> {
        self.agenda.peek_next()
    }

    pub fn is_done(&self) -> bool {
        self.current_question().is_none()
    }

    /// Número (1-based) da pergunta atual: quantas já foram feitas + 1.
    pub fn question_number(&self) -> usize {
        self.agenda.asked().len() + 1
    }

    /// Responde em escala Likert (1..=5).
    ///
    /// # Erros
    ///
    /// [`ScaleError::OutOfRange`] para valores fora da escala; nesse caso
    /// a sessão não é alterada.
    pub fn submit_answer(&mut self, course: &str, value: u8) -> Result<Option<Course>, ScaleError> {
        let likert = Likert::try_from(value)?;
        Ok(self.answer(course, likert.cf()))
    }

    /// Registra uma resposta já convertida em CF e avança a agenda.
    ///
    /// Aceita qualquer nome: nomes fora do catálogo ficam registrados nos
    /// fatos mas não afetam a agenda nem a inferência.
    pub fn answer(&mut self, course: &str, cf: f64) -> Option<Course> {
        let previous = self.facts.record(course, cf);

        let known = Course::from_name(course);
        match known {
            Some(c) => {
                self.agenda.mark_asked(c);
            }
            None => {
                tracing::warn!(course = %course, "Disciplina fora do catálogo, fato inerte");
            }
        }

        let inference = self.inference();
        let added = self.agenda.expand(&self.rules, &inference);
        let next = self.agenda.peek_next();

        tracing::debug!(
            course = %course,
            cf,
            reanswer = previous.is_some(),
            expanded = added,
            pending = self.agenda.pending(),
            next = ?next,
            "Resposta registrada"
        );
        next
    }

    /// Inferência sobre os fatos atuais (sempre recalculada).
    pub fn inference(&self) -> Inference {
        InferenceEngine::infer(&self.rules, &self.facts)
    }

    /// Carreiras ranqueadas por CF, com as principais evidências.
    pub fn ranked_results(&self) -> Vec<RankedJob> {
        self.inference().ranked(self.options.top_evidence)
    }

    /// Descarta fatos e agenda e re-semeia a entrevista.
    pub fn reset(&mut self) {
        self.facts.clear();
        self.agenda = Agenda::new(&self.rules, self.options.seed_count, self.options.mode);
    }

    pub fn facts(&self) -> &UserFacts {
        &self.facts
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn mode(&self) -> AgendaMode {
        self.options.mode
    }
}
