//! # Agenda Adaptativa — Qual Disciplina Perguntar Agora?
//!
//! A [`Agenda`] decide a **próxima pergunta** da entrevista. Em vez de
//! perguntar sobre o catálogo inteiro, ela começa pelas disciplinas mais
//! diagnósticas e vai **expandindo a fronteira** conforme a inferência
//! revela carreiras promissoras.
//!
//! ## Estado
//!
//! - `asked` — disciplinas já perguntadas (nunca voltam à fronteira)
//! - `frontier` — candidatas pendentes, cada uma com uma prioridade
//!
//! ## Ciclo
//!
//! ```text
//! Agenda::new(k)        fronteira ← k sementes com prioridade SEED_PRIORITY
//!   │
//!   ├── peek_next()     maior prioridade; empate → primeira inserida
//!   ├── mark_asked(c)   c vai para `asked` e sai da fronteira
//!   └── expand(inf)     para cada carreira com CF ≥ 0.3:
//!                         cada disciplina da carreira, se não perguntada
//!                         e não enfileirada, entra com prioridade = peso
//! ```
//!
//! Como a prioridade de uma candidata é o próprio peso da regra que a
//! destravou, a disciplina mais diagnóstica de uma carreira já provável é
//! perguntada primeiro. Uma disciplina já enfileirada mantém a prioridade
//! com que foi descoberta.
//!
//! ## Modos
//!
//! | Modo | Sementes | Expansão |
//! |------|----------|----------|
//! | [`AgendaMode::Adaptive`] | top-k por valor diagnóstico | sim |
//! | [`AgendaMode::Exhaustive`] | todas as disciplinas com regra, ordem de catálogo | não |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::rules::EXPANSION_GATE;
use crate::core::{Course, RuleBase};
use crate::inference::Inference;

/// Prioridade das sementes: acima de qualquer peso especialista (máx 1.0),
/// então toda semente é perguntada antes de qualquer candidata expandida.
pub const SEED_PRIORITY: f64 = 999.0;

/// Estratégia de seleção de perguntas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaMode {
    /// Fronteira semeada e expandida por gate de CF.
    #[default]
    Adaptive,
    /// Pergunta todas as disciplinas com regra, em ordem fixa.
    Exhaustive,
}

impl AgendaMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adaptive" => Some(AgendaMode::Adaptive),
            "exhaustive" => Some(AgendaMode::Exhaustive),
            _ => None,
        }
    }
}

/// Uma candidata na fronteira.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrontierEntry {
    pub priority: f64,
    pub course: Course,
    /// Ordem de inserção, usada como desempate (primeira inserida, primeira servida).
    #[serde(skip)]
    seq: u64,
}

/// Agenda de perguntas de uma sessão.
#[derive(Clone, Debug)]
pub struct Agenda {
    mode: AgendaMode,
    asked: BTreeSet<Course>,
    frontier: Vec<FrontierEntry>,
    next_seq: u64,
}

impl Agenda {
    /// Cria a agenda já semeada.
    ///
    /// No modo adaptativo, as `seed_count` disciplinas mais diagnósticas;
    /// no exaustivo, todas as disciplinas referenciadas (ignora `seed_count`).
    pub fn new(rules: &RuleBase, seed_count: usize, mode: AgendaMode) -> Self {
        let mut agenda = Self {
            mode,
            asked: BTreeSet::new(),
            frontier: Vec::new(),
            next_seq: 0,
        };
        let seeds = match mode {
            AgendaMode::Adaptive => rules.seed_courses(seed_count),
            AgendaMode::Exhaustive => rules.referenced_courses(),
        };
        for course in seeds {
            agenda.push(course, SEED_PRIORITY);
        }
        tracing::debug!(mode = ?mode, seeds = agenda.frontier.len(), "Agenda semeada");
        agenda
    }

    pub fn mode(&self) -> AgendaMode {
        self.mode
    }

    /// Próxima disciplina a perguntar, ou `None` quando a entrevista terminou.
    pub fn peek_next(&self) -> Option<Course> {
        self.frontier
            .iter()
            .filter(|e| !self.asked.contains(&e.course))
            .fold(None::<&FrontierEntry>, |best, e| match best {
                // no empate fica a entrada mais antiga
                Some(b) if e.priority <= b.priority => Some(b),
                _ => Some(e),
            })
            .map(|e| e.course)
    }

    /// Enfileira uma candidata. Não faz nada se ela já foi perguntada ou já
    /// está na fronteira (a prioridade original é mantida).
    ///
    /// Retorna `true` se a disciplina foi inserida.
    pub fn push(&mut self, course: Course, priority: f64) -> bool {
        if self.asked.contains(&course) || self.is_queued(course) {
            return false;
        }
        self.frontier.push(FrontierEntry {
            priority,
            course,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        true
    }

    /// Marca a disciplina como perguntada e a remove da fronteira.
    ///
    /// Retorna `true` se foi a primeira vez que ela foi perguntada.
    pub fn mark_asked(&mut self, course: Course) -> bool {
        self.frontier.retain(|e| e.course != course);
        self.asked.insert(course)
    }

    /// Expande a fronteira a partir das carreiras que passaram do gate.
    ///
    /// Retorna quantas disciplinas novas entraram. No modo exaustivo não
    /// há expansão.
    pub fn expand(&mut self, rules: &RuleBase, inference: &Inference) -> usize {
        if self.mode == AgendaMode::Exhaustive {
            return 0;
        }

        let mut added = 0;
        for (&job, &cf) in &inference.scores {
            if cf < EXPANSION_GATE {
                continue;
            }
            for &(course, weight) in rules.rules_for(job) {
                if self.push(course, weight) {
                    tracing::debug!(job = %job, course = %course, priority = weight, "Fronteira expandida");
                    added += 1;
                }
            }
        }
        added
    }

    pub fn is_asked(&self, course: Course) -> bool {
        self.asked.contains(&course)
    }

    pub fn is_queued(&self, course: Course) -> bool {
        self.frontier.iter().any(|e| e.course == course)
    }

    pub fn asked(&self) -> &BTreeSet<Course> {
        &self.asked
    }

    /// Candidatas pendentes na ordem em que serão servidas.
    pub fn frontier(&self) -> Vec<&FrontierEntry> {
        let mut entries: Vec<&FrontierEntry> = self
            .frontier
            .iter()
            .filter(|e| !self.asked.contains(&e.course))
            .collect();
        entries.sort_by(|a, b| b.priority.total_cmp(&a.priority).then(a.seq.cmp(&b.seq)));
        entries
    }

    /// Número de perguntas pendentes.
    pub fn pending(&self) -> usize {
        self.frontier
            .iter()
            .filter(|e| !self.asked.contains(&e.course))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::DEFAULT_SEED_COUNT;
    use crate::core::{Job, UserFacts};
    use crate::inference::InferenceEngine;

    fn adaptive() -> (RuleBase, Agenda) {
        let rules = RuleBase::standard();
        let agenda = Agenda::new(&rules, DEFAULT_SEED_COUNT, AgendaMode::Adaptive);
        (rules, agenda)
    }

    #[test]
    fn test_seeds_are_distinct_and_ranked() {
        let (rules, agenda) = adaptive();
        let frontier: Vec<Course> = agenda.frontier().iter().map(|e| e.course).collect();
        assert_eq!(frontier.len(), 8);

        let distinct: BTreeSet<Course> = frontier.iter().copied().collect();
        assert_eq!(distinct.len(), 8);
        assert_eq!(frontier, rules.seed_courses(8));
        assert_eq!(agenda.peek_next(), Some(Course::SoftwareDevelopment));
    }

    #[test]
    fn test_peek_ties_first_inserted() {
        let rules = RuleBase::standard();
        let mut agenda = Agenda::new(&rules, 0, AgendaMode::Adaptive);
        assert_eq!(agenda.peek_next(), None);

        agenda.push(Course::Database, 0.7);
        agenda.push(Course::WebProgramming, 0.95);
        agenda.push(Course::DataMining, 0.95);
        assert_eq!(agenda.peek_next(), Some(Course::WebProgramming));

        agenda.mark_asked(Course::WebProgramming);
        assert_eq!(agenda.peek_next(), Some(Course::DataMining));
    }

    /// Disciplina já enfileirada mantém a prioridade da primeira descoberta
    #[test]
    fn test_push_keeps_first_priority() {
        let rules = RuleBase::standard();
        let mut agenda = Agenda::new(&rules, 0, AgendaMode::Adaptive);
        assert!(agenda.push(Course::Database, 0.65));
        assert!(!agenda.push(Course::Database, 0.95));

        let frontier = agenda.frontier();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier[0].priority, 0.65);
    }

    #[test]
    fn test_asked_never_requeued() {
        let (rules, mut agenda) = adaptive();
        assert!(agenda.mark_asked(Course::SoftwareDevelopment));
        assert!(!agenda.is_queued(Course::SoftwareDevelopment));
        assert!(!agenda.push(Course::SoftwareDevelopment, 0.9));

        let facts: UserFacts = [("Software Development", 1.0)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        agenda.expand(&rules, &inference);
        assert!(!agenda.is_queued(Course::SoftwareDevelopment));
        assert!(!agenda.mark_asked(Course::SoftwareDevelopment));
    }

    /// Seeds superam qualquer candidata expandida
    #[test]
    fn test_seeds_outrank_expansion() {
        let (rules, mut agenda) = adaptive();
        agenda.mark_asked(Course::SoftwareDevelopment);

        let facts: UserFacts = [("Software Development", 1.0)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        assert!(agenda.expand(&rules, &inference) > 0);

        let frontier = agenda.frontier();
        let seeds_left = 7;
        assert!(frontier[..seeds_left]
            .iter()
            .all(|e| e.priority == SEED_PRIORITY));
        assert!(frontier[seeds_left..].iter().all(|e| e.priority <= 1.0));
        assert_eq!(agenda.peek_next(), Some(Course::Database));
    }

    /// Expansão repetida não duplica disciplinas
    #[test]
    fn test_expansion_is_idempotent() {
        let (rules, mut agenda) = adaptive();
        agenda.mark_asked(Course::SoftwareDevelopment);

        let facts: UserFacts = [("Software Development", 0.5)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        assert!(inference.scores[&Job::SoftwareEngineer] >= EXPANSION_GATE);

        let first = agenda.expand(&rules, &inference);
        let second = agenda.expand(&rules, &inference);
        assert!(first > 0);
        assert_eq!(second, 0);

        for &(course, _) in rules.rules_for(Job::SoftwareEngineer) {
            if course == Course::SoftwareDevelopment {
                continue;
            }
            let count = agenda.frontier().iter().filter(|e| e.course == course).count();
            assert_eq!(count, 1, "{course} deveria aparecer uma vez");
        }
    }

    /// Carreiras abaixo do gate não expandem
    #[test]
    fn test_below_gate_does_not_expand() {
        let (rules, mut agenda) = adaptive();
        agenda.mark_asked(Course::SoftwareDevelopment);

        // SE = 0.25 × 0.9 = 0.225 < 0.3
        let facts: UserFacts = [("Software Development", 0.25)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        assert_eq!(agenda.expand(&rules, &inference), 0);
        assert_eq!(agenda.pending(), 7);
    }

    /// Um job exatamente no gate (0.5 × 0.6 = 0.3) expande
    #[test]
    fn test_gate_is_inclusive() {
        let rules = RuleBase::standard();
        let mut agenda = Agenda::new(&rules, 0, AgendaMode::Adaptive);
        agenda.mark_asked(Course::SoftwareDevelopment);

        let facts: UserFacts = [("Software Development", 0.5)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        assert_eq!(inference.scores[&Job::DatabaseEngineer], 0.3);

        agenda.expand(&rules, &inference);
        assert!(agenda.is_queued(Course::EnterpriseApplicationDevelopment));
        assert!(agenda.is_queued(Course::ItGovernance));
    }

    #[test]
    fn test_exhaustive_mode() {
        let rules = RuleBase::standard();
        let mut agenda = Agenda::new(&rules, 3, AgendaMode::Exhaustive);
        assert_eq!(agenda.pending(), 27);

        let order: Vec<Course> = agenda.frontier().iter().map(|e| e.course).collect();
        assert_eq!(order, rules.referenced_courses());

        let facts: UserFacts = [("Software Development", 1.0)].into_iter().collect();
        let inference = InferenceEngine::infer(&rules, &facts);
        assert_eq!(agenda.expand(&rules, &inference), 0);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(AgendaMode::parse("Adaptive"), Some(AgendaMode::Adaptive));
        assert_eq!(AgendaMode::parse(" exhaustive "), Some(AgendaMode::Exhaustive));
        assert_eq!(AgendaMode::parse("random"), None);
    }
}
