//! # Encadeamento Progressivo com Fatores de Certeza
//!
//! O [`InferenceEngine`] aplica a base de regras sobre os fatos do usuário
//! e produz, para cada carreira, um CF combinado e a lista de evidências.
//!
//! ## Algoritmo (por carreira, de forma independente)
//!
//! ```text
//! cf_job = 0, trilha = []
//! para cada regra (disciplina, peso) da carreira:
//!   cf_user = fatos[disciplina] ou 0
//!   se cf_user ≤ 0: ignora (não entra na trilha)
//!   evidência = cf_user × peso
//!   trilha += (disciplina, cf_user, evidência)
//!   cf_job = combine(cf_job, evidência)
//! se trilha vazia: carreira omitida do resultado
//! senão: arredonda cf_job e evidências a 4 casas, ordena trilha (desc, estável)
//! ```
//!
//! Um fato ausente é indistinguível de uma resposta zero. Nomes de
//! disciplinas fora do catálogo nunca casam com regra alguma e ficam inertes.

use crate::core::certainty::{combine, round4};
use crate::core::{RuleBase, UserFacts};

use super::result::{EvidenceRow, Inference};

/// Motor de inferência — struct sem estado, totalmente funcional.
///
/// Recebe a base de regras e os fatos por referência e devolve um
/// [`Inference`] novo a cada chamada. Nada é cacheado: o resultado sempre
/// reflete exatamente os fatos atuais.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Roda uma rodada completa de encadeamento progressivo.
    pub fn infer(rules: &RuleBase, facts: &UserFacts) -> Inference {
        let mut inference = Inference::default();

        for job in rules.jobs() {
            let mut cf_job = 0.0;
            let mut trail = Vec::new();

            for &(course, weight) in rules.rules_for(job) {
                let cf_user = facts.cf(course);
                if cf_user <= 0.0 {
                    continue;
                }
                let evidence = cf_user * weight;
                cf_job = combine(cf_job, evidence);
                trail.push(EvidenceRow {
                    course,
                    cf_user,
                    evidence: round4(evidence),
                });
            }

            if trail.is_empty() {
                continue;
            }

            // sort_by é estável: empates mantêm a ordem de descoberta
            trail.sort_by(|a, b| b.evidence.total_cmp(&a.evidence));
            inference.scores.insert(job, round4(cf_job));
            inference.evidence.insert(job, trail);
        }

        tracing::trace!(
            facts = facts.len(),
            jobs = inference.scores.len(),
            "Inferência recalculada"
        );
        inference
    }
}
