//! # Resultado da Inferência — Scores e Rastros de Evidência
//!
//! O [`Inference`] é o produto de uma rodada do motor: para cada carreira
//! com alguma evidência, o **CF combinado** e a lista de [`EvidenceRow`]
//! que o sustentam (a "trilha" exibida ao usuário na tela de resultados).
//!
//! Carreiras sem nenhuma evidência **não aparecem** em nenhum dos mapas.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Course, Job};

/// Uma evidência individual: quanto uma disciplina contribuiu para uma carreira.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvidenceRow {
    /// Disciplina que gerou a evidência.
    pub course: Course,
    /// CF informado pelo usuário para a disciplina.
    pub cf_user: f64,
    /// `cf_user × peso especialista`, arredondado a 4 casas.
    pub evidence: f64,
}

/// Resultado completo de uma rodada de inferência.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Inference {
    /// CF combinado por carreira (arredondado a 4 casas).
    pub scores: BTreeMap<Job, f64>,
    /// Evidências por carreira, da maior para a menor.
    pub evidence: BTreeMap<Job, Vec<EvidenceRow>>,
}

impl Inference {
    /// `true` quando nenhuma carreira recebeu evidência.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score(&self, job: Job) -> Option<f64> {
        self.scores.get(&job).copied()
    }

    pub fn evidence_for(&self, job: Job) -> &[EvidenceRow] {
        self.evidence.get(&job).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Carreiras ordenadas por CF decrescente, cada uma com no máximo
    /// `top_evidence` evidências.
    ///
    /// Empates de CF mantêm a ordem de catálogo das carreiras.
    pub fn ranked(&self, top_evidence: usize) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = self
            .scores
            .iter()
            .map(|(&job, &cf)| RankedJob {
                job,
                cf,
                evidence: self
                    .evidence_for(job)
                    .iter()
                    .take(top_evidence)
                    .cloned()
                    .collect(),
            })
            .collect();
        ranked.sort_by(|a, b| b.cf.total_cmp(&a.cf));
        ranked
    }
}

/// Uma carreira recomendada, pronta para a camada de apresentação.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedJob {
    pub job: Job,
    pub cf: f64,
    /// Principais evidências (já truncadas).
    pub evidence: Vec<EvidenceRow>,
}

impl RankedJob {
    /// Explicação legível do resultado.
    ///
    /// ```text
    /// Software Engineer ⟨0.83⟩: Software Development (0.72), Database (0.39)
    /// ```
    pub fn explanation(&self) -> String {
        let head = format!("{} ⟨{:.2}⟩", self.job, self.cf);
        if self.evidence.is_empty() {
            return head;
        }
        let rows: Vec<String> = self
            .evidence
            .iter()
            .map(|row| format!("{} ({:.2})", row.course, row.evidence))
            .collect();
        format!("{}: {}", head, rows.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(course: Course, cf_user: f64, evidence: f64) -> EvidenceRow {
        EvidenceRow {
            course,
            cf_user,
            evidence,
        }
    }

    fn sample() -> Inference {
        let mut inference = Inference::default();
        inference.scores.insert(Job::WebDeveloper, 0.6);
        inference.scores.insert(Job::SoftwareEngineer, 0.8292);
        inference.scores.insert(Job::MobileDeveloper, 0.6);
        inference.evidence.insert(
            Job::SoftwareEngineer,
            vec![
                row(Course::SoftwareDevelopment, 0.8, 0.72),
                row(Course::Database, 0.6, 0.39),
            ],
        );
        inference
            .evidence
            .insert(Job::WebDeveloper, vec![row(Course::SoftwareDevelopment, 0.8, 0.6)]);
        inference
            .evidence
            .insert(Job::MobileDeveloper, vec![row(Course::SoftwareDevelopment, 0.8, 0.6)]);
        inference
    }

    /// Ordena por CF e desempata pela ordem de catálogo
    #[test]
    fn test_ranked_order() {
        let ranked = sample().ranked(4);
        let jobs: Vec<Job> = ranked.iter().map(|r| r.job).collect();
        assert_eq!(
            jobs,
            vec![Job::SoftwareEngineer, Job::WebDeveloper, Job::MobileDeveloper]
        );
    }

    #[test]
    fn test_ranked_truncates_evidence() {
        let ranked = sample().ranked(1);
        assert_eq!(ranked[0].evidence.len(), 1);
        assert_eq!(ranked[0].evidence[0].course, Course::SoftwareDevelopment);
    }

    #[test]
    fn test_explanation() {
        let ranked = sample().ranked(4);
        assert_eq!(
            ranked[0].explanation(),
            "Software Engineer ⟨0.83⟩: Software Development (0.72), Database (0.39)"
        );
    }

    #[test]
    fn test_explanation_without_evidence() {
        let job = RankedJob {
            job: Job::DataAnalyst,
            cf: 0.5,
            evidence: Vec::new(),
        };
        assert_eq!(job.explanation(), "Data Analyst ⟨0.50⟩");
    }

    #[test]
    fn test_empty() {
        let inference = Inference::default();
        assert!(inference.is_empty());
        assert!(inference.ranked(4).is_empty());
        assert!(inference.evidence_for(Job::DataAnalyst).is_empty());
    }
}
