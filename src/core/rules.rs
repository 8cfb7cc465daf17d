//! # Base de Regras — Tabela Especialista Carreira → Disciplina
//!
//! A [`RuleBase`] guarda a tabela **imutável** de regras
//! `(Job, Course) → peso especialista`, onde o peso ∈ (0, 1] indica
//! "esta disciplina é evidência de aptidão para esta carreira com esta força".
//!
//! A tabela é construída **uma única vez** no startup e compartilhada por
//! referência (`Arc<RuleBase>`) entre o motor de inferência e todas as
//! sessões de entrevista. Nenhum componente a modifica.
//!
//! ## Visões Derivadas
//!
//! | Método | Resultado |
//! |--------|-----------|
//! | [`course_weight`](RuleBase::course_weight) | Soma dos pesos da disciplina em todas as carreiras ("valor diagnóstico") |
//! | [`seed_courses`](RuleBase::seed_courses) | As k disciplinas mais diagnósticas, desempate por ordem de catálogo |
//! | [`rules_for`](RuleBase::rules_for) | Regras de uma carreira, na ordem da tabela |
//!
//! ## Exemplo
//!
//! ```rust
//! use career_advisor::core::{Course, RuleBase};
//!
//! let rules = RuleBase::standard();
//! let seeds = rules.seed_courses(3);
//! assert_eq!(seeds[0], Course::SoftwareDevelopment); // 0.9+0.75+0.75+0.6+0.6 = 3.6
//! ```

use thiserror::Error;

use super::catalog::{Course, Job};
use super::certainty::round4;

/// Limiar de CF a partir do qual as disciplinas de uma carreira entram na agenda.
pub const EXPANSION_GATE: f64 = 0.3;

/// Número padrão de disciplinas-semente de uma entrevista.
pub const DEFAULT_SEED_COUNT: usize = 8;

/// Regras de uma carreira: lista `(disciplina, peso)` na ordem da tabela.
pub type JobRules = Vec<(Course, f64)>;

/// Erros de validação de uma tabela de regras.
#[derive(Debug, Error, PartialEq)]
pub enum RuleBaseError {
    /// Peso fora do intervalo (0, 1].
    #[error("peso {weight} inválido para {job} / {course}: deve estar em (0, 1]")]
    WeightOutOfRange { job: Job, course: Course, weight: f64 },

    /// O par (carreira, disciplina) aparece mais de uma vez.
    #[error("regra duplicada para {job} / {course}")]
    DuplicateRule { job: Job, course: Course },

    /// A carreira aparece em mais de uma entrada da tabela.
    #[error("carreira {0} declarada mais de uma vez")]
    DuplicateJob(Job),
}

/// Tabela imutável de regras especialistas.
#[derive(Debug, Clone)]
pub struct RuleBase {
    /// Entradas `(carreira, regras)` em ordem de catálogo das carreiras.
    table: Vec<(Job, JobRules)>,
}

impl RuleBase {
    /// Constrói e valida uma tabela de regras arbitrária.
    ///
    /// As carreiras são reordenadas para a ordem de catálogo; a ordem das
    /// regras dentro de cada carreira é preservada.
    ///
    /// # Erros
    ///
    /// Retorna [`RuleBaseError`] se algum peso estiver fora de (0, 1] ou se
    /// houver carreira ou regra duplicada.
    pub fn new(mut table: Vec<(Job, JobRules)>) -> Result<Self, RuleBaseError> {
        table.sort_by_key(|(job, _)| *job);
        for pair in table.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(RuleBaseError::DuplicateJob(pair[0].0));
            }
        }

        for (job, rules) in &table {
            for (i, &(course, weight)) in rules.iter().enumerate() {
                // `!(w > 0)` também rejeita NaN
                if !(weight > 0.0 && weight <= 1.0) {
                    return Err(RuleBaseError::WeightOutOfRange {
                        job: *job,
                        course,
                        weight,
                    });
                }
                if rules[..i].iter().any(|(c, _)| *c == course) {
                    return Err(RuleBaseError::DuplicateRule { job: *job, course });
                }
            }
        }

        Ok(Self { table })
    }

    /// A base de regras padrão do sistema.
    pub fn standard() -> Self {
        // A tabela padrão é validada em teste; aqui não há entrada externa.
        Self {
            table: standard_table(),
        }
    }

    /// Carreiras com regras, em ordem de catálogo.
    pub fn jobs(&self) -> impl Iterator<Item = Job> + '_ {
        self.table.iter().map(|(job, _)| *job)
    }

    /// Regras `(disciplina, peso)` de uma carreira. Vazio se a carreira não tem regras.
    pub fn rules_for(&self, job: Job) -> &[(Course, f64)] {
        self.table
            .iter()
            .find(|(j, _)| *j == job)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Itera sobre todas as regras como `(carreira, disciplina, peso)`.
    pub fn iter(&self) -> impl Iterator<Item = (Job, Course, f64)> + '_ {
        self.table
            .iter()
            .flat_map(|(job, rules)| rules.iter().map(move |&(c, w)| (*job, c, w)))
    }

    /// Peso especialista de um par específico, se existir regra.
    pub fn weight(&self, job: Job, course: Course) -> Option<f64> {
        self.rules_for(job)
            .iter()
            .find(|(c, _)| *c == course)
            .map(|(_, w)| *w)
    }

    /// Valor diagnóstico global de uma disciplina: soma dos pesos em todas as carreiras.
    ///
    /// Arredondado a 4 casas para que somas iguais empatem exatamente
    /// (ex: `0.9 + 0.75` e `0.85 + 0.8`). Disciplinas sem regra valem 0.
    pub fn course_weight(&self, course: Course) -> f64 {
        let total: f64 = self
            .iter()
            .filter(|(_, c, _)| *c == course)
            .map(|(_, _, w)| w)
            .sum();
        round4(total)
    }

    /// Disciplinas referenciadas por alguma regra com seu valor diagnóstico,
    /// em ordem de catálogo.
    pub fn course_weights(&self) -> Vec<(Course, f64)> {
        Course::ALL
            .iter()
            .copied()
            .filter(|c| self.references(*c))
            .map(|c| (c, self.course_weight(c)))
            .collect()
    }

    /// `true` se alguma carreira tem regra para a disciplina.
    pub fn references(&self, course: Course) -> bool {
        self.iter().any(|(_, c, _)| c == course)
    }

    /// As `k` disciplinas de maior valor diagnóstico, da maior para a menor.
    ///
    /// Empates mantêm a ordem de catálogo (ordenação estável). Se `k` for
    /// maior que o número de disciplinas referenciadas, retorna todas.
    pub fn seed_courses(&self, k: usize) -> Vec<Course> {
        let mut ranked = self.course_weights();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().take(k).map(|(c, _)| c).collect()
    }

    /// Todas as disciplinas referenciadas, em ordem de catálogo.
    pub fn referenced_courses(&self) -> Vec<Course> {
        Course::ALL
            .iter()
            .copied()
            .filter(|c| self.references(*c))
            .collect()
    }
}

/// Tabela padrão: pesos atribuídos por especialistas para cada carreira.
fn standard_table() -> Vec<(Job, JobRules)> {
    use Course::*;

    vec![
        (
            Job::SoftwareEngineer,
            vec![
                (SoftwareDevelopment, 0.9),
                (AlgorithmsAndProgramming, 0.9),
                (ObjectOrientedProgramming, 0.85),
                (SoftwareTesting, 0.7),
                (Database, 0.65),
            ],
        ),
        (
            Job::WebDeveloper,
            vec![
                (WebProgramming, 0.95),
                (SoftwareDevelopment, 0.75),
                (Database, 0.7),
            ],
        ),
        (
            Job::MobileDeveloper,
            vec![
                (MobileProgramming, 0.95),
                (SoftwareDevelopment, 0.75),
                (ObjectOrientedProgramming, 0.7),
            ],
        ),
        (
            Job::DataAnalyst,
            vec![
                (BusinessDataAnalytics, 0.9),
                (DescriptiveStatistics, 0.85),
                (DataVisualizationAndAnalysis, 0.85),
                (Database, 0.7),
                (QuantitativeMethodsOfBusiness, 0.7),
            ],
        ),
        (
            Job::DataScientist,
            vec![
                (MachineLearning, 0.9),
                (DataMining, 0.85),
                (BusinessDataAnalytics, 0.75),
                (DescriptiveStatistics, 0.8),
                (InferentialStatistics, 0.8),
                (AlgorithmsAndProgramming, 0.75),
                (DataVisualizationAndAnalysis, 0.7),
                (DiscreteMathematics, 0.65),
            ],
        ),
        (
            Job::CybersecurityAnalyst,
            vec![
                (InformationSystemSecurity, 0.95),
                (ComputerNetwork, 0.8),
                (ItRiskManagement, 0.8),
                (OperatingSystem, 0.6),
            ],
        ),
        (
            Job::SystemNetworkAdministrator,
            vec![
                (ComputerNetwork, 0.9),
                (OperatingSystem, 0.85),
                (InformationSystemSecurity, 0.6),
                (ItServiceManagement, 0.6),
            ],
        ),
        (
            Job::DatabaseEngineer,
            vec![
                (Database, 0.95),
                (EnterpriseApplicationDevelopment, 0.75),
                (SoftwareDevelopment, 0.6),
                (ItServiceManagement, 0.65),
                (OperatingSystem, 0.6),
            ],
        ),
        (
            Job::BusinessAnalyst,
            vec![
                (InformationSystemAnalysisAndDesign, 0.9),
                (BusinessFunctionAndProcess, 0.85),
                (EnterpriseSystem, 0.7),
                (DataVisualizationAndAnalysis, 0.6),
            ],
        ),
        (
            Job::ItProjectManager,
            vec![
                (ItProjectManagement, 0.95),
                (LeadershipAndOrganizationalManagement, 0.85),
                (SoftwareDevelopment, 0.6),
                (ItGovernance, 0.65),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tabela padrão passa pela mesma validação de uma tabela externa
    #[test]
    fn test_standard_table_is_valid() {
        let validated = RuleBase::new(standard_table()).unwrap();
        assert_eq!(validated.iter().count(), RuleBase::standard().iter().count());
        assert_eq!(RuleBase::standard().jobs().count(), 10);
    }

    #[test]
    fn test_rejects_weight_out_of_range() {
        let zero = vec![(Job::WebDeveloper, vec![(Course::WebProgramming, 0.0)])];
        assert!(matches!(
            RuleBase::new(zero),
            Err(RuleBaseError::WeightOutOfRange { .. })
        ));

        let above = vec![(Job::WebDeveloper, vec![(Course::WebProgramming, 1.01)])];
        assert!(RuleBase::new(above).is_err());

        let nan = vec![(Job::WebDeveloper, vec![(Course::WebProgramming, f64::NAN)])];
        assert!(RuleBase::new(nan).is_err());

        let one = vec![(Job::WebDeveloper, vec![(Course::WebProgramming, 1.0)])];
        assert!(RuleBase::new(one).is_ok());
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup_rule = vec![(
            Job::WebDeveloper,
            vec![(Course::WebProgramming, 0.9), (Course::WebProgramming, 0.5)],
        )];
        assert!(matches!(
            RuleBase::new(dup_rule),
            Err(RuleBaseError::DuplicateRule {
                job: Job::WebDeveloper,
                course: Course::WebProgramming
            })
        ));

        let dup_job = vec![
            (Job::WebDeveloper, vec![(Course::WebProgramming, 0.9)]),
            (Job::WebDeveloper, vec![(Course::Database, 0.5)]),
        ];
        assert!(matches!(
            RuleBase::new(dup_job),
            Err(RuleBaseError::DuplicateJob(Job::WebDeveloper))
        ));
    }

    #[test]
    fn test_course_weight_sums_across_jobs() {
        let rules = RuleBase::standard();
        assert_eq!(rules.course_weight(Course::SoftwareDevelopment), 3.6);
        assert_eq!(rules.course_weight(Course::Database), 3.0);
        assert_eq!(rules.course_weight(Course::SoftwareTesting), 0.7);
        assert_eq!(rules.course_weight(Course::InformationRetrieval), 0.0);
    }

    /// Information Retrieval está no catálogo mas não tem regra
    #[test]
    fn test_referenced_courses() {
        let rules = RuleBase::standard();
        let referenced = rules.referenced_courses();
        assert_eq!(referenced.len(), 27);
        assert!(!referenced.contains(&Course::InformationRetrieval));
    }

    /// Sementes: maiores pesos primeiro, empates (1.65) em ordem de catálogo
    #[test]
    fn test_seed_courses_ranking() {
        let rules = RuleBase::standard();
        let seeds = rules.seed_courses(DEFAULT_SEED_COUNT);
        assert_eq!(
            seeds,
            vec![
                Course::SoftwareDevelopment,
                Course::Database,
                Course::DataVisualizationAndAnalysis,
                Course::OperatingSystem,
                Course::ComputerNetwork,
                Course::AlgorithmsAndProgramming,
                Course::BusinessDataAnalytics,
                Course::DescriptiveStatistics,
            ]
        );

        let weights: Vec<f64> = seeds.iter().map(|c| rules.course_weight(*c)).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_seed_courses_bounds() {
        let rules = RuleBase::standard();
        assert!(rules.seed_courses(0).is_empty());
        assert_eq!(rules.seed_courses(100).len(), 27);
    }

    #[test]
    fn test_rules_for_and_weight() {
        let rules = RuleBase::standard();
        assert_eq!(rules.rules_for(Job::WebDeveloper).len(), 3);
        assert_eq!(
            rules.weight(Job::DatabaseEngineer, Course::Database),
            Some(0.95)
        );
        assert_eq!(rules.weight(Job::DatabaseEngineer, Course::MachineLearning), None);
    }
}
