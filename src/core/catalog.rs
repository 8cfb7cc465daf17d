//! # Catálogo — Disciplinas e Carreiras
//!
//! Define os dois catálogos **fechados** do sistema:
//!
//! - [`Course`] — as disciplinas acadêmicas sobre as quais o usuário é perguntado
//! - [`Job`] — as carreiras de TI que o motor pode recomendar
//!
//! Nenhum dos dois tem ciclo de vida próprio: existem apenas como **chaves**
//! da base de regras e dos fatos do usuário.
//!
//! ## Ordem de Catálogo
//!
//! A ordem de declaração das variantes é a **ordem de catálogo**. Ela é usada
//! como critério de desempate em todo o sistema (ranking das sementes,
//! ordenação de resultados com CF igual). Por isso `Ord` é derivado: a
//! comparação segue exatamente a ordem das variantes.
//!
//! ## Serialização
//!
//! Ambos serializam como o **nome de exibição** (ex: `"Software Development"`),
//! que é também a chave usada nos fatos do usuário.
//!
//! ```rust
//! use career_advisor::core::Course;
//!
//! assert_eq!(Course::from_name("Database"), Some(Course::Database));
//! assert_eq!(Course::Database.name(), "Database");
//! assert_eq!(Course::from_name("Astrologia"), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Disciplina acadêmica do catálogo fechado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Algorithms and Programming")]
    AlgorithmsAndProgramming,
    #[serde(rename = "Object Oriented Programming")]
    ObjectOrientedProgramming,
    #[serde(rename = "Software Testing")]
    SoftwareTesting,
    #[serde(rename = "Database")]
    Database,
    #[serde(rename = "Web Programming")]
    WebProgramming,
    #[serde(rename = "Information Retrieval")]
    InformationRetrieval,
    #[serde(rename = "Mobile Programming")]
    MobileProgramming,
    #[serde(rename = "Business Data Analytics")]
    BusinessDataAnalytics,
    #[serde(rename = "Descriptive Statistics")]
    DescriptiveStatistics,
    #[serde(rename = "Data Visualization and Analysis")]
    DataVisualizationAndAnalysis,
    #[serde(rename = "Quantitative Methods of Business")]
    QuantitativeMethodsOfBusiness,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Data Mining")]
    DataMining,
    #[serde(rename = "Inferential Statistics")]
    InferentialStatistics,
    #[serde(rename = "Discrete Mathematics")]
    DiscreteMathematics,
    #[serde(rename = "Information System Security")]
    InformationSystemSecurity,
    #[serde(rename = "Computer Network")]
    ComputerNetwork,
    #[serde(rename = "Information Technology Risk Management")]
    ItRiskManagement,
    #[serde(rename = "Operating System")]
    OperatingSystem,
    #[serde(rename = "Information Technology Service Management")]
    ItServiceManagement,
    #[serde(rename = "Enterprise Application Development")]
    EnterpriseApplicationDevelopment,
    #[serde(rename = "Analysis and Design of Information System")]
    InformationSystemAnalysisAndDesign,
    #[serde(rename = "Business Function and Process")]
    BusinessFunctionAndProcess,
    #[serde(rename = "Enterprise System")]
    EnterpriseSystem,
    #[serde(rename = "Information Technology Project Management")]
    ItProjectManagement,
    #[serde(rename = "Leadership and Organizational Management")]
    LeadershipAndOrganizationalManagement,
    #[serde(rename = "Information Technology Governance")]
    ItGovernance,
}

impl Course {
    /// Todas as disciplinas, em ordem de catálogo.
    pub const ALL: [Course; 28] = [
        Course::SoftwareDevelopment,
        Course::AlgorithmsAndProgramming,
        Course::ObjectOrientedProgramming,
        Course::SoftwareTesting,
        Course::Database,
        Course::WebProgramming,
        Course::InformationRetrieval,
        Course::MobileProgramming,
        Course::BusinessDataAnalytics,
        Course::DescriptiveStatistics,
        Course::DataVisualizationAndAnalysis,
        Course::QuantitativeMethodsOfBusiness,
        Course::MachineLearning,
        Course::DataMining,
        Course::InferentialStatistics,
        Course::DiscreteMathematics,
        Course::InformationSystemSecurity,
        Course::ComputerNetwork,
        Course::ItRiskManagement,
        Course::OperatingSystem,
        Course::ItServiceManagement,
        Course::EnterpriseApplicationDevelopment,
        Course::InformationSystemAnalysisAndDesign,
        Course::BusinessFunctionAndProcess,
        Course::EnterpriseSystem,
        Course::ItProjectManagement,
        Course::LeadershipAndOrganizationalManagement,
        Course::ItGovernance,
    ];

    /// Nome de exibição — também é a chave dos fatos do usuário.
    pub fn name(&self) -> &'static str {
        match self {
            Course::SoftwareDevelopment => "Software Development",
            Course::AlgorithmsAndProgramming => "Algorithms and Programming",
            Course::ObjectOrientedProgramming => "Object Oriented Programming",
            Course::SoftwareTesting => "Software Testing",
            Course::Database => "Database",
            Course::WebProgramming => "Web Programming",
            Course::InformationRetrieval => "Information Retrieval",
            Course::MobileProgramming => "Mobile Programming",
            Course::BusinessDataAnalytics => "Business Data Analytics",
            Course::DescriptiveStatistics => "Descriptive Statistics",
            Course::DataVisualizationAndAnalysis => "Data Visualization and Analysis",
            Course::QuantitativeMethodsOfBusiness => "Quantitative Methods of Business",
            Course::MachineLearning => "Machine Learning",
            Course::DataMining => "Data Mining",
            Course::InferentialStatistics => "Inferential Statistics",
            Course::DiscreteMathematics => "Discrete Mathematics",
            Course::InformationSystemSecurity => "Information System Security",
            Course::ComputerNetwork => "Computer Network",
            Course::ItRiskManagement => "Information Technology Risk Management",
            Course::OperatingSystem => "Operating System",
            Course::ItServiceManagement => "Information Technology Service Management",
            Course::EnterpriseApplicationDevelopment => "Enterprise Application Development",
            Course::InformationSystemAnalysisAndDesign => {
                "Analysis and Design of Information System"
            }
            Course::BusinessFunctionAndProcess => "Business Function and Process",
            Course::EnterpriseSystem => "Enterprise System",
            Course::ItProjectManagement => "Information Technology Project Management",
            Course::LeadershipAndOrganizationalManagement => {
                "Leadership and Organizational Management"
            }
            Course::ItGovernance => "Information Technology Governance",
        }
    }

    /// Busca uma disciplina pelo nome de exibição exato.
    ///
    /// Retorna `None` para nomes fora do catálogo. Isso **não** é um erro
    /// para o motor: fatos com nomes desconhecidos são aceitos e simplesmente
    /// não contribuem evidência.
    pub fn from_name(name: &str) -> Option<Course> {
        Course::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Carreira de TI do catálogo fechado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Web Developer")]
    WebDeveloper,
    #[serde(rename = "Mobile Developer")]
    MobileDeveloper,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Cybersecurity Analyst")]
    CybersecurityAnalyst,
    #[serde(rename = "System/Network Administrator")]
    SystemNetworkAdministrator,
    #[serde(rename = "Database Engineer")]
    DatabaseEngineer,
    #[serde(rename = "Business Analyst (IT)")]
    BusinessAnalyst,
    #[serde(rename = "IT Project Manager")]
    ItProjectManager,
}

impl Job {
    /// Todas as carreiras, em ordem de catálogo.
    pub const ALL: [Job; 10] = [
        Job::SoftwareEngineer,
        Job::WebDeveloper,
        Job::MobileDeveloper,
        Job::DataAnalyst,
        Job::DataScientist,
        Job::CybersecurityAnalyst,
        Job::SystemNetworkAdministrator,
        Job::DatabaseEngineer,
        Job::BusinessAnalyst,
        Job::ItProjectManager,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Job::SoftwareEngineer => "Software Engineer",
            Job::WebDeveloper => "Web Developer",
            Job::MobileDeveloper => "Mobile Developer",
            Job::DataAnalyst => "Data Analyst",
            Job::DataScientist => "Data Scientist",
            Job::CybersecurityAnalyst => "Cybersecurity Analyst",
            Job::SystemNetworkAdministrator => "System/Network Administrator",
            Job::DatabaseEngineer => "Database Engineer",
            Job::BusinessAnalyst => "Business Analyst (IT)",
            Job::ItProjectManager => "IT Project Manager",
        }
    }

    pub fn from_name(name: &str) -> Option<Job> {
        Job::ALL.iter().copied().find(|j| j.name() == name)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cada disciplina resolve de volta pelo próprio nome (sem colisões)
    #[test]
    fn test_course_names_are_unique() {
        for course in Course::ALL {
            assert_eq!(Course::from_name(course.name()), Some(course));
        }
    }

    /// A ordem de `ALL` coincide com a ordem derivada de `Ord`
    #[test]
    fn test_catalogue_order_matches_ord() {
        let mut sorted = Course::ALL;
        sorted.sort();
        assert_eq!(sorted, Course::ALL);

        let mut jobs = Job::ALL;
        jobs.sort();
        assert_eq!(jobs, Job::ALL);
    }

    /// O nome serializado é o nome de exibição
    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Job::BusinessAnalyst).unwrap();
        assert_eq!(json, "\"Business Analyst (IT)\"");

        let course: Course = serde_json::from_str("\"Operating System\"").unwrap();
        assert_eq!(course, Course::OperatingSystem);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Course::from_name("software development"), None);
        assert_eq!(Job::from_name("Astronaut"), None);
    }
}
