//! # UserFacts — Respostas do Usuário
//!
//! Mapa `nome da disciplina → CF do usuário`, construído incrementalmente
//! à medida que o usuário responde às perguntas.
//!
//! As chaves são **nomes**, não [`Course`]: nomes fora do catálogo são
//! aceitos e guardados, mas nunca contribuem evidência (nenhuma regra os
//! referencia). Uma disciplina sem fato registrado vale CF = 0, que o motor
//! trata como "sem evidência" (não como "desconhecido").

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Course;

/// Fatos do usuário: `disciplina → CF`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserFacts {
    values: BTreeMap<String, f64>,
}

impl UserFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (ou sobrescreve) o CF de uma disciplina.
    ///
    /// Retorna o valor anterior, se havia.
    pub fn record(&mut self, course: impl Into<String>, cf: f64) -> Option<f64> {
        self.values.insert(course.into(), cf)
    }

    /// CF registrado para um nome de disciplina.
    pub fn get(&self, course: &str) -> Option<f64> {
        self.values.get(course).copied()
    }

    /// CF de uma disciplina do catálogo, 0 quando não respondida.
    pub fn cf(&self, course: Course) -> f64 {
        self.get(course.name()).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for UserFacts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_course_is_zero() {
        let facts = UserFacts::new();
        assert_eq!(facts.cf(Course::Database), 0.0);
        assert_eq!(facts.get("Database"), None);
    }

    /// Reresponder sobrescreve o valor anterior
    #[test]
    fn test_record_overwrites() {
        let mut facts = UserFacts::new();
        assert_eq!(facts.record("Database", 0.25), None);
        assert_eq!(facts.record(Course::Database.name(), 0.75), Some(0.25));
        assert_eq!(facts.cf(Course::Database), 0.75);
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn test_unknown_names_are_kept() {
        let facts: UserFacts = [("Astrologia", 0.9)].into_iter().collect();
        assert_eq!(facts.get("Astrologia"), Some(0.9));
        assert!(!facts.is_empty());
    }
}
