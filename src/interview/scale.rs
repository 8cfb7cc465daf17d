//! # Escala Likert → Fator de Certeza
//!
//! O usuário responde cada pergunta numa escala de 1 a 5. Antes de chegar
//! ao motor, a resposta é convertida em CF por uma tabela fixa:
//!
//! | Valor | Rótulo | CF |
//! |-------|--------|----|
//! | 1 | Strongly dislike | 0.00 |
//! | 2 | Dislike | 0.25 |
//! | 3 | Neutral | 0.50 |
//! | 4 | Like | 0.75 |
//! | 5 | Strongly like | 1.00 |
//!
//! Note que "1" vira CF 0 — para o motor, isso é **ausência de evidência**,
//! não evidência negativa.

use serde::Serialize;
use thiserror::Error;

/// Resposta fora da escala 1..=5.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("valor Likert {0} fora da escala (esperado 1..=5)")]
    OutOfRange(u8),
}

/// Resposta na escala Likert de 5 pontos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Likert {
    StronglyDislike = 1,
    Dislike = 2,
    Neutral = 3,
    Like = 4,
    StronglyLike = 5,
}

impl Likert {
    pub const ALL: [Likert; 5] = [
        Likert::StronglyDislike,
        Likert::Dislike,
        Likert::Neutral,
        Likert::Like,
        Likert::StronglyLike,
    ];

    /// CF correspondente à resposta.
    pub fn cf(self) -> f64 {
        match self {
            Likert::StronglyDislike => 0.0,
            Likert::Dislike => 0.25,
            Likert::Neutral => 0.5,
            Likert::Like => 0.75,
            Likert::StronglyLike => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Likert::StronglyDislike => "Strongly dislike",
            Likert::Dislike => "Dislike",
            Likert::Neutral => "Neutral",
            Likert::Like => "Like",
            Likert::StronglyLike => "Strongly like",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Likert {
    type Error = ScaleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Likert::ALL
            .iter()
            .copied()
            .find(|l| l.value() == value)
            .ok_or(ScaleError::OutOfRange(value))
    }
}

/// Opção da escala como exposta à camada de apresentação.
#[derive(Debug, Serialize)]
pub struct LikertChoice {
    pub value: u8,
    pub label: &'static str,
    pub cf: f64,
}

/// As cinco opções, na ordem de exibição.
pub fn choices() -> Vec<LikertChoice> {
    Likert::ALL
        .iter()
        .map(|l| LikertChoice {
            value: l.value(),
            label: l.label(),
            cf: l.cf(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        let table: Vec<(u8, f64)> = (1..=5)
            .map(|v| (v, Likert::try_from(v).unwrap().cf()))
            .collect();
        assert_eq!(
            table,
            vec![(1, 0.0), (2, 0.25), (3, 0.5), (4, 0.75), (5, 1.0)]
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Likert::try_from(0), Err(ScaleError::OutOfRange(0)));
        assert_eq!(Likert::try_from(6), Err(ScaleError::OutOfRange(6)));
    }

    #[test]
    fn test_choices() {
        let choices = choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[2].label, "Neutral");
        assert_eq!(choices[4].cf, 1.0);
    }
}
